//! Implementation of the `#[derive(Searchable)]` macro.

mod attrs;
mod derive;

pub use derive::searchable_derive_impl;
