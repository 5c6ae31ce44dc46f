//! Code generation for `#[derive(Searchable)]`.
//!
//! Generates an implementation of `sieve_query::Searchable` plus one
//! field-name constant per exposed field.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_search_attrs, FieldKind};

/// Main implementation of the Searchable derive macro.
pub fn searchable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Searchable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Searchable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_search_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(kind) = attrs.kind else {
            continue;
        };

        let query_name = attrs.rename.unwrap_or_else(|| field_name.to_string());
        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));

        field_constants.push(quote! {
            /// Field name for search columns and sort columns.
            pub const #const_name: &'static str = #query_name;
        });

        let value_expr = match kind {
            FieldKind::String => {
                quote! { ::sieve_query::Value::String(::core::convert::AsRef::<str>::as_ref(&self.#field_name)) }
            }
            FieldKind::Number => {
                quote! { ::sieve_query::Value::Number(::sieve_query::Number::from(self.#field_name)) }
            }
            FieldKind::Date => {
                quote! {
                    ::sieve_query::Value::Date(
                        ::sieve_query::SearchTimestamp::search_timestamp(&self.#field_name)
                    )
                }
            }
            FieldKind::Bool => {
                quote! { ::sieve_query::Value::Bool(self.#field_name) }
            }
        };

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
    }

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::sieve_query::Searchable for #struct_name #ty_generics #where_clause {
            fn search_field_value(&self, field: &str) -> ::sieve_query::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::sieve_query::Value::None,
                }
            }
        }
    })
}

/// Convert a field name to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}
