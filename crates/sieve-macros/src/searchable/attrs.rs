//! Parsing of `#[search(...)]` field attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// The value kind a field is exposed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `#[search(String)]`
    String,
    /// `#[search(Number)]`
    Number,
    /// `#[search(Date)]`
    Date,
    /// `#[search(Bool)]`
    Bool,
}

const EXPECTED_KINDS: &str = "String, Number, Date, Bool";

impl FieldKind {
    fn parse_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" | "str" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Date" | "date" | "Timestamp" | "timestamp" => Ok(FieldKind::Date),
            "Bool" | "bool" | "boolean" => Ok(FieldKind::Bool),
            other => Err(Error::new(
                span,
                format!(
                    "unknown search kind: '{}'. Expected one of: {}",
                    other, EXPECTED_KINDS
                ),
            )),
        }
    }

    /// Parse a kind from a bare identifier: `#[search(Number)]`.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::parse_name(&ident.to_string(), ident.span())
    }
}

/// Field-level attributes from `#[search(...)]`.
#[derive(Debug, Clone, Default)]
pub struct SearchAttr {
    /// Exposed kind; fields without one are not searchable.
    pub kind: Option<FieldKind>,
    /// `#[search(skip)]`
    pub skip: bool,
    /// Name used in requests instead of the field name.
    pub rename: Option<String>,
}

fn string_literal(expr: &syn::Expr, what: &str) -> Result<syn::LitStr> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        other => Err(Error::new(
            other.span(),
            format!("{} must be a string literal", what),
        )),
    }
}

impl Parse for SearchAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SearchAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                    } else {
                        return Err(Error::new(
                            p.span(),
                            format!("expected a search kind ({}) or skip", EXPECTED_KINDS),
                        ));
                    }
                }

                // rename = "name" or ty = "date"
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(string_literal(&nv.value, "rename")?.value());
                    } else if nv.path.is_ident("ty") {
                        let lit = string_literal(&nv.value, "ty")?;
                        attr.kind = Some(FieldKind::parse_name(&lit.value(), lit.span())?);
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or ty",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown search attribute. Expected a kind, skip, rename = \"...\", or ty = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract the `#[search(...)]` attribute from a field's attributes.
pub fn parse_search_attrs(attrs: &[Attribute]) -> Result<SearchAttr> {
    for attr in attrs {
        if attr.path().is_ident("search") {
            return attr.parse_args::<SearchAttr>();
        }
    }
    Ok(SearchAttr::default())
}
