//! Macros for kindset closed sets.

use proc_macro::TokenStream;
use syn::parse::Parser;
use syn::{parse_macro_input, Attribute, DeriveInput, Expr, Lit, Meta};

mod closed_set;

/// Derives `ClosedSet` for an `enum` whose variants each hold one payload.
///
/// Also generates, per payload type `P`, `Variant<Set> for P` and
/// `From<P> for Set`, plus `Query` and `Named` for the set and an
/// exhaustive `accept` method.
///
/// Attributes:
/// - `#[closed_set(name = "...")]` on the enum overrides the set name
/// - `#[kind(name = "...")]` on a variant overrides the kind name
#[proc_macro_derive(ClosedSet, attributes(closed_set, kind))]
pub fn derive_closed_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    closed_set::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn get_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

fn parse_attribute_string(attr: &Attribute, key: &str) -> Option<String> {
    if let Meta::List(meta_list) = &attr.meta {
        let parser = syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated;
        if let Ok(nested) = parser.parse2(meta_list.tokens.clone()) {
            for meta in nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident(key) {
                        if let Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                return Some(lit_str.value());
                            }
                        }
                    }
                }
            }
        }
    }
    None
}
