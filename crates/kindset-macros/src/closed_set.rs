//! #[derive(ClosedSet)] implementation

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Error, Fields, Ident, Type};

use crate::{get_attribute, parse_attribute_string};

struct Kind<'a> {
    variant: &'a Ident,
    payload: &'a Type,
    name: String,
    index: usize,
}

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "#[derive(ClosedSet)] does not support generic enums",
        ));
    }

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "#[derive(ClosedSet)] only works on enums",
            ))
        }
    };

    if variants.is_empty() {
        return Err(Error::new_spanned(
            &input,
            "#[derive(ClosedSet)] requires at least one kind",
        ));
    }

    let set_name = get_attribute(&input.attrs, "closed_set")
        .and_then(|attr| parse_attribute_string(attr, "name"))
        .unwrap_or_else(|| name.to_string());

    let mut kinds: Vec<Kind> = Vec::with_capacity(variants.len());
    for (index, variant) in variants.iter().enumerate() {
        let payload = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(Error::new_spanned(
                    variant,
                    "#[derive(ClosedSet)] requires every variant to hold exactly one unnamed payload",
                ))
            }
        };

        let kind_name = get_attribute(&variant.attrs, "kind")
            .and_then(|attr| parse_attribute_string(attr, "name"))
            .unwrap_or_else(|| variant.ident.to_string());

        let payload_key = payload.to_token_stream().to_string();
        for earlier in &kinds {
            if earlier.payload.to_token_stream().to_string() == payload_key {
                return Err(Error::new_spanned(
                    payload,
                    format!(
                        "payload type `{}` is already the kind `{}`",
                        payload_key, earlier.name
                    ),
                ));
            }
            if earlier.name == kind_name {
                return Err(Error::new_spanned(
                    variant,
                    format!("kind name `{}` is declared more than once", kind_name),
                ));
            }
        }

        kinds.push(Kind {
            variant: &variant.ident,
            payload,
            name: kind_name,
            index,
        });
    }

    let descriptors: Vec<_> = kinds
        .iter()
        .map(|k| {
            let kind_name = &k.name;
            let index = k.index;
            quote! { ::kindset::__internal::KindDescriptor::new(#kind_name, #index) }
        })
        .collect();

    let kind_arms: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = k.variant;
            let index = k.index;
            quote! { #name::#variant(_) => ::kindset::__internal::KindId::new(#index) }
        })
        .collect();

    let wrap_attempts: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = k.variant;
            let payload = k.payload;
            quote! {
                if let ::std::option::Option::Some(inner) = any.downcast_mut::<::std::option::Option<#payload>>() {
                    return inner.take().map(#name::#variant);
                }
            }
        })
        .collect();

    let variant_impls: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = k.variant;
            let payload = k.payload;
            let index = k.index;
            quote! {
                impl ::kindset::__internal::Variant<#name> for #payload {
                    const KIND: ::kindset::__internal::KindId =
                        ::kindset::__internal::KindId::new(#index);

                    fn wrap(self) -> #name {
                        #name::#variant(self)
                    }

                    #[allow(unreachable_patterns)]
                    fn project(value: &#name) -> ::std::option::Option<&Self> {
                        match value {
                            #name::#variant(payload) => ::std::option::Option::Some(payload),
                            _ => ::std::option::Option::None,
                        }
                    }
                }

                impl ::std::convert::From<#payload> for #name {
                    fn from(payload: #payload) -> Self {
                        #name::#variant(payload)
                    }
                }
            }
        })
        .collect();

    let query_arms: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = k.variant;
            quote! { #name::#variant(payload) => ::kindset::__internal::Query::query(payload) }
        })
        .collect();

    let name_arms: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = k.variant;
            let kind_name = &k.name;
            quote! { #name::#variant(_) => #kind_name }
        })
        .collect();

    let visit_bounds: Vec<_> = kinds
        .iter()
        .map(|k| {
            let payload = k.payload;
            quote! { ::kindset::__internal::Visit<#payload, Output = __R> }
        })
        .collect();

    let visit_arms: Vec<_> = kinds
        .iter()
        .map(|k| {
            let variant = k.variant;
            let payload = k.payload;
            quote! {
                #name::#variant(payload) =>
                    <__V as ::kindset::__internal::Visit<#payload>>::visit(visitor, payload)
            }
        })
        .collect();

    let expanded = quote! {
        impl ::kindset::__internal::ClosedSet for #name {
            const NAME: &'static str = #set_name;
            const KINDS: &'static [::kindset::__internal::KindDescriptor] = &[#(#descriptors),*];

            fn kind(&self) -> ::kindset::__internal::KindId {
                match self {
                    #(#kind_arms,)*
                }
            }

            fn try_wrap<__T: ::std::any::Any>(value: __T) -> ::std::option::Option<Self> {
                let mut slot = ::std::option::Option::Some(value);
                let any: &mut dyn ::std::any::Any = &mut slot;
                if let ::std::option::Option::Some(inner) = any.downcast_mut::<::std::option::Option<Self>>() {
                    return inner.take();
                }
                #(#wrap_attempts)*
                ::std::option::Option::None
            }
        }

        #(#variant_impls)*

        impl ::kindset::__internal::Query for #name {
            fn query(&self) -> bool {
                match self {
                    #(#query_arms,)*
                }
            }
        }

        impl ::kindset::__internal::Named for #name {
            fn kind_name(&self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }
        }

        impl #name {
            /// Hands the live payload to `visitor`, which must handle every kind.
            pub fn accept<__V, __R>(&self, visitor: &mut __V) -> __R
            where
                __V: #(#visit_bounds)+* + ?Sized,
            {
                match self {
                    #(#visit_arms,)*
                }
            }
        }
    };

    Ok(expanded)
}
