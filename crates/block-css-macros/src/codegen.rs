//! Code generation for the StyleProps derive.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::StyleStruct;

/// Generate the `StyleVocabulary` impl for a parsed struct.
pub fn generate(parsed: &StyleStruct) -> TokenStream {
    let name = &parsed.name;
    let keys: Vec<&str> = parsed.fields.iter().map(|f| f.key.as_str()).collect();

    // Passthrough fields in declaration order; shorthands are left to the resolver
    let visits = parsed.fields.iter().filter(|f| !f.shorthand).map(|f| {
        let ident = &f.ident;
        let key = &f.key;
        quote! {
            if let Some(value) = &self.#ident {
                visit(#key, value);
            }
        }
    });

    let setters = parsed.fields.iter().map(|f| {
        let ident = &f.ident;
        let key = &f.key;
        quote! {
            #key => {
                self.#ident = Some(::block_css::props::FromPropValue::from_prop_value(key, value)?);
                Ok(true)
            }
        }
    });

    let idents = parsed.fields.iter().map(|f| &f.ident);

    quote! {
        impl ::block_css::props::StyleVocabulary for #name {
            const KEYS: &'static [&'static str] = &[#(#keys),*];

            fn visit_passthrough<'a>(
                &'a self,
                visit: &mut dyn FnMut(&'static str, &'a ::block_css::CssValue),
            ) {
                #(#visits)*
            }

            fn set_prop(
                &mut self,
                key: &str,
                value: &::block_css::props::PropValue,
            ) -> ::block_css::Result<bool> {
                match key {
                    #(#setters)*
                    _ => Ok(false),
                }
            }

            fn is_empty(&self) -> bool {
                true #(&& self.#idents.is_none())*
            }
        }
    }
}
