//! Field parsing for the StyleProps derive.

use syn::{Data, DeriveInput, Fields, Ident, LitStr, Result, Type};

/// A struct deriving `StyleProps`.
#[derive(Debug)]
pub struct StyleStruct {
    pub name: Ident,
    pub fields: Vec<StyleField>,
}

/// A single vocabulary entry.
#[derive(Debug)]
pub struct StyleField {
    /// Rust field name (e.g., `padding_x`)
    pub ident: Ident,
    /// Prop key / CSS property name (e.g., `paddingX`)
    pub key: String,
    /// Shorthand fields are expanded by the resolver, not passed through
    pub shorthand: bool,
}

impl StyleStruct {
    pub fn from_derive(input: &DeriveInput) -> Result<Self> {
        let Data::Struct(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "StyleProps can only be derived for structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "StyleProps requires named fields",
            ));
        };

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            // Named fields always carry an ident.
            let Some(ident) = field.ident.clone() else {
                continue;
            };

            if !is_option(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "StyleProps fields must be `Option<_>`",
                ));
            }

            let mut key = camel_case(&ident.to_string());
            let mut shorthand = false;

            for attr in &field.attrs {
                if !attr.path().is_ident("style") {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("shorthand") {
                        shorthand = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        let lit: LitStr = meta.value()?.parse()?;
                        key = lit.value();
                        Ok(())
                    } else {
                        Err(meta.error("expected `shorthand` or `rename = \"...\"`"))
                    }
                })?;
            }

            if let Some(existing) = fields.iter().find(|f: &&StyleField| f.key == key) {
                return Err(syn::Error::new_spanned(
                    &ident,
                    format!("duplicate style key `{}` (also used by `{}`)", key, existing.ident),
                ));
            }

            fields.push(StyleField {
                ident,
                key,
                shorthand,
            });
        }

        Ok(StyleStruct {
            name: input.ident.clone(),
            fields,
        })
    }
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}

/// Converts a snake_case field name into a camelCase prop key.
pub fn camel_case(field: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("padding"), "padding");
        assert_eq!(camel_case("padding_x"), "paddingX");
        assert_eq!(camel_case("border_top_left_radius"), "borderTopLeftRadius");
        assert_eq!(camel_case("r#type"), "type");
    }

    #[test]
    fn test_parse_fields() {
        let input: DeriveInput = syn::parse_quote! {
            struct Props {
                z_index: Option<CssValue>,
                #[style(shorthand)]
                size: Option<CssValue>,
                #[style(rename = "inset")]
                inset_all: Option<CssValue>,
            }
        };
        let parsed = StyleStruct::from_derive(&input).unwrap();
        let keys: Vec<_> = parsed.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["zIndex", "size", "inset"]);
        assert!(!parsed.fields[0].shorthand);
        assert!(parsed.fields[1].shorthand);
    }

    #[test]
    fn test_rejects_non_option_field() {
        let input: DeriveInput = syn::parse_quote! {
            struct Props {
                width: CssValue,
            }
        };
        assert!(StyleStruct::from_derive(&input).is_err());
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let input: DeriveInput = syn::parse_quote! {
            struct Props {
                inset: Option<CssValue>,
                #[style(rename = "inset")]
                inset_all: Option<CssValue>,
            }
        };
        assert!(StyleStruct::from_derive(&input).is_err());
    }
}
