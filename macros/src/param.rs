//! #[derive(ConfigParam)] expansion

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, ExprLit, ExprUnary, Fields, Ident, Lit, UnOp, Variant};

/// #[derive(ConfigParam)] generates a call to the declarative macro bridge.
/// This lets module_path!() expand at the derive site, so the tag covers the
/// deriving crate's module path.
///
/// The two-layer architecture:
/// 1. #[derive(ConfigParam)] (proc-macro) -> generates __impl_config_param! call
/// 2. __impl_config_param! (decl-macro) -> expands concat!(module_path!(), ...)
pub fn expand_derive_config_param(input: DeriveInput) -> TokenStream2 {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ConfigParam cannot be derived for generic types\n\
             \n\
             The parameter tag is keyed by the type path alone, so every\n\
             instantiation would collapse onto one tag.",
        ));
    }

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "ConfigParam can only be derived for enums",
            ));
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "ConfigParam requires at least one variant\n\
             \n\
             extract() must always be able to produce a default value.",
        ));
    }

    let mut variants: Vec<Ident> = Vec::new();
    let mut default: Option<Ident> = None;
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "ConfigParam variants must be field-less\n\
                 \n\
                 A packed value is its raw discriminant; fields have no\n\
                 discriminant representation.",
            ));
        }
        if let Some((_, expr)) = &variant.discriminant {
            check_discriminant(expr)?;
        }
        if is_default_marker(variant)? {
            if let Some(first) = &default {
                return Err(syn::Error::new_spanned(
                    variant,
                    format!("duplicate default variant (`{first}` is already marked)"),
                ));
            }
            default = Some(variant.ident.clone());
        }
        variants.push(variant.ident.clone());
    }

    // No marker: the first variant is the default, as in the C-style
    // zero-initialized register fields this models.
    let default = default.unwrap_or_else(|| variants[0].clone());

    Ok(quote! {
        ::param_pack::__impl_config_param!(#ident, #ident_str, [#(#variants),*], #default);
    })
}

/// Packed values are carried as `u32`, so a literal discriminant outside
/// that range would truncate in the value tables and could alias another
/// variant. Non-literal discriminants (consts, expressions) are left to the
/// compiler.
fn check_discriminant(expr: &Expr) -> syn::Result<()> {
    let out_of_range = match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit.base10_parse::<u32>().is_err(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_), ..
        }) => true,
        _ => false,
    };
    if out_of_range {
        return Err(syn::Error::new_spanned(
            expr,
            "ConfigParam discriminants must fit in u32\n\
             \n\
             Packed values are carried as u32; this discriminant would\n\
             truncate and could alias another variant.",
        ));
    }
    Ok(())
}

/// `#[param(default)]` marks the default variant; a bare `#[default]` from
/// `derive(Default)` is honored too so the two derives cannot disagree.
fn is_default_marker(variant: &Variant) -> syn::Result<bool> {
    let mut found = false;
    for attr in &variant.attrs {
        if attr.path().is_ident("default") {
            found = true;
        } else if attr.path().is_ident("param") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    found = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown `param` option, expected `default`"))
                }
            })?;
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_str(input: DeriveInput) -> String {
        expand_derive_config_param(input).to_string()
    }

    #[test]
    fn test_plain_enum_defaults_to_first_variant() {
        let out = expand_str(parse_quote! {
            enum Pull { Disabled, Down, Up }
        });
        assert!(out.contains("__impl_config_param"));
        assert!(out.contains("[Disabled , Down , Up]"));
        assert!(out.ends_with("Disabled) ;"));
    }

    #[test]
    fn test_param_default_marker_wins() {
        let out = expand_str(parse_quote! {
            enum Pull {
                Disabled,
                #[param(default)]
                Up,
            }
        });
        assert!(out.ends_with("Up) ;"));
    }

    #[test]
    fn test_bare_default_marker() {
        let out = expand_str(parse_quote! {
            enum Drive {
                #[default]
                S0S1,
                H0H1,
            }
        });
        assert!(out.ends_with("S0S1) ;"));
    }

    #[test]
    fn test_rejects_structs() {
        let out = expand_str(parse_quote! {
            struct Pin { port: u8 }
        });
        assert!(out.contains("only be derived for enums"));
    }

    #[test]
    fn test_rejects_variant_fields() {
        let out = expand_str(parse_quote! {
            enum Pull { Custom(u8) }
        });
        assert!(out.contains("must be field-less"));
    }

    #[test]
    fn test_rejects_empty_enum() {
        let out = expand_str(parse_quote! {
            enum Never {}
        });
        assert!(out.contains("at least one variant"));
    }

    #[test]
    fn test_rejects_two_defaults() {
        let out = expand_str(parse_quote! {
            enum Pull {
                #[param(default)]
                Down,
                #[param(default)]
                Up,
            }
        });
        assert!(out.contains("duplicate default variant"));
    }

    #[test]
    fn test_rejects_generics() {
        let out = expand_str(parse_quote! {
            enum Wrapped<T> { One }
        });
        assert!(out.contains("generic types"));
    }

    #[test]
    fn test_accepts_register_mask_discriminants() {
        let out = expand_str(parse_quote! {
            enum Sense { Disabled = 0, High = 2, Low = 3 }
        });
        assert!(out.contains("__impl_config_param"));
        assert!(out.contains("[Disabled , High , Low]"));
    }

    #[test]
    fn test_rejects_discriminant_wider_than_u32() {
        let out = expand_str(parse_quote! {
            enum Wide { Big = 4294967296 }
        });
        assert!(out.contains("must fit in u32"));
    }

    #[test]
    fn test_rejects_negative_discriminant() {
        let out = expand_str(parse_quote! {
            enum Offset { Minus = -1 }
        });
        assert!(out.contains("must fit in u32"));
    }
}
