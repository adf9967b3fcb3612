//! Procedural macros for the param-pack configuration system

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod param;

/// Derive macro to implement the `ConfigParam` trait for a field-less enum.
///
/// Generates the type's tag from its fully qualified path plus the value
/// tables used for const extraction. Mark the default variant with
/// `#[param(default)]` (or reuse `#[default]` from `derive(Default)`); the
/// first variant is the default when no marker is present.
///
/// Discriminants must fit in `u32`; packed values are carried in that width.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, Copy, ConfigParam)]
/// enum Pull {
///     Disabled,
///     Down,
///     #[param(default)]
///     Up,
/// }
/// ```
#[proc_macro_derive(ConfigParam, attributes(param, default))]
pub fn derive_config_param(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    param::expand_derive_config_param(input).into()
}
