//! User-facing syntax macros
//!
//! This module provides the declarative surface for building packs
//! (`params!`), declaring allowed sets (`type_set!`), gating a consumer
//! (`validate_params!`), and registering types without the derive
//! (`impl_config_param!`).

// =============================================================================
// params! - Build a parameter pack from constant values
// =============================================================================

/// Build a [`ParamPack`](crate::ParamPack) from a list of constant values.
///
/// Order is free except for extraction, which is first-match-wins. Each value
/// must be of a registered [`ConfigParam`](crate::ConfigParam) type;
/// unregistered types are rejected with a guided diagnostic.
///
/// # Example
///
/// ```
/// use param_pack::params;
///
/// let pack = params![true];
/// assert_eq!(pack.len(), 1);
/// assert!(pack.extract::<bool>());
///
/// let empty = params![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::ParamPack::new([])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ParamPack::new([
            $(
                {
                    let value = $value;
                    $crate::Entry::new($crate::tag_of(&value), value as u32)
                }
            ),+
        ])
    };
}

// =============================================================================
// type_set! - Declare the set of accepted parameter types
// =============================================================================

/// Build a [`TypeSet`](crate::TypeSet) from a list of type names.
///
/// At least one type is required, and no type may appear twice;
/// `TypeSet::new` enforces both in const eval.
///
/// # Example
///
/// ```
/// use param_pack::{type_set, TypeSet};
///
/// const FLAGS: TypeSet<1> = type_set!(bool);
/// assert_eq!(FLAGS.len(), 1);
/// ```
#[macro_export]
macro_rules! type_set {
    ($($ty:ty),+ $(,)?) => {
        $crate::TypeSet::new([
            $(<$ty as $crate::ConfigParam>::TAG),+
        ])
    };
}

// =============================================================================
// validate_params! - Static contract at the consumer boundary
// =============================================================================

/// Assert that a pack is valid for a consumer: every parameter accepted, no
/// parameter type repeated.
///
/// Written inside a `const fn` constructor and evaluated in `const`/`static`
/// position, a violation fails the build with the assertion message and a
/// passing pack costs nothing at runtime.
///
/// # Example
///
/// ```
/// use param_pack::{params, type_set, validate_params, ParamPack, TypeSet};
///
/// const FLAGS: TypeSet<1> = type_set!(bool);
///
/// const fn configure<const N: usize>(opts: ParamPack<N>) -> bool {
///     validate_params!(FLAGS, opts);
///     opts.extract::<bool>()
/// }
///
/// static INVERT: bool = configure(params![true]);
/// assert!(INVERT);
/// ```
///
/// A value outside the accepted set is a translation-time error:
///
/// ```compile_fail
/// use param_pack::{params, type_set, validate_params, ParamPack, TypeSet};
///
/// #[derive(Clone, Copy)]
/// enum Speed { Low, High }
/// param_pack::impl_config_param!(Speed { Low, High });
///
/// const FLAGS: TypeSet<1> = type_set!(bool);
///
/// const fn configure<const N: usize>(opts: ParamPack<N>) -> bool {
///     validate_params!(FLAGS, opts);
///     opts.extract::<bool>()
/// }
///
/// // Speed is not in FLAGS: const evaluation aborts the build here.
/// static INVERT: bool = configure(params![Speed::High]);
///
/// fn main() {}
/// ```
///
/// So is passing the same parameter type twice:
///
/// ```compile_fail
/// use param_pack::{params, type_set, validate_params, ParamPack, TypeSet};
///
/// #[derive(Clone, Copy)]
/// enum Speed { Low, High }
/// param_pack::impl_config_param!(Speed { Low, High });
///
/// const OPTS: TypeSet<2> = type_set!(bool, Speed);
///
/// const fn configure<const N: usize>(opts: ParamPack<N>) -> bool {
///     validate_params!(OPTS, opts);
///     opts.extract::<bool>()
/// }
///
/// // Speed appears twice: const evaluation aborts the build here.
/// static INVERT: bool = configure(params![Speed::Low, Speed::High, true]);
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! validate_params {
    ($allowed:expr, $pack:expr) => {{
        let allowed = &$allowed;
        let pack = &$pack;
        assert!(
            pack.within(allowed),
            "configuration rejected: a parameter is not accepted by this consumer"
        );
        assert!(
            pack.distinct(),
            "configuration rejected: the same parameter type appears more than once"
        );
    }};
}

// =============================================================================
// impl_config_param! - Manual registration without the derive
// =============================================================================

/// Implement [`ConfigParam`](crate::ConfigParam) for a field-less enum
/// without the derive.
///
/// The default value falls back to the first listed variant when no
/// `default =` clause is given.
///
/// # Example
///
/// ```
/// use param_pack::params;
///
/// #[derive(Clone, Copy)]
/// enum Rate { R250k, R1M, R2M }
/// param_pack::impl_config_param!(Rate { R250k, R1M, R2M }, default = R1M);
///
/// let rate: Rate = params![].extract();
/// assert!(matches!(rate, Rate::R1M));
/// ```
#[macro_export]
macro_rules! impl_config_param {
    ($ty:ident { $($variant:ident),+ $(,)? }, default = $default:ident) => {
        impl $crate::ConfigParam for $ty {
            const TAG: $crate::ParamTag =
                $crate::ParamTag::from_path(concat!(module_path!(), "::", stringify!($ty)));
            const DEFAULT: Self = Self::$default;
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
            const RAWS: &'static [u32] = &[$(Self::$variant as u32),+];
        }
    };
    ($ty:ident { $first:ident $(, $rest:ident)* $(,)? }) => {
        $crate::impl_config_param!($ty { $first $(, $rest)* }, default = $first);
    };
}
