#![no_std]

//! # param-pack
//!
//! Compile-time validation and extraction of typed constant parameter packs.
//!
//! **Typed, order-free configuration for embedded drivers, checked entirely
//! during translation.**
//!
//! ## Architecture
//!
//! `param-pack` lets a driver constructor accept a variadic-style list of
//! typed constant options and validate it before the program exists.
//!
//! ### 1. Identity
//! Every parameter type is keyed by a **64-bit FNV-1a hash** of its fully
//! qualified path:
//!
//! ```text
//! Type Name -> concat!(module_path!(), "::", Name) -> FNV hash (u64) -> ParamTag
//! ```
//!
//! ### 2. Packing
//! `params![...]` lowers each value to an `Entry { tag, raw }` pair and
//! collects the pairs into a const-generic `ParamPack<N>`.
//!
//! ### 3. Queries
//! Three `const fn` scans over the entries:
//!
//! ```text
//! within   : every entry's tag is a member of the consumer's TypeSet
//! distinct : no two entries share a tag
//! extract  : first entry with the wanted tag, else the type's default
//! ```
//!
//! ### 4. Gating
//! `validate_params!` turns the two predicates into assertions inside the
//! consumer's `const fn` constructor. Instantiated in `const`/`static`
//! position, a violation fails the build and a valid configuration leaves no
//! runtime trace.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Identity                                                |
//! |  - ParamTag (FNV-1a of the fully qualified type path)             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Pack Core                                               |
//! |  - ConfigParam (registration), Entry, ParamPack (storage)         |
//! |  - within / distinct / extract (queries), TypeSet (allowed sets)  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - macros (params!, type_set!, validate_params!), derive          |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **Zero Runtime Overhead**: packs are built, checked, and consumed in
//!   const evaluation
//! - **Order-Free Options**: values are keyed by their type, not by position
//! - **Misuse Is a Compile Error**: unknown or repeated options fail the
//!   build at the consumer's constructor
//! - **No Central Registry**: register parameter types anywhere with
//!   `#[derive(ConfigParam)]`
//!
//! ## Quick Start
//!
//! ```
//! use param_pack::prelude::*;
//! use param_pack::{params, type_set, validate_params};
//!
//! #[derive(Clone, Copy, ConfigParam)]
//! enum Pull {
//!     Disabled,
//!     Down,
//!     Up,
//! }
//!
//! #[derive(Clone, Copy, ConfigParam)]
//! enum Drive {
//!     S0S1,
//!     H0H1,
//! }
//!
//! const ACCEPTED: TypeSet<2> = type_set!(Pull, Drive);
//!
//! const fn pin_cnf<const N: usize>(opts: ParamPack<N>) -> u32 {
//!     validate_params!(ACCEPTED, opts);
//!     let pull = opts.extract::<Pull>();
//!     let drive = opts.extract::<Drive>();
//!     ((pull as u32) << 2) | ((drive as u32) << 8)
//! }
//!
//! // Order-free, defaulting, all at compile time.
//! static CNF: u32 = pin_cnf(params![Drive::H0H1, Pull::Up]);
//! assert_eq!(CNF, (2 << 2) | (1 << 8));
//! ```

// Allow `::param_pack` to work inside the crate itself
extern crate self as param_pack;

// =============================================================================
// Layer 0: Identity
// =============================================================================
pub mod tag;

// =============================================================================
// Layer 1: Pack Core
// =============================================================================
pub mod pack;
pub mod param;
pub mod set;

// =============================================================================
// Layer 2: User API
// =============================================================================

// Syntax macros (params!, type_set!, validate_params!, impl_config_param!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use pack::{Entry, ParamPack};
pub use param::{tag_of, ConfigParam};
pub use set::TypeSet;
pub use tag::ParamTag;

// Re-export the derive
pub use macros::ConfigParam;

// =============================================================================
// Declarative Macro Bridge for #[derive(ConfigParam)]
// =============================================================================
//
// Two-layer macro architecture to hash the deriving crate's module path:
// 1. #[derive(ConfigParam)] (proc-macro) generates a __impl_config_param! call
// 2. __impl_config_param! (this decl-macro) expands concat!(module_path!(), ...)
//    at the derive site, so the tag covers the user's module path

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(ConfigParam)] or impl_config_param! instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_config_param {
    ($ty:ty, $name:expr, [$($variant:ident),+ $(,)?], $default:ident) => {
        impl $crate::ConfigParam for $ty {
            const TAG: $crate::ParamTag =
                $crate::ParamTag::from_path(concat!(module_path!(), "::", $name));
            const DEFAULT: Self = Self::$default;
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];
            const RAWS: &'static [u32] = &[$(Self::$variant as u32),+];
        }
    };
}

/// Common items for pack-validated configuration.
pub mod prelude {
    pub use crate::pack::{Entry, ParamPack};
    pub use crate::param::{tag_of, ConfigParam};
    pub use crate::set::TypeSet;
    pub use crate::tag::ParamTag;
    pub use macros::ConfigParam;
    // Note: params!, type_set!, validate_params!, impl_config_param! are
    // #[macro_export] so they're at crate root
}
