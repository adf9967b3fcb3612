//! Parameter registration
//!
//! `ConfigParam` is the entry ticket into a pack: it ties a type to its
//! [`ParamTag`] and to the const tables used to rebuild a value from its raw
//! discriminant.

use crate::tag::ParamTag;

/// A constant configuration parameter type.
///
/// Implemented by field-less enums via `#[derive(ConfigParam)]` or the
/// manual `impl_config_param!` macro, and by `bool`. All four constants are
/// usable in const eval, so packs built from these types can be checked and
/// consumed entirely during translation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registered configuration parameter",
    label = "cannot be placed in a parameter pack",
    note = "derive `ConfigParam` on the enum, or register it with `impl_config_param!`, before passing values to `params!`."
)]
pub trait ConfigParam: Copy + 'static {
    /// Identity of the parameter type, hashed from its fully qualified path.
    const TAG: ParamTag;

    /// Value `extract` falls back to when the pack carries no value of this type.
    const DEFAULT: Self;

    /// Every value of the type, in declaration order.
    const VARIANTS: &'static [Self];

    /// Raw discriminant of each value in `VARIANTS`, same order.
    const RAWS: &'static [u32];
}

/// Tag of a value's type, recovered through inference.
///
/// Lets `params!` key an entry without naming the type.
pub const fn tag_of<P: ConfigParam>(_value: &P) -> ParamTag {
    P::TAG
}

/// Rebuild a value from its raw discriminant via the registration tables.
///
/// Only called on raws taken from a tag-matched entry. A miss means two
/// distinct types hashed to the same tag; evaluation aborts rather than
/// guessing a value.
pub(crate) const fn decode<P: ConfigParam>(raw: u32) -> P {
    let mut i = 0;
    while i < P::RAWS.len() {
        if P::RAWS[i] == raw {
            return P::VARIANTS[i];
        }
        i += 1;
    }
    panic!("parameter tag collision: raw value does not belong to the extracted type");
}

// The one built-in scalar parameter. "bool" cannot collide with a derived
// tag because derived paths always contain "::".
impl ConfigParam for bool {
    const TAG: ParamTag = ParamTag::from_path("bool");
    const DEFAULT: Self = false;
    const VARIANTS: &'static [Self] = &[false, true];
    const RAWS: &'static [u32] = &[0, 1];
}
