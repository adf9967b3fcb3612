//! Parameter pack storage and queries
//!
//! A pack is a fixed-size list of `(tag, raw)` entries built by `params!`.
//! The three queries (`within`, `distinct`, `extract`) are const fns: invoked
//! from a `const` or `static` initializer they run entirely during
//! translation and leave no runtime representation.

use crate::param::{decode, ConfigParam};
use crate::set::TypeSet;
use crate::tag::ParamTag;

/// One packed parameter: the tag of its type plus its raw discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    tag: ParamTag,
    raw: u32,
}

impl Entry {
    pub const fn new(tag: ParamTag, raw: u32) -> Self {
        Self { tag, raw }
    }

    pub const fn tag(&self) -> ParamTag {
        self.tag
    }

    pub const fn raw(&self) -> u32 {
        self.raw
    }
}

/// An ordered pack of typed constant parameters.
///
/// Built by `params!` and consumed by reference. The pack itself never
/// rejects anything: `within` and `distinct` return plain `bool`s, and the
/// consumer turns them into a translation-time contract with
/// `validate_params!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamPack<const N: usize> {
    entries: [Entry; N],
}

impl<const N: usize> ParamPack<N> {
    pub const fn new(entries: [Entry; N]) -> Self {
        Self { entries }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// True iff every entry's type is a member of `allowed`.
    ///
    /// The empty pack passes vacuously.
    pub const fn within<const K: usize>(&self, allowed: &TypeSet<K>) -> bool {
        let mut i = 0;
        while i < N {
            if !allowed.contains(self.entries[i].tag) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True iff no two entries share a type.
    ///
    /// Keyed on the tag alone: two equal values of the same type are still a
    /// duplicate. Empty and single-entry packs pass trivially.
    pub const fn distinct(&self) -> bool {
        let mut i = 0;
        while i < N {
            let mut j = i + 1;
            while j < N {
                if self.entries[i].tag.matches(self.entries[j].tag) {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    /// Raw value of the first entry with the given tag.
    const fn find(&self, tag: ParamTag) -> Option<u32> {
        let mut i = 0;
        while i < N {
            if self.entries[i].tag.matches(tag) {
                return Some(self.entries[i].raw);
            }
            i += 1;
        }
        None
    }

    /// Whether the pack carries a value of type `P`.
    pub const fn contains<P: ConfigParam>(&self) -> bool {
        self.find(P::TAG).is_some()
    }

    /// First value of type `P` in pack order, or `P::DEFAULT`.
    ///
    /// Total: an absent type is not an error, it means "use the default".
    pub const fn extract<P: ConfigParam>(&self) -> P {
        self.extract_or(P::DEFAULT)
    }

    /// First value of type `P` in pack order, or the given default.
    pub const fn extract_or<P: ConfigParam>(&self, default: P) -> P {
        match self.find(P::TAG) {
            Some(raw) => decode::<P>(raw),
            None => default,
        }
    }
}
