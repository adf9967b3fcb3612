//! Allowed-parameter sets

use crate::tag::ParamTag;

/// The set of parameter types a consumer accepts.
///
/// Declared once per consumer with `type_set!`. Construction enforces the two
/// structural rules in const eval: the set names at least one type, and names
/// no type twice. A violation aborts translation at the definition site, not
/// at first use.
#[derive(Debug, Clone, Copy)]
pub struct TypeSet<const K: usize> {
    tags: [ParamTag; K],
}

impl<const K: usize> TypeSet<K> {
    pub const fn new(tags: [ParamTag; K]) -> Self {
        assert!(K > 0, "a parameter set must allow at least one type");
        let mut i = 0;
        while i < K {
            let mut j = i + 1;
            while j < K {
                assert!(
                    !tags[i].matches(tags[j]),
                    "a parameter set must not name the same type twice"
                );
                j += 1;
            }
            i += 1;
        }
        Self { tags }
    }

    /// Membership of a single tag.
    pub const fn contains(&self, tag: ParamTag) -> bool {
        let mut i = 0;
        while i < K {
            if self.tags[i].matches(tag) {
                return true;
            }
            i += 1;
        }
        false
    }

    // A set is never empty, `new` rejects K == 0.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        K
    }
}
