//! Parameter type identity
//!
//! Each registered parameter type is keyed by a 64-bit FNV-1a hash of its
//! fully qualified path (`module_path!()` + `"::"` + type name). The hash is
//! computed once in const eval; every later comparison is a plain integer
//! compare.

/// 64-bit identity of a configuration parameter type.
///
/// Two tags match exactly when they hash the same fully qualified path. The
/// path includes `module_path!()`, so same-named types in different modules
/// stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParamTag(u64);

impl ParamTag {
    /// FNV-1a 64-bit hash of the fully qualified type path (const fn)
    pub const fn from_path(path: &str) -> Self {
        let bytes = path.as_bytes();
        let mut hash: u64 = 0xcbf29ce484222325;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(0x100000001b3);
            i += 1;
        }
        Self(hash)
    }

    /// Compare two tags in a const context
    pub const fn matches(self, other: Self) -> bool {
        self.0 == other.0
    }

    /// The raw hash value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}
