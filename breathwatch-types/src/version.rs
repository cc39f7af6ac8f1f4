//! Schema versioning for persisted values.

use crate::SCHEMA_VERSION;

/// Schema version stamped onto every persisted value.
///
/// Readers compare the major number against [`SCHEMA_VERSION`] and discard
/// values written by an incompatible release instead of misreading them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaVersion {
    /// Bumped on breaking layout changes.
    pub major: u32,

    /// Bumped when optional fields are added.
    pub minor: u32,
}

impl SchemaVersion {
    /// Create a version from its parts.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The version written by this build.
    pub const fn current() -> Self {
        Self {
            major: SCHEMA_VERSION,
            minor: 0,
        }
    }

    /// True when the major version matches this build.
    pub fn is_compatible(&self) -> bool {
        self.major == SCHEMA_VERSION
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::current()
    }
}

/// A value paired with the schema version it was written under.
///
/// This is the on-disk shape of every stored collection:
///
/// ```json
/// { "version": { "major": 1, "minor": 0 }, "data": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Versioned<T> {
    pub version: SchemaVersion,
    pub data: T,
}

impl<T> Versioned<T> {
    /// Wrap a value with the current schema version.
    pub fn current(data: T) -> Self {
        Self {
            version: SchemaVersion::current(),
            data,
        }
    }

    /// Unwrap the value if it was written by a compatible release.
    pub fn into_compatible(self) -> Option<T> {
        self.version.is_compatible().then_some(self.data)
    }
}
