//! Code — a validated four-letter type code.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Dimension, registry};
use crate::{Error, Result};

/// A member of the 16-entry registry.
///
/// A `Code` can only be obtained through [`Code::parse`] or the registry
/// table, so holding one means the letters are already valid. Ordering is
/// plain string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(&'static str);

impl Code {
    /// Registry-internal constructor. `s` must be one of the 16 entries.
    pub(crate) const fn from_static(s: &'static str) -> Self {
        Self(s)
    }

    /// Validate `raw` and return the registry entry it names.
    pub fn parse(raw: &str) -> Result<Self> {
        registry::lookup(raw).ok_or_else(|| Error::InvalidCode(raw.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Letter at the given dimension's position.
    pub fn letter(&self, dim: Dimension) -> char {
        self.0.as_bytes()[dim.index()] as char
    }

    /// The code with one dimension's letter swapped for its opposite.
    ///
    /// Always `Some` for registry codes; the option keeps the registry the
    /// single authority on what counts as a valid node.
    pub fn flip(&self, dim: Dimension) -> Option<Code> {
        let mut letters = [0u8; 4];
        letters.copy_from_slice(self.0.as_bytes());
        let flipped = dim.opposite(self.letter(dim))?;
        letters[dim.index()] = flipped as u8;
        let raw = std::str::from_utf8(&letters).ok()?;
        registry::lookup(raw)
    }

    /// Dimensions at which `self` and `other` carry different letters.
    pub fn mismatches(self, other: Code) -> impl Iterator<Item = Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(move |&d| self.letter(d) != other.letter(d))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Code::parse(s)
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Code::parse(&raw).map_err(serde::de::Error::custom)
    }
}
