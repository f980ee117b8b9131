//! Named bitflags of the JACDAC physical-layer status word.
//!
//! A [`FlagTable`] is an ordered list of `(name, mask)` pairs. Decoding a
//! status word walks the table in declaration order and reports every flag
//! whose mask shares at least one bit with the word. Masks may overlap (the
//! error mask is the union of the individual error bits), and every matching
//! entry is reported on its own.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A single named flag and the bits that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub name: Cow<'static, str>,
    pub mask: u16,
}

impl Flag {
    pub const fn new(name: &'static str, mask: u16) -> Self {
        Self {
            name: Cow::Borrowed(name),
            mask,
        }
    }

    /// True if any bit of `mask` is set in `word`.
    pub fn matches(&self, word: u16) -> bool {
        self.mask & word != 0
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<30} {:#06x}", self.name, self.mask)
    }
}

/// Immutable, ordered mapping from flag name to mask.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlagTable {
    flags: Vec<Flag>,
}

impl FlagTable {
    /// Build a table from static `(name, mask)` data, keeping its order.
    pub fn from_static(entries: &[(&'static str, u16)]) -> Self {
        Self {
            flags: entries
                .iter()
                .map(|&(name, mask)| Flag::new(name, mask))
                .collect(),
        }
    }

    /// Names of every flag set in `word`, in table order.
    pub fn decode(&self, word: u16) -> Vec<&str> {
        self.flags
            .iter()
            .filter(|flag| flag.matches(word))
            .map(|flag| &*flag.name)
            .collect()
    }

    /// Bits set in `word` that no flag of this table covers.
    pub fn unknown_bits(&self, word: u16) -> u16 {
        word & !self.known_mask()
    }

    /// Union of all masks in the table.
    pub fn known_mask(&self) -> u16 {
        self.flags.iter().fold(0, |acc, flag| acc | flag.mask)
    }

    pub fn mask_of(&self, name: &str) -> Option<u16> {
        self.flags
            .iter()
            .find(|flag| flag.name == name)
            .map(|flag| flag.mask)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, u16)> for FlagTable {
    fn from_iter<I: IntoIterator<Item = (N, u16)>>(iter: I) -> Self {
        Self {
            flags: iter
                .into_iter()
                .map(|(name, mask)| Flag {
                    name: name.into(),
                    mask,
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FlagTable {
    type Item = &'a Flag;
    type IntoIter = std::slice::Iter<'a, Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter()
    }
}

/// Decode `word` against `table`. Same as [`FlagTable::decode`].
pub fn decode(word: u16, table: &FlagTable) -> Vec<&str> {
    table.decode(word)
}
