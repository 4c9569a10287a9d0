//! Configuration for comparison and sorting.
//!
//! Options derive `serde` so hosts can keep them in their own config files:
//!
//! ```
//! use collate::{Collation, SortOptions};
//!
//! let opts: SortOptions =
//!     serde_json::from_str(r#"{"natural": true, "compare": {"collation": "binary"}}"#).unwrap();
//! assert!(opts.natural);
//! assert_eq!(opts.compare.collation, Collation::Binary);
//! assert_eq!(opts.compare.max_depth, collate::DEFAULT_MAX_DEPTH);
//! ```

use serde::{Deserialize, Serialize};

/// Default nesting limit for array comparison.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How two strings are ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Case- and accent-insensitive first, then accents, then case
    /// (lowercase first), then code points.
    #[default]
    Locale,
    /// Raw byte order.
    Binary,
}

/// Options for [`compare_with`](crate::compare_with).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// String ordering.
    pub collation: Collation,
    /// Array nesting depth past which elements compare equal.
    pub max_depth: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            collation: Collation::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string collation.
    pub fn collation(mut self, collation: Collation) -> Self {
        self.collation = collation;
        self
    }

    /// Sets the array nesting limit.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Options for [`Sorter`](crate::Sorter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// Value comparison settings.
    pub compare: CompareOptions,
    /// Run string key values through [`natural_key`](crate::natural_key)
    /// before comparing them.
    pub natural: bool,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string collation.
    pub fn collation(mut self, collation: Collation) -> Self {
        self.compare.collation = collation;
        self
    }

    /// Sets the array nesting limit.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.compare.max_depth = depth;
        self
    }

    /// Enables natural ordering of digit runs inside strings.
    pub fn natural(mut self, natural: bool) -> Self {
        self.natural = natural;
        self
    }
}
