//! Collate - Type-aware ordering and token search for heterogeneous records.
//!
//! Collate sorts and filters in-memory collections whose fields may hold
//! values of any kind. It provides:
//!
//! - A total order over mixed values: nothing, null, booleans, numbers,
//!   strings, arrays, objects, dates and opaque instances
//! - Multi-key sorting with `"path"` / `"path:desc"` keys and a global flip
//! - Natural ordering for strings with embedded numbers (`item2 < item10`)
//! - Multi-token search across fields with substring or `:exact` matching
//!
//! # Quick Start
//!
//! ```rust
//! use collate::{search, sort_by};
//! use serde_json::json;
//!
//! let tasks = vec![
//!     json!({"name": "Write docs", "priority": 3, "owner": {"name": "ana"}}),
//!     json!({"name": "Fix bug", "priority": 5, "owner": {"name": "bo"}}),
//!     json!({"name": "Fix docs", "priority": 3}),
//! ];
//!
//! let sorted = sort_by(&tasks, ["priority:desc", "name"], false);
//! assert_eq!(sorted[0]["name"], "Fix bug");
//! assert_eq!(sorted[1]["name"], "Fix docs");
//!
//! let found = search(&tasks, "fix, docs", ["name", "owner.name"]);
//! assert_eq!(found, [&tasks[2]]);
//! ```
//!
//! # Kind Precedence
//!
//! Values of different kinds order by kind alone:
//!
//! ```text
//! undefined < null < boolean < number < string < array < object
//!           < error < regexp < opaque < function < date
//! ```
//!
//! Within a kind:
//!
//! | Kind | Order |
//! |------|-------|
//! | Boolean | `false < true` |
//! | Number | numeric, `NaN` first |
//! | String | locale-aware collation (or bytewise, see [`Collation`]) |
//! | Array | element-wise, shorter prefix first |
//! | Date | chronological |
//! | everything else | equal |
//!
//! # Custom Records
//!
//! Anything implementing [`Record`] can be sorted and searched. For types
//! that don't, every entry point has a `*_with` variant taking an accessor
//! function `fn(&T, &str) -> Value`.

mod compare;
mod directive;
mod error;
mod kind;
mod natural;
mod options;
mod record;
mod search;
mod sort;
mod value;

// Re-export public API
pub use compare::{compare, compare_strings, compare_with};
pub use directive::{parse_field, Keys, SortDirective};
pub use error::{CollateError, Result};
pub use kind::{classify, Kind, PRECEDENCE};
pub use natural::{
    natural_key, natural_key_with_width, pad, sortable_numeric_suffix, NATURAL_KEY_WIDTH,
};
pub use options::{Collation, CompareOptions, SortOptions, DEFAULT_MAX_DEPTH};
pub use record::{load_records, lookup, Record};
pub use search::{search, search_with, tokenize, FieldSpec, Modifier, Search};
pub use sort::{sort_by, sort_by_with, Sorter};
pub use value::{Number, Timestamp, Value};
