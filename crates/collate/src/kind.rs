//! Semantic kinds and their precedence.
//!
//! Every [`Value`] classifies into exactly one [`Kind`]. Kinds are totally
//! ordered by a fixed precedence, which is what makes values of different
//! kinds comparable:
//!
//! ```text
//! undefined < null < boolean < number < string < array < object
//!           < error < regexp < opaque < function < date
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CollateError;
use crate::value::Value;

/// Closed semantic category of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Error,
    RegExp,
    /// Fallback for host instances without a dedicated kind.
    Opaque,
    Function,
    Date,
}

/// All kinds, in ascending precedence.
pub const PRECEDENCE: [Kind; 12] = [
    Kind::Undefined,
    Kind::Null,
    Kind::Boolean,
    Kind::Number,
    Kind::String,
    Kind::Array,
    Kind::Object,
    Kind::Error,
    Kind::RegExp,
    Kind::Opaque,
    Kind::Function,
    Kind::Date,
];

impl Kind {
    /// Position of this kind in [`PRECEDENCE`].
    pub fn precedence(self) -> u8 {
        match self {
            Kind::Undefined => 0,
            Kind::Null => 1,
            Kind::Boolean => 2,
            Kind::Number => 3,
            Kind::String => 4,
            Kind::Array => 5,
            Kind::Object => 6,
            Kind::Error => 7,
            Kind::RegExp => 8,
            Kind::Opaque => 9,
            Kind::Function => 10,
            Kind::Date => 11,
        }
    }

    /// Returns the canonical lowercase name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Error => "error",
            Kind::RegExp => "regexp",
            Kind::Opaque => "opaque",
            Kind::Function => "function",
            Kind::Date => "date",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = CollateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PRECEDENCE
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CollateError::UnknownKind(s.to_string()))
    }
}

/// Classifies a value into its semantic kind.
///
/// Never fails: the value model is closed, so every value has a kind.
///
/// ```
/// use collate::{classify, Kind, Value};
///
/// assert_eq!(classify(&Value::Null), Kind::Null);
/// assert_eq!(classify(&Value::from(3.5)), Kind::Number);
/// assert_eq!(classify(&Value::Opaque("FileList")), Kind::Opaque);
/// ```
pub fn classify(value: &Value<'_>) -> Kind {
    match value {
        Value::Undefined => Kind::Undefined,
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
        Value::Date(_) => Kind::Date,
        Value::Error(_) => Kind::Error,
        Value::RegExp(_) => Kind::RegExp,
        Value::Function(_) => Kind::Function,
        Value::Opaque(_) => Kind::Opaque,
    }
}
