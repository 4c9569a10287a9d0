//! Runtime value types for loosely-typed records.
//!
//! The [`Value`] enum is the closed set of shapes a field can take once it
//! has been read out of a record. Every value maps to exactly one
//! [`Kind`](crate::Kind), and every pair of values is comparable.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

use crate::kind::{classify, Kind};

/// Runtime value of a record field, borrowed from the source record.
///
/// # Example
///
/// ```
/// use collate::{Kind, Number, Value};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// fn accessor<'a>(task: &'a Task, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::from(task.name.as_str()),
///         "priority" => Value::Number(Number::U64(task.priority as u64)),
///         _ => Value::Undefined,
///     }
/// }
///
/// let task = Task { name: "Ship it".into(), priority: 2 };
/// assert_eq!(accessor(&task, "name").kind(), Kind::String);
/// assert!(accessor(&task, "owner").is_undefined());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value<'a> {
    /// Field not present.
    #[default]
    Undefined,
    /// Field present but explicitly null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value, borrowed from the record or produced by a key transform.
    String(Cow<'a, str>),
    /// Ordered list of values.
    Array(Vec<Value<'a>>),
    /// Key/value mapping, in source order.
    Object(Vec<(&'a str, Value<'a>)>),
    /// Point in time.
    Date(Timestamp),
    /// Error value, carrying its message.
    Error(Cow<'a, str>),
    /// Regular expression, carrying its source pattern.
    RegExp(Cow<'a, str>),
    /// Callable value, carrying its name.
    Function(&'a str),
    /// Host-specific instance with no dedicated kind, named by its type.
    Opaque(&'a str),
}

impl<'a> Value<'a> {
    /// Returns the semantic kind of this value.
    pub fn kind(&self) -> Kind {
        classify(self)
    }

    /// Returns `true` if the field was absent.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if this is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for both absent and null values.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the timestamp, if present.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Date(t) => Some(*t),
            _ => None,
        }
    }

    /// Extracts the array elements, if present.
    pub fn as_array(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a direct member of an object value.
    pub fn member(&self, key: &str) -> Option<&Value<'a>> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Renders the value as the text searched by [`Search`](crate::Search).
///
/// Absent and null values render as the empty string. Arrays and objects
/// join their element renderings with `,`.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined | Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) | Value::Error(s) => f.write_str(s),
            Value::Array(items) => write_joined(f, items.iter()),
            Value::Object(entries) => write_joined(f, entries.iter().map(|(_, v)| v)),
            Value::Date(t) => write!(f, "{}", t),
            Value::RegExp(source) => write!(f, "/{}/", source),
            Value::Function(name) | Value::Opaque(name) => f.write_str(name),
        }
    }
}

fn write_joined<'v, 'a: 'v>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'v Value<'a>>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(json: &'a serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => Value::Number(Number::from(n)),
            Json::String(s) => Value::String(Cow::Borrowed(s.as_str())),
            Json::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Json::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.as_str(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value<'_> {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(t: Timestamp) -> Self {
        Value::Date(t)
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::Array(items)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

macro_rules! value_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Numeric value supporting all common numeric types.
///
/// Numbers keep their source representation to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
///
/// [`Number::compare`] orders mixed representations exactly, without
/// routing integers through a lossy `f64` cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Returns `true` if this is a floating point NaN.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// This is a total order: NaN sorts before every other number and is
    /// equal to itself. `-0.0` and `0.0` are equal.
    pub fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            (Number::U64(a), Number::U64(b)) => a.cmp(&b),
            (Number::I64(a), Number::U64(b)) => (a as i128).cmp(&(b as i128)),
            (Number::U64(a), Number::I64(b)) => (a as i128).cmp(&(b as i128)),
            (Number::F64(a), Number::F64(b)) => match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            },
            (Number::F64(f), int) => compare_int_float(int.to_i128(), f).reverse(),
            (int, Number::F64(f)) => compare_int_float(int.to_i128(), f),
        }
    }

    fn to_i128(self) -> i128 {
        match self {
            Number::I64(n) => n as i128,
            Number::U64(n) => n as i128,
            Number::F64(n) => n as i128,
        }
    }
}

// Integers span [-2^63, 2^64), so any float outside that range settles the
// comparison without a cast.
fn compare_int_float(int: i128, float: f64) -> Ordering {
    const UPPER: f64 = 18_446_744_073_709_551_616.0;
    const LOWER: f64 = -9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return Ordering::Greater;
    }
    if float >= UPPER {
        return Ordering::Less;
    }
    if float < LOWER {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0f64
            .partial_cmp(&(float - whole))
            .unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(*other))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) if n.is_nan() => f.write_str("NaN"),
            Number::F64(n) if n.is_infinite() => {
                f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::F64(n) if n == 0.0 => f.write_str("0"),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// Displayed as RFC 3339 in UTC with millisecond precision.
///
/// ```
/// use collate::Timestamp;
///
/// let ts = Timestamp::from_secs(0);
/// assert_eq!(ts.to_string(), "1970-01-01T00:00:00.000Z");
/// assert!(Timestamp(1000) < Timestamp(2000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as a UTC date-time, if it is in chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}
