//! Natural-order keys for strings with embedded numbers.
//!
//! Zero-padding every run of digits to a fixed width makes plain string
//! comparison agree with numeric order: `"item2"` becomes
//! `"item0000000002"`, which sorts before `"item0000000010"`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::Value;

/// Width every digit run is padded to.
pub const NATURAL_KEY_WIDTH: usize = 10;

// Alternating runs of ASCII digits and everything else.
static RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+|[^0-9]+").expect("digit run pattern is valid"));

/// Left-pads `s` with `fill` up to `width` characters.
///
/// Strings already at or past `width` are returned unchanged.
///
/// ```
/// assert_eq!(collate::pad("42", 5, '0'), "00042");
/// assert_eq!(collate::pad("123456", 5, '0'), "123456");
/// ```
pub fn pad(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut padded = String::with_capacity(s.len() + (width - len) * fill.len_utf8());
    padded.extend(std::iter::repeat(fill).take(width - len));
    padded.push_str(s);
    padded
}

/// Builds the natural-order key for a string.
///
/// Digit runs are padded to [`NATURAL_KEY_WIDTH`]; runs longer than that
/// pass through as-is, so ordering is only guaranteed up to ten digits.
/// Surrounding whitespace is trimmed from the result.
///
/// ```
/// use collate::natural_key;
///
/// assert_eq!(natural_key("item2"), "item0000000002");
/// assert!(natural_key("item2") < natural_key("item10"));
/// ```
pub fn natural_key(s: &str) -> String {
    natural_key_with_width(s, NATURAL_KEY_WIDTH)
}

/// Builds a natural-order key padding digit runs to `width`.
pub fn natural_key_with_width(s: &str, width: usize) -> String {
    let mut key = String::with_capacity(s.len() + width);
    for run in RUNS.find_iter(s) {
        let run = run.as_str();
        if run.starts_with(|c: char| c.is_ascii_digit()) {
            key.push_str(&pad(run, width, '0'));
        } else {
            key.push_str(run);
        }
    }
    key.trim().to_string()
}

/// Replaces a string value with its natural-order key.
///
/// Non-string values are returned unchanged.
///
/// ```
/// use collate::{sortable_numeric_suffix, Value};
///
/// assert_eq!(
///     sortable_numeric_suffix(Value::from("v1.2")),
///     Value::from("v0000000001.0000000002")
/// );
/// assert_eq!(sortable_numeric_suffix(Value::from(7)), Value::from(7));
/// ```
pub fn sortable_numeric_suffix(value: Value<'_>) -> Value<'_> {
    match value {
        Value::String(s) => Value::String(Cow::Owned(natural_key(&s))),
        other => other,
    }
}
