//! Total ordering over runtime values.
//!
//! Values of different kinds are ordered by [`Kind::precedence`] alone.
//! Values of the same kind compare by content where the kind has a natural
//! order (booleans, numbers, strings, arrays, dates) and are equal otherwise.

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::kind::classify;
use crate::options::{Collation, CompareOptions};
use crate::value::Value;

/// Compares two values with default options.
///
/// ```
/// use std::cmp::Ordering;
/// use collate::{compare, Value};
///
/// // Numbers precede strings regardless of content.
/// assert_eq!(compare(&Value::from(5), &Value::from("a")), Ordering::Less);
/// // Absent values rank lowest.
/// assert_eq!(compare(&Value::Undefined, &Value::Null), Ordering::Less);
/// // Arrays compare element-wise, shorter first on a shared prefix.
/// let short = Value::from(vec![Value::from(1)]);
/// let long = Value::from(vec![Value::from(1), Value::from(0)]);
/// assert_eq!(compare(&short, &long), Ordering::Less);
/// ```
pub fn compare(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    compare_with(a, b, &CompareOptions::default())
}

/// Compares two values with the given options.
pub fn compare_with(a: &Value<'_>, b: &Value<'_>, options: &CompareOptions) -> Ordering {
    compare_at_depth(a, b, options, 0)
}

fn compare_at_depth(
    a: &Value<'_>,
    b: &Value<'_>,
    options: &CompareOptions,
    depth: usize,
) -> Ordering {
    let (kind_a, kind_b) = (classify(a), classify(b));
    if kind_a != kind_b {
        return kind_a.precedence().cmp(&kind_b.precedence());
    }

    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::String(a), Value::String(b)) => compare_strings(a, b, options.collation),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => {
            if depth >= options.max_depth {
                return Ordering::Equal;
            }
            a.iter()
                .zip(b)
                .map(|(x, y)| compare_at_depth(x, y, options, depth + 1))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len()))
        }
        // Same kind without a content order: undefined, null, object,
        // error, regexp, opaque and function values.
        _ => Ordering::Equal,
    }
}

/// Compares two strings under the given collation.
///
/// ```
/// use std::cmp::Ordering;
/// use collate::{compare_strings, Collation};
///
/// assert_eq!(compare_strings("apple", "Banana", Collation::Locale), Ordering::Less);
/// assert_eq!(compare_strings("apple", "Banana", Collation::Binary), Ordering::Greater);
/// ```
pub fn compare_strings(a: &str, b: &str, collation: Collation) -> Ordering {
    match collation {
        Collation::Binary => a.cmp(b),
        Collation::Locale => compare_primary(a, b)
            .then_with(|| lowercase(a).cmp(lowercase(b)))
            .then_with(|| {
                a.chars()
                    .map(char::is_uppercase)
                    .cmp(b.chars().map(char::is_uppercase))
            })
            .then_with(|| a.cmp(b)),
    }
}

// Base letters only: accents folded away, case ignored.
fn compare_primary(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return a
            .bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase()));
    }
    let (a, b) = (deunicode(a), deunicode(b));
    lowercase(&a).cmp(lowercase(&b))
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}
