//! Sort directives and key lists.
//!
//! A sort key token is either `"path"` (ascending) or `"path:desc"`
//! (descending). [`Keys`] normalizes the "one key or many" argument that the
//! sort and search entry points accept.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A parsed sort key: the field path and whether it sorts descending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortDirective {
    /// The field path to resolve.
    pub path: String,
    /// Whether this key reverses the comparison.
    pub reverse: bool,
}

impl SortDirective {
    /// Creates an ascending directive for the given path.
    pub fn asc(path: impl Into<String>) -> Self {
        SortDirective {
            path: path.into(),
            reverse: false,
        }
    }

    /// Creates a descending directive for the given path.
    pub fn desc(path: impl Into<String>) -> Self {
        SortDirective {
            path: path.into(),
            reverse: true,
        }
    }

    /// Parses a sort key token. See [`parse_field`].
    pub fn parse(token: &str) -> Self {
        parse_field(token)
    }

    /// Applies this directive's direction to an ordering.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        if self.reverse {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl FromStr for SortDirective {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_field(s))
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reverse {
            write!(f, "{}:desc", self.path)
        } else {
            f.write_str(&self.path)
        }
    }
}

/// Parses `"path"` or `"path:desc"` into a [`SortDirective`].
///
/// Only a token that splits on `:` into exactly two parts, the second being
/// `desc`, is descending. Anything else keeps the whole token as the path,
/// so paths that contain `:` for other reasons survive untouched.
///
/// ```
/// use collate::parse_field;
///
/// assert_eq!(parse_field("name:desc").path, "name");
/// assert!(parse_field("name:desc").reverse);
/// assert_eq!(parse_field("ns:name:desc").path, "ns:name:desc");
/// assert!(!parse_field("name:asc").reverse);
/// ```
pub fn parse_field(token: &str) -> SortDirective {
    match token.split_once(':') {
        Some((path, "desc")) => SortDirective::desc(path),
        _ => SortDirective::asc(token),
    }
}

/// One key or an ordered list of keys.
///
/// ```
/// use collate::Keys;
///
/// assert_eq!(Keys::from("a").len(), 1);
/// assert_eq!(Keys::from(["a", "b:desc"]).len(), 2);
/// assert!(Keys::from(Vec::<String>::new()).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keys(Vec<String>);

impl Keys {
    /// Returns the raw key tokens.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns an iterator over the raw key tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses every token as a sort directive.
    pub fn directives(&self) -> Vec<SortDirective> {
        self.iter().map(parse_field).collect()
    }
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Keys(vec![key.to_string()])
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Keys(vec![key])
    }
}

impl From<&String> for Keys {
    fn from(key: &String) -> Self {
        Keys(vec![key.clone()])
    }
}

impl From<Vec<String>> for Keys {
    fn from(keys: Vec<String>) -> Self {
        Keys(keys)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(keys: Vec<&str>) -> Self {
        keys.as_slice().into()
    }
}

impl From<&[&str]> for Keys {
    fn from(keys: &[&str]) -> Self {
        Keys(keys.iter().map(|k| k.to_string()).collect())
    }
}

impl From<&[String]> for Keys {
    fn from(keys: &[String]) -> Self {
        Keys(keys.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(keys: [&str; N]) -> Self {
        keys.as_slice().into()
    }
}

impl<const N: usize> From<&[&str; N]> for Keys {
    fn from(keys: &[&str; N]) -> Self {
        keys.as_slice().into()
    }
}
