//! Multi-token, multi-field search.
//!
//! A query is lowercased and split on runs of commas and whitespace into
//! tokens. A record matches when **every** token matches **at least one**
//! field:
//!
//! ```text
//! match = ∀ token ∃ field: field_text contains token     (default)
//!                          field_text == token           (":exact" fields)
//! ```
//!
//! Field texts are the [`Display`](std::fmt::Display) rendering of the
//! resolved [`Value`], lowercased.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::directive::Keys;
use crate::error::CollateError;
use crate::record::Record;
use crate::value::Value;

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s]+").expect("separator pattern is valid"));

/// How a token is matched against a field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    /// Field text contains the token.
    #[default]
    Contains,
    /// Field text equals the token.
    Exact,
}

impl Modifier {
    /// Parses a modifier suffix. The empty suffix is [`Modifier::Contains`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(Modifier::Contains),
            "exact" => Some(Modifier::Exact),
            _ => None,
        }
    }

    /// Returns the suffix written after `:` for this modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Contains => "",
            Modifier::Exact => "exact",
        }
    }

    /// Tests a lowercased field text against a lowercased token.
    pub fn matches(self, text: &str, token: &str) -> bool {
        match self {
            Modifier::Contains => text.contains(token),
            Modifier::Exact => text == token,
        }
    }
}

/// A field to search, with its match modifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// The field path to resolve.
    pub path: String,
    /// How tokens are matched against the field.
    pub modifier: Modifier,
}

impl FieldSpec {
    /// Creates a substring-matching field.
    pub fn contains(path: impl Into<String>) -> Self {
        FieldSpec {
            path: path.into(),
            modifier: Modifier::Contains,
        }
    }

    /// Creates an exact-matching field.
    pub fn exact(path: impl Into<String>) -> Self {
        FieldSpec {
            path: path.into(),
            modifier: Modifier::Exact,
        }
    }

    /// Parses `"path"` or `"path:modifier"`, splitting at the first `:`.
    ///
    /// Unrecognized modifiers fall back to substring matching. Use
    /// [`str::parse`] to reject them instead.
    pub fn parse(key: &str) -> Self {
        match key.split_once(':') {
            Some((path, modifier)) => FieldSpec {
                path: path.to_string(),
                modifier: Modifier::parse(modifier).unwrap_or_default(),
            },
            None => FieldSpec::contains(key),
        }
    }

    /// Tests a resolved value against a lowercased token.
    pub fn matches(&self, value: &Value<'_>, token: &str) -> bool {
        self.modifier
            .matches(&value.to_string().to_lowercase(), token)
    }
}

impl FromStr for FieldSpec {
    type Err = CollateError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.split_once(':') {
            Some((path, modifier)) => match Modifier::parse(modifier) {
                Some(modifier) => Ok(FieldSpec {
                    path: path.to_string(),
                    modifier,
                }),
                None => Err(CollateError::UnknownModifier {
                    key: key.to_string(),
                    modifier: modifier.to_string(),
                }),
            },
            None => Ok(FieldSpec::contains(key)),
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            Modifier::Contains => f.write_str(&self.path),
            Modifier::Exact => write!(f, "{}:exact", self.path),
        }
    }
}

/// Splits a query into lowercased tokens on runs of commas and whitespace.
///
/// A blank query yields a single empty token, which matches every field.
///
/// ```
/// use collate::tokenize;
///
/// assert_eq!(tokenize("  Foo, bar  baz "), ["foo", "bar", "baz"]);
/// assert_eq!(tokenize(""), [""]);
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    let normalized = query.trim().to_lowercase();
    SEPARATORS
        .split(&normalized)
        .map(str::to_string)
        .collect()
}

/// A token search over one or more fields.
///
/// # Example
///
/// ```
/// use collate::Search;
/// use serde_json::json;
///
/// let people = vec![
///     json!({"name": "Ada Lovelace", "id": "a1"}),
///     json!({"name": "Alan Turing", "id": "a2"}),
/// ];
///
/// let found = Search::new("ada").field("name").filter(&people);
/// assert_eq!(found.len(), 1);
///
/// // Every token must match some field.
/// let found = Search::new("alan, a2").field("name").exact("id").filter(&people);
/// assert_eq!(found, [&people[1]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Search {
    tokens: Vec<String>,
    fields: Vec<FieldSpec>,
}

impl Search {
    /// Creates a search for the given query with no fields yet.
    pub fn new(query: &str) -> Self {
        Search {
            tokens: tokenize(query),
            fields: Vec::new(),
        }
    }

    /// Creates a search from an optional query. `None` is the empty query.
    pub fn from_query(query: Option<&str>) -> Self {
        Search::new(query.unwrap_or_default())
    }

    /// Adds a field key (`"path"` or `"path:exact"`).
    pub fn field(mut self, key: &str) -> Self {
        self.fields.push(FieldSpec::parse(key));
        self
    }

    /// Adds an exact-matching field.
    pub fn exact(mut self, path: &str) -> Self {
        self.fields.push(FieldSpec::exact(path));
        self
    }

    /// Adds several field keys.
    pub fn keys(mut self, keys: impl Into<Keys>) -> Self {
        self.fields
            .extend(keys.into().iter().map(FieldSpec::parse));
        self
    }

    /// Adds an already parsed field spec.
    pub fn field_spec(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Returns the query tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the field specs.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns `true` if the query has no content.
    ///
    /// A blank query matches every record that has at least one field to
    /// search. Callers that want "no query, no filtering" semantics can
    /// check this first.
    pub fn is_blank(&self) -> bool {
        self.tokens.iter().all(String::is_empty)
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single record matches.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.matches_with(record, T::accessor)
    }

    /// Tests if a single record matches, reading fields through an accessor.
    pub fn matches_with<T, F>(&self, record: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let texts: Vec<String> = self
            .fields
            .iter()
            .map(|spec| accessor(record, &spec.path).to_string().to_lowercase())
            .collect();

        self.tokens.iter().all(|token| {
            self.fields
                .iter()
                .zip(&texts)
                .any(|(spec, text)| spec.modifier.matches(text, token))
        })
    }

    /// Filters a slice, returning references to matching records in input
    /// order.
    pub fn filter<'a, T: Record>(&self, records: &'a [T]) -> Vec<&'a T> {
        self.filter_with(records, T::accessor)
    }

    /// Filters a slice, reading fields through an accessor.
    pub fn filter_with<'a, T, F>(&self, records: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        debug!(
            records = records.len(),
            tokens = ?self.tokens,
            fields = self.fields.len(),
            "searching records"
        );

        let results: Vec<&'a T> = records
            .iter()
            .enumerate()
            .filter(|(index, record)| {
                let keep = self.matches_with(*record, &accessor);
                if !keep {
                    trace!(index, "record rejected by search");
                }
                keep
            })
            .map(|(_, record)| record)
            .collect();

        debug!(matched = results.len(), "search finished");
        results
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<T: Record + Clone>(&self, records: &[T]) -> Vec<T> {
        self.filter(records).into_iter().cloned().collect()
    }

    /// Counts the matching records.
    pub fn count<T: Record>(&self, records: &[T]) -> usize {
        records.iter().filter(|record| self.matches(*record)).count()
    }
}

/// Returns the records where every query token matches at least one key.
///
/// ```
/// use collate::search;
/// use serde_json::json;
///
/// let rows = vec![json!({"name": "Foo Bar"}), json!({"name": "Baz"})];
/// assert_eq!(search(&rows, "foo", "name"), [&rows[0]]);
/// assert_eq!(search(&rows, "foo", "name:exact").len(), 0);
/// assert_eq!(search(&rows, "baz", "name:exact"), [&rows[1]]);
/// ```
pub fn search<'a, T: Record>(records: &'a [T], query: &str, keys: impl Into<Keys>) -> Vec<&'a T> {
    Search::new(query).keys(keys).filter(records)
}

/// Searches records, reading fields through an accessor.
pub fn search_with<'a, T, F>(
    records: &'a [T],
    query: &str,
    keys: impl Into<Keys>,
    accessor: F,
) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    Search::new(query).keys(keys).filter_with(records, accessor)
}
