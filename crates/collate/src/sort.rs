//! Multi-key sorting of record collections.
//!
//! The [`Sorter`] provides a fluent builder for ordering records by one or
//! more field paths; [`sort_by`] is the one-call form.

use std::cmp::Ordering;

use tracing::debug;

use crate::compare::compare_with;
use crate::directive::{parse_field, Keys, SortDirective};
use crate::natural::sortable_numeric_suffix;
use crate::options::SortOptions;
use crate::record::Record;
use crate::value::Value;

/// A reusable multi-key sort.
///
/// Keys are compared in order; the first key whose values differ decides
/// the pair. A descending sorter flips every key's result, and a key parsed
/// from `"path:desc"` flips its own result again, so the two cancel out.
///
/// The sort is stable: records that tie on every key keep their input order.
///
/// # Example
///
/// ```
/// use collate::Sorter;
/// use serde_json::json;
///
/// let people = vec![
///     json!({"name": "Cleo", "team": "b"}),
///     json!({"name": "Ana", "team": "b"}),
///     json!({"name": "Bo", "team": "a"}),
/// ];
///
/// let sorted = Sorter::new().key("team").key("name:desc").sort(&people);
/// let names: Vec<_> = sorted.iter().map(|p| p["name"].as_str().unwrap()).collect();
/// assert_eq!(names, ["Bo", "Cleo", "Ana"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    directives: Vec<SortDirective>,
    descending: bool,
    options: SortOptions,
}

impl Sorter {
    /// Creates a sorter with no keys. It leaves any input order unchanged.
    pub fn new() -> Self {
        Sorter::default()
    }

    /// Adds a sort key token (`"path"` or `"path:desc"`).
    pub fn key(mut self, token: &str) -> Self {
        self.directives.push(parse_field(token));
        self
    }

    /// Adds several sort key tokens.
    pub fn keys(mut self, keys: impl Into<Keys>) -> Self {
        self.directives.extend(keys.into().directives());
        self
    }

    /// Adds an already parsed directive.
    pub fn directive(mut self, directive: SortDirective) -> Self {
        self.directives.push(directive);
        self
    }

    /// Flips the direction of every key.
    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    /// Replaces the sort options.
    pub fn options(mut self, options: SortOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the parsed directives.
    pub fn directives(&self) -> &[SortDirective] {
        &self.directives
    }

    /// Returns `true` if the sorter flips every key.
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Returns the sort options.
    pub fn get_options(&self) -> &SortOptions {
        &self.options
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compares two records.
    pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
        self.compare_with(a, b, T::accessor)
    }

    /// Compares two records through an accessor function.
    pub fn compare_with<T, F>(&self, a: &T, b: &T, accessor: F) -> Ordering
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let keys_a = self.resolve(a, &accessor);
        let keys_b = self.resolve(b, &accessor);
        self.compare_keys(&keys_a, &keys_b)
    }

    fn resolve<'a, T, F>(&self, record: &'a T, accessor: &F) -> Vec<Value<'a>>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.directives
            .iter()
            .map(|directive| {
                let value = accessor(record, &directive.path);
                if self.options.natural {
                    sortable_numeric_suffix(value)
                } else {
                    value
                }
            })
            .collect()
    }

    fn compare_keys(&self, a: &[Value<'_>], b: &[Value<'_>]) -> Ordering {
        for ((directive, value_a), value_b) in self.directives.iter().zip(a).zip(b) {
            let ordering = compare_with(value_a, value_b, &self.options.compare);
            if ordering != Ordering::Equal {
                let ordering = if self.descending {
                    ordering.reverse()
                } else {
                    ordering
                };
                return directive.apply(ordering);
            }
        }
        Ordering::Equal
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Sorts records, returning references in the new order.
    pub fn sort<'a, T: Record>(&self, records: &'a [T]) -> Vec<&'a T> {
        self.sort_with(records, T::accessor)
    }

    /// Sorts records through an accessor function.
    ///
    /// Each record's key values are resolved once, then the decorated
    /// records are sorted.
    pub fn sort_with<'a, T, F>(&self, records: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        debug!(
            records = records.len(),
            keys = self.directives.len(),
            descending = self.descending,
            natural = self.options.natural,
            "sorting records"
        );

        if self.directives.is_empty() {
            return records.iter().collect();
        }

        let mut decorated: Vec<(Vec<Value<'a>>, &'a T)> = records
            .iter()
            .map(|record| (self.resolve(record, &accessor), record))
            .collect();
        decorated.sort_by(|(keys_a, _), (keys_b, _)| self.compare_keys(keys_a, keys_b));
        decorated.into_iter().map(|(_, record)| record).collect()
    }

    /// Sorts and clones records.
    pub fn sort_cloned<T: Record + Clone>(&self, records: &[T]) -> Vec<T> {
        self.sort(records).into_iter().cloned().collect()
    }

    /// Sorts a slice in place.
    ///
    /// Key values are resolved per comparison rather than cached.
    pub fn sort_in_place<T: Record>(&self, records: &mut [T]) {
        debug!(
            records = records.len(),
            keys = self.directives.len(),
            "sorting records in place"
        );
        if !self.directives.is_empty() {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }
}

/// Sorts records by one or more key tokens.
///
/// `desc` flips every key; a `"path:desc"` key flips again.
///
/// ```
/// use collate::sort_by;
/// use serde_json::json;
///
/// let rows = vec![json!({"a": 2}), json!({"a": 1}), json!({"a": 3})];
/// let values = |sorted: Vec<&serde_json::Value>| -> Vec<i64> {
///     sorted.iter().map(|r| r["a"].as_i64().unwrap()).collect()
/// };
///
/// assert_eq!(values(sort_by(&rows, "a", false)), [1, 2, 3]);
/// assert_eq!(values(sort_by(&rows, "a:desc", false)), [3, 2, 1]);
/// assert_eq!(values(sort_by(&rows, "a:desc", true)), [1, 2, 3]);
/// ```
pub fn sort_by<'a, T: Record>(
    records: &'a [T],
    keys: impl Into<Keys>,
    desc: bool,
) -> Vec<&'a T> {
    Sorter::new().keys(keys).descending(desc).sort(records)
}

/// Sorts records by key tokens through an accessor function.
pub fn sort_by_with<'a, T, F>(
    records: &'a [T],
    keys: impl Into<Keys>,
    desc: bool,
    accessor: F,
) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    Sorter::new()
        .keys(keys)
        .descending(desc)
        .sort_with(records, accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as Json};

    fn field(rows: &[&Json], name: &str) -> Vec<Json> {
        rows.iter().map(|r| r[name].clone()).collect()
    }

    #[test]
    fn empty_input() {
        let rows: Vec<Json> = vec![];
        assert!(sort_by(&rows, "a", false).is_empty());
    }

    #[test]
    fn ascending_and_descending() {
        let rows = vec![json!({"a": 2}), json!({"a": 1}), json!({"a": 3})];
        assert_eq!(
            field(&sort_by(&rows, "a", false), "a"),
            [json!(1), json!(2), json!(3)]
        );
        assert_eq!(
            field(&sort_by(&rows, "a:desc", false), "a"),
            [json!(3), json!(2), json!(1)]
        );
        assert_eq!(
            field(&sort_by(&rows, "a", true), "a"),
            [json!(3), json!(2), json!(1)]
        );
        assert_eq!(
            field(&sort_by(&rows, "a:desc", true), "a"),
            [json!(1), json!(2), json!(3)]
        );
    }

    #[test]
    fn ties_fall_through_to_next_key() {
        let rows = vec![json!({"a": 1, "b": 2}), json!({"a": 1, "b": 1})];
        let sorted = sort_by(&rows, ["a", "b"], false);
        assert_eq!(field(&sorted, "b"), [json!(1), json!(2)]);
    }

    #[test]
    fn missing_values_sort_first() {
        let rows = vec![json!({"a": 1}), json!({}), json!({"a": null})];
        let sorted = sort_by(&rows, "a", false);
        assert_eq!(sorted[0], &json!({}));
        assert_eq!(sorted[1], &json!({"a": null}));
        assert_eq!(sorted[2], &json!({"a": 1}));
    }

    #[test]
    fn mixed_kinds_follow_precedence() {
        let rows = vec![
            json!({"v": "text"}),
            json!({"v": [1]}),
            json!({"v": 10}),
            json!({"v": true}),
            json!({"v": {"k": 1}}),
        ];
        let sorted = sort_by(&rows, "v", false);
        assert_eq!(
            field(&sorted, "v"),
            [json!(true), json!(10), json!("text"), json!([1]), json!({"k": 1})]
        );
    }

    #[test]
    fn empty_keys_keep_order() {
        let rows = vec![json!({"a": 2}), json!({"a": 1})];
        let sorted = sort_by(&rows, Vec::<String>::new(), false);
        assert_eq!(field(&sorted, "a"), [json!(2), json!(1)]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let rows = vec![
            json!({"k": 1, "id": "first"}),
            json!({"k": 0, "id": "x"}),
            json!({"k": 1, "id": "second"}),
        ];
        let sorted = sort_by(&rows, "k", false);
        assert_eq!(
            field(&sorted, "id"),
            [json!("x"), json!("first"), json!("second")]
        );
    }

    #[test]
    fn natural_option() {
        let rows = vec![json!({"n": "item10"}), json!({"n": "item2"})];
        let plain = Sorter::new().key("n").sort(&rows);
        assert_eq!(field(&plain, "n"), [json!("item10"), json!("item2")]);

        let natural = Sorter::new()
            .key("n")
            .options(SortOptions::new().natural(true))
            .sort(&rows);
        assert_eq!(field(&natural, "n"), [json!("item2"), json!("item10")]);
    }

    fn word<'a>(w: &'a &str, _path: &str) -> Value<'a> {
        Value::from(*w)
    }

    #[test]
    fn accessor_function() {
        let words = vec!["pear", "Apple", "fig"];
        let sorted = sort_by_with(&words, "", false, word);
        assert_eq!(sorted, [&"Apple", &"fig", &"pear"]);
    }

    #[test]
    fn sort_in_place_matches_sort() {
        let mut rows = vec![json!({"a": 3}), json!({"a": 1}), json!({"a": 2})];
        let sorter = Sorter::new().key("a:desc");
        let expected = sorter.sort_cloned(&rows);
        sorter.sort_in_place(&mut rows);
        assert_eq!(rows, expected);
    }

    #[test]
    fn compare_records() {
        let sorter = Sorter::new().keys(["a", "b:desc"]);
        let x = json!({"a": 1, "b": 1});
        let y = json!({"a": 1, "b": 2});
        assert_eq!(sorter.compare(&x, &y), Ordering::Greater);
        assert_eq!(sorter.compare(&x, &x), Ordering::Equal);
        assert_eq!(sorter.directives().len(), 2);
    }
}
