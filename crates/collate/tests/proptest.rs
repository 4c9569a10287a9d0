//! Property-based tests for collate using proptest.

use std::cmp::Ordering;

use collate::{
    compare, natural_key, search, sort_by, Kind, Record, Search, SortOptions, Sorter, Timestamp,
    Value,
};
use proptest::prelude::*;
use serde_json::{json, Value as Json};

// ============================================================================
// Test helpers
// ============================================================================

fn leaf_strategy() -> impl Strategy<Value = Value<'static>> {
    let nothing = prop_oneof![Just(Value::Undefined), Just(Value::Null)];
    let number = prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        Just(Value::from(f64::NAN)),
    ];
    let instance = prop_oneof![
        "[a-z]{0,5}".prop_map(|msg| Value::Error(msg.into())),
        "[a-z+*]{0,5}".prop_map(|src| Value::RegExp(src.into())),
        Just(Value::Function("handler")),
        Just(Value::Opaque("FileList")),
    ];
    prop_oneof![
        nothing,
        any::<bool>().prop_map(Value::Bool),
        number,
        "[a-zA-Z0-9é ]{0,8}".prop_map(Value::from),
        any::<i64>().prop_map(|ms| Value::Date(Timestamp(ms))),
        instance,
    ]
}

fn value_strategy() -> impl Strategy<Value = Value<'static>> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(inner, 0..3)
                .prop_map(|values| Value::Object(values.into_iter().map(|v| ("k", v)).collect())),
        ]
    })
}

// Records with a stable id plus fields of mixed shape.
fn records_strategy() -> impl Strategy<Value = Vec<Json>> {
    prop::collection::vec(
        (
            "[a-zA-Z ]{0,10}",
            prop::option::of(any::<i32>()),
            prop_oneof![
                Just(Json::Null),
                any::<bool>().prop_map(Json::from),
                any::<i32>().prop_map(Json::from),
                "[a-z]{0,4}".prop_map(Json::from),
            ],
        ),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (name, rank, mixed))| {
                let mut row = json!({"id": id, "name": name, "mixed": mixed});
                if let Some(rank) = rank {
                    row["rank"] = json!(rank);
                }
                row
            })
            .collect()
    })
}

fn ids(rows: &[&Json]) -> Vec<u64> {
    rows.iter().filter_map(|r| r["id"].as_u64()).collect()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Comparing in the other direction reverses the result.
    #[test]
    fn compare_is_antisymmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    /// Every value is equal to itself, NaN included.
    #[test]
    fn compare_is_reflexive(a in value_strategy()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    /// Values of different kinds are ordered by kind precedence alone.
    #[test]
    fn cross_kind_follows_precedence(a in value_strategy(), b in value_strategy()) {
        let (kind_a, kind_b): (Kind, Kind) = (a.kind(), b.kind());
        prop_assume!(kind_a != kind_b);
        prop_assert_eq!(compare(&a, &b), kind_a.precedence().cmp(&kind_b.precedence()));
    }

    /// Sorting with the comparator yields a consistent total order.
    #[test]
    fn sorted_values_are_pairwise_ordered(
        mut values in prop::collection::vec(value_strategy(), 0..24),
    ) {
        values.sort_by(compare);
        for i in 0..values.len() {
            for j in i + 1..values.len() {
                prop_assert_ne!(compare(&values[i], &values[j]), Ordering::Greater);
            }
        }
    }

    /// Sorting returns every record exactly once.
    #[test]
    fn sort_is_a_permutation(rows in records_strategy(), desc in any::<bool>()) {
        let sorted = sort_by(&rows, ["mixed", "rank:desc", "name"], desc);
        let mut seen = ids(&sorted);
        seen.sort_unstable();
        let expected: Vec<u64> = (0..rows.len() as u64).collect();
        prop_assert_eq!(seen, expected);
    }

    /// Adjacent records are ordered by the key, in the requested direction.
    #[test]
    fn sort_orders_adjacent_records(rows in records_strategy(), desc in any::<bool>()) {
        let sorted = sort_by(&rows, "rank", desc);
        for pair in sorted.windows(2) {
            let ordering = compare(&pair[0].field("rank"), &pair[1].field("rank"));
            let wrong = if desc { Ordering::Less } else { Ordering::Greater };
            prop_assert_ne!(ordering, wrong);
        }
    }

    /// Sorting already sorted records changes nothing.
    #[test]
    fn sort_is_idempotent(rows in records_strategy()) {
        let sorter = Sorter::new().keys(["mixed:desc", "name"]);
        let once = sorter.sort_cloned(&rows);
        let twice = sorter.sort_cloned(&once);
        prop_assert_eq!(once, twice);
    }

    /// Records that tie on every key keep their input order.
    #[test]
    fn sort_is_stable(rows in records_strategy()) {
        let sorted = sort_by(&rows, "mixed", false);
        for pair in sorted.windows(2) {
            if compare(&pair[0].field("mixed"), &pair[1].field("mixed")) == Ordering::Equal {
                prop_assert!(pair[0]["id"].as_u64() < pair[1]["id"].as_u64());
            }
        }
    }

    /// Natural keys agree with numeric order for up to ten digits.
    #[test]
    fn natural_key_preserves_numeric_order(a in any::<u32>(), b in any::<u32>()) {
        let key_a = natural_key(&format!("item{}", a));
        let key_b = natural_key(&format!("item{}", b));
        prop_assert_eq!(key_a.cmp(&key_b), a.cmp(&b));
    }

    /// Natural sorting orders by the embedded number.
    #[test]
    fn natural_sort_orders_numbers(numbers in prop::collection::vec(0u32..100_000, 0..20)) {
        let rows: Vec<Json> = numbers.iter().map(|n| json!({"name": format!("v{}", n)})).collect();
        let sorted = Sorter::new()
            .key("name")
            .options(SortOptions::new().natural(true))
            .sort(&rows);
        let got: Vec<u32> = sorted
            .iter()
            .filter_map(|r| r["name"].as_str()?.trim_start_matches('v').parse().ok())
            .collect();
        let mut expected = numbers.clone();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    /// Search never returns more records than it is given, and keeps their order.
    #[test]
    fn search_is_an_ordered_subset(rows in records_strategy(), query in "[a-z ,]{0,6}") {
        let found = search(&rows, &query, ["name", "mixed"]);
        prop_assert!(found.len() <= rows.len());
        let found_ids = ids(&found);
        prop_assert!(found_ids.windows(2).all(|w| w[0] < w[1]));
    }

    /// A record matching several tokens matches each token on its own.
    #[test]
    fn search_tokens_are_conjunctive(
        rows in records_strategy(),
        first in "[a-z]{1,2}",
        second in "[a-z]{1,2}",
    ) {
        let keys = ["name", "mixed"];
        let both = ids(&search(&rows, &format!("{} {}", first, second), keys));
        let only_first = ids(&search(&rows, &first, keys));
        let only_second = ids(&search(&rows, &second, keys));
        for id in &both {
            prop_assert!(only_first.contains(id));
            prop_assert!(only_second.contains(id));
        }
    }

    /// Exact matches are a subset of substring matches.
    #[test]
    fn exact_implies_contains(rows in records_strategy(), query in "[a-z]{0,3}") {
        let exact = ids(&search(&rows, &query, "mixed:exact"));
        let contains = ids(&search(&rows, &query, "mixed"));
        for id in &exact {
            prop_assert!(contains.contains(id));
        }
    }

    /// Count agrees with the filtered length.
    #[test]
    fn count_equals_filter_len(rows in records_strategy(), query in "[a-z ]{0,4}") {
        let finder = Search::new(&query).keys(["name", "mixed:exact"]);
        prop_assert_eq!(finder.count(&rows), finder.filter(&rows).len());
    }

    /// A blank query keeps every record when there is a field to search.
    #[test]
    fn blank_query_matches_all(rows in records_strategy(), blank in "[ ,]{0,3}") {
        prop_assert_eq!(search(&rows, &blank, "name").len(), rows.len());
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_collection_returns_empty() {
    let rows: Vec<Json> = Vec::new();
    assert!(sort_by(&rows, ["a", "b:desc"], true).is_empty());
    assert!(search(&rows, "x", "a").is_empty());
}

#[test]
fn sorting_with_nan_does_not_panic() {
    let rows = vec![
        json!({"v": 1.5}),
        json!({"v": "s"}),
        json!({"v": 0}),
        json!({"v": null}),
    ];
    let mut values: Vec<Value<'_>> = rows.iter().map(|r| r.field("v")).collect();
    values.push(Value::from(f64::NAN));
    values.push(Value::from(f64::NAN));
    values.sort_by(compare);
    assert!(values[0].is_null());
    assert!(values[1].as_number().is_some_and(|n| n.is_nan()));
    assert!(values[2].as_number().is_some_and(|n| n.is_nan()));
    assert_eq!(values[5], Value::from("s"));
}
