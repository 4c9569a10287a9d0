//! Field-path access into records.
//!
//! The [`Record`] trait is the field reader the sorter and search filter
//! depend on. It is implemented for `serde_json` documents, where paths are
//! dotted (`owner.name`, `tags.0`), and for [`Value`] itself. Any other type
//! can implement it by hand or be used through an accessor closure.

use serde_json::{Map, Value as Json};

use crate::error::Result;
use crate::value::Value;

/// Trait for records that can be sorted and searched by field path.
///
/// # Manual Implementation
///
/// ```
/// use collate::{Record, Value};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Record for Task {
///     fn field(&self, path: &str) -> Value<'_> {
///         match path {
///             "name" => Value::from(self.name.as_str()),
///             "priority" => Value::from(self.priority),
///             _ => Value::Undefined,
///         }
///     }
/// }
///
/// let task = Task { name: "Write docs".into(), priority: 3 };
/// assert_eq!(task.field("priority"), Value::from(3u8));
/// assert!(task.field("owner").is_undefined());
/// ```
pub trait Record {
    /// Resolves a field path to a value.
    ///
    /// Missing paths resolve to [`Value::Undefined`]; this never fails.
    fn field(&self, path: &str) -> Value<'_>;

    /// Returns a static accessor function suitable for the `*_with` entry
    /// points.
    fn accessor<'a>(item: &'a Self, path: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field(path)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, path: &str) -> Value<'_> {
        (**self).field(path)
    }
}

impl Record for Json {
    fn field(&self, path: &str) -> Value<'_> {
        lookup(self, path).map_or(Value::Undefined, Value::from)
    }
}

impl Record for Map<String, Json> {
    fn field(&self, path: &str) -> Value<'_> {
        if path.is_empty() {
            return Value::Object(
                self.iter()
                    .map(|(k, v)| (k.as_str(), Value::from(v)))
                    .collect(),
            );
        }
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let Some(child) = self.get(head) else {
            return Value::Undefined;
        };
        match rest {
            Some(rest) => child.field(rest),
            None => Value::from(child),
        }
    }
}

impl<'v> Record for Value<'v> {
    fn field(&self, path: &str) -> Value<'_> {
        if path.is_empty() {
            return self.clone();
        }
        path.split('.')
            .try_fold(self, |node, segment| match node {
                Value::Object(_) => node.member(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
            .cloned()
            .unwrap_or(Value::Undefined)
    }
}

/// Resolves a dotted path inside a JSON document.
///
/// Objects are entered by key and arrays by decimal index. The empty path
/// resolves to the document itself.
///
/// ```
/// use collate::lookup;
/// use serde_json::json;
///
/// let doc = json!({"owner": {"name": "ana"}, "tags": ["x", "y"]});
/// assert_eq!(lookup(&doc, "owner.name"), Some(&json!("ana")));
/// assert_eq!(lookup(&doc, "tags.1"), Some(&json!("y")));
/// assert_eq!(lookup(&doc, "owner.email"), None);
/// ```
pub fn lookup<'a>(root: &'a Json, path: &str) -> Option<&'a Json> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |node, segment| match node {
        Json::Object(map) => map.get(segment),
        Json::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Parses JSON text into a list of records.
///
/// A top-level array yields its elements; any other document becomes a
/// single record.
///
/// ```
/// let records = collate::load_records(r#"[{"a": 1}, {"a": 2}]"#).unwrap();
/// assert_eq!(records.len(), 2);
/// assert!(collate::load_records("{not json").is_err());
/// ```
pub fn load_records(text: &str) -> Result<Vec<Json>> {
    match serde_json::from_str(text)? {
        Json::Array(items) => Ok(items),
        other => Ok(vec![other]),
    }
}
