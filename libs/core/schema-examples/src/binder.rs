use crate::SchemaDocument;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Suffix appended to a property name to form its example key.
pub const EXAMPLE_SUFFIX: &str = "Example";

/// Returns the lookup key for a property, e.g. `title` → `titleExample`.
pub fn example_key(property: &str) -> String {
    format!("{property}{EXAMPLE_SUFFIX}")
}

/// Example values keyed by `"<name>Example"`.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleMap(Map<String, Value>);

impl ExampleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Example registered for `property` under the `<property>Example` key.
    pub fn example_for(&self, property: &str) -> Option<&Value> {
        self.get(&example_key(property))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ExampleMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Sets `example` on every property of the first schema document.
///
/// Documents after the first are never touched: callers build one bundle per
/// call, so the list always has a single element in practice. A property with
/// no registered example gets `"example": null`. An empty list is a no-op.
pub fn bind_examples(schemas: &mut [SchemaDocument], examples: &ExampleMap) {
    bind_examples_at(schemas, 0, examples);
}

/// Same as [`bind_examples`] for the document at `index`.
///
/// Out-of-range indexes and documents without a `properties` object are
/// left alone.
pub fn bind_examples_at(schemas: &mut [SchemaDocument], index: usize, examples: &ExampleMap) {
    let Some(properties) = schemas
        .get_mut(index)
        .and_then(|schema| schema.get_mut("properties"))
        .and_then(Value::as_object_mut)
    else {
        return;
    };

    for (id, property) in properties.iter_mut() {
        let Value::Object(descriptor) = property else {
            debug!(property = %id, "skipping non-object property descriptor");
            continue;
        };

        let example = match examples.example_for(id) {
            Some(value) => value.clone(),
            None => {
                debug!(property = %id, key = %example_key(id), "no example registered");
                Value::Null
            }
        };

        descriptor.insert("example".to_string(), example);
    }
}
