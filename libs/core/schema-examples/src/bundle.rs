use crate::SchemaDocument;
use schemars::generate::{SchemaGenerator, SchemaSettings};
use schemars::JsonSchema;
use serde_json::{json, Map, Value};

/// Collects named schemas into a single JSON-Schema document.
///
/// The result has the shape
/// `{ "$id": <id>, "type": "object", "properties": { <name>: <schema>, ... } }`
/// with entries kept in insertion order. Subschemas are inlined so every
/// entry is self-contained.
///
/// ```
/// use schema_examples::SchemaBundle;
///
/// let schemas = SchemaBundle::new("scalarSchemas")
///     .add::<String>("nameSchema")
///     .add::<u32>("countSchema")
///     .build();
///
/// assert_eq!(schemas.len(), 1);
/// assert_eq!(schemas[0]["$id"], "scalarSchemas");
/// assert_eq!(schemas[0]["properties"]["nameSchema"]["type"], "string");
/// ```
pub struct SchemaBundle {
    id: String,
    generator: SchemaGenerator,
    schemas: Map<String, Value>,
}

impl SchemaBundle {
    pub fn new(id: impl Into<String>) -> Self {
        let settings = SchemaSettings::draft07().with(|s| s.inline_subschemas = true);

        Self {
            id: id.into(),
            generator: settings.into_generator(),
            schemas: Map::new(),
        }
    }

    /// Generates the schema for `T` and stores it under `name`.
    pub fn add<T: JsonSchema>(mut self, name: impl Into<String>) -> Self {
        let mut schema = self.generator.root_schema_for::<T>().to_value();
        if let Some(object) = schema.as_object_mut() {
            object.remove("$schema");
        }
        self.schemas.insert(name.into(), schema);
        self
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Emits the bundle as a one-element document list.
    pub fn build(self) -> Vec<SchemaDocument> {
        vec![json!({
            "$id": self.id,
            "type": "object",
            "properties": Value::Object(self.schemas),
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[allow(dead_code)]
    #[derive(Deserialize, JsonSchema)]
    enum Shade {
        Light,
        Dark,
    }

    #[allow(dead_code)]
    #[derive(Deserialize, JsonSchema)]
    struct Paint {
        name: String,
        shade: Shade,
    }

    #[test]
    fn test_bundle_keeps_insertion_order() {
        let schemas = SchemaBundle::new("bundle")
            .add::<String>("zeta")
            .add::<bool>("alpha")
            .build();

        let names: Vec<&String> = schemas[0]["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_bundle_inlines_nested_types() {
        let schemas = SchemaBundle::new("paints").add::<Paint>("paintSchema").build();
        let paint = &schemas[0]["properties"]["paintSchema"];

        assert!(paint.get("$schema").is_none());
        assert!(paint.get("definitions").is_none());
        assert!(paint["properties"]["shade"].get("$ref").is_none());
        assert_eq!(paint["properties"]["shade"]["enum"], json!(["Light", "Dark"]));
    }

    #[test]
    fn test_empty_bundle_has_empty_properties() {
        let bundle = SchemaBundle::new("nothing");
        assert!(bundle.is_empty());

        let schemas = bundle.build();
        assert_eq!(schemas[0]["properties"], json!({}));
    }
}
