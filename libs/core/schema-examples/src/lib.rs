//! Attach documentation examples to generated JSON schemas.
//!
//! Schemas are produced by [`SchemaBundle`] (one document whose `properties`
//! hold every named schema) and annotated by [`bind_examples`], which looks up
//! `"<name>Example"` in an [`ExampleMap`] for each property.
//!
//! ```
//! use schema_examples::{bind_examples, ExampleMap};
//! use serde_json::json;
//!
//! let mut schemas = vec![json!({ "properties": { "title": {}, "price": {} } })];
//! let examples = ExampleMap::new()
//!     .with("titleExample", json!("Widget"))
//!     .with("priceExample", json!(999));
//!
//! bind_examples(&mut schemas, &examples);
//!
//! assert_eq!(schemas[0]["properties"]["title"]["example"], json!("Widget"));
//! assert_eq!(schemas[0]["properties"]["price"]["example"], json!(999));
//! ```

pub mod binder;
pub mod bundle;

pub use binder::{bind_examples, bind_examples_at, example_key, ExampleMap, EXAMPLE_SUFFIX};
pub use bundle::SchemaBundle;

/// A generated JSON-Schema document.
pub type SchemaDocument = serde_json::Value;
