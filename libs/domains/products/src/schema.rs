//! Named JSON schemas for the product API, annotated with documentation
//! examples.
//!
//! Each schema registered in the `productSchemas` bundle gets its example from
//! the entry named `<schemaName>Example`.

use schema_examples::{ExampleMap, SchemaBundle, SchemaDocument, bind_examples, example_key};
use serde_json::{Value, json};
use std::sync::LazyLock;

use crate::models::{CreateProduct, GetProductParams, Product, ProductQuery};

pub const PRODUCT_SCHEMAS_ID: &str = "productSchemas";
pub const CREATE_PRODUCT_BODY_SCHEMA: &str = "createProductBodySchema";
pub const PRODUCT_RESPONSE_SCHEMA: &str = "productResponseSchema";
pub const GET_PRODUCT_PARAMS_SCHEMA: &str = "getProductParamsSchema";
pub const GET_PRODUCT_QUERY_SCHEMA: &str = "getProductQuerySchema";

/// The product every example is derived from.
pub fn example_product() -> Value {
    json!({
        "id": "c165ad23-2ac3-4d80-80d7-d7b6c3e526bd",
        "title": "何らかの製品A",
        "price": 10000.0,
        "content": "素晴らしい製品です",
        "type": "game",
        "salesStartsAt": "2022-01-01T00:00:00Z",
        "salesEndsAt": "2022-12-31T00:00:00Z",
        "createdAt": "2022-06-01T00:00:00Z",
        "updatedAt": "2022-06-01T00:00:00Z"
    })
}

fn pick(source: &Value, keys: &[&str]) -> Value {
    let picked = keys
        .iter()
        .filter_map(|key| source.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect::<serde_json::Map<_, _>>();
    Value::Object(picked)
}

/// Examples for every schema in the bundle, keyed `<schemaName>Example`.
pub fn schema_examples() -> ExampleMap {
    let product = example_product();

    ExampleMap::new()
        .with(
            example_key(CREATE_PRODUCT_BODY_SCHEMA),
            pick(
                &product,
                &["title", "price", "content", "type", "salesStartsAt", "salesEndsAt"],
            ),
        )
        .with(example_key(PRODUCT_RESPONSE_SCHEMA), product.clone())
        .with(example_key(GET_PRODUCT_PARAMS_SCHEMA), pick(&product, &["id"]))
        .with(
            example_key(GET_PRODUCT_QUERY_SCHEMA),
            json!({ "title": product["title"], "type": [product["type"]] }),
        )
}

/// Generates the bundle and binds [`schema_examples`] to it.
pub fn build_product_schemas() -> Vec<SchemaDocument> {
    let mut schemas = SchemaBundle::new(PRODUCT_SCHEMAS_ID)
        .add::<CreateProduct>(CREATE_PRODUCT_BODY_SCHEMA)
        .add::<Product>(PRODUCT_RESPONSE_SCHEMA)
        .add::<GetProductParams>(GET_PRODUCT_PARAMS_SCHEMA)
        .add::<ProductQuery>(GET_PRODUCT_QUERY_SCHEMA)
        .build();

    bind_examples(&mut schemas, &schema_examples());
    tracing::debug!(id = PRODUCT_SCHEMAS_ID, "product schemas generated");

    schemas
}

static PRODUCT_SCHEMAS: LazyLock<Vec<SchemaDocument>> = LazyLock::new(build_product_schemas);

/// Annotated product schemas, generated on first use.
pub fn product_schemas() -> &'static [SchemaDocument] {
    &PRODUCT_SCHEMAS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductType;
    use validator::Validate;

    fn properties() -> &'static serde_json::Map<String, Value> {
        product_schemas()[0]["properties"].as_object().unwrap()
    }

    #[test]
    fn test_bundle_lists_schemas_in_declaration_order() {
        let names: Vec<&str> = properties().keys().map(String::as_str).collect();
        assert_eq!(
            names,
            [
                CREATE_PRODUCT_BODY_SCHEMA,
                PRODUCT_RESPONSE_SCHEMA,
                GET_PRODUCT_PARAMS_SCHEMA,
                GET_PRODUCT_QUERY_SCHEMA
            ]
        );
        assert_eq!(product_schemas()[0]["$id"], PRODUCT_SCHEMAS_ID);
    }

    #[test]
    fn test_every_schema_has_its_example() {
        let examples = schema_examples();
        for (name, schema) in properties() {
            assert_eq!(
                Some(&schema["example"]),
                examples.example_for(name),
                "example for {name}"
            );
        }
    }

    #[test]
    fn test_create_example_is_a_valid_request() {
        let examples = schema_examples();
        let body = examples.example_for(CREATE_PRODUCT_BODY_SCHEMA).unwrap();
        let input: CreateProduct = serde_json::from_value(body.clone()).unwrap();

        assert!(input.validate().is_ok());
        assert_eq!(input.product_type, ProductType::Game);
    }

    #[test]
    fn test_response_example_matches_response_type() {
        let product: Product = serde_json::from_value(example_product()).unwrap();
        assert_eq!(product.price, 10_000.0);
        assert_eq!(product.id.to_string(), "c165ad23-2ac3-4d80-80d7-d7b6c3e526bd");
    }

    #[test]
    fn test_params_and_query_examples_deserialize() {
        let examples = schema_examples();

        let params: GetProductParams =
            serde_json::from_value(examples.example_for(GET_PRODUCT_PARAMS_SCHEMA).unwrap().clone())
                .unwrap();
        assert_eq!(params.id.to_string(), "c165ad23-2ac3-4d80-80d7-d7b6c3e526bd");

        let query: ProductQuery =
            serde_json::from_value(examples.example_for(GET_PRODUCT_QUERY_SCHEMA).unwrap().clone())
                .unwrap();
        assert_eq!(query.product_type, Some(vec![ProductType::Game]));
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_create_schema_carries_validation_rules() {
        let create = &properties()[CREATE_PRODUCT_BODY_SCHEMA];
        let fields = &create["properties"];

        assert_eq!(fields["title"]["minLength"], 3);
        assert_eq!(fields["title"]["maxLength"], 50);
        assert_eq!(fields["price"]["maximum"], 900000.0);
        assert_eq!(fields["price"]["default"], 100.0);
        assert_eq!(fields["type"]["enum"], json!(["book", "movie", "game"]));
    }
}
