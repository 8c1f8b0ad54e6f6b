use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Upper bound accepted for `price`.
pub const MAX_PRICE: f64 = 900_000.0;

/// Price used when a create request omits it.
pub const DEFAULT_PRICE: f64 = 100.0;

fn default_price() -> f64 {
    DEFAULT_PRICE
}

/// Maps a present key to `Some`, so an explicit `null` survives as `Some(None)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Product category
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    ToSchema,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductType {
    Book,
    Movie,
    Game,
}

/// DTO for registering a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// Product name
    #[validate(length(min = 3, max = 50))]
    #[schema(min_length = 3, max_length = 50)]
    pub title: String,
    /// Price
    #[serde(default = "default_price")]
    #[validate(range(max = 900000.0))]
    #[schema(maximum = 900000.0, default = 100.0)]
    pub price: f64,
    /// Free-form description. `None` when the key is absent, `Some(None)` for `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub content: Option<Option<String>>,
    /// Product category
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Start of the sales window
    pub sales_starts_at: DateTime<Utc>,
    /// End of the sales window
    pub sales_ends_at: DateTime<Utc>,
}

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "Product response schema")]
pub struct Product {
    /// Product ID
    pub id: Uuid,
    /// Product name
    #[schema(min_length = 3, max_length = 50)]
    #[schemars(length(min = 3, max = 50))]
    pub title: String,
    /// Price
    #[schema(maximum = 900000.0)]
    #[schemars(range(max = 900000.0))]
    pub price: f64,
    /// Free-form description, omitted when the request left it out
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub content: Option<Option<String>>,
    /// Product category
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Start of the sales window
    pub sales_starts_at: DateTime<Utc>,
    /// End of the sales window
    pub sales_ends_at: DateTime<Utc>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Path parameters for fetching a single product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoParams, ToSchema, JsonSchema)]
#[into_params(parameter_in = Path)]
pub struct GetProductParams {
    /// Product ID
    pub id: Uuid,
}

/// Query filters for product searches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema, JsonSchema)]
pub struct ProductQuery {
    /// Product name
    #[validate(length(min = 3, max = 50))]
    #[schema(min_length = 3, max_length = 50)]
    pub title: Option<String>,
    /// Product categories
    #[serde(rename = "type")]
    pub product_type: Option<Vec<ProductType>>,
}

impl Product {
    /// Builds a product from a create request, generating `id` and timestamps.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            price: input.price,
            content: input.content,
            product_type: input.product_type,
            sales_starts_at: input.sales_starts_at,
            sales_ends_at: input.sales_ends_at,
            created_at: now,
            updated_at: now,
        }
    }
}
