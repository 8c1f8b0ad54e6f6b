use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::models::{CreateProduct, Product, ProductType};

/// Product operations. Nothing is stored: creation echoes the input with
/// generated fields and lookups return a fixed record.
#[derive(Debug, Clone, Default)]
pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        Self
    }

    /// Builds a product from an already validated request.
    pub fn create_product(&self, input: CreateProduct) -> Product {
        let product = Product::new(input);

        info!(
            product_id = %product.id,
            product_type = %product.product_type,
            "Product created."
        );

        product
    }

    /// Returns the placeholder product for `id`.
    pub fn get_product(&self, id: Uuid) -> Product {
        info!("Fetching product( {} )...", id);

        let now = Utc::now();
        Product {
            id,
            title: "super product".to_string(),
            price: 1000.0,
            content: Some(Some("some content".to_string())),
            product_type: ProductType::Game,
            sales_starts_at: now,
            sales_ends_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}
