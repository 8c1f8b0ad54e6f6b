//! Products Domain
//!
//! Request/response shapes for the product resource, their JSON schemas with
//! documentation examples, and the HTTP handlers.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /, GET /{id}, GET /schemas
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← generated fields, placeholder lookups
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │   Models    │ ──► │   Schema    │  ← named JSON schemas + examples
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, ProductService};
//!
//! let router = axum::Router::new().nest("/product", handlers::router(ProductService::new()));
//! ```

pub mod handlers;
pub mod models;
pub mod schema;
pub mod service;

pub use handlers::ApiDoc;
pub use models::{CreateProduct, GetProductParams, Product, ProductQuery, ProductType};
pub use schema::{build_product_schemas, product_schemas, schema_examples};
pub use service::ProductService;
