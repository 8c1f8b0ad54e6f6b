use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{BadRequestUuidResponse, BadRequestValidationResponse},
};
use schema_examples::SchemaDocument;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateProduct, GetProductParams, Product, ProductQuery, ProductType};
use crate::schema::product_schemas;
use crate::service::ProductService;

pub const TAG: &str = "product";

/// OpenAPI documentation for the product API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, get_product, get_product_schemas),
    components(
        schemas(Product, CreateProduct, ProductType, ProductQuery, GetProductParams),
        responses(BadRequestValidationResponse, BadRequestUuidResponse)
    ),
    tags(
        (name = TAG, description = "Product registration and lookup")
    )
)]
pub struct ApiDoc;

/// Product routes, relative to where the caller nests them.
pub fn router(service: ProductService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_product))
        .route("/schemas", get(get_product_schemas))
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// Register a product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 415, description = "Missing `Content-Type: application/json`")
    )
)]
async fn create_product(
    State(service): State<Arc<ProductService>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> impl IntoResponse {
    let product = service.create_product(input);
    (StatusCode::CREATED, Json(product))
}

/// Fetch a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(GetProductParams),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse)
    )
)]
async fn get_product(
    State(service): State<Arc<ProductService>>,
    UuidPath(id): UuidPath,
) -> Json<Product> {
    Json(service.get_product(id))
}

/// JSON schemas of the product API with examples
#[utoipa::path(
    get,
    path = "/schemas",
    tag = TAG,
    responses(
        (status = 200, description = "Example-annotated JSON schemas", body = Vec<serde_json::Value>)
    )
)]
async fn get_product_schemas() -> Json<&'static [SchemaDocument]> {
    Json(product_schemas())
}
