use axum::Router;
use axum_helpers::{create_cors_layer, create_router, health_router};
use domain_products::{ProductService, handlers};
use std::io;

use crate::config::Config;
use crate::openapi::ApiDoc;

/// Mount point of the product routes.
pub const PRODUCT_PATH: &str = "/product";

/// Domain routes with their state already applied.
pub fn routes() -> Router {
    Router::new().nest(PRODUCT_PATH, handlers::router(ProductService::new()))
}

/// Full application: domain routes, docs, middleware and `/health`.
pub fn app(config: &Config) -> io::Result<Router> {
    let cors = create_cors_layer(&config.cors, &config.environment)?;

    Ok(create_router::<ApiDoc>(routes(), cors).merge(health_router(config.app)))
}
