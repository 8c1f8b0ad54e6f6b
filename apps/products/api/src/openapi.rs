use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(axum_helpers::server::health::health_handler),
    components(
        schemas(
            axum_helpers::ErrorResponse,
            axum_helpers::ErrorCode,
            axum_helpers::HealthResponse
        )
    ),
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product registration and lookup with example-annotated schemas"
    ),
    nest(
        (path = crate::api::PRODUCT_PATH, api = domain_products::ApiDoc)
    ),
    tags(
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_product_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/product"));
        assert!(paths.iter().any(|p| *p == "/product/{id}"));
        assert!(paths.iter().any(|p| *p == "/product/schemas"));
        assert!(paths.iter().any(|p| *p == "/health"));
    }

    #[test]
    fn test_openapi_registers_product_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;

        for name in ["Product", "CreateProduct", "ProductType", "ErrorResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
