use axum::http::{HeaderValue, Method, header};
use core_config::{Environment, cors::CorsConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer for the configured origins.
///
/// With no origins configured, development gets [`create_permissive_cors_layer`]
/// and production gets a layer that allows no cross-origin callers.
///
/// # Errors
/// Returns `InvalidInput` when an origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig, environment: &Environment) -> io::Result<CorsLayer> {
    if !config.is_configured() {
        if environment.is_production() {
            tracing::warn!("CORS_ALLOWED_ORIGIN not set, cross-origin requests will be refused");
            return Ok(CorsLayer::new());
        }
        tracing::debug!("CORS_ALLOWED_ORIGIN not set, allowing any origin in development");
        return Ok(create_permissive_cors_layer());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    tracing::info!(origins = ?config.allowed_origins, "CORS configured");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Allows any origin. Development only.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[test]
    fn test_configured_origins_build_layer() {
        let config = CorsConfig::new(["http://localhost:3000"]);
        assert!(create_cors_layer(&config, &Environment::Production).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = CorsConfig::new(["http://bad\norigin"]);
        let err = create_cors_layer(&config, &Environment::Development).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    async fn allowed_origin(layer: CorsLayer, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(layer);
        let request = Request::get("/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_unconfigured_development_allows_any_origin() {
        let layer = create_cors_layer(&CorsConfig::default(), &Environment::Development).unwrap();
        let allowed = allowed_origin(layer, "http://evil.example").await;
        assert_eq!(allowed.as_ref().map(|v| v.to_str().unwrap()), Some("*"));
    }

    #[tokio::test]
    async fn test_unconfigured_production_allows_no_origin() {
        let layer = create_cors_layer(&CorsConfig::default(), &Environment::Production).unwrap();
        assert!(allowed_origin(layer, "http://evil.example").await.is_none());
    }

    #[tokio::test]
    async fn test_configured_origins_only_echo_listed_origin() {
        let config = CorsConfig::new(["http://localhost:3000"]);

        let layer = create_cors_layer(&config, &Environment::Production).unwrap();
        let allowed = allowed_origin(layer, "http://localhost:3000").await;
        assert_eq!(
            allowed.as_ref().map(|v| v.to_str().unwrap()),
            Some("http://localhost:3000")
        );

        let layer = create_cors_layer(&config, &Environment::Production).unwrap();
        assert!(allowed_origin(layer, "http://evil.example").await.is_none());
    }
}
