use super::shutdown::{ShutdownCoordinator, shutdown_signal};
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security::security_headers;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Wraps `apis` with documentation UIs and cross-cutting middleware.
///
/// Adds:
/// - `GET /api-docs/openapi.json` plus Redoc (`/redoc`), RapiDoc (`/rapidoc`)
///   and Scalar (`/scalar`)
/// - JSON 404 / 405 fallbacks
/// - request tracing, security headers and the given CORS layer
///
/// `apis` is merged at the root, so its paths are served as declared.
pub fn create_router<T>(apis: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();

    Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get({
                let openapi = openapi.clone();
                move || async move { Json(openapi) }
            }),
        )
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", openapi))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
}

/// Binds the configured address and serves until SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve(
        listener,
        router,
        shutdown_signal(),
        server_config.shutdown_timeout,
    )
    .await
}

/// Serves `router` on `listener` until `signal` resolves, then drains
/// in-flight requests for at most `drain_timeout`.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    signal: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let coordinator = ShutdownCoordinator::new();
    let mut stop = coordinator.subscribe();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = stop.recv().await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            return result.map_err(io::Error::other)?.inspect_err(|e| {
                tracing::error!("Server encountered an error: {:?}", e);
            });
        }
        _ = signal => coordinator.shutdown(),
    }

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(result) => {
            result.map_err(io::Error::other)??;
            info!("Server stopped");
            Ok(())
        }
        Err(_) => {
            tracing::warn!(
                "In-flight requests exceeded drain timeout of {:?}, forcing shutdown",
                drain_timeout
            );
            server.abort();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test api"))]
    struct TestDoc;

    fn app() -> Router {
        let apis = Router::new().route("/ping", post(|| async { "pong" }));
        create_router::<TestDoc>(apis, CorsLayer::new())
    }

    #[tokio::test]
    async fn test_serves_openapi_document() {
        let response = app()
            .oneshot(Request::get(OPENAPI_JSON_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["info"]["title"], "test api");
    }

    #[tokio::test]
    async fn test_unknown_path_returns_json_404_with_security_headers() {
        let response = app()
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["code"], 1004);
        assert_eq!(body["message"], "No route for /missing");
    }

    #[tokio::test]
    async fn test_wrong_method_returns_405() {
        let response = app()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_serve_stops_when_signal_resolves() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        let result = serve(
            listener,
            Router::new(),
            async {},
            Duration::from_secs(1),
        )
        .await;

        assert!(result.is_ok());
    }
}
