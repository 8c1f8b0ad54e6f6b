//! Server infrastructure: router assembly with API docs, the health
//! endpoint and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, cors_layer)
//!     .merge(health_router(core_config::app_info!()));
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_app, create_router, serve};
pub use health::{HealthResponse, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
