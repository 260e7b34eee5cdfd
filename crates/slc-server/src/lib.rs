//! # slc-server
//!
//! HTTP transport for the classifier: JSON routes under `/api/v1`, caller
//! identity from a header or cookie, permissive CORS, request tracing.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod state;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use slc_core::config::SlcConfig;

pub use error::{ApiError, ServerError};
pub use identity::{IdentityConfig, UserId};
pub use state::AppState;

/// Assemble the full router for `state`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/init", post(handlers::init))
        .route("/classify", post(handlers::classify))
        .route("/feedback", post(handlers::feedback))
        .route("/state", get(handlers::snapshot))
        .route("/reset", post(handlers::reset))
        .route("/prop/add", post(handlers::add_property))
        .route("/prop/remove", post(handlers::remove_property))
        .route("/prop/move", post(handlers::move_property))
        .route("/prop/rename", post(handlers::rename_property))
        .route("/classes/rename", post(handlers::rename_class))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            identity::resolve_identity,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, state.identity().header.clone()]);

    Router::new()
        .nest("/api/v1", api)
        .route("/status", get(handlers::status))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn serve(config: SlcConfig) -> Result<(), ServerError> {
    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    let bind = config.server.effective_bind();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        addr = %local_addr,
        backend = ?config.storage.effective_backend(),
        "classifier listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutdown requested");
}
