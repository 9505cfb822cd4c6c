//! Router configuration for Web API.

use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    health_check, send_email, send_email_function, send_reply, send_reply_function, AppState,
};
use super::middleware::{create_cors_layer, enforce_origin, OriginPolicy};
use crate::config::DeploymentMode;

/// Create the standalone-server router.
///
/// Only `POST` is registered for the email routes.
pub fn create_router(app_state: Arc<AppState>, policy: &OriginPolicy) -> Router {
    let api_routes = Router::new()
        .route("/send-email", post(send_email))
        .route("/send-reply", post(send_reply));

    let router = Router::new()
        .nest("/api", api_routes)
        .with_state(app_state)
        .merge(create_health_router());

    with_boundary_layers(router, policy)
}

/// Create the serverless-function router.
///
/// Every method reaches the handlers, which answer `405` for non-`POST`.
pub fn create_function_router(app_state: Arc<AppState>, policy: &OriginPolicy) -> Router {
    let router = Router::new()
        .route("/sendEmail", any(send_email_function))
        .route("/sendReplyEmail", any(send_reply_function))
        .with_state(app_state);

    with_boundary_layers(router, policy)
}

/// Create the router for the given deployment mode.
pub fn create_app(
    mode: DeploymentMode,
    app_state: Arc<AppState>,
    policy: &OriginPolicy,
) -> Router {
    match mode {
        DeploymentMode::Standalone => create_router(app_state, policy),
        DeploymentMode::Function => create_function_router(app_state, policy),
    }
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Tracing, then the origin guard, then CORS headers.
fn with_boundary_layers(router: Router, policy: &OriginPolicy) -> Router {
    let guard_policy = Arc::new(policy.clone());

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn_with_state(guard_policy, enforce_origin))
            .layer(create_cors_layer(policy)),
    )
}
