//! CORS and origin allow-list enforcement.
//!
//! Two pieces work together:
//! - [`enforce_origin`] rejects requests whose `Origin` is not allowed before
//!   they reach any handler. Requests without an `Origin` header
//!   (server-to-server, curl) pass through.
//! - [`create_cors_layer`] adds the CORS response headers for allowed
//!   origins and answers preflight requests.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::cors::{Any, CorsLayer};

use crate::web::error::ApiError;
use crate::RelayError;

/// Wildcard entry that allows every origin.
pub const WILDCARD: &str = "*";

/// Origin allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Every origin is allowed.
    Any,
    /// Only the listed origins are allowed (exact match, trailing `/` ignored).
    List(Vec<String>),
}

impl OriginPolicy {
    /// Build a policy from configured origins. A `*` entry anywhere in the
    /// list turns the policy into [`OriginPolicy::Any`].
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.iter().any(|o| o.trim() == WILDCARD) {
            return OriginPolicy::Any;
        }
        OriginPolicy::List(
            origins
                .iter()
                .map(|o| normalize(o))
                .filter(|o| !o.is_empty())
                .collect(),
        )
    }

    /// Whether a request carrying this `Origin` value may proceed.
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            OriginPolicy::Any => true,
            OriginPolicy::List(list) => {
                let origin = normalize(origin);
                list.iter().any(|allowed| *allowed == origin)
            }
        }
    }
}

fn normalize(origin: &str) -> String {
    origin.trim().trim_end_matches('/').to_string()
}

/// Middleware rejecting requests from origins outside the policy.
pub async fn enforce_origin(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(value) = request.headers().get(ORIGIN) {
        let origin = value.to_str().unwrap_or_default();
        if !policy.allows(origin) {
            tracing::warn!(origin = %origin, path = %request.uri().path(), "Origin not allowed");
            return ApiError::from(RelayError::OriginNotAllowed(origin.to_string()))
                .into_response();
        }
    }

    next.run(request).await
}

/// Create a CORS layer for the given policy.
pub fn create_cors_layer(policy: &OriginPolicy) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    match policy {
        OriginPolicy::Any => CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any),
        OriginPolicy::List(origins) => {
            let parsed_origins: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();

            CorsLayer::new()
                .allow_methods(methods)
                .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
                .allow_origin(parsed_origins)
        }
    }
}
