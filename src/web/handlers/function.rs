//! Serverless-function style handlers.
//!
//! Function platforms route every method to the same entry point, so these
//! handlers check the method themselves and answer `405` with the usual
//! envelope for anything but `POST`. The method check runs before the body is
//! looked at.

use axum::{extract::State, http::Method, Json};
use std::sync::Arc;

use crate::relay::{self, ContactNotificationRequest, ReplyRequest, SendResult};
use crate::web::dto::RelayJson;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// `sendEmail` function.
pub async fn send_email_function(
    method: Method,
    State(state): State<Arc<AppState>>,
    payload: Result<RelayJson<ContactNotificationRequest>, ApiError>,
) -> Result<Json<SendResult>, ApiError> {
    require_post(&method)?;
    let RelayJson(request) = payload?;

    let result =
        relay::send_contact_notification(&request, &state.mail, state.provider.as_ref()).await?;
    Ok(Json(result))
}

/// `sendReplyEmail` function.
pub async fn send_reply_function(
    method: Method,
    State(state): State<Arc<AppState>>,
    payload: Result<RelayJson<ReplyRequest>, ApiError>,
) -> Result<Json<SendResult>, ApiError> {
    require_post(&method)?;
    let RelayJson(request) = payload?;

    let result = relay::send_reply(&request, &state.mail, state.provider.as_ref()).await?;
    Ok(Json(result))
}

fn require_post(method: &Method) -> Result<(), ApiError> {
    if *method == Method::POST {
        Ok(())
    } else {
        tracing::warn!(method = %method, "Method not allowed");
        Err(ApiError::method_not_allowed())
    }
}
