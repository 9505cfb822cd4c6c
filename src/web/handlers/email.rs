//! Standalone-server email handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::relay::{self, ContactNotificationRequest, ReplyRequest, SendResult};
use crate::web::dto::RelayJson;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/send-email - Relay a contact-form submission.
pub async fn send_email(
    State(state): State<Arc<AppState>>,
    RelayJson(request): RelayJson<ContactNotificationRequest>,
) -> Result<Json<SendResult>, ApiError> {
    let result =
        relay::send_contact_notification(&request, &state.mail, state.provider.as_ref()).await?;
    Ok(Json(result))
}

/// POST /api/send-reply - Relay an admin reply.
pub async fn send_reply(
    State(state): State<Arc<AppState>>,
    RelayJson(request): RelayJson<ReplyRequest>,
) -> Result<Json<SendResult>, ApiError> {
    let result = relay::send_reply(&request, &state.mail, state.provider.as_ref()).await?;
    Ok(Json(result))
}
