//! Request extraction for Web API.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::web::error::ApiError;

/// A JSON extractor whose rejection is a `400` [`SendResult`] envelope.
///
/// Field-level checks are left to the relay core; this only turns a body that
/// is not a JSON object of the expected shape into a client error instead of
/// axum's plain-text `415`/`422` rejections.
///
/// [`SendResult`]: crate::relay::SendResult
pub struct RelayJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RelayJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e, "Rejected request body");
            ApiError::bad_request(format!("JSON inválido: {}", e.body_text()))
        })?;

        Ok(RelayJson(value))
    }
}
