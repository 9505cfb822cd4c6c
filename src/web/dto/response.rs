//! Response DTOs for Web API.

use serde::{Deserialize, Serialize};

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    /// The fixed payload returned by `/health`.
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "API funcionando!".to_string(),
        }
    }
}
