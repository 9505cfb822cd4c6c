//! Request and result types for the relay.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Literal reported as `id` when the provider does not return one.
pub const FALLBACK_MESSAGE_ID: &str = "unknown";

/// Contact-form submission.
///
/// Wire keys follow the website form (`nome`, `telefone`, `roteiro`,
/// `mensagem`). Every field is optional at the type level so that a missing
/// field is reported as a validation error instead of a decoding error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactNotificationRequest {
    /// Sender's display name.
    #[serde(rename = "nome")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    /// Reply-to address.
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(rename = "telefone")]
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    /// Route code selected in the form.
    #[serde(rename = "roteiro")]
    #[validate(required, length(min = 1))]
    pub route_key: Option<String>,
    /// Free text.
    #[serde(rename = "mensagem")]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Free-form reply sent from the admin dashboard.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReplyRequest {
    /// Destination address.
    #[validate(required, length(min = 1))]
    pub to: Option<String>,
    /// Subject line.
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    /// Message body; line breaks are preserved in the rendered HTML.
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Normalized response envelope.
///
/// Built only through [`SendResult::sent`] and [`SendResult::failed`], so a
/// successful result never carries `error` and a failed one carries nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SendResult {
    /// Successful delivery.
    pub fn sent(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            id: Some(id.into()),
            error: None,
        }
    }

    /// Failed request.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            id: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Read a field that validation has already checked.
pub(crate) fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
