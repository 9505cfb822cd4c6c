//! HTML templates for relayed emails.
//!
//! Each email is an askama view model rendered from `templates/emails/`.
//! askama escapes everything interpolated from a request; message bodies
//! are split into lines so the templates can join them with `<br>`.
//!
//! The contact notification is an internal message for the operator, while
//! the reply is customer facing and carries the brand header and footer.

use askama::Template;

use crate::{RelayError, Result};

/// Brand shown in the reply header and footer.
pub const BRAND_NAME: &str = "Passeios de Barco Paraty";

/// Tagline shown under the brand in replies.
pub const BRAND_TAGLINE: &str = "Passeios de barco pelas ilhas e praias de Paraty";

/// Contact-form notification sent to the operator.
#[derive(Debug, Clone, Template)]
#[template(path = "emails/contact_notification.html")]
pub struct ContactNotificationView<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    /// Resolved route label (not the raw code, unless the code is unknown).
    pub route_label: &'a str,
    pub message: &'a str,
    /// Already formatted receipt timestamp.
    pub received_at: &'a str,
}

impl ContactNotificationView<'_> {
    /// `tel:` target with only digits and a leading `+`.
    fn phone_href(&self) -> String {
        self.phone
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect()
    }

    fn message_lines(&self) -> Vec<&str> {
        lines(self.message)
    }
}

/// Admin reply to a customer.
#[derive(Debug, Clone, Template)]
#[template(path = "emails/reply.html")]
pub struct ReplyView<'a> {
    pub message: &'a str,
}

impl ReplyView<'_> {
    fn brand_name(&self) -> &'static str {
        BRAND_NAME
    }

    fn brand_tagline(&self) -> &'static str {
        BRAND_TAGLINE
    }

    fn message_lines(&self) -> Vec<&str> {
        lines(self.message)
    }
}

/// Render the notification sent to the operator for a contact-form submission.
pub fn render_contact_notification(view: &ContactNotificationView<'_>) -> Result<String> {
    view.render()
        .map_err(|e| RelayError::Unexpected(format!("failed to render contact email: {e}")))
}

/// Render a reply to a customer.
pub fn render_reply(view: &ReplyView<'_>) -> Result<String> {
    view.render()
        .map_err(|e| RelayError::Unexpected(format!("failed to render reply email: {e}")))
}

/// Split on LF, CRLF or lone CR, keeping blank lines.
fn lines(text: &str) -> Vec<&str> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .collect()
}
