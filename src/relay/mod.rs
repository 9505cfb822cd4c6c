//! Relay core shared by every HTTP adapter.
//!
//! Both operations take a decoded request, the mail configuration and a
//! provider, and return a [`SendResult`] or a [`RelayError`]. They never
//! retry: a provider failure is reported once and the caller decides what to
//! do with it.

pub mod routes;
pub mod types;

use validator::{Validate, ValidationErrors};

use crate::config::MailConfig;
use crate::datetime;
use crate::provider::{EmailProvider, OutboundEmail, ProviderError};
use crate::template::{self, ContactNotificationView, ReplyView};
use crate::{RelayError, Result};

pub use routes::{route_label, ROUTES};
pub use types::{ContactNotificationRequest, ReplyRequest, SendResult, FALLBACK_MESSAGE_ID};

use types::field;

/// Validation message for contact notifications.
pub const CONTACT_FIELDS_REQUIRED: &str = "Todos os campos são obrigatórios";

/// Validation message for replies.
pub const REPLY_FIELDS_REQUIRED: &str = "Destinatário, assunto e mensagem são obrigatórios";

/// Success message for contact notifications.
pub const CONTACT_SENT: &str = "Email enviado com sucesso!";

/// Success message for replies.
pub const REPLY_SENT: &str = "Resposta enviada com sucesso!";

/// Relay a contact-form submission to the operator's inbox.
pub async fn send_contact_notification(
    request: &ContactNotificationRequest,
    config: &MailConfig,
    provider: &dyn EmailProvider,
) -> Result<SendResult> {
    tracing::info!(route = ?request.route_key, "Contact notification received");

    if let Err(errors) = request.validate() {
        tracing::warn!(
            missing = ?missing_fields(&errors),
            "Contact notification rejected"
        );
        return Err(RelayError::Validation(CONTACT_FIELDS_REQUIRED.to_string()));
    }

    if config.contact_email.trim().is_empty() {
        tracing::error!("Contact destination address is not configured");
        return Err(RelayError::Unexpected(
            "Endereço de contato não configurado".to_string(),
        ));
    }

    let name = field(&request.name);
    let email = field(&request.email);
    let received_at = datetime::now_display(&config.timezone);

    let html = template::render_contact_notification(&ContactNotificationView {
        name,
        email,
        phone: field(&request.phone),
        route_label: route_label(field(&request.route_key)),
        message: field(&request.message),
        received_at: &received_at,
    })?;

    let outbound = OutboundEmail {
        from: config.from_address.clone(),
        to: vec![config.contact_email.clone()],
        subject: format!("Nova solicitação de passeio - {name}"),
        html,
        reply_to: Some(email.to_string()),
    };

    deliver(provider, outbound, CONTACT_SENT).await
}

/// Relay an admin reply to a customer.
pub async fn send_reply(
    request: &ReplyRequest,
    config: &MailConfig,
    provider: &dyn EmailProvider,
) -> Result<SendResult> {
    tracing::info!(to = ?request.to, "Reply received");

    if let Err(errors) = request.validate() {
        tracing::warn!(missing = ?missing_fields(&errors), "Reply rejected");
        return Err(RelayError::Validation(REPLY_FIELDS_REQUIRED.to_string()));
    }

    let html = template::render_reply(&ReplyView {
        message: field(&request.message),
    })?;

    let outbound = OutboundEmail {
        from: config.reply_from_address.clone(),
        to: vec![field(&request.to).to_string()],
        subject: field(&request.subject).to_string(),
        html,
        reply_to: None,
    };

    deliver(provider, outbound, REPLY_SENT).await
}

/// Hand one message to the provider and normalize the outcome.
async fn deliver(
    provider: &dyn EmailProvider,
    email: OutboundEmail,
    success_message: &str,
) -> Result<SendResult> {
    let recipients = email.to.join(", ");

    match provider.send(email).await {
        Ok(receipt) => {
            let id = receipt
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| FALLBACK_MESSAGE_ID.to_string());
            tracing::info!(
                provider = provider.name(),
                id = %id,
                to = %recipients,
                "Email sent"
            );
            Ok(SendResult::sent(id, success_message))
        }
        Err(ProviderError::Api { status, message }) => {
            tracing::error!(
                provider = provider.name(),
                status = ?status,
                error = %message,
                "Provider rejected email"
            );
            Err(RelayError::Provider(message))
        }
        Err(ProviderError::Transport(message)) => {
            tracing::error!(
                provider = provider.name(),
                error = %message,
                "Failed to send email"
            );
            Err(RelayError::Unexpected(message))
        }
    }
}

/// Names of the fields that failed validation, sorted.
fn missing_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SendReceipt;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider double that records every message and returns a fixed outcome.
    struct RecordingProvider {
        outcome: std::result::Result<SendReceipt, ProviderError>,
        sent: Mutex<Vec<OutboundEmail>>,
    }

    impl RecordingProvider {
        fn returning(outcome: std::result::Result<SendReceipt, ProviderError>) -> Self {
            Self {
                outcome,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn with_id(id: &str) -> Self {
            Self::returning(Ok(SendReceipt {
                id: Some(id.to_string()),
            }))
        }

        fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailProvider for RecordingProvider {
        async fn send(
            &self,
            email: OutboundEmail,
        ) -> std::result::Result<SendReceipt, ProviderError> {
            self.sent.lock().unwrap().push(email);
            self.outcome.clone()
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn mail_config() -> MailConfig {
        MailConfig {
            api_key: "re_test".to_string(),
            contact_email: "contato@passeios.com".to_string(),
            ..MailConfig::default()
        }
    }

    fn contact_request(route: &str) -> ContactNotificationRequest {
        ContactNotificationRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@x.com".to_string()),
            phone: Some("21999999999".to_string()),
            route_key: Some(route.to_string()),
            message: Some("Quero informações".to_string()),
        }
    }

    fn reply_request() -> ReplyRequest {
        ReplyRequest {
            to: Some("cliente@x.com".to_string()),
            subject: Some("Re: dúvida".to_string()),
            message: Some("Segue resposta".to_string()),
        }
    }

    #[tokio::test]
    async fn test_contact_notification_success() {
        let provider = RecordingProvider::with_id("msg-1");
        let config = mail_config();

        let result = send_contact_notification(&contact_request("ilhaPelado"), &config, &provider)
            .await
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.id(), Some("msg-1"));
        assert_eq!(result.message(), Some(CONTACT_SENT));

        let sent = provider.sent();
        assert_eq!(sent.len(), 1);
        let email = &sent[0];
        assert_eq!(email.from, config.from_address);
        assert_eq!(email.to, vec!["contato@passeios.com".to_string()]);
        assert_eq!(email.reply_to.as_deref(), Some("ana@x.com"));
        assert!(email.subject.contains("Ana"));
        assert!(email.html.contains("Ilha do Pelado"));
        assert!(!email.html.contains("ilhaPelado"));
        assert!(email.html.contains("mailto:ana@x.com"));
        assert!(email.html.contains("tel:21999999999"));
    }

    #[tokio::test]
    async fn test_contact_notification_unknown_route_passes_through() {
        let provider = RecordingProvider::with_id("msg-2");

        send_contact_notification(&contact_request("passeioNoturno"), &mail_config(), &provider)
            .await
            .unwrap();

        assert!(provider.sent()[0].html.contains("passeioNoturno"));
    }

    #[tokio::test]
    async fn test_contact_notification_missing_field() {
        let provider = RecordingProvider::with_id("never");
        let mut request = contact_request("ilhaPelado");
        request.message = None;

        let err = send_contact_notification(&request, &mail_config(), &provider)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Validation(ref m) if m == CONTACT_FIELDS_REQUIRED));
        assert!(provider.sent().is_empty());
    }

    #[tokio::test]
    async fn test_contact_notification_each_field_required() {
        let blanks: [fn(&mut ContactNotificationRequest); 5] = [
            |r| r.name = Some(String::new()),
            |r| r.email = None,
            |r| r.phone = Some(String::new()),
            |r| r.route_key = None,
            |r| r.message = Some(String::new()),
        ];

        for blank in blanks {
            let provider = RecordingProvider::with_id("never");
            let mut request = contact_request("ilhaPelado");
            blank(&mut request);

            let result = send_contact_notification(&request, &mail_config(), &provider).await;
            assert!(matches!(result, Err(RelayError::Validation(_))));
            assert!(provider.sent().is_empty());
        }
    }

    #[tokio::test]
    async fn test_contact_notification_without_destination() {
        let provider = RecordingProvider::with_id("never");
        let config = MailConfig {
            contact_email: String::new(),
            ..mail_config()
        };

        let result = send_contact_notification(&contact_request("lagoaAzul"), &config, &provider).await;

        assert!(matches!(result, Err(RelayError::Unexpected(_))));
        assert!(provider.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_provider_id_uses_fallback() {
        let provider = RecordingProvider::returning(Ok(SendReceipt { id: None }));

        let result = send_contact_notification(&contact_request("ilhaPelado"), &mail_config(), &provider)
            .await
            .unwrap();

        assert_eq!(result.id(), Some(FALLBACK_MESSAGE_ID));
    }

    #[tokio::test]
    async fn test_empty_provider_id_uses_fallback() {
        let provider = RecordingProvider::with_id("");

        let result = send_reply(&reply_request(), &mail_config(), &provider)
            .await
            .unwrap();

        assert_eq!(result.id(), Some("unknown"));
    }

    #[tokio::test]
    async fn test_reply_success() {
        let provider = RecordingProvider::with_id("reply-1");
        let config = mail_config();

        let result = send_reply(&reply_request(), &config, &provider).await.unwrap();

        assert_eq!(result.id(), Some("reply-1"));
        assert_eq!(result.message(), Some(REPLY_SENT));

        let sent = provider.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, config.reply_from_address);
        assert_eq!(sent[0].to, vec!["cliente@x.com".to_string()]);
        assert_eq!(sent[0].subject, "Re: dúvida");
        assert!(sent[0].reply_to.is_none());
        assert!(sent[0].html.contains("Segue resposta"));
    }

    #[tokio::test]
    async fn test_reply_missing_field() {
        let provider = RecordingProvider::with_id("never");
        let mut request = reply_request();
        request.to = Some(String::new());

        let err = send_reply(&request, &mail_config(), &provider)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Validation(ref m) if m == REPLY_FIELDS_REQUIRED));
        assert!(provider.sent().is_empty());
    }

    #[tokio::test]
    async fn test_provider_api_error_passes_message_through() {
        let provider = RecordingProvider::returning(Err(ProviderError::Api {
            status: Some(403),
            message: "domain not verified".to_string(),
        }));

        let err = send_reply(&reply_request(), &mail_config(), &provider)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Provider(ref m) if m == "domain not verified"));
        assert_eq!(provider.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_is_unexpected() {
        let provider = RecordingProvider::returning(Err(ProviderError::Transport(
            "connection refused".to_string(),
        )));

        let err = send_contact_notification(&contact_request("ilhaPelado"), &mail_config(), &provider)
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::Unexpected(ref m) if m == "connection refused"));
    }
}
