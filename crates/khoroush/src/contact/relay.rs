use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::form::Inquiry;
use crate::config::ContactConfig;

/// Sender name shown in the relay's notification e-mail.
pub const FROM_NAME: &str = "Khoroush Website";

/// Outbound delivery of validated inquiries.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<RelayReceipt, RelayError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelayReceipt {
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("contact relay is not configured")]
    NotConfigured,
    #[error("contact relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(
        "contact relay responded with {status}: {}",
        .message.as_deref().unwrap_or("no message")
    )]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("contact relay rejected the submission: {0}")]
    Rejected(String),
}

/// JSON body accepted by the Web3Forms submit endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub to: String,
    pub botcheck: String,
}

impl RelayPayload {
    pub fn new(inquiry: &Inquiry, access_key: &str, recipient: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            subject: format!(
                "New {} inquiry from {}",
                inquiry.service.label(),
                inquiry.name
            ),
            from_name: FROM_NAME.to_string(),
            email: inquiry.email.clone(),
            name: inquiry.name.clone(),
            phone: inquiry.phone.clone().unwrap_or_default(),
            service: inquiry.service.label().to_string(),
            message: inquiry.message.clone(),
            to: recipient.to_string(),
            botcheck: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Relay that posts inquiries to Web3Forms.
#[derive(Clone)]
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
    recipient: String,
}

impl Web3FormsRelay {
    pub fn new(client: reqwest::Client, config: &ContactConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            access_key: config.access_key.clone(),
            recipient: config.recipient.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }
}

impl std::fmt::Debug for Web3FormsRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Web3FormsRelay")
            .field("endpoint", &self.endpoint)
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<RelayReceipt, RelayError> {
        let access_key = self.access_key.as_deref().ok_or(RelayError::NotConfigured)?;
        let payload = RelayPayload::new(inquiry, access_key, &self.recipient);

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<RelayResponse>(&body).ok();

        interpret_response(status.as_u16(), parsed).map(|receipt| {
            debug!(service = inquiry.service.value(), "contact relay accepted submission");
            receipt
        })
    }
}

/// A delivery succeeds only on a 2xx status with `success: true`.
pub fn interpret_response(
    status: u16,
    body: Option<RelayResponse>,
) -> Result<RelayReceipt, RelayError> {
    if !(200..300).contains(&status) {
        return Err(RelayError::Status {
            status,
            message: body.and_then(|response| response.message),
        });
    }

    match body {
        Some(RelayResponse {
            success: true,
            message,
        }) => Ok(RelayReceipt { message }),
        Some(RelayResponse {
            success: false,
            message,
        }) => Err(RelayError::Rejected(
            message.unwrap_or_else(|| "no reason given".to_string()),
        )),
        None => Err(RelayError::Rejected("unreadable response body".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::ServiceInterest;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: Some("+1 416 555 0100".to_string()),
            service: ServiceInterest::PropertyManagement,
            message: "Need a manager for a fourplex.".to_string(),
        }
    }

    #[test]
    fn payload_carries_every_relay_field() {
        let payload = RelayPayload::new(&inquiry(), "key-123", "info@khoroush.ca");
        let value = serde_json::to_value(&payload).expect("payload serializes");
        for field in [
            "access_key",
            "subject",
            "from_name",
            "email",
            "name",
            "phone",
            "service",
            "message",
            "to",
            "botcheck",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(
            payload.subject,
            "New Property Management inquiry from Jane Doe"
        );
        assert_eq!(payload.to, "info@khoroush.ca");
        assert_eq!(payload.botcheck, "");
    }

    #[test]
    fn non_success_status_is_failure() {
        let result = interpret_response(
            429,
            Some(RelayResponse {
                success: false,
                message: Some("Too many requests".to_string()),
            }),
        );
        match result {
            Err(RelayError::Status { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message.as_deref(), Some("Too many requests"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn success_false_body_is_failure() {
        let result = interpret_response(
            200,
            Some(RelayResponse {
                success: false,
                message: Some("Invalid access key".to_string()),
            }),
        );
        assert!(matches!(
            result,
            Err(RelayError::Rejected(reason)) if reason == "Invalid access key"
        ));
    }

    #[test]
    fn success_body_is_receipt() {
        let receipt = interpret_response(
            200,
            Some(RelayResponse {
                success: true,
                message: Some("Email sent successfully!".to_string()),
            }),
        )
        .expect("delivery accepted");
        assert_eq!(receipt.message.as_deref(), Some("Email sent successfully!"));
    }

    #[tokio::test]
    async fn unconfigured_relay_refuses_without_network() {
        let relay = Web3FormsRelay::new(reqwest::Client::new(), &ContactConfig::default());
        assert!(!relay.is_configured());
        let result = relay.deliver(&inquiry()).await;
        assert!(matches!(result, Err(RelayError::NotConfigured)));
    }
}
