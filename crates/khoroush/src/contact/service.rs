use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{info, warn};

use super::form::{ContactForm, ValidationError};
use super::relay::{FormRelay, RelayError};
use crate::site::content::COMPANY;

/// Request tokens remembered for duplicate detection.
const TOKEN_MEMORY: usize = 1024;

/// Result of handling one posted contact form.
#[derive(Debug)]
pub enum ContactOutcome {
    Sent,
    /// Honeypot was filled; dropped without feedback.
    Ignored,
    Rejected(ValidationError),
    /// The same rendered form was already submitted.
    Duplicate,
    Failed(RelayError),
}

impl ContactOutcome {
    /// Whether the form should come back empty.
    pub fn clears_form(&self) -> bool {
        matches!(
            self,
            ContactOutcome::Sent | ContactOutcome::Ignored | ContactOutcome::Duplicate
        )
    }

    pub fn toast(&self) -> Option<Toast> {
        match self {
            ContactOutcome::Sent => Some(Toast {
                kind: ToastKind::Success,
                title: "Message Sent!",
                description: format!(
                    "Thank you for contacting {}. We'll respond within 24 hours.",
                    COMPANY.name
                ),
            }),
            ContactOutcome::Ignored => None,
            ContactOutcome::Rejected(reason) => Some(Toast {
                kind: ToastKind::Error,
                title: "Please check the form",
                description: reason.to_string(),
            }),
            ContactOutcome::Duplicate => Some(Toast {
                kind: ToastKind::Info,
                title: "Already received",
                description: "We already have this message and will be in touch shortly."
                    .to_string(),
            }),
            ContactOutcome::Failed(_) => Some(Toast {
                kind: ToastKind::Error,
                title: "Message not sent",
                description: format!(
                    "Something went wrong while sending your message. Please try again or email us directly at {}.",
                    COMPANY.email
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Info => "info",
            ToastKind::Error => "error",
        }
    }
}

/// Transient notification shown above the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenState {
    InFlight,
    Delivered,
}

/// Bounded memory of request tokens that are in flight or delivered.
#[derive(Debug, Default)]
struct TokenLedger {
    states: HashMap<String, TokenState>,
    order: VecDeque<String>,
}

impl TokenLedger {
    fn claim(&mut self, token: &str) -> bool {
        if self.states.contains_key(token) {
            return false;
        }
        self.states.insert(token.to_string(), TokenState::InFlight);
        self.order.push_back(token.to_string());
        while self.order.len() > TOKEN_MEMORY {
            if let Some(oldest) = self.order.pop_front() {
                self.states.remove(&oldest);
            }
        }
        true
    }

    fn complete(&mut self, token: &str) {
        if let Some(state) = self.states.get_mut(token) {
            *state = TokenState::Delivered;
        }
    }

    fn release(&mut self, token: &str) {
        if self.states.remove(token).is_some() {
            self.order.retain(|entry| entry != token);
        }
    }
}

/// Validates contact submissions and hands them to the relay.
pub struct ContactService<F: ?Sized = dyn FormRelay> {
    relay: Arc<F>,
    ledger: Mutex<TokenLedger>,
}

impl<F> ContactService<F>
where
    F: FormRelay + ?Sized,
{
    pub fn new(relay: Arc<F>) -> Self {
        Self {
            relay,
            ledger: Mutex::new(TokenLedger::default()),
        }
    }

    pub async fn submit(&self, form: &ContactForm) -> ContactOutcome {
        if form.is_bot() {
            info!("honeypot field filled; dropping contact submission");
            return ContactOutcome::Ignored;
        }

        let inquiry = match form.validate() {
            Ok(inquiry) => inquiry,
            Err(reason) => return ContactOutcome::Rejected(reason),
        };

        let token = form.request_token.trim();
        if !token.is_empty() && !self.with_ledger(|ledger| ledger.claim(token)) {
            info!("duplicate contact submission ignored");
            return ContactOutcome::Duplicate;
        }

        match self.relay.deliver(&inquiry).await {
            Ok(_) => {
                if !token.is_empty() {
                    self.with_ledger(|ledger| ledger.complete(token));
                }
                info!(service = inquiry.service.value(), "contact submission delivered");
                ContactOutcome::Sent
            }
            Err(err) => {
                if !token.is_empty() {
                    self.with_ledger(|ledger| ledger.release(token));
                }
                warn!(error = %err, "contact submission failed");
                ContactOutcome::Failed(err)
            }
        }
    }

    fn with_ledger<T>(&self, apply: impl FnOnce(&mut TokenLedger) -> T) -> T {
        let mut guard = self
            .ledger
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        apply(&mut guard)
    }
}
