//! Contact form intake: validation, honeypot, duplicate guard, and relay.

pub mod form;
pub mod relay;
pub mod service;

pub use form::{ContactForm, Inquiry, ServiceInterest, ValidationError, MIN_MESSAGE_CHARS};
pub use relay::{
    FormRelay, RelayError, RelayPayload, RelayReceipt, RelayResponse, Web3FormsRelay,
};
pub use service::{ContactOutcome, ContactService, Toast, ToastKind};
