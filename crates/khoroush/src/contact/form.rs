use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum number of characters accepted in the message body.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Raw contact form fields as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
    /// Honeypot: hidden from people, filled in by naive bots.
    #[serde(default)]
    pub botcheck: String,
    /// Per-render token used to drop repeated posts of the same form.
    #[serde(default)]
    pub request_token: String,
}

impl ContactForm {
    /// Empty form carrying a fresh request token.
    pub fn blank() -> Self {
        Self {
            request_token: uuid::Uuid::new_v4().to_string(),
            ..Self::default()
        }
    }

    pub fn is_bot(&self) -> bool {
        !self.botcheck.is_empty()
    }

    /// Checks run in display order; the first failure wins.
    pub fn validate(&self) -> Result<Inquiry, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim();
        if !email_pattern().is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let service =
            ServiceInterest::from_value(&self.service).ok_or(ValidationError::MissingService)?;

        let message = self.message.trim();
        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort);
        }

        let phone = self.phone.trim();
        Ok(Inquiry {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            service,
            message: message.to_string(),
        })
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"))
}

/// Services a visitor can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceInterest {
    RealEstate,
    Construction,
    PropertyManagement,
    General,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 4] = [
        ServiceInterest::RealEstate,
        ServiceInterest::Construction,
        ServiceInterest::PropertyManagement,
        ServiceInterest::General,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ServiceInterest::RealEstate => "real-estate",
            ServiceInterest::Construction => "construction",
            ServiceInterest::PropertyManagement => "property-management",
            ServiceInterest::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::RealEstate => "Real Estate",
            ServiceInterest::Construction => "Construction",
            ServiceInterest::PropertyManagement => "Property Management",
            ServiceInterest::General => "General Inquiry",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|service| service.value() == raw)
    }
}

/// A submission that passed validation and is ready for the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: ServiceInterest,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a service.")]
    MissingService,
    #[error("Please enter a message of at least 10 characters.")]
    MessageTooShort,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            service: "real-estate".to_string(),
            message: "Looking for a 3-bedroom condo downtown.".to_string(),
            botcheck: String::new(),
            request_token: String::new(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let inquiry = valid_form().validate().expect("form is valid");
        assert_eq!(inquiry.name, "Jane Doe");
        assert_eq!(inquiry.service, ServiceInterest::RealEstate);
        assert_eq!(inquiry.phone, None);
    }

    #[test]
    fn rejects_blank_name() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "jane", "jane@x", "jane doe@x.com", "@x.com"] {
            let form = ContactForm {
                email: email.to_string(),
                ..valid_form()
            };
            assert_eq!(
                form.validate(),
                Err(ValidationError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_or_missing_service() {
        for service in ["", "interiors"] {
            let form = ContactForm {
                service: service.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(ValidationError::MissingService));
        }
    }

    #[test]
    fn message_needs_ten_characters() {
        let short = ContactForm {
            message: "Call me!!".to_string(),
            ..valid_form()
        };
        assert_eq!(short.validate(), Err(ValidationError::MessageTooShort));

        let exact = ContactForm {
            message: "Call me!!!".to_string(),
            ..valid_form()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn honeypot_detects_filled_field() {
        let form = ContactForm {
            botcheck: "on".to_string(),
            ..valid_form()
        };
        assert!(form.is_bot());
        assert!(!valid_form().is_bot());
    }

    #[test]
    fn blank_form_has_unique_tokens() {
        let first = ContactForm::blank();
        let second = ContactForm::blank();
        assert!(!first.request_token.is_empty());
        assert_ne!(first.request_token, second.request_token);
        assert!(first.name.is_empty());
    }
}
