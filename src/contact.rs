use serde::Deserialize;
use validator::Validate;

use crate::config::EmailConfig;
use crate::mailer::OutboundEmail;

/// A contact-form submission. Created by the form, consumed by the relay,
/// discarded once the outbound email is sent or the attempt fails.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactSubmission {
    /// Build the notification email for the site owner.
    ///
    /// The message is sent FROM the verified configured address with the
    /// visitor's address as Reply-To. Using the visitor address as sender
    /// would fail SPF/DKIM checks at most providers.
    pub fn into_email(self, config: &EmailConfig) -> OutboundEmail {
        OutboundEmail {
            from: format!("{} <{}>", config.from_name, config.from_email),
            reply_to: Some(self.email.clone()),
            to: config.owner_address.clone(),
            subject: format!("Portfolio Contact Form: {}", self.name),
            body: format!(
                "Name: {}\nEmail: {}\nMessage: {}",
                self.name, self.email, self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    fn email_config() -> EmailConfig {
        EmailConfig {
            owner_address: "owner@example.com".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: "Portfolio".to_string(),
            ..EmailConfig::default()
        }
    }

    #[test]
    fn test_valid_submission_passes_validation() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        for field in ["name", "email", "message"] {
            let mut input = submission();
            match field {
                "name" => input.name.clear(),
                "email" => input.email.clear(),
                _ => input.message.clear(),
            }
            assert!(input.validate().is_err(), "empty {field} should fail");
        }
    }

    #[test]
    fn test_email_envelope() {
        let email = submission().into_email(&email_config());

        assert_eq!(email.from, "Portfolio <noreply@example.com>");
        assert_eq!(email.reply_to.as_deref(), Some("jane@x.com"));
        assert_eq!(email.to, "owner@example.com");
        assert_eq!(email.subject, "Portfolio Contact Form: Jane");
        assert_eq!(email.body, "Name: Jane\nEmail: jane@x.com\nMessage: Hi");
    }
}
