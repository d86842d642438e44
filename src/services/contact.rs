//! Contact-form validation and relay.

use color_eyre::Result;
use serde::Deserialize;

use crate::email::ResendEmailSender;
use crate::services::EmailSender;

/// A visitor's message from the contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation errors, rendered next to their inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub enum ContactOutcome {
    /// Message accepted (relayed when a transport exists, logged otherwise).
    Accepted,
    /// One or more fields failed validation; re-render the form with them.
    Invalid {
        message: ContactMessage,
        errors: ContactErrors,
    },
}

const REQUIRED: &str = "This field is required";
const BAD_EMAIL: &str = "Please enter a valid email address";

pub fn validate(message: &ContactMessage) -> Result<(), ContactErrors> {
    let mut errors = ContactErrors::default();

    if message.name.trim().is_empty() {
        errors.name = Some(REQUIRED);
    }

    let email = message.email.trim();
    if email.is_empty() {
        errors.email = Some(REQUIRED);
    } else if !is_valid_email(email) {
        errors.email = Some(BAD_EMAIL);
    }

    if message.message.trim().is_empty() {
        errors.message = Some(REQUIRED);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Accepts `local@domain` where neither part contains whitespace or a second
/// `@` and the domain carries at least one dot with something on both sides.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub struct ContactService<E: EmailSender = ResendEmailSender> {
    email: E,
    contact_email: String,
}

impl<E: EmailSender + Clone> Clone for ContactService<E> {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            contact_email: self.contact_email.clone(),
        }
    }
}

impl<E: EmailSender> ContactService<E> {
    pub fn new(email: E, contact_email: String) -> Self {
        Self {
            email,
            contact_email,
        }
    }

    /// Validate and relay one submission.
    pub async fn submit(&self, message: ContactMessage) -> Result<ContactOutcome> {
        if let Err(errors) = validate(&message) {
            return Ok(ContactOutcome::Invalid { message, errors });
        }

        if self.email.is_enabled() {
            let subject = format!("Portfolio contact from {}", message.name.trim());
            let text = format!(
                "From: {} <{}>\n\n{}",
                message.name.trim(),
                message.email.trim(),
                message.message.trim()
            );
            self.email
                .deliver(&self.contact_email, &subject, &text)
                .await?;
        } else {
            tracing::info!(
                "contact message from {} <{}> held locally (no email transport)",
                message.name.trim(),
                message.email.trim()
            );
        }

        Ok(ContactOutcome::Accepted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::MockEmailSender;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    // ----- validation -----

    #[test]
    fn complete_submission_passes() {
        assert!(validate(&message("Dana", "dana@example.com", "Hi there")).is_ok());
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = validate(&message("", "  ", "")).unwrap_err();

        assert_eq!(errors.name, Some(REQUIRED));
        assert_eq!(errors.email, Some(REQUIRED));
        assert_eq!(errors.message, Some(REQUIRED));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["plainaddress", "a@b", "a @b.com", "a@b@c.com", "a@.com", "a@b."] {
            let errors = validate(&message("Dana", bad, "Hi")).unwrap_err();
            assert_eq!(errors.email, Some(BAD_EMAIL), "{bad} should be rejected");
        }

        for good in ["a@b.c", "dana+quiz@mail.example.com"] {
            assert!(validate(&message("Dana", good, "Hi")).is_ok(), "{good}");
        }
    }

    // ----- relay -----

    #[tokio::test]
    async fn invalid_submissions_are_never_relayed() {
        // No deliver expectation: any call would panic the mock.
        let email = MockEmailSender::new();
        let svc = ContactService::new(email, "alex@example.com".to_string());

        let outcome = svc.submit(message("", "bad", "")).await.unwrap();

        assert!(matches!(outcome, ContactOutcome::Invalid { .. }));
    }

    #[tokio::test]
    async fn valid_submissions_are_relayed_once() {
        let mut email = MockEmailSender::new();
        email.expect_is_enabled().returning(|| true);
        email
            .expect_deliver()
            .withf(|to, subject, text| {
                to == "alex@example.com"
                    && subject.contains("Dana")
                    && text.contains("dana@example.com")
            })
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(()) }));

        let svc = ContactService::new(email, "alex@example.com".to_string());
        let outcome = svc
            .submit(message("Dana", "dana@example.com", "Hi there"))
            .await
            .unwrap();

        assert!(matches!(outcome, ContactOutcome::Accepted));
    }

    #[tokio::test]
    async fn without_transport_the_message_is_still_accepted() {
        let mut email = MockEmailSender::new();
        email.expect_is_enabled().returning(|| false);

        let svc = ContactService::new(email, "alex@example.com".to_string());
        let outcome = svc
            .submit(message("Dana", "dana@example.com", "Hi there"))
            .await
            .unwrap();

        assert!(matches!(outcome, ContactOutcome::Accepted));
    }
}
