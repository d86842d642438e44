//! Delivery of finished quiz results to the operator.

use color_eyre::Result;

use crate::email::ResendEmailSender;
use crate::engine::QuizSession;
use crate::services::EmailSender;

pub const SUMMARY_SUBJECT: &str = "Project Consultation Request - Quiz Results";

pub enum SendOutcome {
    /// Summary dispatched to the operator's inbox.
    Sent,
    /// No transport configured; present the composed text for manual copy.
    ManualCopy(String),
    /// The session has not reached the results stage.
    NotReady,
}

pub struct QuizService<E: EmailSender = ResendEmailSender> {
    email: E,
    contact_name: String,
    contact_email: String,
}

impl<E: EmailSender + Clone> Clone for QuizService<E> {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            contact_name: self.contact_name.clone(),
            contact_email: self.contact_email.clone(),
        }
    }
}

impl<E: EmailSender> QuizService<E> {
    pub fn new(email: E, contact_name: String, contact_email: String) -> Self {
        Self {
            email,
            contact_name,
            contact_email,
        }
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    /// Send the session's summary to the operator. Invokes the transport
    /// exactly once per call and may be called repeatedly; a session that is
    /// still mid-quiz yields `NotReady` and nothing is sent.
    pub async fn send_results(&self, session: &QuizSession) -> Result<SendOutcome> {
        let Some(summary) = session.summary_for(&self.contact_name) else {
            return Ok(SendOutcome::NotReady);
        };

        if !self.email.is_enabled() {
            return Ok(SendOutcome::ManualCopy(summary));
        }

        self.email
            .deliver(&self.contact_email, SUMMARY_SUBJECT, &summary)
            .await?;
        tracing::info!("quiz summary sent to {}", self.contact_email);

        Ok(SendOutcome::Sent)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
