pub mod contact;
pub mod quiz;

use color_eyre::Result;

// ---------------------------------------------------------------------------
// EmailSender trait (DIP: the service layer defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait EmailSender: Send + Sync {
    /// Whether a transport is configured (false when no API key is present).
    fn is_enabled(&self) -> bool;

    /// Deliver one composed text block to an inbox.
    fn deliver(
        &self,
        to: &str,
        subject: &str,
        text: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
