use color_eyre::Result;
use serde::Serialize;

use crate::services::EmailSender;

#[derive(Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
}

/// Email transport backed by the Resend API. Built without an API key the
/// sender is disabled and callers fall back to the manual-copy path.
#[derive(Clone)]
pub struct ResendEmailSender {
    api_key: Option<String>,
    from: String,
    client: reqwest::Client,
}

impl ResendEmailSender {
    pub fn new(api_key: Option<String>, from: String) -> Self {
        Self {
            api_key,
            from,
            client: reqwest::Client::new(),
        }
    }

    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<()> {
        let Some(api_key) = &self.api_key else {
            color_eyre::eyre::bail!("no email transport is configured");
        };

        let body = SendEmailRequest {
            from: self.from.clone(),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            text: text.to_string(),
        };

        let resp = self
            .client
            .post("https://api.resend.com/emails")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("Resend API error: {status} - {text}");
            color_eyre::eyre::bail!("Resend API returned {status}");
        }

        Ok(())
    }
}

impl EmailSender for ResendEmailSender {
    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    fn deliver(
        &self,
        to: &str,
        subject: &str,
        text: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        self.send(to, subject, text)
    }
}

/// Pre-addressed `mailto:` URL carrying a composed message, for visitors who
/// have to send through their own mail client.
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
