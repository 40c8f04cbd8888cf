use crate::domain::model::Inquiry;
use crate::domain::ports::Notifier;
use crate::utils::error::NotificationError;
use askama::Template;
use async_trait::async_trait;
use chrono::DateTime;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub relay: String,
    pub username: String,
    pub password: String,
    pub notify_to: String,
    pub timeout: Duration,
}

/// Sends one notification email per stored inquiry through an authenticated SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotificationError> {
        let from: Mailbox = settings
            .username
            .parse()
            .map_err(|e| NotificationError::Message(format!("sender address: {}", e)))?;
        let to: Mailbox = settings
            .notify_to
            .parse()
            .map_err(|e| NotificationError::Message(format!("recipient address: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.relay)
            .map_err(|e| NotificationError::Transport(e.to_string()))?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self { transport, from, to })
    }

    fn build_message(&self, inquiry: &Inquiry) -> Result<Message, NotificationError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject_line(inquiry));

        // a bad submitter address only costs us the Reply-To header
        match inquiry.email.parse::<Mailbox>() {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => tracing::debug!("Skipping Reply-To for '{}': {}", inquiry.email, e),
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                render_text(inquiry)?,
                render_html(inquiry)?,
            ))
            .map_err(|e| NotificationError::Message(e.to_string()))
    }
}

fn classify(err: lettre::transport::smtp::Error) -> NotificationError {
    let auth_failure = err
        .status()
        .map(|code| matches!(code.to_string().as_str(), "530" | "534" | "535"))
        .unwrap_or(false);

    if auth_failure {
        NotificationError::Authentication(err.to_string())
    } else {
        NotificationError::Transport(err.to_string())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, inquiry: &Inquiry) -> Result<(), NotificationError> {
        let message = self.build_message(inquiry)?;
        self.transport.send(message).await.map_err(classify)?;
        Ok(())
    }

    async fn verify(&self) -> Result<(), NotificationError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(NotificationError::Transport(
                "relay did not accept the connection".to_string(),
            )),
            Err(e) => Err(classify(e)),
        }
    }
}

pub fn subject_line(inquiry: &Inquiry) -> String {
    format!("New Project Inquiry - {}", inquiry.project_type)
}

/// "Monday, January 6, 2025 at 09:30 AM UTC"; falls back to the raw value.
pub fn human_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%A, %B %-d, %Y at %I:%M %p UTC").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Field values as the notification shows them.
struct NotificationView<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    project_type: &'a str,
    budget: &'a str,
    timeline: &'a str,
    requirements: &'a str,
    requirement_lines: Vec<&'a str>,
    submitted: String,
}

impl<'a> NotificationView<'a> {
    fn new(inquiry: &'a Inquiry) -> Self {
        Self {
            id: &inquiry.id,
            name: &inquiry.name,
            email: &inquiry.email,
            project_type: &inquiry.project_type,
            budget: or_not_specified(&inquiry.budget),
            timeline: or_not_specified(&inquiry.timeline),
            requirements: &inquiry.requirements,
            requirement_lines: inquiry.requirements.lines().collect(),
            submitted: human_time(&inquiry.timestamp),
        }
    }
}

/// Stored values are kept verbatim; blank ones only read as unspecified in the email.
fn or_not_specified(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => NOT_SPECIFIED,
    }
}

#[derive(Template)]
#[template(path = "notification.txt")]
struct TextBody<'a> {
    inquiry: NotificationView<'a>,
}

#[derive(Template)]
#[template(path = "notification.html")]
struct HtmlBody<'a> {
    inquiry: NotificationView<'a>,
}

pub fn render_text(inquiry: &Inquiry) -> Result<String, NotificationError> {
    TextBody {
        inquiry: NotificationView::new(inquiry),
    }
    .render()
    .map_err(|e| NotificationError::Message(format!("text body: {}", e)))
}

pub fn render_html(inquiry: &Inquiry) -> Result<String, NotificationError> {
    HtmlBody {
        inquiry: NotificationView::new(inquiry),
    }
    .render()
    .map_err(|e| NotificationError::Message(format!("html body: {}", e)))
}
