use crate::domain::model::{
    ContactRequest, Inquiry, NewInquiry, NotificationStatus, SubmissionOutcome,
};
use crate::domain::ports::{InquiryRepository, Notifier};
use crate::utils::error::{NotificationError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Validate → persist → best-effort notify for one contact submission.
pub struct InquiryService {
    store: Arc<dyn InquiryRepository>,
    notifier: Option<Arc<dyn Notifier>>,
    notify_timeout: Duration,
}

impl InquiryService {
    pub fn new(
        store: Arc<dyn InquiryRepository>,
        notifier: Option<Arc<dyn Notifier>>,
        notify_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            notify_timeout,
        }
    }

    pub fn store(&self) -> &Arc<dyn InquiryRepository> {
        &self.store
    }

    pub async fn submit(&self, request: ContactRequest) -> Result<SubmissionOutcome> {
        let fields = NewInquiry::from_request(request)?;

        let inquiry = self.store.append(fields).await.map_err(|e| {
            tracing::error!("❌ Failed to store inquiry: {}", e);
            tracing::error!("💡 {}", e.recovery_suggestion());
            e
        })?;

        tracing::info!(
            id = %inquiry.id,
            name = %inquiry.name,
            email = %inquiry.email,
            project_type = %inquiry.project_type,
            timestamp = %inquiry.timestamp,
            "📝 New inquiry saved"
        );

        let notification = self.notify(&inquiry).await;
        Ok(SubmissionOutcome {
            inquiry,
            notification,
        })
    }

    async fn notify(&self, inquiry: &Inquiry) -> NotificationStatus {
        let Some(notifier) = &self.notifier else {
            tracing::info!("📧 Email not sent - configuration missing");
            return NotificationStatus::NotConfigured;
        };

        let result = match tokio::time::timeout(self.notify_timeout, notifier.send(inquiry)).await {
            Ok(result) => result,
            Err(_) => Err(NotificationError::Timeout(self.notify_timeout.as_secs())),
        };

        match result {
            Ok(()) => {
                tracing::info!(id = %inquiry.id, "✅ Notification email sent");
                NotificationStatus::Sent
            }
            Err(e) => {
                tracing::warn!(id = %inquiry.id, "❌ Email sending failed: {}", e);
                if matches!(e, NotificationError::Authentication(_)) {
                    tracing::warn!("💡 Authentication failed. Check the Gmail App Password in EMAIL_PASS");
                }
                NotificationStatus::Failed(e)
            }
        }
    }
}
