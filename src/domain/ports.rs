use crate::domain::model::{Inquiry, NewInquiry};
use crate::utils::error::{NotificationError, Result};
use async_trait::async_trait;

/// Owner of the inquiry collection. Every read and write goes through here.
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Assigns id and timestamp, appends, and returns the stored record.
    async fn append(&self, inquiry: NewInquiry) -> Result<Inquiry>;

    /// All records in arrival order.
    async fn list_all(&self) -> Result<Vec<Inquiry>>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, inquiry: &Inquiry) -> std::result::Result<(), NotificationError>;

    /// Checks that the relay accepts our credentials.
    async fn verify(&self) -> std::result::Result<(), NotificationError> {
        Ok(())
    }
}
