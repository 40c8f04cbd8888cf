pub mod catalog;
pub mod intake;

pub use crate::domain::model::{Inquiry, NotificationStatus, SubmissionOutcome};
pub use crate::domain::ports::{InquiryRepository, Notifier};
pub use crate::utils::error::Result;
