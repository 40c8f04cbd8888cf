// Adapters layer: concrete implementations of the domain ports.

pub mod json_store;
pub mod mailer;

pub use json_store::JsonFileStore;
pub use mailer::{SmtpNotifier, SmtpSettings};
