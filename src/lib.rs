pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::{JsonFileStore, SmtpNotifier};
pub use config::{CliArgs, ServerConfig};
pub use core::intake::InquiryService;
pub use http::{build_router, AppState};
pub use utils::error::{IntakeError, Result};
