use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Malformed payload: {message}")]
    MalformedPayload { message: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Why an outbound notification did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("authentication with the mail relay failed: {0}")]
    Authentication(String),

    #[error("mail transport failed: {0}")]
    Transport(String),

    #[error("notification timed out after {0}s")]
    Timeout(u64),

    #[error("notification message could not be built: {0}")]
    Message(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Storage,
    Notification,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Persistence {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Persistence {
            message: format!("inquiry document is not valid: {}", err),
        }
    }
}

impl IntakeError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        IntakeError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        IntakeError::Config {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IntakeError::Validation { .. } | IntakeError::MalformedPayload { .. } => {
                ErrorCategory::Client
            }
            IntakeError::Persistence { .. } => ErrorCategory::Storage,
            IntakeError::Notification(_) => ErrorCategory::Notification,
            IntakeError::Config { .. } | IntakeError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client => ErrorSeverity::Low,
            ErrorCategory::Notification => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IntakeError::Validation { field, .. } => {
                format!("Please fill in the '{}' field", field)
            }
            IntakeError::MalformedPayload { .. } => "The request body could not be read".to_string(),
            IntakeError::Persistence { .. } => "The inquiry store is unavailable".to_string(),
            IntakeError::Notification(_) => "The email notification could not be sent".to_string(),
            IntakeError::Config { message } => format!("Server misconfigured: {}", message),
            IntakeError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IntakeError::Validation { .. } => "Send every required field with a non-blank value",
            IntakeError::MalformedPayload { .. } => {
                "Send a JSON or form-encoded body with the contact fields"
            }
            IntakeError::Persistence { .. } => {
                "Check that the data directory exists, is writable and holds a valid inquiries.json"
            }
            IntakeError::Notification(NotificationError::Authentication(_)) => {
                "Check EMAIL_USER and EMAIL_PASS (Gmail needs an App Password)"
            }
            IntakeError::Notification(_) => "Check network access to the SMTP relay",
            IntakeError::Config { .. } | IntakeError::InvalidConfigValue { .. } => {
                "Review the environment variables, .env file and --config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
