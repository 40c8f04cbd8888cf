use crate::adapters::{JsonFileStore, SmtpNotifier};
use crate::config::ServerConfig;
use crate::core::intake::InquiryService;
use crate::domain::ports::{InquiryRepository, Notifier};
use crate::utils::error::{IntakeError, Result};
use std::sync::Arc;

pub struct AppState {
    pub service: InquiryService,
    pub notifier: Option<Arc<dyn Notifier>>,
    /// Fixed at start-up; reported by the health endpoint.
    pub email_configured: bool,
}

impl AppState {
    pub fn new(
        store: Arc<dyn InquiryRepository>,
        notifier: Option<Arc<dyn Notifier>>,
        config: &ServerConfig,
    ) -> Arc<Self> {
        let email_configured = notifier.is_some();
        let service = InquiryService::new(store, notifier.clone(), config.notify_timeout());

        Arc::new(Self {
            service,
            notifier,
            email_configured,
        })
    }

    /// Opens the JSON store under `data_dir` and builds the SMTP notifier when credentials exist.
    pub async fn from_config(config: &ServerConfig) -> Result<Arc<Self>> {
        let store = JsonFileStore::open(&config.data_dir).await?;
        tracing::debug!("Inquiry document: {}", store.path().display());

        let notifier: Option<Arc<dyn Notifier>> = match config.smtp_settings() {
            Some(settings) => {
                let notifier = SmtpNotifier::new(&settings).map_err(|e| {
                    IntakeError::config(format!("email notifier cannot be built: {}", e))
                })?;
                let notifier: Arc<dyn Notifier> = Arc::new(notifier);
                Some(notifier)
            }
            None => {
                tracing::warn!("⚠️ Email not configured. Set EMAIL_USER and EMAIL_PASS to enable notifications");
                None
            }
        };

        Ok(Self::new(Arc::new(store), notifier, config))
    }
}
