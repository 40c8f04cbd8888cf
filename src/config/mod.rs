pub mod cli;
pub mod toml_config;

use crate::adapters::SmtpSettings;
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::{validate_email_address, validate_path, validate_range, Validate};
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub use cli::CliArgs;
pub use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_NOTIFY_TO: &str = "techforge81@gmail.com";
pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";

#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: String,
    pub dist_dir: String,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub notify_to: String,
    pub smtp_relay: String,
    pub notify_timeout_secs: u64,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("data_dir", &self.data_dir)
            .field("dist_dir", &self.dist_dir)
            .field("email_user", &self.email_user)
            .field("email_pass", &self.email_pass.as_ref().map(|_| "***"))
            .field("notify_to", &self.notify_to)
            .field("smtp_relay", &self.smtp_relay)
            .field("notify_timeout_secs", &self.notify_timeout_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: "./data".to_string(),
            dist_dir: "./dist".to_string(),
            email_user: None,
            email_pass: None,
            notify_to: DEFAULT_NOTIFY_TO.to_string(),
            smtp_relay: DEFAULT_SMTP_RELAY.to_string(),
            notify_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Defaults, then the TOML file, then the process environment, then CLI flags.
    pub fn load(args: &CliArgs) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = &args.config {
            config.apply_file(TomlConfig::from_file(path)?);
        }
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_cli(args);

        Ok(config)
    }

    pub fn apply_file(&mut self, file: TomlConfig) {
        if let Some(server) = file.server {
            if let Some(port) = server.port {
                self.port = port;
            }
            if let Some(data_dir) = server.data_dir {
                self.data_dir = data_dir;
            }
            if let Some(dist_dir) = server.dist_dir {
                self.dist_dir = dist_dir;
            }
        }

        if let Some(email) = file.email {
            if email.user.is_some() {
                self.email_user = email.user;
            }
            if email.pass.is_some() {
                self.email_pass = email.pass;
            }
            if let Some(notify_to) = email.notify_to {
                self.notify_to = notify_to;
            }
            if let Some(relay) = email.smtp_relay {
                self.smtp_relay = relay;
            }
            if let Some(timeout) = email.timeout_seconds {
                self.notify_timeout_secs = timeout;
            }
        }
    }

    /// `lookup` stands in for `std::env::var` so tests need not touch the real environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = parse_var(&lookup, "PORT")? {
            self.port = port;
        }
        if let Some(data_dir) = lookup("DATA_DIR") {
            self.data_dir = data_dir;
        }
        if let Some(dist_dir) = lookup("DIST_DIR") {
            self.dist_dir = dist_dir;
        }
        if let Some(user) = lookup("EMAIL_USER") {
            self.email_user = Some(user);
        }
        if let Some(pass) = lookup("EMAIL_PASS") {
            self.email_pass = Some(pass);
        }
        if let Some(notify_to) = lookup("NOTIFY_TO") {
            self.notify_to = notify_to;
        }
        if let Some(relay) = lookup("SMTP_RELAY") {
            self.smtp_relay = relay;
        }
        if let Some(timeout) = parse_var(&lookup, "NOTIFY_TIMEOUT_SECS")? {
            self.notify_timeout_secs = timeout;
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(data_dir) = &args.data_dir {
            self.data_dir = data_dir.clone();
        }
        if let Some(dist_dir) = &args.dist_dir {
            self.dist_dir = dist_dir.clone();
        }
    }

    pub fn email_configured(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.email_user) && present(&self.email_pass)
    }

    /// Relay settings, or `None` when credentials are missing.
    pub fn smtp_settings(&self) -> Option<SmtpSettings> {
        if !self.email_configured() {
            return None;
        }
        Some(SmtpSettings {
            relay: self.smtp_relay.clone(),
            username: self.email_user.clone()?,
            password: self.email_pass.clone()?,
            notify_to: self.notify_to.clone(),
            timeout: self.notify_timeout(),
        })
    }

    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e: T::Err| IntakeError::InvalidConfigValue {
                field: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(IntakeError::InvalidConfigValue {
                field: "port".to_string(),
                value: "0".to_string(),
                reason: "Port must be non-zero".to_string(),
            });
        }

        validate_path("data_dir", &self.data_dir)?;
        validate_path("dist_dir", &self.dist_dir)?;
        validate_range("notify_timeout_secs", self.notify_timeout_secs, 1, 120)?;
        validate_email_address("notify_to", &self.notify_to)?;

        if self.email_configured() {
            if let Some(user) = &self.email_user {
                validate_email_address("email_user", user)?;
            }
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
