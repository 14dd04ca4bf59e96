use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Address the contact-form notifications are delivered to.
    #[serde(default)]
    pub owner_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            owner_address: String::new(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "noreply@abhinavanand.dev".to_string()
}

fn default_from_name() -> String {
    "Portfolio".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional, defaults cover a local run
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy environment variables from the original deployment.
        // set_override sits above every other layer, so each one applies
        // only when the prefixed variable is absent: an explicit
        // PORTFOLIO__* value always wins over a legacy fallback.
        if let Ok(port) = env::var("PORT") {
            if env::var("PORTFOLIO__SERVER__PORT").is_err() {
                builder = builder.set_override("server.port", port)?;
            }
        }
        if let Ok(contact_email) = env::var("CONTACT_EMAIL") {
            // The original account doubled as SMTP login and inbox
            if env::var("PORTFOLIO__EMAIL__OWNER_ADDRESS").is_err() {
                builder = builder.set_override("email.owner_address", contact_email.clone())?;
            }
            if env::var("PORTFOLIO__EMAIL__SMTP_USERNAME").is_err() {
                builder = builder.set_override("email.smtp_username", contact_email)?;
            }
        }
        if let Ok(contact_pass) = env::var("CONTACT_PASS") {
            if env::var("PORTFOLIO__EMAIL__SMTP_PASSWORD").is_err() {
                builder = builder.set_override("email.smtp_password", contact_pass)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.owner_address.is_empty() {
            return Err(
                "email.owner_address (or CONTACT_EMAIL) must be set to receive contact messages"
                    .to_string(),
            );
        }
        Ok(())
    }
}
