#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use portfolio::config::{Config, EmailConfig, ObservabilityConfig, ServerConfig};
use portfolio::mailer::{Mailer, OutboundEmail};
use portfolio::routes::AppState;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig::default(),
        email: EmailConfig {
            owner_address: "owner@example.com".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: "Portfolio".to_string(),
            ..EmailConfig::default()
        },
        observability: ObservabilityConfig::default(),
    }
}

/// Mailer substitute that records every accepted message.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<()> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Mailer substitute that rejects every message.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<()> {
        Err(anyhow::anyhow!("smtp: 535 authentication failed"))
    }
}

pub fn app_with(mailer: Arc<dyn Mailer>) -> Router {
    portfolio::routes::router(AppState {
        config: test_config(),
        mailer,
    })
}
