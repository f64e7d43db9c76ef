//! TOML configuration for the example bot.

use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::info;

use botgram_client::PollerConfig;
use botgram_types::UpdateKind;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}

/// Bot account settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token from @BotFather; falls back to the
    /// `TELEGRAM_BOT_TOKEN` env var when empty.
    #[serde(default)]
    pub bot_token: String,
    /// API host; override for a local Bot API server.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl TelegramConfig {
    /// Token from config, or the `TELEGRAM_BOT_TOKEN` env var.
    pub fn resolve_token(&self) -> Option<String> {
        if !self.bot_token.is_empty() {
            return Some(self.bot_token.clone());
        }
        std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
    }
}

/// Long-polling settings, mapped onto
/// [`PollerConfig`](botgram_client::PollerConfig).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
    /// Max updates per batch, 1-100; absent uses the server default.
    #[serde(default)]
    pub limit: Option<u8>,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    /// Update kinds to subscribe to; empty means all kinds.
    #[serde(default)]
    pub allowed_updates: Vec<UpdateKind>,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            limit: None,
            retry_delay_secs: default_retry_delay_secs(),
            queue_capacity: default_queue_capacity(),
            allowed_updates: Vec::new(),
        }
    }
}

impl PollingConfig {
    pub fn to_poller_config(&self) -> PollerConfig {
        PollerConfig {
            limit: self.limit,
            timeout_secs: self.timeout_secs,
            allowed_updates: self.allowed_updates.clone(),
            retry_delay: Duration::from_secs(self.retry_delay_secs),
            queue_capacity: self.queue_capacity,
        }
    }
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_timeout_secs() -> u32 {
    30
}

fn default_retry_delay_secs() -> u64 {
    3
}

fn default_queue_capacity() -> usize {
    100
}

/// Load config from `path`, falling back to defaults when the file
/// does not exist.
pub fn load(path: &str) -> anyhow::Result<Config> {
    let path = Path::new(path);
    if !path.exists() {
        info!("config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.telegram.api_url, "https://api.telegram.org");
        assert_eq!(cfg.polling.timeout_secs, 30);
        assert_eq!(cfg.polling.retry_delay_secs, 3);
        assert_eq!(cfg.polling.queue_capacity, 100);
        assert!(cfg.polling.allowed_updates.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_str = r#"
            [telegram]
            bot_token = "123:abc"

            [polling]
            timeout_secs = 50
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.telegram.bot_token, "123:abc");
        assert_eq!(cfg.telegram.api_url, "https://api.telegram.org");
        assert_eq!(cfg.polling.timeout_secs, 50);
        assert_eq!(cfg.polling.retry_delay_secs, 3);
    }

    #[test]
    fn test_allowed_updates_from_toml() {
        let toml_str = r#"
            [polling]
            allowed_updates = ["message", "callback_query"]
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            cfg.polling.allowed_updates,
            vec![UpdateKind::Message, UpdateKind::CallbackQuery]
        );
    }

    #[test]
    fn test_to_poller_config() {
        let polling = PollingConfig {
            timeout_secs: 10,
            limit: Some(50),
            retry_delay_secs: 1,
            queue_capacity: 16,
            allowed_updates: vec![UpdateKind::Message],
        };
        let poller = polling.to_poller_config();
        assert_eq!(poller.timeout_secs, 10);
        assert_eq!(poller.limit, Some(50));
        assert_eq!(poller.retry_delay, Duration::from_secs(1));
        assert_eq!(poller.queue_capacity, 16);
        assert_eq!(poller.allowed_updates, vec![UpdateKind::Message]);
    }
}
