//! Outbound message delivery.
//!
//! A [`Delivery`] sends one text message to one recipient. Callers chunk
//! text to the transport limit beforehand. Sends are not retried: a failed
//! send is reported to the caller, which logs it and moves on.
//!
//! | Provider | Transport |
//! |----------|-----------|
//! | `telegram` | Telegram Bot API `sendMessage` over HTTPS |
//! | `stdout` | prints messages, for dry runs and local testing |

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;

const TELEGRAM_API: &str = "https://api.telegram.org";

/// A send the transport rejected.
#[derive(Debug, Error)]
#[error("{provider} rejected message to {recipient}: HTTP {status}: {body}")]
pub struct TransportError {
    pub provider: &'static str,
    pub recipient: String,
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Delivery: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &str;

    /// Send `text` as a single message to `recipient`.
    async fn send(&self, recipient: &str, text: &str) -> Result<()>;
}

/// Telegram Bot API delivery.
pub struct TelegramDelivery {
    client: reqwest::Client,
    token: String,
}

impl TelegramDelivery {
    pub fn new(token: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, token })
    }

    fn send_url(&self) -> String {
        format!("{}/bot{}/sendMessage", TELEGRAM_API, self.token)
    }
}

#[async_trait]
impl Delivery for TelegramDelivery {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, recipient: &str, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": recipient,
            "text": text,
        });

        let response = self.client.post(self.send_url()).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body_text = response.text().await.unwrap_or_default();
        Err(TransportError {
            provider: "telegram",
            recipient: recipient.to_string(),
            status: status.as_u16(),
            body: body_text,
        }
        .into())
    }
}

/// Prints every message to stdout.
pub struct StdoutDelivery;

#[async_trait]
impl Delivery for StdoutDelivery {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn send(&self, recipient: &str, text: &str) -> Result<()> {
        println!("--- to {} ---", recipient);
        println!("{}", text);
        println!();
        Ok(())
    }
}

/// Build the configured delivery provider. `dry_run` forces stdout.
pub fn from_config(config: &Config, dry_run: bool) -> Result<Box<dyn Delivery>> {
    if dry_run {
        return Ok(Box::new(StdoutDelivery));
    }

    match config.delivery.provider.as_str() {
        "telegram" => {
            let var = &config.delivery.token_env;
            let token = std::env::var(var)
                .ok()
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| anyhow!("{} not set", var))?;
            let delivery = TelegramDelivery::new(
                token,
                Duration::from_secs(config.delivery.timeout_secs),
            )?;
            Ok(Box::new(delivery))
        }
        _ => Ok(Box::new(StdoutDelivery)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_url() {
        let delivery =
            TelegramDelivery::new("123:abc".to_string(), Duration::from_secs(5)).unwrap();
        assert_eq!(
            delivery.send_url(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_dry_run_forces_stdout() {
        let mut config = Config::with_db("unused.sqlite");
        config.delivery.provider = "telegram".to_string();
        let delivery = from_config(&config, true).unwrap();
        assert_eq!(delivery.name(), "stdout");
    }

    #[test]
    fn test_telegram_requires_token() {
        let mut config = Config::with_db("unused.sqlite");
        config.delivery.provider = "telegram".to_string();
        config.delivery.token_env = "DV_TEST_TOKEN_THAT_IS_NEVER_SET".to_string();
        let err = from_config(&config, false).err().unwrap();
        assert!(err.to_string().contains("DV_TEST_TOKEN_THAT_IS_NEVER_SET"));
    }
}
