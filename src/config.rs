use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::language::Language;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub recipients: Vec<RecipientConfig>,
    /// Stored book-name overrides per language: canonical → stored name.
    #[serde(default)]
    pub books: HashMap<Language, HashMap<String, String>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_chunk_limit")]
    pub chunk_limit: usize,
    #[serde(default = "default_summary_delay_ms")]
    pub summary_delay_ms: u64,
    #[serde(default = "default_passage_delay_ms")]
    pub passage_delay_ms: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            token_env: default_token_env(),
            chunk_limit: default_chunk_limit(),
            summary_delay_ms: default_summary_delay_ms(),
            passage_delay_ms: default_passage_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_provider() -> String {
    "stdout".to_string()
}
fn default_token_env() -> String {
    "TELEGRAM_TOKEN".to_string()
}
fn default_chunk_limit() -> usize {
    4000
}
fn default_summary_delay_ms() -> u64 {
    500
}
fn default_passage_delay_ms() -> u64 {
    300
}
fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    #[serde(default = "default_plan_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            dir: default_plan_dir(),
            utc_offset_hours: default_utc_offset(),
        }
    }
}

fn default_plan_dir() -> PathBuf {
    PathBuf::from("./plans")
}
fn default_utc_offset() -> i32 {
    9
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipientConfig {
    pub language: Language,
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Environment variable holding the chat id, used when `chat_id` is unset.
    #[serde(default)]
    pub chat_id_env: Option<String>,
}

impl RecipientConfig {
    /// The configured chat id, or `None` if neither source yields a value.
    pub fn resolve_chat_id(&self) -> Option<String> {
        if let Some(id) = self.chat_id.as_ref().filter(|id| !id.trim().is_empty()) {
            return Some(id.clone());
        }
        self.chat_id_env
            .as_ref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|id| !id.trim().is_empty())
    }
}

impl Config {
    /// Config with defaults for everything except the database path.
    pub fn with_db(path: impl Into<PathBuf>) -> Self {
        Self {
            db: DbConfig { path: path.into() },
            delivery: DeliveryConfig::default(),
            plan: PlanConfig::default(),
            recipients: Vec::new(),
            books: HashMap::new(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.delivery.chunk_limit == 0 {
        anyhow::bail!("delivery.chunk_limit must be > 0");
    }

    match config.delivery.provider.as_str() {
        "stdout" | "telegram" => {}
        other => anyhow::bail!(
            "Unknown delivery provider: '{}'. Must be stdout or telegram.",
            other
        ),
    }

    if !(-12..=14).contains(&config.plan.utc_offset_hours) {
        anyhow::bail!("plan.utc_offset_hours must be in [-12, 14]");
    }

    for (i, recipient) in config.recipients.iter().enumerate() {
        if recipient.chat_id.is_none() && recipient.chat_id_env.is_none() {
            anyhow::bail!(
                "recipients[{}] ({}) needs chat_id or chat_id_env",
                i,
                recipient.language.code()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> Result<Config> {
        let config: Config = toml::from_str(toml_str)?;
        validate(&config)?;
        Ok(config)
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = parse("[db]\npath = \"bible.sqlite\"\n").unwrap();
        assert_eq!(config.delivery.provider, "stdout");
        assert_eq!(config.delivery.chunk_limit, 4000);
        assert_eq!(config.plan.utc_offset_hours, 9);
        assert!(config.recipients.is_empty());
    }

    #[test]
    fn test_recipients_and_book_overrides() {
        let config = parse(
            r#"
[db]
path = "bible.sqlite"

[[recipients]]
language = "EN"
chat_id = "-100123"

[[recipients]]
language = "mn"
chat_id_env = "MN_CHAT_ID"

[books.en]
"시" = "Psalms"
"#,
        )
        .unwrap();
        assert_eq!(config.recipients.len(), 2);
        assert_eq!(config.recipients[0].language, Language::En);
        assert_eq!(
            config.recipients[0].resolve_chat_id().as_deref(),
            Some("-100123")
        );
        assert_eq!(config.books[&Language::En]["시"], "Psalms");
    }

    #[test]
    fn test_unknown_book_language_rejected() {
        assert!(parse("[db]\npath = \"x\"\n[books.fr]\n\"시\" = \"Psaumes\"\n").is_err());
    }

    #[test]
    fn test_zero_chunk_limit_rejected() {
        let err = parse("[db]\npath = \"x\"\n[delivery]\nchunk_limit = 0\n").unwrap_err();
        assert!(err.to_string().contains("chunk_limit"));
    }

    #[test]
    fn test_recipient_without_chat_id_rejected() {
        assert!(parse("[db]\npath = \"x\"\n[[recipients]]\nlanguage = \"ko\"\n").is_err());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!(parse("[db]\npath = \"x\"\n[delivery]\nprovider = \"smtp\"\n").is_err());
    }
}
