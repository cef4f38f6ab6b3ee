mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use support_texts::{language, Localizer, PlaceholderPolicy};
use tracing::info;

use crate::error::SupportError;
use defaults::*;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub texts: TextsConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Localized text settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextsConfig {
    /// Language used when a requested code is unsupported.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Check every text group for key and placeholder parity before serving.
    #[serde(default = "default_true")]
    pub validate_on_start: bool,
    /// `keep` leaves unknown `{name}` tokens as-is, `error` rejects them.
    #[serde(default)]
    pub unresolved_placeholder: PlaceholderPolicy,
    /// HTML-escape substituted values (templates are Telegram HTML).
    #[serde(default = "default_true")]
    pub escape_html: bool,
}

impl Default for TextsConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            validate_on_start: true,
            unresolved_placeholder: PlaceholderPolicy::default(),
            escape_html: true,
        }
    }
}

impl TextsConfig {
    /// Build the [`Localizer`] these settings describe.
    pub fn localizer(&self) -> Localizer {
        Localizer::new(&self.default_language)
            .with_policy(self.unresolved_placeholder)
            .with_escape_html(self.escape_html)
    }
}

impl Config {
    /// Reject settings that would break text resolution.
    pub fn validate(&self) -> Result<(), SupportError> {
        if !language::is_supported(&self.texts.default_language) {
            return Err(SupportError::Config(format!(
                "texts.default_language '{}' is not a supported language",
                self.texts.default_language
            )));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file, falling back to defaults.
pub fn load(path: &str) -> Result<Config, SupportError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SupportError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| SupportError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    info!("loaded config from {}", path.display());
    Ok(config)
}
