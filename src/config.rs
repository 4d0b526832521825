// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AssistantError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_THRESHOLD: f64 = 0.25;
pub const DEFAULT_REPLY_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub matcher: MatcherConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Optional TOML catalog file; the built-in catalog is used when absent.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatcherConfig {
    pub threshold: f64,
    pub fallback: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    pub greeting: String,
    pub reply_delay_ms: u64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DR_ASSISTANT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AssistantError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            catalog: CatalogConfig { path: None },
            matcher: MatcherConfig {
                threshold: DEFAULT_THRESHOLD,
                fallback: "I'm not sure about that. Could you rephrase or ask something related \
                           to Diabetic Retinopathy?"
                    .to_string(),
            },
            chat: ChatConfig {
                greeting: "👋 Hi! I'm your Diabetic Retinopathy Assistant. Ask me anything about \
                           DR, AI detection, or prevention!"
                    .to_string(),
                reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.matcher.threshold) {
            return Err(AssistantError::Config(
                "matcher threshold must be within [0.0, 1.0]".to_string(),
            ));
        }

        if self.matcher.fallback.trim().is_empty() {
            return Err(AssistantError::Config(
                "matcher fallback message must not be empty".to_string(),
            ));
        }

        if self.chat.greeting.trim().is_empty() {
            return Err(AssistantError::Config(
                "chat greeting must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
