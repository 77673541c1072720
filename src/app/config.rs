//! Handles loading and saving of the overlay configuration.
//!
//! Settings merge in increasing precedence: the repo-level base file
//! (`config/app_config.toml`), the per-user file in the platform config
//! directory, and `OVERCHAT_`-prefixed environment variables. The channel
//! name is the one required value.

use eyre::{Context, eyre};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// How many messages the chat log keeps before dropping the oldest.
pub const DEFAULT_MESSAGE_COUNT_LIMIT: usize = 20;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Channel whose chat the overlay joins.
    pub channel: String,
    /// `0` keeps the full history.
    pub message_count_limit: usize,
    pub font_size: f32,
    pub emote_size: f32,
    pub show_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: String::new(),
            message_count_limit: DEFAULT_MESSAGE_COUNT_LIMIT,
            font_size: 16.0,
            emote_size: 24.0,
            show_timestamps: false,
        }
    }
}

fn get_config_path() -> Result<PathBuf, eyre::Report> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| eyre!("Could not find a config directory"))?
        .join(env!("CARGO_PKG_NAME"));

    Ok(config_dir.join("app_config.toml"))
}

pub async fn load() -> Result<Config, eyre::Report> {
    let user_config_path = get_config_path()?;
    tracing::info!("Loading user config from {:?}", user_config_path);

    let base_config_path = "config/app_config.toml";

    let config: Config = Figment::new()
        .merge(Toml::file(base_config_path))
        .merge(Toml::file(&user_config_path))
        .merge(Env::prefixed("OVERCHAT_"))
        .extract()
        .context("Could not load config")?;

    if !user_config_path.exists() {
        if let Err(e) = save(&config).await {
            tracing::warn!("Failed to save initial config: {}", e);
        }
    }

    Ok(config)
}

pub async fn save(config: &Config) -> Result<(), eyre::Report> {
    let path = get_config_path()?;
    tracing::info!("Saving config to {:?}", path);

    let bytes = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }
    }

    let mut file = tokio::fs::File::create(path)
        .await
        .context("Failed to create config file")?;

    file.write_all(bytes.as_bytes())
        .await
        .context("Failed to write config to file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_matches_the_overlay_history() {
        let config = Config::default();
        assert_eq!(config.message_count_limit, DEFAULT_MESSAGE_COUNT_LIMIT);
        assert_eq!(config.message_count_limit, 20);
        assert!(config.channel.is_empty());
    }
}
