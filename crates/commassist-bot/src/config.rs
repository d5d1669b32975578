//! Configuration management for commassist-bot

#[path = "config_tests.rs"]
mod config_tests;

use anyhow::{Context, Result};
use commassist_llm::LlmConfig;
pub use commassist_llm::{ReadEnv, SystemEnv};
use serde::{Deserialize, Serialize};
use std::fs;

/// Complete bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord: DiscordBotConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Discord bot specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordBotConfig {
    /// Bot token from the Discord developer portal
    #[serde(default = "default_bot_token")]
    pub bot_token: String,
    /// Prefix for the text command (`!menu` by default)
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Register the `/menu` slash command globally on startup
    #[serde(default = "default_true")]
    pub register_slash_command: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_impl(&SystemEnv)
    }

    pub(crate) fn from_env_impl<E: ReadEnv>(env: &E) -> Result<Self> {
        let bot_token = env
            .var("DISCORD_BOT_TOKEN")
            .filter(|v| !v.is_empty())
            .context("DISCORD_BOT_TOKEN not set")?;

        let command_prefix = env
            .var("COMMAND_PREFIX")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_command_prefix);

        let register_slash_command = env
            .var("DISCORD_REGISTER_SLASH_COMMAND")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let llm = LlmConfig::from_env(env)?;

        Ok(Config {
            discord: DiscordBotConfig {
                bot_token,
                command_prefix,
                register_slash_command,
            },
            llm,
        })
    }

    /// Check the settings every interaction depends on.
    pub fn validate(&self) -> Result<()> {
        if self.discord.bot_token.is_empty() {
            anyhow::bail!("Discord bot token is empty (set DISCORD_BOT_TOKEN)");
        }
        if self.discord.command_prefix.trim().is_empty() {
            anyhow::bail!("Command prefix must not be blank");
        }
        self.llm.validate()?;
        Ok(())
    }
}

fn default_bot_token() -> String {
    std::env::var("DISCORD_BOT_TOKEN").unwrap_or_default()
}

fn default_command_prefix() -> String {
    "!".to_string()
}

fn default_true() -> bool {
    true
}
