//! Communication Assistant Discord bot
//!
//! Presents a menu with two tasks: rephrasing a message politely for a given
//! recipient, and analyzing the tone of a received message. Both are served
//! by an OpenAI-compatible collaborator.

mod commands;
mod config;
mod custom_id;
mod errors;
mod flows;
mod handlers;
mod health;
mod interactions;
mod render;
mod views;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use commassist_llm::OpenAiClient;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::Handler;
use crate::health::AppState;

/// Communication Assistant bot CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/commassist-bot.toml")]
    config: String,

    /// Discord bot token (overrides config file)
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    bot_token: Option<String>,

    /// Text command prefix (overrides config file)
    #[arg(long, env = "COMMAND_PREFIX")]
    prefix: Option<String>,

    /// OpenAI API key (overrides config file)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Health check server port
    #[arg(long, env = "HEALTH_CHECK_PORT", default_value = "3001")]
    health_port: u16,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(bot_token) = &self.bot_token {
            config.discord.bot_token = bot_token.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.discord.command_prefix = prefix.clone();
        }
        if let Some(key) = &self.openai_api_key {
            config.llm.api_key = key.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commassist_bot=debug,commassist_llm=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Communication Assistant bot");

    let args = Args::parse();

    // Load configuration
    let mut config = if std::path::Path::new(&args.config).exists() {
        info!("Loading config from file: {}", args.config);
        Config::from_file(&args.config)?
    } else {
        info!("Config file not found, loading from environment");
        Config::from_env()?
    };
    args.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    info!(
        "Command prefix: {:?}, model: {}",
        config.discord.command_prefix, config.llm.model
    );

    let assistant = Arc::new(
        OpenAiClient::new(config.llm.clone()).context("Failed to build the LLM client")?,
    );

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILDS;

    let handler = Handler::new(
        assistant,
        config.discord.command_prefix.clone(),
        config.discord.register_slash_command,
    );

    let mut client = Client::builder(&config.discord.bot_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create Discord client: {}", e))?;

    let health_state = AppState::new();
    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(health_state.clone());
    }

    // Start health check server
    let health_port = args.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::start_health_server(health_state, health_port).await {
            error!("Health server error: {}", e);
        }
    });

    // Graceful shutdown: close all shards on SIGTERM or Ctrl+C.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        wait_for_shutdown().await;
        info!("Shutdown signal received, stopping Discord client...");
        shard_manager.shutdown_all().await;
    });

    info!("Starting Discord gateway connection...");

    // Blocks until all shards are stopped
    client
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Discord client error: {}", e))?;

    info!("Discord bot stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                warn!("Could not install SIGTERM handler, only Ctrl+C will stop the bot: {}", e);
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok();
    }
}
