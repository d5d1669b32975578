//! Serenity event handler implementation

use std::sync::Arc;

use commassist_llm::Collaborator;
use serenity::async_trait;
use serenity::builder::CreateMessage;
use serenity::model::application::{Command, Interaction};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{debug, info};

use crate::commands::{self, MENU_COMMAND};
use crate::errors::log_error;
use crate::flows::Reply;
use crate::health::AppState;
use crate::interactions::{self, Responder};
use crate::render;
use crate::views::MainMenu;

pub struct Handler<C> {
    assistant: Arc<C>,
    command_prefix: String,
    register_slash_command: bool,
}

impl<C: Collaborator> Handler<C> {
    pub fn new(assistant: Arc<C>, command_prefix: String, register_slash_command: bool) -> Self {
        Self {
            assistant,
            command_prefix,
            register_slash_command,
        }
    }
}

async fn health_state(ctx: &Context) -> Option<AppState> {
    let data = ctx.data.read().await;
    data.get::<AppState>().cloned()
}

#[async_trait]
impl<C: Collaborator> EventHandler for Handler<C> {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            "Discord bot connected as {}#{:04}",
            ready.user.name,
            ready.user.discriminator.map_or(0, |d| d.get())
        );

        if let Some(health) = health_state(&ctx).await {
            health.set_bot_username(ready.user.name.clone()).await;
        }

        if self.register_slash_command {
            match Command::create_global_command(&ctx.http, commands::menu_command()).await {
                Ok(cmd) => info!("Registered /{} command ({})", cmd.name, cmd.id),
                Err(e) => log_error("Failed to register slash command", &e),
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Skip bot messages
        if msg.author.bot {
            return;
        }
        if !commands::is_menu_invocation(&msg.content, &self.command_prefix) {
            return;
        }

        debug!(channel_id = %msg.channel_id, user_id = %msg.author.id, "Menu requested");
        let view = MainMenu::view();
        let builder = CreateMessage::new()
            .embed(render::embed(&view.embed))
            .components(render::action_rows(&view.rows));

        if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
            log_error("Failed to send menu", &e);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let health = health_state(&ctx).await;

        match interaction {
            Interaction::Command(cmd) => {
                if cmd.data.name != MENU_COMMAND {
                    debug!(command = %cmd.data.name, "Ignoring unknown slash command");
                    return;
                }
                Responder::new(ctx.http.clone(), cmd.id, &cmd.token)
                    .send(Reply::View(MainMenu::view()))
                    .await;
            }
            Interaction::Component(comp) => {
                interactions::handle_component(
                    ctx.http.clone(),
                    self.assistant.as_ref(),
                    health.as_ref(),
                    &comp,
                )
                .await;
            }
            Interaction::Modal(modal) => {
                interactions::handle_modal(
                    ctx.http.clone(),
                    self.assistant.as_ref(),
                    health.as_ref(),
                    &modal,
                )
                .await;
            }
            _ => {
                // Autocomplete and ping interactions are not used
            }
        }
    }
}
