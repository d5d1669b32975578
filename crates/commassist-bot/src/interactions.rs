//! Interaction dispatch
//!
//! Buttons open modals or regenerate; modal submissions run one flow. Any
//! collaborator call happens after the interaction has been deferred.

use std::sync::Arc;

use commassist_llm::Collaborator;
use commassist_types::Modal;
use serenity::builder::{
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};
use serenity::http::Http;
use serenity::model::application::{ComponentInteraction, ModalInteraction};
use serenity::model::id::InteractionId;
use tracing::{debug, warn};

use crate::custom_id::{ComponentAction, ModalKind};
use crate::errors::log_error;
use crate::flows::{self, Reply};
use crate::health::AppState;
use crate::render;
use crate::views::{AnalyzeMessageModal, GenerateResponseModal, ResponseView};

pub const STALE_RESPONSE: &str =
    "This response can no longer be regenerated. Please generate a new message.";
pub const UNKNOWN_ACTION: &str = "This action is no longer available. Please open the menu again.";

/// Sends the single response (and optional followup) an interaction allows.
pub struct Responder {
    http: Arc<Http>,
    id: InteractionId,
    token: String,
    deferred: bool,
}

impl Responder {
    pub fn new(http: Arc<Http>, id: InteractionId, token: impl Into<String>) -> Self {
        Self {
            http,
            id,
            token: token.into(),
            deferred: false,
        }
    }

    pub async fn open_modal(&self, modal: &Modal) {
        let response = CreateInteractionResponse::Modal(render::modal(modal));
        if let Err(e) = self
            .http
            .create_interaction_response(self.id, &self.token, &response, Vec::new())
            .await
        {
            log_error("Failed to open modal", &e);
        }
    }

    /// Acknowledge now and answer later with [`Responder::send`].
    pub async fn defer(&mut self) {
        let response = CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new());
        match self
            .http
            .create_interaction_response(self.id, &self.token, &response, Vec::new())
            .await
        {
            Ok(()) => self.deferred = true,
            Err(e) => log_error("Failed to defer interaction", &e),
        }
    }

    /// Deliver a reply, as the initial response or as a followup once deferred.
    pub async fn send(&self, reply: Reply) {
        debug!(
            ephemeral = reply.is_ephemeral(),
            deferred = self.deferred,
            "Sending reply"
        );
        if self.deferred {
            self.follow_up(reply).await;
        } else {
            self.respond(reply).await;
        }
    }

    async fn respond(&self, reply: Reply) {
        let mut msg = CreateInteractionResponseMessage::new();
        match reply {
            Reply::View(view) => {
                msg = msg
                    .embed(render::embed(&view.embed))
                    .components(render::action_rows(&view.rows));
            }
            Reply::Text(text) => msg = msg.content(text),
            Reply::Notice(text) => msg = msg.content(text).ephemeral(true),
        }

        let response = CreateInteractionResponse::Message(msg);
        if let Err(e) = self
            .http
            .create_interaction_response(self.id, &self.token, &response, Vec::new())
            .await
        {
            log_error("Failed to respond to interaction", &e);
        }
    }

    async fn follow_up(&self, reply: Reply) {
        let mut builder = CreateInteractionResponseFollowup::new();
        match reply {
            Reply::View(view) => {
                builder = builder
                    .embed(render::embed(&view.embed))
                    .components(render::action_rows(&view.rows));
            }
            Reply::Text(text) => builder = builder.content(text),
            Reply::Notice(text) => {
                // The first followup inherits the deferred message's
                // visibility, so the public placeholder has to go first.
                if let Err(e) = self
                    .http
                    .delete_original_interaction_response(&self.token)
                    .await
                {
                    log_error("Failed to delete deferred response", &e);
                }
                builder = builder.content(text).ephemeral(true);
            }
        }

        if let Err(e) = self
            .http
            .create_followup_message(&self.token, &builder, Vec::new())
            .await
        {
            log_error("Failed to send followup", &e);
        }
    }
}

/// Handle a button click.
pub async fn handle_component<C: Collaborator>(
    http: Arc<Http>,
    assistant: &C,
    health: Option<&AppState>,
    comp: &ComponentInteraction,
) {
    let mut responder = Responder::new(http, comp.id, &comp.token);
    let action = ComponentAction::from_custom_id(&comp.data.custom_id);
    debug!(custom_id = %comp.data.custom_id, ?action, "Component interaction");

    match action {
        ComponentAction::OpenGenerateModal => {
            responder.open_modal(&GenerateResponseModal::build()).await;
        }
        ComponentAction::OpenAnalyzeModal => {
            responder.open_modal(&AnalyzeMessageModal::build()).await;
        }
        ComponentAction::Regenerate(params) => {
            let footer = render::first_footer(&comp.message);
            let Some(request) = ResponseView::recover_request(params, footer) else {
                warn!(
                    message_id = %comp.message.id,
                    "Regenerate clicked on a message without context"
                );
                responder.send(Reply::Notice(STALE_RESPONSE.to_string())).await;
                return;
            };
            responder.defer().await;
            let reply = flows::generate(assistant, request).await;
            if let Some(h) = health {
                h.record_generation();
            }
            responder.send(reply).await;
        }
        ComponentAction::Unknown => {
            warn!(custom_id = %comp.data.custom_id, "Unknown component id");
            responder.send(Reply::Notice(UNKNOWN_ACTION.to_string())).await;
        }
    }
}

/// Handle a submitted modal.
pub async fn handle_modal<C: Collaborator>(
    http: Arc<Http>,
    assistant: &C,
    health: Option<&AppState>,
    modal: &ModalInteraction,
) {
    let mut responder = Responder::new(http, modal.id, &modal.token);
    let values = render::modal_values(modal);

    match ModalKind::from_custom_id(&modal.data.custom_id) {
        ModalKind::Generate => {
            let request = match GenerateResponseModal::parse(&values) {
                Ok(r) => r,
                Err(e) => {
                    debug!(error = %e, "Rejected generation input");
                    responder.send(Reply::Notice(e.to_string())).await;
                    return;
                }
            };
            responder.defer().await;
            let reply = flows::generate(assistant, request).await;
            if let Some(h) = health {
                h.record_generation();
            }
            responder.send(reply).await;
        }
        ModalKind::Analyze => {
            let message = match AnalyzeMessageModal::parse(&values) {
                Ok(m) => m,
                Err(e) => {
                    debug!(error = %e, "Rejected analysis input");
                    responder.send(Reply::Notice(e.to_string())).await;
                    return;
                }
            };
            responder.defer().await;
            let reply = flows::analyze(assistant, &message).await;
            if let Some(h) = health {
                h.record_analysis();
            }
            responder.send(reply).await;
        }
        ModalKind::Unknown => {
            warn!(custom_id = %modal.data.custom_id, "Unknown modal id");
            responder.send(Reply::Notice(UNKNOWN_ACTION.to_string())).await;
        }
    }
}
