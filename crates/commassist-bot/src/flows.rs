//! Generation and analysis round-trips
//!
//! Each flow performs exactly one collaborator call and turns the outcome
//! into a [`Reply`]. Nothing here touches Discord.

use commassist_llm::Collaborator;
use commassist_types::{
    GenerationRequest, GenerationResult, MESSAGE_CONTENT_LIMIT, is_error_text, parse_analysis,
    truncate,
};
use tracing::{debug, warn};

use crate::views::{AnalysisView, GENERATION_FAILED, ResponseView, View};

/// What to send back for one interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Public message with an embed and its buttons.
    View(View),
    /// Public plain-text message.
    Text(String),
    /// Message only the invoking user can see.
    Notice(String),
}

impl Reply {
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Notice(_))
    }
}

/// Call the generation collaborator and render its variations.
pub async fn generate<C: Collaborator>(assistant: &C, request: GenerationRequest) -> Reply {
    debug!(
        recipient = %request.recipient(),
        content = %request.content(),
        count = %request.count(),
        "Generating variations"
    );

    let variations = match assistant.generate(&request).await {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Generation collaborator failed");
            return Reply::Text(GENERATION_FAILED.to_string());
        }
    };

    let result = GenerationResult::new(variations, request.count());
    if result.is_empty() {
        warn!("Generation collaborator returned no usable variations");
        return Reply::Text(GENERATION_FAILED.to_string());
    }

    Reply::View(ResponseView::new(request, result).view())
}

/// Call the analysis collaborator and render the parsed report.
pub async fn analyze<C: Collaborator>(assistant: &C, message: &str) -> Reply {
    let raw = assistant.analyze(message).await;

    if is_error_text(&raw) {
        return Reply::Notice(truncate(&raw, MESSAGE_CONTENT_LIMIT));
    }

    match parse_analysis(&raw) {
        Ok(analysis) => Reply::View(AnalysisView::new(&analysis).view()),
        Err(e) => {
            warn!(error = %e, "Analysis output did not match the expected format");
            Reply::Notice(format!("Could not read the analysis: {e}. Please try again."))
        }
    }
}

#[cfg(test)]
#[path = "flows_tests.rs"]
mod flows_tests;
