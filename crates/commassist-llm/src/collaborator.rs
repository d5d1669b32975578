use std::future::Future;

use commassist_types::{ERROR_MARKER, GenerationRequest, Variation, parse_variations};
use tracing::warn;

use crate::client::OpenAiClient;
use crate::error::Result;
use crate::prompts::{
    ANALYSIS_SYSTEM_PROMPT, GENERATION_SYSTEM_PROMPT, analysis_prompt, generation_prompt,
};

/// The external text-generation service, as seen by the bot.
///
/// Two operations, one per menu entry. Implement this to replace the
/// network call in tests.
pub trait Collaborator: Send + Sync + 'static {
    /// Produce polite rewrites of the request's message.
    ///
    /// An empty vector means the collaborator had nothing usable to return.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Vec<Variation>>> + Send;

    /// Analyze a received message and return the raw analysis text.
    ///
    /// Failures are reported inside the text, prefixed with
    /// [`ERROR_MARKER`], so callers only ever deal with a string.
    fn analyze(&self, message: &str) -> impl Future<Output = String> + Send;
}

impl Collaborator for OpenAiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Variation>> {
        let raw = self
            .complete_json(GENERATION_SYSTEM_PROMPT, &generation_prompt(request))
            .await?;
        let mut variations = parse_variations(&raw)?;
        if !request.content().has_subject() {
            for v in &mut variations {
                v.subject = None;
            }
        }
        Ok(variations)
    }

    async fn analyze(&self, message: &str) -> String {
        match self
            .complete_json(ANALYSIS_SYSTEM_PROMPT, &analysis_prompt(message))
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Analysis request failed");
                format!(
                    "{ERROR_MARKER} the analysis service is unavailable ({})",
                    e.brief()
                )
            }
        }
    }
}
