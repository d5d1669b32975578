//! Mock collaborator for unit testing without a real API.
//!
//! Enabled with the `test-support` feature:
//!
//! ```toml
//! [dev-dependencies]
//! commassist-llm = { path = "...", features = ["test-support"] }
//! ```

use std::sync::{Arc, Mutex};

use commassist_types::{GenerationRequest, Variation};

use crate::collaborator::Collaborator;
use crate::error::{Error, Result};

/// Scripted collaborator that records every call.
///
/// By default `generate` returns no variations and `analyze` returns an
/// empty string.
#[derive(Clone, Default)]
pub struct MockCollaborator {
    variations: Arc<Mutex<Vec<Variation>>>,
    fail_generation: Arc<Mutex<bool>>,
    analysis: Arc<Mutex<String>>,
    generate_calls: Arc<Mutex<Vec<GenerationRequest>>>,
    analyze_calls: Arc<Mutex<Vec<String>>>,
}

impl MockCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variations(self, variations: Vec<Variation>) -> Self {
        *self.variations.lock().unwrap() = variations;
        self
    }

    pub fn with_analysis(self, raw: impl Into<String>) -> Self {
        *self.analysis.lock().unwrap() = raw.into();
        self
    }

    /// Make every `generate` call fail with an API error.
    pub fn failing_generation(self) -> Self {
        *self.fail_generation.lock().unwrap() = true;
        self
    }

    pub fn generate_calls(&self) -> Vec<GenerationRequest> {
        self.generate_calls.lock().unwrap().clone()
    }

    pub fn analyze_calls(&self) -> Vec<String> {
        self.analyze_calls.lock().unwrap().clone()
    }
}

impl Collaborator for MockCollaborator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<Variation>> {
        self.generate_calls.lock().unwrap().push(request.clone());
        if *self.fail_generation.lock().unwrap() {
            return Err(Error::Api {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(self.variations.lock().unwrap().clone())
    }

    async fn analyze(&self, message: &str) -> String {
        self.analyze_calls.lock().unwrap().push(message.to_string());
        self.analysis.lock().unwrap().clone()
    }
}
