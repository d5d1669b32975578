//! Generated message variations

use serde::{Deserialize, Serialize};

use crate::analysis::FormatError;
use crate::payload::json_value;
use crate::request::VariationCount;

/// One polite rewrite of the user's message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variation {
    /// Present for emails only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
}

impl Variation {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            subject: None,
            body: body.into(),
        }
    }

    pub fn email(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            body: body.into(),
        }
    }
}

/// Ordered variations returned for one request, capped at the requested count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    variations: Vec<Variation>,
}

impl GenerationResult {
    /// Drop entries with a blank body and truncate to `count`.
    pub fn new(variations: Vec<Variation>, count: VariationCount) -> Self {
        let variations = variations
            .into_iter()
            .filter(|v| !v.body.trim().is_empty())
            .take(count.get())
            .collect();
        Self { variations }
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVariations {
    Wrapped { variations: Vec<Variation> },
    Bare(Vec<Variation>),
}

/// Parse the collaborator's JSON reply for a generation request.
///
/// Accepts `{"variations": [...]}` or a bare array of `{subject?, body}`.
pub fn parse_variations(raw: &str) -> Result<Vec<Variation>, FormatError> {
    match serde_json::from_str::<RawVariations>(json_value(raw)) {
        Ok(RawVariations::Wrapped { variations }) | Ok(RawVariations::Bare(variations)) => {
            Ok(variations)
        }
        Err(e) => Err(FormatError::InvalidJson(e.to_string())),
    }
}
