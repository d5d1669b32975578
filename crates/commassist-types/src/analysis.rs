//! Message analysis result and its parser

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::json_object;

/// Marker the analysis collaborator puts in its raw output on failure.
pub const ERROR_MARKER: &str = "Error:";

/// True when the raw analysis output reports a collaborator error.
///
/// The marker has to lead the text. A well-formed analysis that merely
/// quotes "Error:" from the analyzed message is not a failure.
pub fn is_error_text(raw: &str) -> bool {
    raw.trim_start().starts_with(ERROR_MARKER)
}

/// Collaborator output that does not match the expected structure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("output is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` is empty")]
    EmptyField(&'static str),
}

/// Suggested replies, one per tone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseSuggestions {
    pub positive: String,
    pub neutral: String,
    pub negative: String,
}

/// Structured analysis of a received message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub primary_emotion: String,
    pub social_cues: Vec<String>,
    pub keywords: Vec<String>,
    pub summary: String,
    pub response_suggestions: ResponseSuggestions,
}

#[derive(Deserialize)]
struct RawSuggestions {
    positive: Option<String>,
    neutral: Option<String>,
    negative: Option<String>,
}

#[derive(Deserialize)]
struct RawAnalysis {
    #[serde(alias = "emotion")]
    primary_emotion: Option<String>,
    #[serde(alias = "cues")]
    social_cues: Option<Vec<String>>,
    keywords: Option<Vec<String>>,
    summary: Option<String>,
    #[serde(alias = "responses")]
    response_suggestions: Option<RawSuggestions>,
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, FormatError> {
    let value = value.ok_or(FormatError::MissingField(field))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(FormatError::EmptyField(field));
    }
    Ok(value.to_string())
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Parse raw collaborator output into an [`AnalysisResult`].
///
/// All five top-level fields and all three suggestions must be present.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, FormatError> {
    let parsed: RawAnalysis = serde_json::from_str(json_object(raw))
        .map_err(|e| FormatError::InvalidJson(e.to_string()))?;

    let primary_emotion = required_text(parsed.primary_emotion, "primary_emotion")?;
    let social_cues = clean_list(
        parsed
            .social_cues
            .ok_or(FormatError::MissingField("social_cues"))?,
    );
    let keywords = clean_list(parsed.keywords.ok_or(FormatError::MissingField("keywords"))?);
    let summary = required_text(parsed.summary, "summary")?;
    let suggestions = parsed
        .response_suggestions
        .ok_or(FormatError::MissingField("response_suggestions"))?;

    Ok(AnalysisResult {
        primary_emotion,
        social_cues,
        keywords,
        summary,
        response_suggestions: ResponseSuggestions {
            positive: required_text(suggestions.positive, "response_suggestions.positive")?,
            neutral: required_text(suggestions.neutral, "response_suggestions.neutral")?,
            negative: required_text(suggestions.negative, "response_suggestions.negative")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "primary_emotion": "remorse",
        "social_cues": ["apologetic tone", "acknowledges frustration"],
        "keywords": ["sorry", "delay", "upset"],
        "summary": "The sender apologizes for a delay and recognizes the reader is upset.",
        "response_suggestions": {
            "positive": "Thanks for letting me know, no worries!",
            "neutral": "Understood. When can I expect it?",
            "negative": "This delay has caused real problems for me."
        }
    }"#;

    #[test]
    fn test_parse_well_formed() {
        let a = parse_analysis(WELL_FORMED).unwrap();
        assert_eq!(a.primary_emotion, "remorse");
        assert_eq!(a.social_cues.len(), 2);
        assert_eq!(a.keywords, vec!["sorry", "delay", "upset"]);
        assert!(!a.summary.is_empty());
        assert!(a.response_suggestions.positive.starts_with("Thanks"));
        assert!(a.response_suggestions.neutral.starts_with("Understood"));
        assert!(a.response_suggestions.negative.starts_with("This delay"));
    }

    #[test]
    fn test_parse_accepts_short_aliases() {
        let raw = r#"{"emotion":"joy","cues":["exclamation"],"keywords":["yay"],
            "summary":"Happy.","responses":{"positive":"a","neutral":"b","negative":"c"}}"#;
        let a = parse_analysis(raw).unwrap();
        assert_eq!(a.primary_emotion, "joy");
        assert_eq!(a.social_cues, vec!["exclamation"]);
    }

    #[test]
    fn test_parse_missing_field() {
        let raw = r#"{"primary_emotion":"joy","social_cues":[],"keywords":[],
            "response_suggestions":{"positive":"a","neutral":"b","negative":"c"}}"#;
        assert_eq!(
            parse_analysis(raw).unwrap_err(),
            FormatError::MissingField("summary")
        );
    }

    #[test]
    fn test_parse_missing_suggestion() {
        let raw = r#"{"primary_emotion":"joy","social_cues":[],"keywords":[],"summary":"s",
            "response_suggestions":{"positive":"a","negative":"c"}}"#;
        assert_eq!(
            parse_analysis(raw).unwrap_err(),
            FormatError::MissingField("response_suggestions.neutral")
        );
    }

    #[test]
    fn test_parse_blank_emotion() {
        let raw = r#"{"primary_emotion":"  ","social_cues":[],"keywords":[],"summary":"s",
            "response_suggestions":{"positive":"a","neutral":"b","negative":"c"}}"#;
        assert_eq!(
            parse_analysis(raw).unwrap_err(),
            FormatError::EmptyField("primary_emotion")
        );
    }

    #[test]
    fn test_parse_free_text_is_format_error() {
        let raw = "Primary Emotion: joy\nSocial Cues: none";
        assert!(matches!(
            parse_analysis(raw),
            Err(FormatError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_error_marker_detection() {
        assert!(is_error_text("Error: upstream timed out"));
        assert!(is_error_text("  \nError: 500"));
        assert!(!is_error_text(WELL_FORMED));
    }

    #[test]
    fn test_quoted_marker_is_not_an_error() {
        let raw = r#"{
            "primary_emotion": "frustration",
            "social_cues": ["quotes a failing build log"],
            "keywords": ["Error: build failed"],
            "summary": "The sender reports Error: build failed on CI.",
            "response_suggestions": {
                "positive": "Thanks for flagging it!",
                "neutral": "I will look at the build.",
                "negative": "Not again."
            }
        }"#;
        assert!(!is_error_text(raw));
        assert_eq!(parse_analysis(raw).unwrap().keywords, ["Error: build failed"]);
    }
}
