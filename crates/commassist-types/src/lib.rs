//! Shared types for the communication assistant
//!
//! Holds the request/result data model exchanged with the text-generation
//! collaborator and a platform-neutral description of the embeds, buttons and
//! modals the bot presents.

pub mod analysis;
pub mod errors;
pub mod generation;
mod payload;
pub mod request;
pub mod ui;

pub use analysis::{
    AnalysisResult, ERROR_MARKER, FormatError, ResponseSuggestions, is_error_text, parse_analysis,
};
pub use errors::{DiscordErrorCode, ErrorCategory};
pub use generation::{GenerationResult, Variation, parse_variations};
pub use request::{
    ContentType, GenerationRequest, InputError, MAX_MESSAGE_CHARS, RecipientType, VariationCount,
};
pub use ui::*;
