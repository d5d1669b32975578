//! Component custom ids and their interpretation
//!
//! Every button and modal the bot shows carries one of these ids. The
//! regenerate button additionally encodes the request parameters, so a
//! click can be served without any bot-side state.

use commassist_types::{ContentType, RecipientType, VariationCount};

pub const MENU_GENERATE: &str = "menu:generate";
pub const MENU_ANALYZE: &str = "menu:analyze";
pub const RESPONSE_NEW: &str = "response:new";
pub const RESPONSE_ANALYZE: &str = "response:analyze";
pub const ANALYSIS_GENERATE: &str = "analysis:generate";
pub const ANALYSIS_ANALYZE: &str = "analysis:analyze";
const REGENERATE_PREFIX: &str = "response:regenerate:";

pub const MODAL_GENERATE: &str = "modal:generate";
pub const MODAL_ANALYZE: &str = "modal:analyze";

pub const INPUT_MESSAGE: &str = "message";
pub const INPUT_RECIPIENT: &str = "recipient";
pub const INPUT_CONTENT: &str = "content";
pub const INPUT_COUNT: &str = "count";
pub const INPUT_RECEIVED: &str = "received";

/// Parameters of a previous request, minus the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerateParams {
    pub recipient: RecipientType,
    pub content: ContentType,
    pub count: VariationCount,
}

impl RegenerateParams {
    pub fn custom_id(&self) -> String {
        format!(
            "{REGENERATE_PREFIX}{}:{}:{}",
            self.recipient.code(),
            self.content.code(),
            self.count
        )
    }

    fn parse(rest: &str) -> Option<Self> {
        let mut parts = rest.split(':');
        let recipient = RecipientType::from_code(parts.next()?)?;
        let content = ContentType::from_code(parts.next()?)?;
        let count = VariationCount::from_input(Some(parts.next()?));
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            recipient,
            content,
            count,
        })
    }
}

/// What a button click asks the bot to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    OpenGenerateModal,
    OpenAnalyzeModal,
    Regenerate(RegenerateParams),
    Unknown,
}

impl ComponentAction {
    pub fn from_custom_id(custom_id: &str) -> Self {
        match custom_id {
            MENU_GENERATE | RESPONSE_NEW | ANALYSIS_GENERATE => Self::OpenGenerateModal,
            MENU_ANALYZE | RESPONSE_ANALYZE | ANALYSIS_ANALYZE => Self::OpenAnalyzeModal,
            other => other
                .strip_prefix(REGENERATE_PREFIX)
                .and_then(RegenerateParams::parse)
                .map(Self::Regenerate)
                .unwrap_or(Self::Unknown),
        }
    }
}

/// Which form a modal submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Generate,
    Analyze,
    Unknown,
}

impl ModalKind {
    pub fn from_custom_id(custom_id: &str) -> Self {
        match custom_id {
            MODAL_GENERATE => Self::Generate,
            MODAL_ANALYZE => Self::Analyze,
            _ => Self::Unknown,
        }
    }
}
