//! Generation request and the interpretation of modal input

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest message accepted for generation, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1500;

/// Rejected user input. The display text is shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Your message is empty. Please write something to rephrase.")]
    EmptyMessage,

    #[error("Your message is too long ({len} characters, at most {max}).")]
    MessageTooLong { len: usize, max: usize },

    #[error("Unknown recipient type '{0}'. Please use Professor or Classmate.")]
    UnknownRecipient(String),

    #[error("Unknown content type '{0}'. Please use Text or Email.")]
    UnknownContentType(String),
}

/// Who the generated message is addressed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecipientType {
    Professor,
    Classmate,
}

impl RecipientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professor => "Professor",
            Self::Classmate => "Classmate",
        }
    }

    /// Single-letter code used inside component custom ids.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Professor => "p",
            Self::Classmate => "c",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(Self::Professor),
            "c" => Some(Self::Classmate),
            _ => None,
        }
    }
}

impl FromStr for RecipientType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "professor" => Ok(Self::Professor),
            "classmate" => Ok(Self::Classmate),
            _ => Err(InputError::UnknownRecipient(trimmed.to_string())),
        }
    }
}

impl fmt::Display for RecipientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medium of the generated message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Email,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Email => "Email",
        }
    }

    /// Emails carry a subject line; text messages never do.
    pub fn has_subject(&self) -> bool {
        matches!(self, Self::Email)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Text => "t",
            Self::Email => "e",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "t" => Some(Self::Text),
            "e" => Some(Self::Email),
            _ => None,
        }
    }
}

impl FromStr for ContentType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "email" | "e-mail" => Ok(Self::Email),
            _ => Err(InputError::UnknownContentType(trimmed.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of variations to generate, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariationCount(u8);

impl VariationCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 2;

    /// Clamp an arbitrary count into range.
    pub fn clamped(n: u64) -> Self {
        Self(n.clamp(Self::MIN as u64, Self::MAX as u64) as u8)
    }

    /// Interpret the optional free-text count field.
    ///
    /// Absent, blank or non-digit input falls back to the default. Digit
    /// strings are clamped, including ones too large to parse.
    pub fn from_input(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Self::default();
        }
        match raw.parse::<u64>() {
            Ok(n) => Self::clamped(n),
            Err(_) => Self(Self::MAX),
        }
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Default for VariationCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for VariationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One validated generation request. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    message: String,
    recipient: RecipientType,
    content: ContentType,
    count: VariationCount,
}

impl GenerationRequest {
    pub fn new(
        message: impl Into<String>,
        recipient: RecipientType,
        content: ContentType,
        count: VariationCount,
    ) -> Result<Self, InputError> {
        let message = message.into().trim().to_string();
        if message.is_empty() {
            return Err(InputError::EmptyMessage);
        }
        let len = message.chars().count();
        if len > MAX_MESSAGE_CHARS {
            return Err(InputError::MessageTooLong {
                len,
                max: MAX_MESSAGE_CHARS,
            });
        }
        Ok(Self {
            message,
            recipient,
            content,
            count,
        })
    }

    /// Build a request from the raw text of the generation modal.
    pub fn from_input(
        message: &str,
        recipient: &str,
        content: &str,
        count: Option<&str>,
    ) -> Result<Self, InputError> {
        let recipient = recipient.parse()?;
        let content = content.parse()?;
        Self::new(message, recipient, content, VariationCount::from_input(count))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn recipient(&self) -> RecipientType {
        self.recipient
    }

    pub fn content(&self) -> ContentType {
        self.content
    }

    pub fn count(&self) -> VariationCount {
        self.count
    }
}
