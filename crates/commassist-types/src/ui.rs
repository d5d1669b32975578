//! Platform-neutral description of what the bot displays
//!
//! Views and modals are assembled from these types and converted to
//! serenity builders only at the last moment, which keeps the view layer
//! free of network types and easy to inspect in tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Discord's limit for an embed field value.
pub const FIELD_VALUE_LIMIT: usize = 1024;
/// Discord's limit for an embed footer.
pub const FOOTER_LIMIT: usize = 2048;
/// Discord's limit for the combined text of one embed.
pub const EMBED_TOTAL_LIMIT: usize = 6000;
/// Discord's limit for plain message content.
pub const MESSAGE_CONTENT_LIMIT: usize = 2000;
/// Placeholder for empty field values, which Discord rejects.
pub const EMPTY_FIELD_VALUE: &str = "—";
/// Accent color used for every embed.
pub const DEFAULT_COLOR: u32 = 0x3498db;

/// Truncate `text` to at most `limit` characters, marking the cut with `…`.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Embed field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Message embed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
            color: DEFAULT_COLOR,
            footer: None,
        }
    }

    /// Append a non-inline field, enforcing Discord's value limits.
    pub fn field(mut self, name: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        let value = if value.trim().is_empty() {
            EMPTY_FIELD_VALUE.to_string()
        } else {
            truncate(value, FIELD_VALUE_LIMIT)
        };
        self.fields.push(EmbedField {
            name: name.into(),
            value,
            inline: false,
        });
        self
    }

    pub fn footer(mut self, text: impl AsRef<str>) -> Self {
        self.footer = Some(truncate(text.as_ref(), FOOTER_LIMIT));
        self
    }

    /// Characters Discord counts towards [`EMBED_TOTAL_LIMIT`].
    pub fn char_count(&self) -> usize {
        let values: usize = self.fields.iter().map(|f| f.value.chars().count()).sum();
        self.fixed_char_count() + values
    }

    fn fixed_char_count(&self) -> usize {
        self.title.chars().count()
            + self.description.chars().count()
            + self.footer.as_deref().map_or(0, |f| f.chars().count())
            + self.fields.iter().map(|f| f.name.chars().count()).sum::<usize>()
    }

    /// Shrink field values to an equal share of what is left under
    /// [`EMBED_TOTAL_LIMIT`]. Title, description, names and footer are kept.
    pub fn fit_total(mut self) -> Self {
        if self.fields.is_empty() || self.char_count() <= EMBED_TOTAL_LIMIT {
            return self;
        }
        let budget = EMBED_TOTAL_LIMIT.saturating_sub(self.fixed_char_count()) / self.fields.len();
        let budget = budget.max(1);
        for field in &mut self.fields {
            field.value = truncate(&field.value, budget);
        }
        self
    }
}

/// Button style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

/// A button that fires an interaction carrying `custom_id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Button {
    pub style: ButtonStyle,
    pub label: String,
    pub custom_id: String,
}

impl Button {
    pub fn new(style: ButtonStyle, label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            style,
            label: label.into(),
            custom_id: custom_id.into(),
        }
    }
}

/// An action row of up to 5 buttons
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionRow {
    #[serde(default)]
    pub buttons: Vec<Button>,
}

impl ActionRow {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self { buttons }
    }
}

/// Text input style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextInputStyle {
    /// Single line
    Short,
    /// Multi-line
    Paragraph,
}

/// A labeled text input inside a modal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextInput {
    pub custom_id: String,
    pub label: String,
    pub style: TextInputStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub required: bool,
    /// Pre-filled value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
}

impl TextInput {
    pub fn new(
        style: TextInputStyle,
        label: impl Into<String>,
        custom_id: impl Into<String>,
    ) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            style,
            placeholder: None,
            required: true,
            value: None,
            max_length: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn max_length(mut self, max_length: u16) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// A modal form; each input occupies its own row when displayed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Modal {
    pub custom_id: String,
    pub title: String,
    #[serde(default)]
    pub inputs: Vec<TextInput>,
}

/// Values submitted through a modal, keyed by input custom id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalValues(HashMap<String, String>);

impl ModalValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, custom_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(custom_id.into(), value.into());
    }

    pub fn get(&self, custom_id: &str) -> Option<&str> {
        self.0.get(custom_id).map(String::as_str)
    }

    /// The value for `custom_id`, or `""` when the input was not submitted.
    pub fn text(&self, custom_id: &str) -> &str {
        self.get(custom_id).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModalValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
