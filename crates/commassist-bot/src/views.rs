//! Menus, modals and result views
//!
//! Each view is built from an immutable context passed to its constructor
//! and rendered into the platform-neutral types from `commassist_types`.

#[path = "views_tests.rs"]
mod views_tests;

use commassist_types::{
    ActionRow, AnalysisResult, Button, ButtonStyle, ContentType, Embed, GenerationRequest,
    GenerationResult, InputError, MAX_MESSAGE_CHARS, Modal, ModalValues, ResponseSuggestions,
    TextInput, TextInputStyle, Variation,
};

use crate::custom_id::{
    ANALYSIS_ANALYZE, ANALYSIS_GENERATE, INPUT_CONTENT, INPUT_COUNT, INPUT_MESSAGE,
    INPUT_RECEIVED, INPUT_RECIPIENT, MENU_ANALYZE, MENU_GENERATE, MODAL_ANALYZE, MODAL_GENERATE,
    RESPONSE_ANALYZE, RESPONSE_NEW, RegenerateParams,
};

/// Footer prefix carrying the original message of a response view.
pub const ORIGINAL_MESSAGE_PREFIX: &str = "Your message: ";

pub const GENERATION_FAILED: &str = "Failed to generate a response.";

/// An embed together with the buttons attached below it.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub embed: Embed,
    pub rows: Vec<ActionRow>,
}

// ── Main menu ────────────────────────────────────────────────────────────────

pub struct MainMenu;

impl MainMenu {
    pub fn view() -> View {
        View {
            embed: Embed::new(
                "📩  Communication Assistant",
                "Choose an option below to get started!",
            ),
            rows: vec![ActionRow::new(vec![
                Button::new(ButtonStyle::Success, "✨ Generate Response", MENU_GENERATE),
                Button::new(ButtonStyle::Primary, "🤖 Analyze Message", MENU_ANALYZE),
            ])],
        }
    }
}

// ── Modals ───────────────────────────────────────────────────────────────────

pub struct GenerateResponseModal;

impl GenerateResponseModal {
    pub fn build() -> Modal {
        Modal {
            custom_id: MODAL_GENERATE.to_string(),
            title: "✨ Generate Polite Response".to_string(),
            inputs: vec![
                TextInput::new(TextInputStyle::Paragraph, "✏️ Your Message", INPUT_MESSAGE)
                    .placeholder("Enter your message here...")
                    .max_length(MAX_MESSAGE_CHARS as u16),
                TextInput::new(TextInputStyle::Short, "👤 Recipient Type", INPUT_RECIPIENT)
                    .placeholder("Professor or Classmate"),
                TextInput::new(TextInputStyle::Short, "📝 Content Type", INPUT_CONTENT)
                    .placeholder("Text or Email"),
                TextInput::new(TextInputStyle::Short, "🔢 Number of Variations", INPUT_COUNT)
                    .placeholder("Enter a number (1-5)")
                    .required(false)
                    .value("2"),
            ],
        }
    }

    pub fn parse(values: &ModalValues) -> Result<GenerationRequest, InputError> {
        GenerationRequest::from_input(
            values.text(INPUT_MESSAGE),
            values.text(INPUT_RECIPIENT),
            values.text(INPUT_CONTENT),
            values.get(INPUT_COUNT),
        )
    }
}

pub struct AnalyzeMessageModal;

impl AnalyzeMessageModal {
    pub fn build() -> Modal {
        Modal {
            custom_id: MODAL_ANALYZE.to_string(),
            title: "Analyze Message 🤖".to_string(),
            inputs: vec![
                TextInput::new(TextInputStyle::Paragraph, "Received Message", INPUT_RECEIVED)
                    .placeholder("🕵️‍♂️ Paste the message you want to analyze..."),
            ],
        }
    }

    pub fn parse(values: &ModalValues) -> Result<String, InputError> {
        let message = values.text(INPUT_RECEIVED).trim();
        if message.is_empty() {
            return Err(InputError::EmptyMessage);
        }
        Ok(message.to_string())
    }
}

// ── Generated responses ──────────────────────────────────────────────────────

/// Generated variations plus the request that produced them.
pub struct ResponseView {
    request: GenerationRequest,
    result: GenerationResult,
}

impl ResponseView {
    pub fn new(request: GenerationRequest, result: GenerationResult) -> Self {
        Self { request, result }
    }

    pub fn view(&self) -> View {
        let mut embed = Embed::new("✨ Generated Responses", "Here are your polite responses:");
        for (i, variation) in self.result.variations().iter().enumerate() {
            embed = embed.field(
                format!("📄 Variation {}", i + 1),
                variation_text(self.request.content(), variation),
            );
        }
        // The footer carries the regenerate context, so only field values shrink.
        let embed = embed
            .footer(format!(
                "{ORIGINAL_MESSAGE_PREFIX}{}",
                self.request.message()
            ))
            .fit_total();

        let params = RegenerateParams {
            recipient: self.request.recipient(),
            content: self.request.content(),
            count: self.request.count(),
        };
        View {
            embed,
            rows: vec![ActionRow::new(vec![
                Button::new(ButtonStyle::Primary, "😊 Generate Again", params.custom_id()),
                Button::new(ButtonStyle::Danger, "✨ Generate New Message", RESPONSE_NEW),
                Button::new(ButtonStyle::Success, "🤖 Analyze Message", RESPONSE_ANALYZE),
            ])],
        }
    }

    /// Rebuild the request behind a response view from its button parameters
    /// and the footer of the message the button belongs to.
    pub fn recover_request(
        params: RegenerateParams,
        footer: Option<&str>,
    ) -> Option<GenerationRequest> {
        let message = footer?.strip_prefix(ORIGINAL_MESSAGE_PREFIX)?;
        GenerationRequest::new(message, params.recipient, params.content, params.count).ok()
    }
}

/// Field text for one variation; only emails show a subject line.
pub fn variation_text(content: ContentType, variation: &Variation) -> String {
    if content.has_subject() {
        let subject = variation
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("(no subject)");
        format!("**Subject:** {subject}\n{}", variation.body)
    } else {
        variation.body.clone()
    }
}

// ── Analysis ─────────────────────────────────────────────────────────────────

/// Rendered analysis report.
pub struct AnalysisView<'a> {
    analysis: &'a AnalysisResult,
}

impl<'a> AnalysisView<'a> {
    pub fn new(analysis: &'a AnalysisResult) -> Self {
        Self { analysis }
    }

    pub fn view(&self) -> View {
        let a = self.analysis;
        let cues = a
            .social_cues
            .iter()
            .map(|cue| format!("- {cue}"))
            .collect::<Vec<_>>()
            .join("\n");

        let navigation = GeneratedMessageView::new(a.response_suggestions.clone());

        let embed = Embed::new("🤖 Message Analysis", "Here is the analysis of your message:")
            .field("👁‍🗨 Primary Emotion", capitalize(&a.primary_emotion))
            .field("👓 Social Cues", cues)
            .field("📌 Key Words", a.keywords.join(", "))
            .field("💌 Summary", &a.summary)
            .field(
                "Response Suggestions",
                suggestions_text(navigation.suggestions()),
            )
            .fit_total();

        View {
            embed,
            rows: navigation.rows(),
        }
    }
}

/// The three suggestions, always positive, neutral, negative.
pub fn suggestions_text(s: &ResponseSuggestions) -> String {
    format!(
        "😁 Positive: {}\n\n😐 Neutral: {}\n\n🙁 Negative: {}",
        s.positive, s.neutral, s.negative
    )
}

/// Navigation shown under an analysis report.
pub struct GeneratedMessageView {
    suggestions: ResponseSuggestions,
}

impl GeneratedMessageView {
    pub fn new(suggestions: ResponseSuggestions) -> Self {
        Self { suggestions }
    }

    pub fn suggestions(&self) -> &ResponseSuggestions {
        &self.suggestions
    }

    pub fn rows(&self) -> Vec<ActionRow> {
        vec![ActionRow::new(vec![
            Button::new(ButtonStyle::Success, "✨ Generate Message", ANALYSIS_GENERATE),
            Button::new(ButtonStyle::Primary, "🤖 Analyze Message", ANALYSIS_ANALYZE),
        ])]
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
