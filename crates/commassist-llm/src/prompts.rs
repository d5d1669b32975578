//! Prompts sent to the collaborator
//!
//! Both prompts ask for a single JSON object so replies can be parsed into
//! typed structures instead of scraped from free text.

use commassist_types::{ContentType, GenerationRequest, RecipientType};

pub const GENERATION_SYSTEM_PROMPT: &str = "You rewrite messages written by a university \
    student so they are polite, clear and appropriate for the recipient. Keep the original \
    intent and facts. Never invent details the student did not mention. \
    Reply with a single JSON object and nothing else.";

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You analyze the emotional and social tone of a \
    message a university student received, and suggest replies. \
    Reply with a single JSON object and nothing else.";

fn recipient_guidance(recipient: RecipientType) -> &'static str {
    match recipient {
        RecipientType::Professor => {
            "The recipient is a professor: use a respectful, formal register and a proper greeting and sign-off."
        }
        RecipientType::Classmate => {
            "The recipient is a classmate: use a friendly, casual but considerate register."
        }
    }
}

fn content_guidance(content: ContentType) -> &'static str {
    match content {
        ContentType::Email => {
            "Each variation is an email: give it a concise \"subject\" and the full email as \"body\"."
        }
        ContentType::Text => {
            "Each variation is a short chat message: give only a \"body\", with no subject and no sign-off."
        }
    }
}

/// User prompt for a generation request.
pub fn generation_prompt(request: &GenerationRequest) -> String {
    let n = request.count().get();
    let shape = if request.content().has_subject() {
        r#"{"variations": [{"subject": "...", "body": "..."}]}"#
    } else {
        r#"{"variations": [{"body": "..."}]}"#
    };
    format!(
        "Write exactly {n} distinct polite variation(s) of the message below.\n\
         {recipient}\n\
         {content}\n\
         Respond with JSON shaped like {shape}.\n\n\
         Message:\n\"\"\"\n{message}\n\"\"\"",
        recipient = recipient_guidance(request.recipient()),
        content = content_guidance(request.content()),
        message = request.message(),
    )
}

/// User prompt for analyzing a received message.
pub fn analysis_prompt(message: &str) -> String {
    format!(
        "Analyze the message below. Respond with JSON containing exactly these keys:\n\
         - \"primary_emotion\": one word naming the dominant emotion\n\
         - \"social_cues\": array of short phrases describing social cues\n\
         - \"keywords\": array of the most important words\n\
         - \"summary\": one or two sentences summarizing the message\n\
         - \"response_suggestions\": object with \"positive\", \"neutral\" and \"negative\" replies\n\n\
         Message:\n\"\"\"\n{message}\n\"\"\""
    )
}
