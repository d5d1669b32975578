#[cfg(test)]
mod tests {
    use crate::custom_id::{
        ComponentAction, INPUT_CONTENT, INPUT_COUNT, INPUT_MESSAGE, INPUT_RECEIVED,
        INPUT_RECIPIENT, MODAL_ANALYZE, MODAL_GENERATE, RegenerateParams,
    };
    use crate::views::*;
    use commassist_types::{
        AnalysisResult, ButtonStyle, ContentType, EMBED_TOTAL_LIMIT, GenerationRequest,
        GenerationResult, InputError, MAX_MESSAGE_CHARS, ModalValues, RecipientType,
        ResponseSuggestions, Variation, VariationCount,
    };

    fn request(message: &str, content: ContentType, count: u64) -> GenerationRequest {
        GenerationRequest::new(
            message,
            RecipientType::Professor,
            content,
            VariationCount::clamped(count),
        )
        .unwrap()
    }

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            primary_emotion: "rEMORSE".to_string(),
            social_cues: vec!["apologetic".to_string(), "empathetic".to_string()],
            keywords: vec!["sorry".to_string(), "delay".to_string()],
            summary: "An apology for a delay.".to_string(),
            response_suggestions: ResponseSuggestions {
                positive: "No worries!".to_string(),
                neutral: "Thanks for the update.".to_string(),
                negative: "This caused problems.".to_string(),
            },
        }
    }

    // ── main menu ─────────────────────────────────────────────────────────────

    #[test]
    fn test_main_menu_has_two_actions() {
        let view = MainMenu::view();
        assert_eq!(view.embed.title, "📩  Communication Assistant");
        assert_eq!(view.rows.len(), 1);
        let buttons = &view.rows[0].buttons;
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label, "✨ Generate Response");
        assert_eq!(buttons[0].style, ButtonStyle::Success);
        assert_eq!(buttons[1].label, "🤖 Analyze Message");
        assert_eq!(
            ComponentAction::from_custom_id(&buttons[0].custom_id),
            ComponentAction::OpenGenerateModal
        );
        assert_eq!(
            ComponentAction::from_custom_id(&buttons[1].custom_id),
            ComponentAction::OpenAnalyzeModal
        );
    }

    // ── modals ────────────────────────────────────────────────────────────────

    #[test]
    fn test_generate_modal_inputs() {
        let modal = GenerateResponseModal::build();
        assert_eq!(modal.custom_id, MODAL_GENERATE);
        let ids: Vec<_> = modal.inputs.iter().map(|i| i.custom_id.as_str()).collect();
        assert_eq!(ids, [INPUT_MESSAGE, INPUT_RECIPIENT, INPUT_CONTENT, INPUT_COUNT]);
        assert!(modal.inputs[..3].iter().all(|i| i.required));
        assert!(!modal.inputs[3].required);
        assert_eq!(modal.inputs[3].value.as_deref(), Some("2"));
        assert!(modal.inputs.iter().all(|i| i.label.chars().count() <= 45));
    }

    #[test]
    fn test_generate_modal_parse_defaults_count() {
        let values: ModalValues = [
            (INPUT_MESSAGE, "lol ok whatever"),
            (INPUT_RECIPIENT, "Classmate"),
            (INPUT_CONTENT, "Text"),
            (INPUT_COUNT, "abc"),
        ]
        .into_iter()
        .collect();
        let req = GenerateResponseModal::parse(&values).unwrap();
        assert_eq!(req.count().get(), 2);
        assert_eq!(req.content(), ContentType::Text);

        let without_count: ModalValues = [
            (INPUT_MESSAGE, "hi"),
            (INPUT_RECIPIENT, "Classmate"),
            (INPUT_CONTENT, "Text"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            GenerateResponseModal::parse(&without_count).unwrap().count().get(),
            2
        );
    }

    #[test]
    fn test_generate_modal_parse_rejects_unknown_recipient() {
        let values: ModalValues = [
            (INPUT_MESSAGE, "hi"),
            (INPUT_RECIPIENT, "Dean"),
            (INPUT_CONTENT, "Text"),
        ]
        .into_iter()
        .collect();
        assert!(matches!(
            GenerateResponseModal::parse(&values),
            Err(InputError::UnknownRecipient(_))
        ));
    }

    #[test]
    fn test_analyze_modal() {
        let modal = AnalyzeMessageModal::build();
        assert_eq!(modal.custom_id, MODAL_ANALYZE);
        assert_eq!(modal.inputs.len(), 1);
        assert_eq!(modal.inputs[0].custom_id, INPUT_RECEIVED);

        let blank: ModalValues = [(INPUT_RECEIVED, "   ")].into_iter().collect();
        assert_eq!(
            AnalyzeMessageModal::parse(&blank),
            Err(InputError::EmptyMessage)
        );
        let filled: ModalValues = [(INPUT_RECEIVED, " hey ")].into_iter().collect();
        assert_eq!(AnalyzeMessageModal::parse(&filled).unwrap(), "hey");
    }

    // ── response view ─────────────────────────────────────────────────────────

    #[test]
    fn test_response_view_one_field_per_variation() {
        let req = request("Can you send the report?", ContentType::Email, 2);
        let result = GenerationResult::new(
            vec![
                Variation::email("Report", "Dear Professor, could you send the report?"),
                Variation::email("Request", "Hello Professor, may I have the report?"),
            ],
            req.count(),
        );
        let view = ResponseView::new(req, result).view();

        assert_eq!(view.embed.title, "✨ Generated Responses");
        assert_eq!(view.embed.fields.len(), 2);
        assert_eq!(view.embed.fields[0].name, "📄 Variation 1");
        assert_eq!(view.embed.fields[1].name, "📄 Variation 2");
        assert!(view.embed.fields.iter().all(|f| f.value.starts_with("**Subject:** ")));
    }

    #[test]
    fn test_response_view_never_exceeds_five_fields() {
        let req = request("hi", ContentType::Text, 99);
        let many = (0..8).map(|i| Variation::text(format!("v{i}"))).collect();
        let view = ResponseView::new(req.clone(), GenerationResult::new(many, req.count())).view();
        assert_eq!(view.embed.fields.len(), 5);
    }

    #[test]
    fn test_text_variations_have_no_subject() {
        let req = request("lol ok whatever", ContentType::Text, 2);
        let result = GenerationResult::new(
            vec![
                Variation::email("stray subject", "Okay, sounds good!"),
                Variation::text("Alright, thanks for letting me know."),
            ],
            req.count(),
        );
        let view = ResponseView::new(req, result).view();
        assert_eq!(view.embed.fields.len(), 2);
        for field in &view.embed.fields {
            assert!(!field.value.contains("Subject"), "{}", field.value);
        }
        assert_eq!(view.embed.fields[0].value, "Okay, sounds good!");
    }

    #[test]
    fn test_email_without_subject_still_has_subject_line() {
        let text = variation_text(ContentType::Email, &Variation::text("Body only"));
        assert_eq!(text, "**Subject:** (no subject)\nBody only");
    }

    #[test]
    fn test_response_view_buttons_and_context() {
        let req = request("Can you send the report?", ContentType::Email, 3);
        let result = GenerationResult::new(vec![Variation::email("s", "b")], req.count());
        let view = ResponseView::new(req.clone(), result).view();

        let buttons = &view.rows[0].buttons;
        let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            ["😊 Generate Again", "✨ Generate New Message", "🤖 Analyze Message"]
        );
        assert_eq!(buttons[1].style, ButtonStyle::Danger);

        let params = match ComponentAction::from_custom_id(&buttons[0].custom_id) {
            ComponentAction::Regenerate(p) => p,
            other => panic!("expected regenerate, got {other:?}"),
        };
        let recovered =
            ResponseView::recover_request(params, view.embed.footer.as_deref()).unwrap();
        assert_eq!(recovered, req);
    }

    #[test]
    fn test_long_variations_fit_embed_limit() {
        let message = "m".repeat(MAX_MESSAGE_CHARS);
        let req = request(&message, ContentType::Email, 5);
        let long = (0..5)
            .map(|i| Variation::email(format!("Subject {i}"), "b".repeat(1100)))
            .collect();
        let view = ResponseView::new(req.clone(), GenerationResult::new(long, req.count())).view();

        assert!(view.embed.char_count() <= EMBED_TOTAL_LIMIT);
        assert_eq!(view.embed.fields.len(), 5);
        assert!(view.embed.fields.iter().all(|f| f.value.starts_with("**Subject:** ")));

        let params = match ComponentAction::from_custom_id(&view.rows[0].buttons[0].custom_id) {
            ComponentAction::Regenerate(p) => p,
            other => panic!("expected regenerate, got {other:?}"),
        };
        let recovered =
            ResponseView::recover_request(params, view.embed.footer.as_deref()).unwrap();
        assert_eq!(recovered, req);
    }

    #[test]
    fn test_analysis_view_fits_embed_limit() {
        let mut a = analysis();
        a.summary = "s".repeat(1500);
        a.social_cues = (0..200).map(|i| format!("cue {i}")).collect();
        a.keywords = (0..300).map(|i| format!("word{i}")).collect();
        a.response_suggestions.positive = "p".repeat(900);
        let view = AnalysisView::new(&a).view();
        assert!(view.embed.char_count() <= EMBED_TOTAL_LIMIT);
        assert_eq!(view.embed.fields.len(), 5);
    }

    #[test]
    fn test_recover_request_requires_footer() {
        let params = RegenerateParams {
            recipient: RecipientType::Classmate,
            content: ContentType::Text,
            count: VariationCount::default(),
        };
        assert!(ResponseView::recover_request(params, None).is_none());
        assert!(ResponseView::recover_request(params, Some("unrelated footer")).is_none());
        assert!(ResponseView::recover_request(params, Some(ORIGINAL_MESSAGE_PREFIX)).is_none());
    }

    // ── analysis view ─────────────────────────────────────────────────────────

    #[test]
    fn test_analysis_view_fields() {
        let a = analysis();
        let view = AnalysisView::new(&a).view();
        let names: Vec<_> = view.embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "👁‍🗨 Primary Emotion",
                "👓 Social Cues",
                "📌 Key Words",
                "💌 Summary",
                "Response Suggestions"
            ]
        );
        assert_eq!(view.embed.fields[0].value, "Remorse");
        assert_eq!(view.embed.fields[1].value, "- apologetic\n- empathetic");
        assert_eq!(view.embed.fields[2].value, "sorry, delay");
        assert_eq!(view.embed.fields[3].value, "An apology for a delay.");
    }

    #[test]
    fn test_suggestions_keep_order() {
        let text = suggestions_text(&analysis().response_suggestions);
        let pos = text.find("😁 Positive: No worries!").unwrap();
        let neu = text.find("😐 Neutral: Thanks for the update.").unwrap();
        let neg = text.find("🙁 Negative: This caused problems.").unwrap();
        assert!(pos < neu && neu < neg);
    }

    #[test]
    fn test_analysis_view_navigation() {
        let a = analysis();
        let view = AnalysisView::new(&a).view();
        let buttons = &view.rows[0].buttons;
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].label, "✨ Generate Message");
        assert_eq!(
            ComponentAction::from_custom_id(&buttons[0].custom_id),
            ComponentAction::OpenGenerateModal
        );
        assert_eq!(
            ComponentAction::from_custom_id(&buttons[1].custom_id),
            ComponentAction::OpenAnalyzeModal
        );
    }

    #[test]
    fn test_generated_message_view_keeps_suggestions() {
        let view = GeneratedMessageView::new(analysis().response_suggestions);
        assert_eq!(view.suggestions().positive, "No worries!");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("joy"), "Joy");
        assert_eq!(capitalize("ANGER"), "Anger");
        assert_eq!(capitalize(" mixed Feelings "), "Mixed feelings");
        assert_eq!(capitalize(""), "");
    }
}
