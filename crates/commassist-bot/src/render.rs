//! Conversion from the neutral UI model to serenity builders, and back for
//! submitted modal values.

use commassist_types::{
    ActionRow, Button, ButtonStyle, Embed, Modal, ModalValues, TextInput, TextInputStyle,
};
use serenity::builder::{
    CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateInputText, CreateModal,
};
use serenity::model::application::{self, ActionRowComponent, InputTextStyle, ModalInteraction};
use serenity::model::channel::Message;

pub fn embed(embed: &Embed) -> CreateEmbed {
    let mut out = CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .color(embed.color);
    for field in &embed.fields {
        out = out.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        out = out.footer(CreateEmbedFooter::new(footer));
    }
    out
}

fn button_style(style: ButtonStyle) -> application::ButtonStyle {
    match style {
        ButtonStyle::Primary => application::ButtonStyle::Primary,
        ButtonStyle::Secondary => application::ButtonStyle::Secondary,
        ButtonStyle::Success => application::ButtonStyle::Success,
        ButtonStyle::Danger => application::ButtonStyle::Danger,
    }
}

fn button(button: &Button) -> CreateButton {
    CreateButton::new(&button.custom_id)
        .label(&button.label)
        .style(button_style(button.style))
}

pub fn action_rows(rows: &[ActionRow]) -> Vec<CreateActionRow> {
    rows.iter()
        .map(|row| CreateActionRow::Buttons(row.buttons.iter().map(button).collect()))
        .collect()
}

fn text_input(input: &TextInput) -> CreateInputText {
    let style = match input.style {
        TextInputStyle::Short => InputTextStyle::Short,
        TextInputStyle::Paragraph => InputTextStyle::Paragraph,
    };
    let mut out = CreateInputText::new(style, &input.label, &input.custom_id)
        .required(input.required);
    if let Some(placeholder) = &input.placeholder {
        out = out.placeholder(placeholder);
    }
    if let Some(value) = &input.value {
        out = out.value(value);
    }
    if let Some(max) = input.max_length {
        out = out.max_length(max);
    }
    out
}

pub fn modal(modal: &Modal) -> CreateModal {
    let rows = modal
        .inputs
        .iter()
        .map(|input| CreateActionRow::InputText(text_input(input)))
        .collect();
    CreateModal::new(&modal.custom_id, &modal.title).components(rows)
}

/// Collect the text inputs of a submitted modal by custom id.
pub fn modal_values(interaction: &ModalInteraction) -> ModalValues {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => Some((
                input.custom_id.clone(),
                input.value.clone().unwrap_or_default(),
            )),
            _ => None,
        })
        .collect()
}

/// Footer text of the first embed on a message, if any.
pub fn first_footer(message: &Message) -> Option<&str> {
    message
        .embeds
        .first()
        .and_then(|e| e.footer.as_ref())
        .map(|f| f.text.as_str())
}
