//! Entry command registration and text-command matching.

use serenity::builder::CreateCommand;

pub const MENU_COMMAND: &str = "menu";

/// Global slash command posting the main menu.
pub fn menu_command() -> CreateCommand {
    CreateCommand::new(MENU_COMMAND).description("Open the Communication Assistant menu")
}

/// Whether a chat message invokes the menu through the text prefix.
///
/// The command word must be followed by whitespace or end the message, so
/// `!menus` does not match.
pub fn is_menu_invocation(content: &str, prefix: &str) -> bool {
    let Some(rest) = content.trim_start().strip_prefix(prefix) else {
        return false;
    };
    match rest.strip_prefix(MENU_COMMAND) {
        Some(tail) => tail.is_empty() || tail.starts_with(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_menu_invocation() {
        assert!(is_menu_invocation("!menu", "!"));
        assert!(is_menu_invocation("  !menu please", "!"));
        assert!(is_menu_invocation("?menu", "?"));
        assert!(is_menu_invocation("cmd menu", "cmd "));
    }

    #[test]
    fn test_is_not_menu_invocation() {
        assert!(!is_menu_invocation("menu", "!"));
        assert!(!is_menu_invocation("!menus", "!"));
        assert!(!is_menu_invocation("!Menu", "!"));
        assert!(!is_menu_invocation("hello !menu", "!"));
        assert!(!is_menu_invocation("", "!"));
    }

    #[test]
    fn test_menu_command_serializes() {
        let json = serde_json::to_value(menu_command()).unwrap();
        assert_eq!(json["name"], "menu");
        assert!(json["description"].as_str().is_some_and(|d| !d.is_empty()));
    }
}
