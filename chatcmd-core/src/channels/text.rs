//! Text command detection for channels without a native command menu.
//!
//! Recognizes three input shapes and turns them into a canonical
//! [`TextCommandResult`]:
//!
//! 1. help triggers: `菜单`, `help`, `?`
//! 2. slash commands: `/new`, `/model claude-opus`
//! 3. localized aliases, optionally followed by arguments: `新对话`, `模型 claude-opus`

use serde::{Deserialize, Serialize};

use crate::commands::{
    CommandCatalog, HelpOptions, default_catalog, normalize_alias, render_help,
};

/// Slash command emitted for a help request.
pub const HELP_SLASH_COMMAND: &str = "/commands";

const COMMAND_PREFIX: char = '/';

/// Phrases that open the command menu, compared after trim and case-fold.
const HELP_TRIGGERS: &[&str] = &[
    // zh
    "菜单",
    "命令",
    "命令列表",
    "帮助",
    "怎么用",
    "使用帮助",
    // en
    "menu",
    "commands",
    "help",
    // punctuation
    "?",
    "？",
];

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextCommandResult {
    /// The user asked for the command menu.
    Help,
    /// A command invocation. `key` is canonical when it came from an alias,
    /// and verbatim (possibly unknown) when typed as a slash command.
    Command {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        args: Option<String>,
    },
    /// Not a command.
    None,
}

impl TextCommandResult {
    fn command(key: impl Into<String>, args: Option<&str>) -> Self {
        let args = args
            .map(str::trim)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string);
        TextCommandResult::Command {
            key: key.into(),
            args,
        }
    }

    pub fn is_help(&self) -> bool {
        matches!(self, TextCommandResult::Help)
    }

    pub fn is_command(&self) -> bool {
        matches!(self, TextCommandResult::Command { .. })
    }

    /// The command key, if this is a command.
    pub fn key(&self) -> Option<&str> {
        match self {
            TextCommandResult::Command { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Canonical slash form for the executor: `/key`, `/key args`, or
    /// `/commands` for help. `None` has no slash form.
    pub fn to_slash_command(&self) -> Option<String> {
        match self {
            TextCommandResult::Help => Some(HELP_SLASH_COMMAND.to_string()),
            TextCommandResult::Command {
                key,
                args: Some(args),
            } => Some(format!("{COMMAND_PREFIX}{key} {args}")),
            TextCommandResult::Command { key, args: None } => {
                Some(format!("{COMMAND_PREFIX}{key}"))
            }
            TextCommandResult::None => None,
        }
    }
}

/// Whether `text` is one of the help trigger phrases.
pub fn is_help_trigger(text: &str) -> bool {
    let normalized = normalize_alias(text);
    HELP_TRIGGERS.contains(&normalized.as_str())
}

fn split_head(text: &str) -> (&str, Option<&str>) {
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest)),
        None => (text, None),
    }
}

/// Classify `text` against `catalog`. The first matching rule wins.
pub fn classify(catalog: &CommandCatalog, text: &str) -> TextCommandResult {
    let trimmed = text.trim();

    let result = if is_help_trigger(trimmed) {
        TextCommandResult::Help
    } else if let Some(rest) = trimmed.strip_prefix(COMMAND_PREFIX) {
        let (key, args) = split_head(rest);
        TextCommandResult::command(key, args)
    } else if let Some(key) = catalog.resolve_alias(trimmed) {
        TextCommandResult::command(key, None)
    } else {
        let (head, args) = split_head(trimmed);
        match args.and_then(|_| catalog.resolve_alias(head)) {
            Some(key) => TextCommandResult::command(key, args),
            None => TextCommandResult::None,
        }
    };

    tracing::trace!(input = %trimmed, result = ?result, "Classified text command");
    result
}

impl CommandCatalog {
    /// Classify `text` against this catalog's commands.
    pub fn classify(&self, text: &str) -> TextCommandResult {
        classify(self, text)
    }
}

/// Classify `text` against the built-in commands.
pub fn parse_text_command(text: &str) -> TextCommandResult {
    classify(default_catalog(), text)
}

/// The full grouped menu for the built-in commands.
pub fn help_menu_text() -> String {
    render_help(default_catalog().registry().all(), &HelpOptions::default())
}
