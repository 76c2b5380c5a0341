//! # Channel Command Detection
//!
//! Text command recognition shared by every messaging channel, plus the
//! platform-specific normalization needed before it can run.

pub mod slack;
pub mod text;

pub use slack::{
    ResolvedSlackSlashCommand, SlackCommandGate, SlackSlashCommandConfig, SlashCommandMatcher,
    normalize_slash_command_name, strip_slack_mentions,
};
pub use text::{
    HELP_SLASH_COMMAND, TextCommandResult, classify, help_menu_text, is_help_trigger,
    parse_text_command,
};
