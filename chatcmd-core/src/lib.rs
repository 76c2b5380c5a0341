//! # chatcmd Core
//!
//! Command interpretation for chat channels without a native command menu.
//! Provides the command registry and alias index, the text command
//! classifier, the grouped help renderer, Slack mention stripping and
//! slash-command matching, configuration, and error types.

pub mod channels;
pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types at the crate root.
pub use channels::{
    SlackCommandGate, SlackSlashCommandConfig, TextCommandResult, is_help_trigger,
    parse_text_command,
};
pub use commands::{
    CommandCatalog, CommandDescriptor, CommandGroup, CommandRegistry, HelpOptions, Locale,
    LocalizedText, default_catalog, render_help,
};
pub use config::{ChatCmdConfig, CustomCommandConfig, load_config};
pub use error::{ChatCmdError, Result};
