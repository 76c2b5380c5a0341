//! Error types for the chatcmd core.
//!
//! Uses `thiserror` for public API error types. Classification and help
//! rendering never fail; errors only surface from registry construction,
//! configuration loading, and channel matcher setup.

use crate::commands::Locale;

/// Top-level error type for the chatcmd core library.
#[derive(Debug, thiserror::Error)]
pub enum ChatCmdError {
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Misuse of the command definition and registration APIs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Command key must not be empty")]
    EmptyKey,

    #[error("Command '{key}' has an empty {locale} display name")]
    EmptyName { key: String, locale: Locale },

    #[error("Command already registered: {key}")]
    DuplicateKey { key: String },
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}

/// Errors from channel adapters.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Invalid slash command matcher for '{name}': {message}")]
    InvalidMatcher { name: String, message: String },
}

/// A type alias for results using the top-level `ChatCmdError`.
pub type Result<T> = std::result::Result<T, ChatCmdError>;
