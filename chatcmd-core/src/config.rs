//! Configuration system for chatcmd.
//!
//! Uses `figment` for layered configuration: defaults -> config file -> environment -> overrides.
//! Configuration is loaded from the user config directory (`config.toml`) and/or
//! `.chatcmd/config.toml` in the workspace directory.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::channels::SlackSlashCommandConfig;
use crate::commands::{HelpOptions, Locale};
use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatCmdConfig {
    /// Default rendering options for help menus.
    pub help: HelpOptions,
    /// Slack slash command settings, resolved once per channel setup.
    pub slack: SlackSlashCommandConfig,
    /// Extra commands registered after the built-ins.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_commands: Vec<CustomCommandConfig>,
}

/// A command declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomCommandConfig {
    pub key: String,
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    /// Group tag. Unknown tags render under the catch-all section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Locale the name, description, and aliases are written in.
    pub locale: Locale,
}

fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "chatcmd", "chatcmd")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn workspace_config_path(workspace: &Path) -> PathBuf {
    workspace.join(".chatcmd").join("config.toml")
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `CHATCMD_`, `__` for nesting)
/// 3. Workspace-local config (`.chatcmd/config.toml`)
/// 4. User config (`~/.config/chatcmd/config.toml` or platform equivalent)
/// 5. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    overrides: Option<&ChatCmdConfig>,
) -> Result<ChatCmdConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(ChatCmdConfig::default()));

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            tracing::debug!(path = %user_config.display(), "Loading user config");
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = workspace_config_path(ws);
        if ws_config.exists() {
            tracing::debug!(path = %ws_config.display(), "Loading workspace config");
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    // CHATCMD_HELP__LOCALE, CHATCMD_SLACK__NAME, etc.
    figment = figment.merge(Env::prefixed("CHATCMD_").split("__"));

    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    let config: ChatCmdConfig = figment.extract()?;
    if config.help.command_prefix.is_empty() {
        return Err(ConfigError::Invalid {
            message: "help.command_prefix must not be empty".to_string(),
        });
    }
    Ok(config)
}

/// Check whether a user-level or workspace-level config file exists.
pub fn config_exists(workspace: Option<&Path>) -> bool {
    if user_config_path().is_some_and(|path| path.exists()) {
        return true;
    }
    workspace.is_some_and(|ws| workspace_config_path(ws).exists())
}
