//! Slack command detection.
//!
//! Slack messages carry inline user mentions (`<@U123>`, `<@U123|name>`) that
//! must be removed before a message can be recognized as a command. The same
//! normalization is used when preparing a message and when gating it, so the
//! two paths always agree.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::text::TextCommandResult;
use crate::commands::CommandCatalog;
use crate::error::ChannelError;

/// Default slash command name registered with Slack.
pub const DEFAULT_SLASH_COMMAND_NAME: &str = "clawd";

/// Default prefix for session keys created by slash invocations.
pub const DEFAULT_SESSION_PREFIX: &str = "slack:slash";

static SLACK_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@[^>]+>").expect("static regex must compile"));
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

/// Strip Slack user mentions so command detection sees normalized text.
///
/// Every mention becomes a space, whitespace runs collapse to one space, and
/// the ends are trimmed.
pub fn strip_slack_mentions(text: &str) -> String {
    let without_mentions = SLACK_MENTION_RE.replace_all(text, " ");
    WHITESPACE_RUN_RE
        .replace_all(&without_mentions, " ")
        .trim()
        .to_string()
}

/// Remove any number of leading slashes from a command name.
pub fn normalize_slash_command_name(raw: &str) -> &str {
    raw.trim_start_matches('/')
}

/// Slash command settings as written in configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSlashCommandConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<bool>,
}

impl SlackSlashCommandConfig {
    /// Fill in defaults. Done once per channel setup.
    pub fn resolve(&self) -> ResolvedSlackSlashCommand {
        let raw_name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SLASH_COMMAND_NAME);
        let name = match normalize_slash_command_name(raw_name) {
            "" => DEFAULT_SLASH_COMMAND_NAME,
            name => name,
        };
        let session_prefix = self
            .session_prefix
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(DEFAULT_SESSION_PREFIX);

        ResolvedSlackSlashCommand {
            enabled: self.enabled == Some(true),
            name: name.to_string(),
            session_prefix: session_prefix.to_string(),
            ephemeral: self.ephemeral != Some(false),
        }
    }
}

/// Fully populated slash command settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSlackSlashCommand {
    pub enabled: bool,
    /// Command name without leading slashes.
    pub name: String,
    pub session_prefix: String,
    /// Reply only to the invoking user.
    pub ephemeral: bool,
}

impl ResolvedSlackSlashCommand {
    /// Session key for a slash invocation by `user_id`.
    pub fn session_key(&self, user_id: &str) -> String {
        format!("{}:{}", self.session_prefix, user_id)
    }
}

/// Matches a bare invocation of one configured command name: `name` or
/// `/name`, with nothing else in the message.
#[derive(Debug, Clone)]
pub struct SlashCommandMatcher {
    regex: Regex,
}

impl SlashCommandMatcher {
    pub fn new(name: &str) -> Result<Self, ChannelError> {
        let pattern = format!("^/?{}$", regex::escape(name));
        let regex = Regex::new(&pattern).map_err(|e| ChannelError::InvalidMatcher {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the trimmed `text` is exactly the command, with or without `/`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text.trim())
    }
}

/// Command detection for one Slack channel setup.
#[derive(Debug, Clone)]
pub struct SlackCommandGate {
    config: ResolvedSlackSlashCommand,
    matcher: SlashCommandMatcher,
}

impl SlackCommandGate {
    pub fn new(config: &SlackSlashCommandConfig) -> Result<Self, ChannelError> {
        let config = config.resolve();
        let matcher = SlashCommandMatcher::new(&config.name)?;
        tracing::debug!(
            name = %config.name,
            enabled = config.enabled,
            ephemeral = config.ephemeral,
            "Configured Slack slash command"
        );
        Ok(Self { config, matcher })
    }

    pub fn config(&self) -> &ResolvedSlackSlashCommand {
        &self.config
    }

    pub fn matcher(&self) -> &SlashCommandMatcher {
        &self.matcher
    }

    /// Normalize an incoming message for display and downstream handling.
    pub fn prepare(&self, text: &str) -> String {
        strip_slack_mentions(text)
    }

    /// Whether the message is a bare invocation of the configured command.
    pub fn is_slash_invocation(&self, text: &str) -> bool {
        self.matcher.is_match(&strip_slack_mentions(text))
    }

    /// Classify the message as a text command after mention stripping.
    pub fn classify(&self, catalog: &CommandCatalog, text: &str) -> TextCommandResult {
        catalog.classify(&strip_slack_mentions(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_mentions() {
        assert_eq!(strip_slack_mentions("<@U123> /new"), "/new");
        assert_eq!(strip_slack_mentions("<@U123|alice>   模型  <@U9>  x"), "模型 x");
        assert_eq!(strip_slack_mentions("hi<@U1>there"), "hi there");
        assert_eq!(strip_slack_mentions("  plain\n\ttext "), "plain text");
        assert_eq!(strip_slack_mentions(""), "");
        assert_eq!(strip_slack_mentions("<@U1><@U2>"), "");
    }

    #[test]
    fn test_strip_leaves_other_markup() {
        assert_eq!(strip_slack_mentions("<#C123> <!here>"), "<#C123> <!here>");
    }

    #[test]
    fn test_normalize_slash_command_name() {
        assert_eq!(normalize_slash_command_name("/clawd"), "clawd");
        assert_eq!(normalize_slash_command_name("///clawd"), "clawd");
        assert_eq!(normalize_slash_command_name("clawd"), "clawd");
        assert_eq!(normalize_slash_command_name("///"), "");
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = SlackSlashCommandConfig::default().resolve();
        assert_eq!(
            resolved,
            ResolvedSlackSlashCommand {
                enabled: false,
                name: "clawd".into(),
                session_prefix: "slack:slash".into(),
                ephemeral: true,
            }
        );
    }

    #[test]
    fn test_resolve_explicit_values() {
        let config = SlackSlashCommandConfig {
            enabled: Some(true),
            name: Some("  //bot ".into()),
            session_prefix: Some(" team:slash ".into()),
            ephemeral: Some(false),
        };
        let resolved = config.resolve();
        assert!(resolved.enabled);
        assert_eq!(resolved.name, "bot");
        assert_eq!(resolved.session_prefix, "team:slash");
        assert!(!resolved.ephemeral);
    }

    #[test]
    fn test_resolve_empty_name_falls_back() {
        for name in ["", "   ", "/", "///"] {
            let config = SlackSlashCommandConfig {
                name: Some(name.into()),
                ..Default::default()
            };
            assert_eq!(config.resolve().name, "clawd", "{name:?}");
        }
    }

    #[test]
    fn test_resolve_enabled_requires_explicit_true() {
        let config = SlackSlashCommandConfig {
            enabled: Some(false),
            ephemeral: None,
            ..Default::default()
        };
        let resolved = config.resolve();
        assert!(!resolved.enabled);
        assert!(resolved.ephemeral);
    }

    #[test]
    fn test_session_key() {
        let resolved = SlackSlashCommandConfig::default().resolve();
        assert_eq!(resolved.session_key("U42"), "slack:slash:U42");
    }

    #[test]
    fn test_matcher_full_match_only() {
        let matcher = SlashCommandMatcher::new("clawd").unwrap();
        assert!(matcher.is_match("clawd"));
        assert!(matcher.is_match("/clawd"));
        assert!(matcher.is_match("  /clawd  "));
        assert!(!matcher.is_match("//clawd"));
        assert!(!matcher.is_match("/clawd status"));
        assert!(!matcher.is_match("clawdbot"));
        assert!(!matcher.is_match("/CLAWD"));
    }

    #[test]
    fn test_matcher_escapes_metacharacters() {
        let matcher = SlashCommandMatcher::new("a.b+(c)").unwrap();
        assert!(matcher.is_match("/a.b+(c)"));
        assert!(!matcher.is_match("/axbb(c)"));
        assert!(!matcher.is_match("/a.bbb(c)"));
        assert_eq!(matcher.pattern(), r"^/?a\.b\+\(c\)$");
    }

    #[test]
    fn test_gate_uses_resolved_name() {
        let gate = SlackCommandGate::new(&SlackSlashCommandConfig {
            name: Some("/assistant".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(gate.config().name, "assistant");
        assert!(gate.is_slash_invocation("<@U1> /assistant"));
        assert!(!gate.is_slash_invocation("/clawd"));
    }

    #[test]
    fn test_gate_prepare_and_classify_agree() {
        let catalog = CommandCatalog::with_defaults();
        let gate = SlackCommandGate::new(&SlackSlashCommandConfig::default()).unwrap();
        let inputs = [
            "<@U123> /new",
            "<@U123|bob>   模型   claude-opus",
            "新对话 <@U9>",
            "<@U1> 菜单",
            "<@U1> 今天天气怎么样",
            "   ",
        ];
        for input in inputs {
            let prepared = gate.prepare(input);
            assert_eq!(gate.classify(&catalog, input), catalog.classify(&prepared), "{input}");
        }
    }

    #[test]
    fn test_gate_classify_after_stripping() {
        let catalog = CommandCatalog::with_defaults();
        let gate = SlackCommandGate::new(&SlackSlashCommandConfig::default()).unwrap();
        assert_eq!(
            gate.classify(&catalog, "<@U123|bob> 模型 claude-opus"),
            TextCommandResult::Command {
                key: "model".into(),
                args: Some("claude-opus".into()),
            }
        );
        assert_eq!(gate.classify(&catalog, "<@U1> ?"), TextCommandResult::Help);
    }
}
