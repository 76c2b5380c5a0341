//! Command groups and display locales.

use serde::{Deserialize, Serialize};

/// Display locale for command names, descriptions, and help chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::Zh, Locale::En]
    }

    /// Parse a locale tag such as `zh`, `zh-CN`, or `EN`.
    pub fn parse(tag: &str) -> Option<Locale> {
        let tag = tag.trim().to_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categories for grouping commands in help output. Never used for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandGroup {
    Conversation,
    Model,
    Info,
    Session,
    Advanced,
    Other,
}

impl CommandGroup {
    /// Groups in help display order.
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Conversation,
            CommandGroup::Model,
            CommandGroup::Info,
            CommandGroup::Session,
            CommandGroup::Advanced,
            CommandGroup::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandGroup::Conversation => "conversation",
            CommandGroup::Model => "model",
            CommandGroup::Info => "info",
            CommandGroup::Session => "session",
            CommandGroup::Advanced => "advanced",
            CommandGroup::Other => "other",
        }
    }

    /// Section header shown above the group's commands.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, CommandGroup::Conversation) => "💬 对话控制",
            (Locale::Zh, CommandGroup::Model) => "🤖 模型设置",
            (Locale::Zh, CommandGroup::Info) => "ℹ️ 信息查询",
            (Locale::Zh, CommandGroup::Session) => "📝 会话管理",
            (Locale::Zh, CommandGroup::Advanced) => "⚙️ 高级功能",
            (Locale::Zh, CommandGroup::Other) => "📦 其他",
            (Locale::En, CommandGroup::Conversation) => "💬 Conversation",
            (Locale::En, CommandGroup::Model) => "🤖 Model",
            (Locale::En, CommandGroup::Info) => "ℹ️ Info",
            (Locale::En, CommandGroup::Session) => "📝 Session",
            (Locale::En, CommandGroup::Advanced) => "⚙️ Advanced",
            (Locale::En, CommandGroup::Other) => "📦 Other",
        }
    }

    /// Look up a group by tag. Unknown tags yield `None`, not an error.
    pub fn parse(tag: &str) -> Option<CommandGroup> {
        let tag = tag.trim().to_lowercase();
        CommandGroup::all()
            .iter()
            .copied()
            .find(|group| group.as_str() == tag)
    }
}

impl std::fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
