//! Help text rendering.
//!
//! Projects a set of command descriptors into plain UTF-8 text, either as a
//! flat list or grouped under section labels in the fixed group order.

use serde::{Deserialize, Serialize};

use super::registry::{CommandDescriptor, CommandRegistry};
use super::types::{CommandGroup, Locale};

/// Prefix used for canonical slash commands.
pub const COMMAND_PREFIX: &str = "/";

const GROUP_INDENT: &str = "  ";

/// Options controlling [`render_help`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpOptions {
    /// Bucket commands under group headers, with banner and footer.
    pub show_groups: bool,
    /// Show the canonical form, e.g. `(/new)`, after each display name.
    pub show_canonical_key: bool,
    /// Only include commands whose group is listed. `None` includes all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CommandGroup>>,
    pub command_prefix: String,
    pub locale: Locale,
}

impl Default for HelpOptions {
    fn default() -> Self {
        Self {
            show_groups: true,
            show_canonical_key: true,
            groups: None,
            command_prefix: COMMAND_PREFIX.to_string(),
            locale: Locale::Zh,
        }
    }
}

fn banner(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "📋 可用命令列表\n",
        Locale::En => "📋 Available commands\n",
    }
}

fn footer(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "\n💡 直接输入中文命令名或 \"/命令\" 即可使用",
        Locale::En => "\n💡 Type a command name or \"/command\" to run it",
    }
}

fn empty_group_placeholder(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "暂无命令",
        Locale::En => "No commands",
    }
}

/// Short hint pointing users at the help triggers, for welcome messages.
pub fn command_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "💡 输入 \"菜单\" 或 \"命令\" 查看所有可用命令",
        Locale::En => "💡 Type \"menu\" or \"help\" to see all available commands",
    }
}

fn format_line(cmd: &CommandDescriptor, options: &HelpOptions, indent: &str) -> String {
    let canonical = if options.show_canonical_key {
        format!(" ({}{})", options.command_prefix, cmd.key())
    } else {
        String::new()
    };
    format!(
        "{indent}• {}{canonical} - {}",
        cmd.display_name(options.locale),
        cmd.description(options.locale)
    )
}

fn format_list(commands: &[&CommandDescriptor], options: &HelpOptions, indent: &str) -> String {
    commands
        .iter()
        .map(|cmd| format_line(cmd, options, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render help text for `descriptors`.
///
/// Output depends only on the descriptors and options.
pub fn render_help(descriptors: &[CommandDescriptor], options: &HelpOptions) -> String {
    let filtered: Vec<&CommandDescriptor> = match &options.groups {
        Some(groups) => descriptors
            .iter()
            .filter(|cmd| cmd.group().is_some_and(|group| groups.contains(&group)))
            .collect(),
        None => descriptors.iter().collect(),
    };

    if !options.show_groups {
        return format_list(&filtered, options, "");
    }

    let sections: Vec<String> = CommandGroup::all()
        .iter()
        .filter_map(|group| {
            let members: Vec<&CommandDescriptor> = filtered
                .iter()
                .copied()
                .filter(|cmd| cmd.display_group() == *group)
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(format!(
                "{}\n{}",
                group.label(options.locale),
                format_list(&members, options, GROUP_INDENT)
            ))
        })
        .collect();

    format!(
        "{}\n{}{}",
        banner(options.locale),
        sections.join("\n\n"),
        footer(options.locale)
    )
}

/// Render one group's section. An empty group still shows its label with a
/// placeholder line.
pub fn render_group_help(registry: &CommandRegistry, group: CommandGroup, locale: Locale) -> String {
    let label = group.label(locale);
    let commands = registry.in_group(group);
    if commands.is_empty() {
        return format!("{label}\n{GROUP_INDENT}{}", empty_group_placeholder(locale));
    }
    let options = HelpOptions {
        locale,
        ..HelpOptions::default()
    };
    format!("{label}\n{}", format_list(&commands, &options, GROUP_INDENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::LocalizedText;
    use pretty_assertions::assert_eq;

    fn cmd(key: &str, group: Option<CommandGroup>, name: &str, desc: &str) -> CommandDescriptor {
        CommandDescriptor::new(key, group)
            .unwrap()
            .with_locale(Locale::Zh, LocalizedText::new(name, desc))
            .unwrap()
    }

    fn sample() -> Vec<CommandDescriptor> {
        vec![
            cmd("status", Some(CommandGroup::Info), "状态", "查看当前状态"),
            cmd("new", Some(CommandGroup::Conversation), "新对话", "开始新的对话"),
            cmd("weather", None, "天气", "查询天气"),
            cmd("stop", Some(CommandGroup::Conversation), "停止", "停止当前回复"),
        ]
    }

    #[test]
    fn test_flat_list_in_registry_order() {
        let options = HelpOptions {
            show_groups: false,
            ..Default::default()
        };
        let text = render_help(&sample(), &options);
        assert_eq!(
            text,
            "• 状态 (/status) - 查看当前状态\n\
             • 新对话 (/new) - 开始新的对话\n\
             • 天气 (/weather) - 查询天气\n\
             • 停止 (/stop) - 停止当前回复"
        );
    }

    #[test]
    fn test_flat_list_without_canonical_key() {
        let options = HelpOptions {
            show_groups: false,
            show_canonical_key: false,
            ..Default::default()
        };
        let text = render_help(&sample()[..1], &options);
        assert_eq!(text, "• 状态 - 查看当前状态");
    }

    #[test]
    fn test_custom_prefix() {
        let options = HelpOptions {
            show_groups: false,
            command_prefix: "!".into(),
            ..Default::default()
        };
        let text = render_help(&sample()[1..2], &options);
        assert_eq!(text, "• 新对话 (!new) - 开始新的对话");
    }

    #[test]
    fn test_grouped_layout() {
        let text = render_help(&sample(), &HelpOptions::default());
        assert_eq!(
            text,
            "📋 可用命令列表\n\n\
             💬 对话控制\n\
             \x20 • 新对话 (/new) - 开始新的对话\n\
             \x20 • 停止 (/stop) - 停止当前回复\n\n\
             ℹ️ 信息查询\n\
             \x20 • 状态 (/status) - 查看当前状态\n\n\
             📦 其他\n\
             \x20 • 天气 (/weather) - 查询天气\n\
             💡 直接输入中文命令名或 \"/命令\" 即可使用"
        );
    }

    #[test]
    fn test_single_group_filter_omits_other_groups() {
        let registry = CommandRegistry::with_defaults();
        let options = HelpOptions {
            groups: Some(vec![CommandGroup::Model]),
            ..Default::default()
        };
        let text = render_help(registry.all(), &options);
        assert!(text.contains("🤖 模型设置"));
        assert!(text.contains("(/models)"));
        for group in CommandGroup::all() {
            if *group != CommandGroup::Model {
                assert!(!text.contains(group.label(Locale::Zh)), "unexpected header {group}");
            }
        }
        assert!(!text.contains("(/new)"));
        assert!(!text.contains("(/bash)"));
    }

    #[test]
    fn test_filter_excludes_ungrouped_even_for_other() {
        let options = HelpOptions {
            groups: Some(vec![CommandGroup::Other]),
            ..Default::default()
        };
        let text = render_help(&sample(), &options);
        assert_eq!(
            text,
            "📋 可用命令列表\n\n\n💡 直接输入中文命令名或 \"/命令\" 即可使用"
        );
    }

    #[test]
    fn test_english_locale() {
        let registry = CommandRegistry::with_defaults();
        let options = HelpOptions {
            locale: Locale::En,
            groups: Some(vec![CommandGroup::Conversation]),
            ..Default::default()
        };
        let text = render_help(registry.all(), &options);
        assert!(text.starts_with("📋 Available commands\n\n💬 Conversation\n"));
        assert!(text.contains("  • New (/new) - Start a new conversation"));
        assert!(text.ends_with("\n💡 Type a command name or \"/command\" to run it"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let registry = CommandRegistry::with_defaults();
        let options = HelpOptions::default();
        assert_eq!(
            render_help(registry.all(), &options),
            render_help(registry.all(), &options)
        );
    }

    #[test]
    fn test_full_default_help_contains_every_command() {
        let registry = CommandRegistry::with_defaults();
        let text = render_help(registry.all(), &HelpOptions::default());
        for cmd in registry.all() {
            assert!(
                text.contains(&format!("(/{})", cmd.key())),
                "Help text missing command: {}",
                cmd.key()
            );
        }
        for group in CommandGroup::all() {
            assert!(text.contains(group.label(Locale::Zh)));
        }
    }

    #[test]
    fn test_render_group_help() {
        let registry = CommandRegistry::with_defaults();
        let text = render_group_help(&registry, CommandGroup::Conversation, Locale::Zh);
        assert_eq!(
            text,
            "💬 对话控制\n\
             \x20 • 新对话 (/new) - 开始新的对话\n\
             \x20 • 停止 (/stop) - 停止当前回复\n\
             \x20 • 重置 (/reset) - 重置当前会话\n\
             \x20 • 压缩 (/compact) - 压缩会话上下文"
        );
    }

    #[test]
    fn test_render_group_help_empty() {
        let registry = CommandRegistry::new();
        assert_eq!(
            render_group_help(&registry, CommandGroup::Advanced, Locale::Zh),
            "⚙️ 高级功能\n  暂无命令"
        );
        assert_eq!(
            render_group_help(&registry, CommandGroup::Advanced, Locale::En),
            "⚙️ Advanced\n  No commands"
        );
    }

    #[test]
    fn test_command_hint() {
        assert!(command_hint(Locale::Zh).contains("菜单"));
        assert!(command_hint(Locale::En).contains("menu"));
    }
}
