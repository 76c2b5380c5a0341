//! Built-in command table.

use std::collections::BTreeMap;

use super::registry::{CommandDescriptor, LocalizedText};
use super::types::{CommandGroup, Locale};

/// Static metadata for a built-in command.
pub(crate) struct BuiltinCommand {
    pub key: &'static str,
    pub group: CommandGroup,
    pub zh_name: &'static str,
    pub zh_description: &'static str,
    pub zh_aliases: &'static [&'static str],
    pub en_name: &'static str,
    pub en_description: &'static str,
}

impl BuiltinCommand {
    pub(crate) fn to_descriptor(&self) -> CommandDescriptor {
        let mut locales = BTreeMap::new();
        locales.insert(
            Locale::Zh,
            LocalizedText::new(self.zh_name, self.zh_description)
                .with_aliases(self.zh_aliases.iter().copied()),
        );
        locales.insert(
            Locale::En,
            LocalizedText::new(self.en_name, self.en_description),
        );
        CommandDescriptor::from_parts(self.key.to_string(), Some(self.group), locales)
    }
}

pub(crate) const BUILTIN_COMMANDS: &[BuiltinCommand] = &[
    // Conversation
    BuiltinCommand {
        key: "new",
        group: CommandGroup::Conversation,
        zh_name: "新对话",
        zh_description: "开始新的对话",
        zh_aliases: &["新对话", "新会话", "清空"],
        en_name: "New",
        en_description: "Start a new conversation",
    },
    BuiltinCommand {
        key: "stop",
        group: CommandGroup::Conversation,
        zh_name: "停止",
        zh_description: "停止当前回复",
        zh_aliases: &["停止", "停", "取消"],
        en_name: "Stop",
        en_description: "Stop the current reply",
    },
    BuiltinCommand {
        key: "reset",
        group: CommandGroup::Conversation,
        zh_name: "重置",
        zh_description: "重置当前会话",
        zh_aliases: &["重置", "重置会话"],
        en_name: "Reset",
        en_description: "Reset the current session",
    },
    BuiltinCommand {
        key: "compact",
        group: CommandGroup::Conversation,
        zh_name: "压缩",
        zh_description: "压缩会话上下文",
        zh_aliases: &["压缩", "压缩上下文"],
        en_name: "Compact",
        en_description: "Compact the session context",
    },
    // Model
    BuiltinCommand {
        key: "model",
        group: CommandGroup::Model,
        zh_name: "模型",
        zh_description: "查看或切换 AI 模型",
        zh_aliases: &["模型", "切换模型", "换模型"],
        en_name: "Model",
        en_description: "Show or switch the AI model",
    },
    BuiltinCommand {
        key: "models",
        group: CommandGroup::Model,
        zh_name: "模型列表",
        zh_description: "列出可用的模型",
        zh_aliases: &["模型列表", "所有模型"],
        en_name: "Models",
        en_description: "List available models",
    },
    BuiltinCommand {
        key: "think",
        group: CommandGroup::Model,
        zh_name: "思考",
        zh_description: "设置思考深度",
        zh_aliases: &["思考", "思考模式", "思考深度"],
        en_name: "Think",
        en_description: "Set the thinking level",
    },
    BuiltinCommand {
        key: "reasoning",
        group: CommandGroup::Model,
        zh_name: "推理",
        zh_description: "切换推理过程显示",
        zh_aliases: &["推理", "显示推理"],
        en_name: "Reasoning",
        en_description: "Toggle reasoning visibility",
    },
    // Info
    BuiltinCommand {
        key: "help",
        group: CommandGroup::Info,
        zh_name: "帮助",
        zh_description: "显示帮助信息",
        zh_aliases: &["帮助", "?", "？"],
        en_name: "Help",
        en_description: "Show help",
    },
    BuiltinCommand {
        key: "commands",
        group: CommandGroup::Info,
        zh_name: "命令",
        zh_description: "列出所有命令",
        zh_aliases: &["命令", "菜单", "命令列表"],
        en_name: "Commands",
        en_description: "List all commands",
    },
    BuiltinCommand {
        key: "status",
        group: CommandGroup::Info,
        zh_name: "状态",
        zh_description: "查看当前状态",
        zh_aliases: &["状态", "当前状态"],
        en_name: "Status",
        en_description: "Show current status",
    },
    BuiltinCommand {
        key: "whoami",
        group: CommandGroup::Info,
        zh_name: "我是谁",
        zh_description: "显示你的用户 ID",
        zh_aliases: &["我是谁", "我的ID", "用户ID"],
        en_name: "Whoami",
        en_description: "Show your sender id",
    },
    BuiltinCommand {
        key: "usage",
        group: CommandGroup::Info,
        zh_name: "用量",
        zh_description: "显示 Token 用量统计",
        zh_aliases: &["用量", "消耗", "token"],
        en_name: "Usage",
        en_description: "Show token usage",
    },
    BuiltinCommand {
        key: "context",
        group: CommandGroup::Info,
        zh_name: "上下文",
        zh_description: "解释上下文的构建和使用",
        zh_aliases: &["上下文"],
        en_name: "Context",
        en_description: "Explain how context is built and used",
    },
    // Session
    BuiltinCommand {
        key: "verbose",
        group: CommandGroup::Session,
        zh_name: "详细",
        zh_description: "切换详细模式",
        zh_aliases: &["详细", "详细模式"],
        en_name: "Verbose",
        en_description: "Toggle verbose mode",
    },
    BuiltinCommand {
        key: "elevated",
        group: CommandGroup::Session,
        zh_name: "提权",
        zh_description: "切换提权模式",
        zh_aliases: &["提权", "提权模式"],
        en_name: "Elevated",
        en_description: "Toggle elevated mode",
    },
    BuiltinCommand {
        key: "activation",
        group: CommandGroup::Session,
        zh_name: "激活",
        zh_description: "设置群组激活模式",
        zh_aliases: &["激活", "激活模式"],
        en_name: "Activation",
        en_description: "Set group activation mode",
    },
    BuiltinCommand {
        key: "send",
        group: CommandGroup::Session,
        zh_name: "发送",
        zh_description: "设置发送策略",
        zh_aliases: &["发送", "发送策略"],
        en_name: "Send",
        en_description: "Set send policy",
    },
    BuiltinCommand {
        key: "queue",
        group: CommandGroup::Session,
        zh_name: "队列",
        zh_description: "调整队列设置",
        zh_aliases: &["队列", "队列设置"],
        en_name: "Queue",
        en_description: "Adjust queue settings",
    },
    // Advanced
    BuiltinCommand {
        key: "skill",
        group: CommandGroup::Advanced,
        zh_name: "技能",
        zh_description: "运行指定技能",
        zh_aliases: &["技能", "运行技能"],
        en_name: "Skill",
        en_description: "Run a skill by name",
    },
    BuiltinCommand {
        key: "subagents",
        group: CommandGroup::Advanced,
        zh_name: "子代理",
        zh_description: "管理子代理运行",
        zh_aliases: &["子代理", "子agent"],
        en_name: "Subagents",
        en_description: "Manage subagent runs",
    },
    BuiltinCommand {
        key: "exec",
        group: CommandGroup::Advanced,
        zh_name: "执行",
        zh_description: "设置执行默认值",
        zh_aliases: &["执行", "执行设置"],
        en_name: "Exec",
        en_description: "Set exec defaults",
    },
    BuiltinCommand {
        key: "tts",
        group: CommandGroup::Advanced,
        zh_name: "语音",
        zh_description: "配置文字转语音",
        zh_aliases: &["语音", "TTS", "朗读"],
        en_name: "TTS",
        en_description: "Configure text-to-speech",
    },
    BuiltinCommand {
        key: "restart",
        group: CommandGroup::Advanced,
        zh_name: "重启",
        zh_description: "重启 Clawdbot",
        zh_aliases: &["重启"],
        en_name: "Restart",
        en_description: "Restart Clawdbot",
    },
    // Other
    BuiltinCommand {
        key: "approve",
        group: CommandGroup::Other,
        zh_name: "批准",
        zh_description: "批准或拒绝执行请求",
        zh_aliases: &["批准", "授权"],
        en_name: "Approve",
        en_description: "Approve or deny exec requests",
    },
    BuiltinCommand {
        key: "allowlist",
        group: CommandGroup::Other,
        zh_name: "白名单",
        zh_description: "管理白名单",
        zh_aliases: &["白名单"],
        en_name: "Allowlist",
        en_description: "Manage the allowlist",
    },
    BuiltinCommand {
        key: "config",
        group: CommandGroup::Other,
        zh_name: "配置",
        zh_description: "查看或设置配置值",
        zh_aliases: &["配置", "设置"],
        en_name: "Config",
        en_description: "Show or set config values",
    },
    BuiltinCommand {
        key: "debug",
        group: CommandGroup::Other,
        zh_name: "调试",
        zh_description: "设置运行时调试选项",
        zh_aliases: &["调试"],
        en_name: "Debug",
        en_description: "Set runtime debug overrides",
    },
    BuiltinCommand {
        key: "bash",
        group: CommandGroup::Other,
        zh_name: "命令行",
        zh_description: "运行主机 Shell 命令",
        zh_aliases: &["命令行", "shell", "终端"],
        en_name: "Bash",
        en_description: "Run host shell commands",
    },
];
