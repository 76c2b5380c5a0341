//! CLI subcommand handlers.
//!
//! Each handler returns the text to print so it can be tested directly.

use crate::Commands;
use crate::ConfigAction;
use chatcmd_core::channels::{SlackCommandGate, SlackSlashCommandConfig};
use chatcmd_core::commands::{CommandCatalog, CommandGroup, HelpOptions, Locale};
use chatcmd_core::commands::{command_hint, render_help};
use chatcmd_core::config::{ChatCmdConfig, load_config};
use std::fmt::Write as _;
use std::path::Path;

/// Handle a CLI subcommand.
pub fn handle_command(command: Commands, workspace: &Path) -> anyhow::Result<String> {
    match command {
        Commands::Config { action } => handle_config(action, workspace),
        Commands::Classify { text, json } => {
            let (_, catalog) = load_catalog(workspace)?;
            handle_classify(&catalog, &text.join(" "), json)
        }
        Commands::Help {
            flat,
            no_keys,
            groups,
            locale,
            prefix,
            hint,
        } => {
            let (config, catalog) = load_catalog(workspace)?;
            let options = help_options(&config.help, flat, no_keys, &groups, locale.as_deref(), prefix);
            if hint {
                return Ok(command_hint(options.locale).to_string());
            }
            Ok(render_help(catalog.registry().all(), &options))
        }
        Commands::Alias { text, list } => {
            let (_, catalog) = load_catalog(workspace)?;
            Ok(handle_alias(&catalog, &text, list))
        }
        Commands::Slack { text, name } => {
            let (config, catalog) = load_catalog(workspace)?;
            let mut slack = config.slack;
            if name.is_some() {
                slack.name = name;
            }
            handle_slack(&catalog, &slack, &text.join(" "))
        }
    }
}

fn load_catalog(workspace: &Path) -> anyhow::Result<(ChatCmdConfig, CommandCatalog)> {
    let config = load_config(Some(workspace), None)
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    let catalog = CommandCatalog::from_config(&config)?;
    Ok((config, catalog))
}

fn handle_config(action: ConfigAction, workspace: &Path) -> anyhow::Result<String> {
    match action {
        ConfigAction::Init => {
            let config_dir = workspace.join(".chatcmd");
            std::fs::create_dir_all(&config_dir)?;

            let config_path = config_dir.join("config.toml");
            if config_path.exists() {
                return Ok(format!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                ));
            }

            let default_config = ChatCmdConfig::default();
            let toml_str = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_str)?;
            Ok(format!(
                "Created default configuration at: {}",
                config_path.display()
            ))
        }
        ConfigAction::Show => {
            let config = load_config(Some(workspace), None)
                .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
            Ok(toml::to_string_pretty(&config)?)
        }
    }
}

fn handle_classify(catalog: &CommandCatalog, text: &str, json: bool) -> anyhow::Result<String> {
    let result = catalog.classify(text);
    if json {
        return Ok(serde_json::to_string(&result)?);
    }
    let slash = result.to_slash_command();
    Ok(match slash {
        Some(slash) => format!("{result:?}\n{slash}"),
        None => format!("{result:?}"),
    })
}

fn help_options(
    base: &HelpOptions,
    flat: bool,
    no_keys: bool,
    groups: &[String],
    locale: Option<&str>,
    prefix: Option<String>,
) -> HelpOptions {
    let mut options = base.clone();
    if flat {
        options.show_groups = false;
    }
    if no_keys {
        options.show_canonical_key = false;
    }
    if !groups.is_empty() {
        let parsed: Vec<CommandGroup> = groups
            .iter()
            .filter_map(|tag| {
                let group = CommandGroup::parse(tag);
                if group.is_none() {
                    tracing::warn!(group = %tag, "Ignoring unknown command group");
                }
                group
            })
            .collect();
        options.groups = Some(parsed);
    }
    if let Some(tag) = locale {
        match Locale::parse(tag) {
            Some(locale) => options.locale = locale,
            None => tracing::warn!(locale = %tag, "Unknown locale, keeping {}", options.locale),
        }
    }
    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        options.command_prefix = prefix;
    }
    options
}

fn handle_alias(catalog: &CommandCatalog, text: &[String], list: bool) -> String {
    let index = catalog.alias_index();
    let mut output = String::new();
    if list {
        for (alias, key) in index.sorted_entries() {
            let _ = writeln!(output, "{alias:<12} -> {key}");
        }
    }
    for phrase in text {
        match index.resolve(phrase) {
            Some(key) => {
                let _ = writeln!(output, "{phrase} -> {key}");
            }
            None => {
                let _ = writeln!(output, "{phrase} -> (no match)");
            }
        }
    }
    output.trim_end().to_string()
}

fn handle_slack(
    catalog: &CommandCatalog,
    config: &SlackSlashCommandConfig,
    text: &str,
) -> anyhow::Result<String> {
    let gate = SlackCommandGate::new(config)?;
    let resolved = gate.config();
    let prepared = gate.prepare(text);
    let result = gate.classify(catalog, text);

    let mut output = String::new();
    let _ = writeln!(output, "prepared:   {prepared:?}");
    let _ = writeln!(
        output,
        "slash /{}:  {} (pattern {})",
        resolved.name,
        gate.is_slash_invocation(text),
        gate.matcher().pattern()
    );
    let _ = writeln!(output, "enabled:    {}", resolved.enabled);
    let _ = writeln!(output, "ephemeral:  {}", resolved.ephemeral);
    let _ = write!(output, "classified: {result:?}");
    Ok(output)
}
