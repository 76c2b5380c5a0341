//! Command descriptors and the ordered registry that holds them.
//!
//! Registration order is significant: it is the tie-break for alias
//! collisions and the order commands appear in within a help section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults::BUILTIN_COMMANDS;
use super::types::{CommandGroup, Locale};
use crate::config::CustomCommandConfig;
use crate::error::CommandError;

/// Display strings and alias phrases for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub name: String,
    pub description: String,
    /// Phrases that resolve to the command when typed on their own.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl LocalizedText {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

/// One canonical command and its per-locale metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    key: String,
    group: Option<CommandGroup>,
    locales: BTreeMap<Locale, LocalizedText>,
}

impl CommandDescriptor {
    /// Start a descriptor for `key`. A blank key is a programming error.
    pub fn new(key: impl Into<String>, group: Option<CommandGroup>) -> Result<Self, CommandError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CommandError::EmptyKey);
        }
        Ok(Self {
            key,
            group,
            locales: BTreeMap::new(),
        })
    }

    /// Assemble a descriptor from trusted static data without validation.
    pub(crate) fn from_parts(
        key: String,
        group: Option<CommandGroup>,
        locales: BTreeMap<Locale, LocalizedText>,
    ) -> Self {
        Self {
            key,
            group,
            locales,
        }
    }

    /// Attach display text for a locale, replacing any previous entry.
    pub fn with_locale(mut self, locale: Locale, text: LocalizedText) -> Result<Self, CommandError> {
        if text.name.trim().is_empty() {
            return Err(CommandError::EmptyName {
                key: self.key,
                locale,
            });
        }
        self.locales.insert(locale, text);
        Ok(self)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored group, `None` when the command was declared without one.
    pub fn group(&self) -> Option<CommandGroup> {
        self.group
    }

    /// The group used for display; ungrouped commands render under `Other`.
    pub fn display_group(&self) -> CommandGroup {
        self.group.unwrap_or(CommandGroup::Other)
    }

    pub fn localized(&self, locale: Locale) -> Option<&LocalizedText> {
        self.locales.get(&locale)
    }

    fn localized_or_fallback(&self, locale: Locale) -> Option<&LocalizedText> {
        self.locales
            .get(&locale)
            .or_else(|| self.locales.values().next())
    }

    /// Display name in `locale`, falling back to another locale, then the key.
    pub fn display_name(&self, locale: Locale) -> &str {
        self.localized_or_fallback(locale)
            .map(|text| text.name.as_str())
            .unwrap_or(&self.key)
    }

    pub fn description(&self, locale: Locale) -> &str {
        self.localized_or_fallback(locale)
            .map(|text| text.description.as_str())
            .unwrap_or("")
    }

    /// Aliases across all locales, `zh` first.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.locales
            .values()
            .flat_map(|text| text.aliases.iter().map(String::as_str))
    }
}

/// Ordered collection of command descriptors with unique keys.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a registry pre-populated with all built-in commands.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Register a descriptor. Keys must be unique within the registry.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<(), CommandError> {
        if self.get(descriptor.key()).is_some() {
            return Err(CommandError::DuplicateKey {
                key: descriptor.key,
            });
        }
        self.commands.push(descriptor);
        Ok(())
    }

    /// Register all built-in commands. Existing keys are left untouched.
    pub fn register_defaults(&mut self) {
        for builtin in BUILTIN_COMMANDS {
            if self.get(builtin.key).is_some() {
                continue;
            }
            self.commands.push(builtin.to_descriptor());
        }
    }

    /// Register commands declared in configuration, in declaration order.
    ///
    /// Group tags outside the known set are kept as `None` and render under
    /// the catch-all section.
    pub fn register_custom(&mut self, custom: &[CustomCommandConfig]) -> Result<(), CommandError> {
        for entry in custom {
            let group = entry.group.as_deref().and_then(|tag| {
                let parsed = CommandGroup::parse(tag);
                if parsed.is_none() {
                    tracing::warn!(key = %entry.key, group = %tag, "Unknown command group, rendering under 'other'");
                }
                parsed
            });
            let text = LocalizedText::new(&entry.name, &entry.description)
                .with_aliases(entry.aliases.iter().cloned());
            let descriptor = CommandDescriptor::new(&entry.key, group)?.with_locale(entry.locale, text)?;
            self.register(descriptor)?;
        }
        Ok(())
    }

    /// Look up a descriptor by canonical key.
    pub fn get(&self, key: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|cmd| cmd.key == key)
    }

    /// All descriptors in registration order.
    pub fn all(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Descriptors whose declared group is one of `groups`, in registration order.
    /// Ungrouped descriptors never match a filter.
    pub fn in_groups(&self, groups: &[CommandGroup]) -> Vec<&CommandDescriptor> {
        self.commands
            .iter()
            .filter(|cmd| cmd.group.is_some_and(|group| groups.contains(&group)))
            .collect()
    }

    pub fn in_group(&self, group: CommandGroup) -> Vec<&CommandDescriptor> {
        self.in_groups(&[group])
    }

    /// Return the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
