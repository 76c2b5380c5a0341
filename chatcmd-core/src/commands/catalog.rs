//! Command catalog: a registry plus its lazily built alias index.
//!
//! The alias index is computed at most once per catalog, even with
//! concurrent readers, and is then shared immutably. Tests and callers that
//! mutate the registry call [`CommandCatalog::invalidate`] to rebuild it.

use std::sync::{LazyLock, OnceLock};

use super::alias::AliasIndex;
use super::registry::{CommandDescriptor, CommandRegistry};
use crate::config::ChatCmdConfig;
use crate::error::CommandError;

static DEFAULT_CATALOG: LazyLock<CommandCatalog> = LazyLock::new(CommandCatalog::with_defaults);

/// The process-wide catalog built from the built-in commands.
pub fn default_catalog() -> &'static CommandCatalog {
    &DEFAULT_CATALOG
}

/// Owns the command registry and the memoized alias index derived from it.
#[derive(Debug, Default)]
pub struct CommandCatalog {
    registry: CommandRegistry,
    aliases: OnceLock<AliasIndex>,
}

impl CommandCatalog {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            aliases: OnceLock::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(CommandRegistry::with_defaults())
    }

    /// Built-in commands followed by the custom commands from `config`.
    pub fn from_config(config: &ChatCmdConfig) -> Result<Self, CommandError> {
        let mut registry = CommandRegistry::with_defaults();
        registry.register_custom(&config.custom_commands)?;
        Ok(Self::new(registry))
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Mutable access to the registry. Drops the memoized alias index so the
    /// next lookup sees the changes.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        self.invalidate();
        &mut self.registry
    }

    /// Get the alias index, building it on first use.
    pub fn alias_index(&self) -> &AliasIndex {
        self.aliases.get_or_init(|| AliasIndex::build(&self.registry))
    }

    pub fn is_index_built(&self) -> bool {
        self.aliases.get().is_some()
    }

    /// Discard the memoized alias index. The next lookup rebuilds it whole.
    pub fn invalidate(&mut self) {
        self.aliases = OnceLock::new();
    }

    /// Resolve an alias phrase to its canonical key.
    pub fn resolve_alias(&self, text: &str) -> Option<&str> {
        self.alias_index().resolve(text)
    }

    /// Look up a command's metadata by canonical key.
    pub fn describe(&self, key: &str) -> Option<&CommandDescriptor> {
        self.registry.get(key)
    }
}

/// Resolve an alias against the default catalog.
pub fn match_alias(text: &str) -> Option<&'static str> {
    default_catalog().resolve_alias(text)
}

/// Look up a built-in command by canonical key.
pub fn command_info(key: &str) -> Option<&'static CommandDescriptor> {
    default_catalog().describe(key)
}
