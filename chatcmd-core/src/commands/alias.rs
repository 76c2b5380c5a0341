//! Alias index: normalized alias phrase to canonical command key.

use std::collections::HashMap;

use super::registry::CommandRegistry;

/// Normalize text for alias lookup: trim surrounding whitespace, case-fold.
pub fn normalize_alias(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Immutable mapping from normalized alias text to command key.
///
/// Built in registry order; when two commands declare the same alias the
/// earlier one keeps it.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: HashMap<String, String>,
}

impl AliasIndex {
    pub fn build(registry: &CommandRegistry) -> Self {
        let mut entries: HashMap<String, String> = HashMap::new();
        for cmd in registry.all() {
            for alias in cmd.aliases() {
                let normalized = normalize_alias(alias);
                if normalized.is_empty() {
                    continue;
                }
                match entries.get(&normalized) {
                    Some(owner) => {
                        tracing::debug!(
                            alias = %normalized,
                            owner = %owner,
                            ignored = %cmd.key(),
                            "Alias already claimed, ignoring later registration"
                        );
                    }
                    None => {
                        entries.insert(normalized, cmd.key().to_string());
                    }
                }
            }
        }
        tracing::debug!(aliases = entries.len(), commands = registry.len(), "Built alias index");
        Self { entries }
    }

    /// Resolve `text` to a command key. Absent aliases are not an error.
    pub fn resolve(&self, text: &str) -> Option<&str> {
        self.entries.get(&normalize_alias(text)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by alias, for display.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(alias, key)| (alias.as_str(), key.as_str()))
            .collect();
        entries.sort();
        entries
    }
}
