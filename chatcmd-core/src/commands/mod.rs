//! # Command System
//!
//! Canonical command metadata and everything derived from it:
//!
//! - `types`: command groups and display locales
//! - `registry`: descriptors and the ordered registry
//! - `alias`: normalized alias phrase to key index
//! - `catalog`: registry plus memoized alias index, and the default catalog
//! - `help`: grouped, localized help text

pub mod alias;
pub mod catalog;
mod defaults;
pub mod help;
pub mod registry;
pub mod types;

pub use alias::{AliasIndex, normalize_alias};
pub use catalog::{CommandCatalog, command_info, default_catalog, match_alias};
pub use help::{COMMAND_PREFIX, HelpOptions, command_hint, render_group_help, render_help};
pub use registry::{CommandDescriptor, CommandRegistry, LocalizedText};
pub use types::{CommandGroup, Locale};
