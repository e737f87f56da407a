//! Command registry and help rendering.
//!
//! # Architecture
//!
//! - `types`: Descriptor metadata (aliases, options, scope)
//! - `classify`: Registry key normalization
//! - `registry`: Insertion-ordered registry with alias lookup
//! - `command`: The `Command` trait and the plain/root variants
//! - `generate`: The `generate` family and its blueprints
//! - `builtins`: Commands shipped with the tool
//! - `addons`: Addon command sets and the project model
//! - `render`: Line-mode help
//! - `report`: Structured help document
//! - `ui`: Line sinks

mod addons;
mod builtins;
mod classify;
mod command;
mod error;
mod generate;
mod registry;
mod render;
mod report;
mod types;
mod ui;

pub use addons::{AddonCommandSet, AddonSource, AddonVisitor, Project, merge_addon_commands};
pub use builtins::{builtin_blueprints, builtin_registry, help_descriptor};
pub use classify::classify;
pub use command::{Command, HelpOptions, PlainCommand, RootCommand};
pub use error::{HelpError, Result};
pub use generate::{Blueprint, GenerateCommand};
pub use registry::CommandRegistry;
pub use render::{DEFAULT_MULTI_COMMAND_ALIASES, HelpRenderer};
pub use report::{AddonDocument, HelpDocument, MODULE_REF_SENTINEL};
pub use types::{
    Alias, AvailableOption, CommandDescriptor, ModuleRef, OptionDefault, OptionType, WorksScope,
};
pub use ui::{Ui, WriterUi};
