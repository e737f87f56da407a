//! The help capabilities every command variant provides.

use std::fmt;

use serde_json::{Map, Value};

use super::report::descriptor_json;
use super::types::{AvailableOption, CommandDescriptor, bracketed};

/// Options of a single help invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpOptions {
    pub verbose: bool,
    pub json: bool,
    /// Tokens following a multi-command alias, e.g. `help generate route`.
    pub raw_args: Vec<String>,
}

/// A command as seen by the help subsystem.
pub trait Command: Send + Sync + fmt::Debug {
    fn descriptor(&self) -> &CommandDescriptor;

    /// One summary line.
    fn basic_help(&self, program: &str, _options: &HelpOptions) -> String {
        let descriptor = self.descriptor();
        let line = format!("  {:<40} {}", descriptor.usage(program), descriptor.summary());
        line.trim_end().to_string()
    }

    /// Full usage block.
    fn detailed_help(&self, program: &str, options: &HelpOptions) -> Vec<String> {
        descriptor_help_lines(self.descriptor(), program, options.verbose)
    }

    /// Structured record for the help document.
    fn to_json(&self, _options: &HelpOptions) -> Map<String, Value> {
        descriptor_json(self.descriptor())
    }
}

/// A command described entirely by its static metadata.
#[derive(Debug, Clone)]
pub struct PlainCommand {
    descriptor: CommandDescriptor,
}

impl PlainCommand {
    pub fn new(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }
}

impl Command for PlainCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }
}

/// Stand-in for the tool itself, only used for the top-level banner and the
/// root of the help document.
#[derive(Debug, Clone)]
pub struct RootCommand {
    descriptor: CommandDescriptor,
}

impl RootCommand {
    pub fn new(program: &str) -> Self {
        Self {
            descriptor: CommandDescriptor::new(program, "")
                .with_anonymous("<command (Default: help)>"),
        }
    }
}

impl Command for RootCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn basic_help(&self, _program: &str, _options: &HelpOptions) -> String {
        let mut line = format!("Usage: {}", self.descriptor.name);
        for fragment in bracketed(&self.descriptor.anonymous_options) {
            line.push(' ');
            line.push_str(&fragment);
        }
        line
    }
}

/// Detailed usage lines for a descriptor.
pub(crate) fn descriptor_help_lines(
    descriptor: &CommandDescriptor,
    program: &str,
    verbose: bool,
) -> Vec<String> {
    let mut lines = vec![descriptor.usage(program)];

    for line in descriptor.description.lines() {
        lines.push(format!("  {}", line));
    }

    let aliases: Vec<&str> = descriptor.token_aliases().collect();
    if !aliases.is_empty() {
        lines.push(format!("  aliases: {}", aliases.join(", ")));
    }

    if verbose {
        lines.push(format!("  works: {}", descriptor.works.as_str()));
    }

    for option in &descriptor.available_options {
        lines.extend(option_help_lines(option, verbose));
    }

    if !descriptor.anonymous_options.is_empty() {
        lines.push("  arguments:".to_string());
        for fragment in bracketed(&descriptor.anonymous_options) {
            lines.push(format!("    {}", fragment));
        }
    }

    lines
}

fn option_help_lines(option: &AvailableOption, verbose: bool) -> Vec<String> {
    let mut signature = format!("  {}", option.signature());
    if verbose {
        if let Some(description) = &option.description {
            signature.push(' ');
            signature.push_str(description);
        }
    }

    let mut lines = vec![signature];
    if !option.aliases.is_empty() {
        let flags: Vec<String> = option
            .aliases
            .iter()
            .map(|alias| AvailableOption::alias_flag(alias))
            .collect();
        lines.push(format!("    aliases: {}", flags.join(", ")));
    }
    lines
}
