//! The `generate` command family and its blueprints.

use serde_json::{Map, Value};

use super::command::{Command, HelpOptions, descriptor_help_lines};
use super::report::{descriptor_json, option_json};
use super::types::{AvailableOption, CommandDescriptor, bracketed};

/// A code template the `generate` command can expand.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    pub name: String,
    pub description: String,
    pub anonymous_options: Vec<String>,
    pub available_options: Vec<AvailableOption>,
}

impl Blueprint {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            anonymous_options: vec!["name".to_string()],
            available_options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: AvailableOption) -> Self {
        self.available_options.push(option);
        self
    }

    fn help_lines(&self, verbose: bool) -> Vec<String> {
        let mut usage = self.name.clone();
        for fragment in bracketed(&self.anonymous_options) {
            usage.push(' ');
            usage.push_str(&fragment);
        }
        if !self.available_options.is_empty() {
            usage.push_str(" <options...>");
        }

        let mut lines = vec![format!("      {}", usage)];
        if !self.description.is_empty() {
            lines.push(format!("        {}", self.description));
        }
        if verbose {
            for option in &self.available_options {
                lines.push(format!("        {}", option.signature()));
                if !option.aliases.is_empty() {
                    let flags: Vec<String> = option
                        .aliases
                        .iter()
                        .map(|alias| AvailableOption::alias_flag(alias))
                        .collect();
                    lines.push(format!("          aliases: {}", flags.join(", ")));
                }
            }
        }
        lines
    }

    fn to_json(&self) -> Value {
        let options: Vec<Value> = self.available_options.iter().map(option_json).collect();
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "anonymousOptions": self.anonymous_options,
            "availableOptions": options,
        })
    }
}

/// `generate`: descriptor plus the blueprints it can expand.
///
/// Raw arguments given after the command name restrict the detailed help to
/// those blueprints.
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    descriptor: CommandDescriptor,
    blueprints: Vec<Blueprint>,
}

impl GenerateCommand {
    pub fn new(descriptor: CommandDescriptor, blueprints: Vec<Blueprint>) -> Self {
        Self {
            descriptor,
            blueprints,
        }
    }

    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    /// Blueprints selected by `raw_args`, or all of them. The second list
    /// holds requested names with no matching blueprint.
    fn select<'a>(&'a self, raw_args: &'a [String]) -> (Vec<&'a Blueprint>, Vec<&'a str>) {
        if raw_args.is_empty() {
            return (self.blueprints.iter().collect(), Vec::new());
        }

        let mut found = Vec::new();
        let mut missing = Vec::new();
        for name in raw_args {
            match self.blueprints.iter().find(|b| &b.name == name) {
                Some(blueprint) => found.push(blueprint),
                None => missing.push(name.as_str()),
            }
        }
        (found, missing)
    }
}

impl Command for GenerateCommand {
    fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    fn detailed_help(&self, program: &str, options: &HelpOptions) -> Vec<String> {
        let mut lines = descriptor_help_lines(&self.descriptor, program, options.verbose);
        let (found, missing) = self.select(&options.raw_args);

        if !found.is_empty() {
            lines.push(String::new());
            lines.push("  Available blueprints:".to_string());
            for blueprint in found {
                lines.extend(blueprint.help_lines(options.verbose));
            }
        }
        for name in missing {
            lines.push(format!(
                "  The '{}' blueprint does not exist in this project.",
                name
            ));
        }
        lines
    }

    fn to_json(&self, options: &HelpOptions) -> Map<String, Value> {
        let mut json = descriptor_json(&self.descriptor);
        let (found, _) = self.select(&options.raw_args);
        let blueprints: Vec<Value> = found.into_iter().map(Blueprint::to_json).collect();
        json.insert("availableBlueprints".to_string(), Value::Array(blueprints));
        json
    }
}
