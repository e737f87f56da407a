//! Structured (JSON) help output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::command::{Command, HelpOptions};
use super::error::Result;
use super::registry::CommandRegistry;
use super::render::HelpRenderer;
use super::types::{AvailableOption, CommandDescriptor, OptionDefault, OptionType};

/// Stand-in for module references, which have no stable serialized form.
pub const MODULE_REF_SENTINEL: &str = "path";

/// The complete help document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpDocument {
    #[serde(flatten)]
    pub root: Map<String, Value>,
    pub commands: Vec<Value>,
    pub addons: Vec<AddonDocument>,
}

/// One addon group inside a [`HelpDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonDocument {
    pub name: String,
    pub commands: Vec<Value>,
}

impl HelpDocument {
    /// Pretty-printed with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serializable form of an option type.
pub fn redact_type(kind: &OptionType) -> Value {
    match kind {
        OptionType::Module(_) => Value::String(MODULE_REF_SENTINEL.to_string()),
        other => Value::String(other.to_string()),
    }
}

/// Serializable form of an option default.
pub fn redact_default(default: &OptionDefault) -> Value {
    match default {
        OptionDefault::Module(_) => Value::String(MODULE_REF_SENTINEL.to_string()),
        OptionDefault::Value(value) => value.clone(),
    }
}

pub fn option_json(option: &AvailableOption) -> Value {
    let mut json = Map::new();
    json.insert("name".to_string(), Value::String(option.name.clone()));
    json.insert("type".to_string(), redact_type(&option.kind));
    if let Some(default) = &option.default {
        json.insert("default".to_string(), redact_default(default));
    }
    json.insert("aliases".to_string(), json!(option.aliases));
    if let Some(description) = &option.description {
        json.insert("description".to_string(), Value::String(description.clone()));
    }
    json.insert("required".to_string(), Value::Bool(option.required));
    Value::Object(json)
}

pub fn descriptor_json(descriptor: &CommandDescriptor) -> Map<String, Value> {
    let aliases: Vec<Value> = descriptor
        .aliases
        .iter()
        .map(|alias| match alias.token() {
            Some(token) => Value::String(token.to_string()),
            None => Value::Null,
        })
        .collect();
    let options: Vec<Value> = descriptor.available_options.iter().map(option_json).collect();

    let mut json = Map::new();
    json.insert("name".to_string(), Value::String(descriptor.name.clone()));
    json.insert("description".to_string(), Value::String(descriptor.description.clone()));
    json.insert("aliases".to_string(), Value::Array(aliases));
    json.insert("works".to_string(), Value::String(descriptor.works.as_str().to_string()));
    json.insert("availableOptions".to_string(), Value::Array(options));
    json.insert("anonymousOptions".to_string(), json!(descriptor.anonymous_options));
    json
}

impl HelpRenderer<'_> {
    /// Structured counterpart of `render_all`.
    ///
    /// Hidden commands are left out even when requested by name.
    pub fn build_document(
        &self,
        options: &HelpOptions,
        requested: &[String],
    ) -> Result<HelpDocument> {
        let mut document = HelpDocument {
            root: self.root().to_json(options),
            commands: Vec::new(),
            addons: Vec::new(),
        };

        if requested.is_empty() {
            document.commands = command_records(self.commands, options);
            if let Some(addons) = self.addons {
                addons.each_addon_command(&mut |addon_name, commands| {
                    document.addons.push(AddonDocument {
                        name: addon_name.to_string(),
                        commands: command_records(commands, options),
                    });
                    Ok(())
                })?;
            }
            return Ok(document);
        }

        let commands = self.lookup_registry()?;
        let request = self.split_request(options, requested);
        for name in request.names {
            let command = commands.resolve(name)?;
            if !command.descriptor().skip_help {
                document.commands.push(Value::Object(command.to_json(&request.options)));
            }
        }
        Ok(document)
    }
}

fn command_records(commands: &CommandRegistry, options: &HelpOptions) -> Vec<Value> {
    commands
        .iter()
        .filter(|command| !command.descriptor().skip_help)
        .map(|command| Value::Object(command.to_json(options)))
        .collect()
}
