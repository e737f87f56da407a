//! Command descriptor types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a command can be run from. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorksScope {
    InsideProject,
    OutsideProject,
    #[default]
    Everywhere,
}

impl WorksScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsideProject => "insideProject",
            Self::OutsideProject => "outsideProject",
            Self::Everywhere => "everywhere",
        }
    }
}

/// An alternate token for a command.
///
/// `Bare` stands for "no token at all": it matches an empty lookup and never
/// a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Alias {
    Bare,
    Token(String),
}

impl Alias {
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Bare => None,
            Self::Token(token) => Some(token),
        }
    }
}

impl From<Option<String>> for Alias {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(token) if !token.is_empty() => Self::Token(token),
            _ => Self::Bare,
        }
    }
}

impl From<Alias> for Option<String> {
    fn from(alias: Alias) -> Self {
        match alias {
            Alias::Bare => None,
            Alias::Token(token) => Some(token),
        }
    }
}

impl From<&str> for Alias {
    fn from(token: &str) -> Self {
        Some(token.to_string()).into()
    }
}

/// Handle to a utility module used as option metadata.
///
/// Only its display name is kept; it has no stable serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    pub name: String,
}

impl ModuleRef {
    /// The path utility module, used by options that take filesystem paths.
    pub fn path() -> Self {
        Self {
            name: "Path".to_string(),
        }
    }
}

/// Declared type of an option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum OptionType {
    Boolean,
    String,
    Number,
    Array,
    #[serde(skip)]
    Module(ModuleRef),
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "Boolean"),
            Self::String => write!(f, "String"),
            Self::Number => write!(f, "Number"),
            Self::Array => write!(f, "Array"),
            Self::Module(module) => write!(f, "{}", module.name),
        }
    }
}

/// Default value of an option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum OptionDefault {
    Value(serde_json::Value),
    Module(ModuleRef),
}

impl From<serde_json::Value> for OptionDefault {
    fn from(value: serde_json::Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for OptionDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(serde_json::Value::String(s)) => write!(f, "{}", s),
            Self::Value(value) => write!(f, "{}", value),
            Self::Module(module) => write!(f, "{}", module.name),
        }
    }
}

/// A flag a command accepts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OptionType,
    #[serde(default)]
    pub default: Option<OptionDefault>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl AvailableOption {
    pub fn new(name: &str, kind: OptionType) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: None,
            aliases: Vec::new(),
            description: None,
            required: false,
        }
    }

    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(OptionDefault::Value(value.into()));
        self
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Flag spelling of an alias: `-x` for short ones, `--xxxxx` otherwise.
    pub fn alias_flag(alias: &str) -> String {
        if alias.chars().count() > 4 {
            format!("--{}", alias)
        } else {
            format!("-{}", alias)
        }
    }

    /// `--name (Type) (Required) (Default: value)`
    pub fn signature(&self) -> String {
        let mut out = format!("--{} ({})", self.name, self.kind);
        if self.required {
            out.push_str(" (Required)");
        }
        if let Some(default) = &self.default {
            out.push_str(&format!(" (Default: {})", default));
        }
        out
    }
}

/// Static metadata for one command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandDescriptor {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<Alias>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub available_options: Vec<AvailableOption>,
    #[serde(default)]
    pub anonymous_options: Vec<String>,
    #[serde(default)]
    pub skip_help: bool,
    #[serde(default)]
    pub works: WorksScope,
}

impl CommandDescriptor {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            description: description.to_string(),
            available_options: Vec::new(),
            anonymous_options: Vec::new(),
            skip_help: false,
            works: WorksScope::default(),
        }
    }

    pub fn with_aliases<I, A>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Alias>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_option(mut self, option: AvailableOption) -> Self {
        self.available_options.push(option);
        self
    }

    pub fn with_anonymous(mut self, fragment: &str) -> Self {
        self.anonymous_options.push(fragment.to_string());
        self
    }

    pub fn works(mut self, works: WorksScope) -> Self {
        self.works = works;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.skip_help = true;
        self
    }

    /// Aliases that are actual tokens, in declaration order.
    pub fn token_aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().filter_map(Alias::token)
    }

    /// `<program> <name> <anonymous...> <options...>`
    pub fn usage(&self, program: &str) -> String {
        let mut out = format!("{} {}", program, self.name);
        if !self.anonymous_options.is_empty() {
            out.push(' ');
            out.push_str(&bracketed(&self.anonymous_options).join(" "));
        }
        if !self.available_options.is_empty() {
            out.push_str(" <options...>");
        }
        out
    }

    /// First line of the description.
    pub fn summary(&self) -> &str {
        self.description.lines().next().unwrap_or("")
    }
}

/// Blueprint fragments come without brackets, command fragments with them.
pub(crate) fn bracketed(fragments: &[String]) -> Vec<String> {
    fragments
        .iter()
        .map(|f| {
            if f.starts_with('<') {
                f.clone()
            } else {
                format!("<{}>", f)
            }
        })
        .collect()
}
