//! Error types for help rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelpError {
    /// The requested name matched no key, name or alias.
    #[error("The specified command {name} is invalid.{}", suggestion_hint(.suggestion))]
    UnknownCommand {
        name: String,
        suggestion: Option<String>,
    },

    /// The addon traversal itself failed.
    #[error("Addon {addon} failed to provide commands: {message}")]
    Addon { addon: String, message: String },

    #[error("Failed to write help output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize help document: {0}")]
    Json(#[from] serde_json::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" Did you mean `{}`?", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, HelpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_message() {
        let err = HelpError::UnknownCommand {
            name: "frobnicate".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "The specified command frobnicate is invalid.");
    }

    #[test]
    fn unknown_command_message_with_suggestion() {
        let err = HelpError::UnknownCommand {
            name: "gen".into(),
            suggestion: Some("generate".into()),
        };
        assert_eq!(
            err.to_string(),
            "The specified command gen is invalid. Did you mean `generate`?"
        );
    }
}
