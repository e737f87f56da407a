//! Insertion-ordered command registry with alias lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use tracing::debug;

use super::classify::classify;
use super::command::{Command, PlainCommand};
use super::error::{HelpError, Result};
use super::types::{Alias, CommandDescriptor};

/// Registry of commands keyed by `classify(name)`.
///
/// Iteration follows insertion order. Ties between commands claiming the same
/// alias resolve to the one registered first.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<(String, Arc<dyn Command>)>,
    keys: HashMap<String, usize>,
    aliases: HashMap<Alias, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry of plain commands from descriptors.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = CommandDescriptor>) -> Self {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(PlainCommand::new(descriptor));
        }
        registry
    }

    pub fn register(&mut self, command: impl Command + 'static) {
        self.insert(Arc::new(command));
    }

    /// Insert under the command's canonical key.
    ///
    /// An existing key is replaced in place and keeps its position.
    /// Returns `true` when an entry was replaced.
    pub fn insert(&mut self, command: Arc<dyn Command>) -> bool {
        let key = classify(&command.descriptor().name);
        let replaced = match self.keys.get(&key) {
            Some(&position) => {
                self.entries[position].1 = command;
                true
            }
            None => {
                self.keys.insert(key.clone(), self.entries.len());
                self.entries.push((key, command));
                false
            }
        };
        self.reindex_aliases();
        replaced
    }

    fn reindex_aliases(&mut self) {
        self.aliases.clear();
        for (position, (_, command)) in self.entries.iter().enumerate() {
            let descriptor = command.descriptor();
            self.aliases
                .entry(Alias::Token(descriptor.name.clone()))
                .or_insert(position);
            for alias in &descriptor.aliases {
                self.aliases.entry(alias.clone()).or_insert(position);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.entries.iter().map(|(_, command)| command)
    }

    /// Canonical keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn Command>> {
        self.keys.get(key).map(|&position| &self.entries[position].1)
    }

    /// Resolve a user-supplied name or alias.
    ///
    /// The classified key is tried first, then the raw input against names
    /// and aliases. An empty input only matches the bare alias.
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn Command>> {
        let key = classify(name);
        if let Some(command) = self.get(&key) {
            debug!(name, key = %key, "resolved command by key");
            return Ok(command);
        }

        let alias = Alias::from(Some(name.to_string()));
        if let Some(&position) = self.aliases.get(&alias) {
            let command = &self.entries[position].1;
            debug!(name, command = %command.descriptor().name, "resolved command by alias");
            return Ok(command);
        }

        debug!(name, "no command matched");
        Err(HelpError::UnknownCommand {
            name: name.to_string(),
            suggestion: self.suggest(name),
        })
    }

    /// Closest command name for an unknown input.
    fn suggest(&self, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        let matcher = SkimMatcherV2::default();
        self.iter()
            .map(|command| command.descriptor().name.as_str())
            .filter_map(|candidate| matcher.fuzzy_match(candidate, name).map(|score| (score, candidate)))
            .max_by_key(|(score, _)| *score)
            .map(|(_, candidate)| candidate.to_string())
    }

    /// Copy of this registry with `other`'s commands merged in.
    ///
    /// Keys already present are overwritten in place; new keys are appended.
    /// `self` is left untouched.
    pub fn merged_with(&self, other: &CommandRegistry) -> CommandRegistry {
        let mut merged = self.clone();
        for name in merged.merge(other) {
            debug!(command = %name, "merged command replaces an existing command");
        }
        merged
    }

    /// Merge `other` into this registry in place.
    ///
    /// Returns the names of the commands that replaced an existing entry.
    pub fn merge(&mut self, other: &CommandRegistry) -> Vec<String> {
        let mut replaced = Vec::new();
        for command in other.iter() {
            if self.insert(Arc::clone(command)) {
                replaced.push(command.descriptor().name.clone());
            }
        }
        replaced
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{alpha_beta_registry, descriptor, names};
    use proptest::prelude::*;

    #[test]
    fn resolve_by_name() {
        let registry = alpha_beta_registry();
        assert_eq!(registry.resolve("alpha").unwrap().descriptor().name, "alpha");
        assert_eq!(registry.resolve("beta").unwrap().descriptor().name, "beta");
    }

    #[test]
    fn resolve_by_alias() {
        let registry = alpha_beta_registry();
        assert_eq!(registry.resolve("a").unwrap().descriptor().name, "alpha");
    }

    #[test]
    fn resolve_by_normalized_key() {
        let registry = CommandRegistry::from_descriptors([descriptor("new-thing", &[])]);
        assert_eq!(registry.resolve("new_thing").unwrap().descriptor().name, "new-thing");
        assert_eq!(registry.resolve("NewThing").unwrap().descriptor().name, "new-thing");
    }

    #[test]
    fn resolve_unknown_fails() {
        let registry = alpha_beta_registry();
        let err = registry.resolve("gamma").unwrap_err();
        assert!(matches!(err, HelpError::UnknownCommand { ref name, .. } if name == "gamma"));
    }

    #[test]
    fn unknown_command_suggests_closest_name() {
        let registry = alpha_beta_registry();
        match registry.resolve("alp") {
            Err(HelpError::UnknownCommand { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("alpha"))
            }
            other => panic!("expected UnknownCommand, got {:?}", other),
        }
    }

    #[test]
    fn alias_is_case_sensitive() {
        let registry = alpha_beta_registry();
        assert!(registry.resolve("A").is_err());
    }

    #[test]
    fn bare_alias_matches_only_empty_input() {
        let help = CommandDescriptor::new("help", "").with_aliases([Alias::Bare, "h".into()]);
        let registry = CommandRegistry::from_descriptors([help]);
        assert_eq!(registry.resolve("").unwrap().descriptor().name, "help");
        assert!(registry.resolve("undefined").is_err());
        assert!(registry.resolve("null").is_err());
    }

    #[test]
    fn empty_input_without_bare_alias_fails() {
        let registry = alpha_beta_registry();
        assert!(registry.resolve("").is_err());
    }

    #[test]
    fn shared_alias_resolves_to_first_registered() {
        let registry = CommandRegistry::from_descriptors([
            descriptor("serve", &["s"]),
            descriptor("status", &["s"]),
        ]);
        assert_eq!(registry.resolve("s").unwrap().descriptor().name, "serve");
    }

    #[test]
    fn key_lookup_wins_over_earlier_alias() {
        let registry = CommandRegistry::from_descriptors([
            descriptor("alpha", &["x-ray"]),
            descriptor("x-ray", &[]),
        ]);
        assert_eq!(registry.resolve("x-ray").unwrap().descriptor().name, "x-ray");
    }

    #[test]
    fn iteration_is_insertion_order() {
        let registry = CommandRegistry::from_descriptors([
            descriptor("zeta", &[]),
            descriptor("alpha", &[]),
            descriptor("mu", &[]),
        ]);
        assert_eq!(names(&registry), vec!["zeta", "alpha", "mu"]);
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn merged_with_leaves_source_untouched() {
        let primary = alpha_beta_registry();
        let addon = CommandRegistry::from_descriptors([
            descriptor("deploy", &["d"]),
            descriptor("beta", &["b2"]),
        ]);

        let merged = primary.merged_with(&addon);

        assert_eq!(names(&merged), vec!["alpha", "beta", "deploy"]);
        assert_eq!(merged.resolve("d").unwrap().descriptor().name, "deploy");
        assert_eq!(merged.resolve("b2").unwrap().descriptor().name, "beta");

        assert_eq!(names(&primary), vec!["alpha", "beta"]);
        assert!(primary.resolve("deploy").is_err());
        assert!(primary.resolve("b2").is_err());
    }

    #[test]
    fn merged_alias_keeps_primary_claimant() {
        let primary = CommandRegistry::from_descriptors([descriptor("destroy", &["d"])]);
        let addon = CommandRegistry::from_descriptors([descriptor("deploy", &["d"])]);

        let merged = primary.merged_with(&addon);

        assert_eq!(merged.resolve("d").unwrap().descriptor().name, "destroy");
        assert_eq!(merged.resolve("deploy").unwrap().descriptor().name, "deploy");
    }

    #[test]
    fn merge_reports_replaced_names() {
        let mut registry = alpha_beta_registry();
        let replaced = registry.merge(&CommandRegistry::from_descriptors([
            descriptor("beta", &[]),
            descriptor("gamma", &[]),
        ]));
        assert_eq!(replaced, vec!["beta"]);
    }

    #[test]
    fn resolve_does_not_fold_case() {
        let registry = CommandRegistry::from_descriptors([descriptor("help", &["h"])]);
        assert!(matches!(
            registry.resolve("HELP"),
            Err(HelpError::UnknownCommand { ref name, .. }) if name == "HELP"
        ));
        assert!(registry.resolve("H").is_err());
        assert_eq!(registry.resolve("Help").unwrap().descriptor().name, "help");
    }

    #[test]
    fn replaced_command_drops_its_old_aliases() {
        let mut registry = CommandRegistry::from_descriptors([descriptor("beta", &["old"])]);
        registry.merge(&CommandRegistry::from_descriptors([descriptor("beta", &["new"])]));
        assert!(registry.resolve("old").is_err());
        assert_eq!(registry.resolve("new").unwrap().descriptor().name, "beta");
        assert_eq!(registry.len(), 1);
    }

    fn command_name() -> impl Strategy<Value = String> {
        "[a-z]{2,8}(-[a-z]{2,6})?"
    }

    proptest! {
        #[test]
        fn every_name_resolves_to_itself(raw in prop::collection::vec(command_name(), 1..12)) {
            let mut seen = std::collections::HashSet::new();
            let unique: Vec<String> = raw
                .into_iter()
                .filter(|n| seen.insert(classify(n)))
                .collect();
            let registry = CommandRegistry::from_descriptors(
                unique.iter().map(|n| descriptor(n, &[])),
            );
            for name in &unique {
                prop_assert_eq!(&registry.resolve(name).unwrap().descriptor().name, name);
            }
        }

        #[test]
        fn aliases_resolve_to_first_claimant(
            claims in prop::collection::vec(prop::collection::vec("[a-c]", 0..3), 1..8)
        ) {
            let registry = CommandRegistry::from_descriptors(claims.iter().enumerate().map(|(i, aliases)| {
                let aliases: Vec<&str> = aliases.iter().map(String::as_str).collect();
                descriptor(&format!("cmd{}", i), &aliases)
            }));
            for alias in ["a", "b", "c"] {
                let first = claims.iter().position(|aliases| aliases.iter().any(|a| a == alias));
                match first {
                    Some(i) => prop_assert_eq!(
                        registry.resolve(alias).unwrap().descriptor().name.clone(),
                        format!("cmd{}", i)
                    ),
                    None => prop_assert!(registry.resolve(alias).is_err()),
                }
            }
        }
    }
}
