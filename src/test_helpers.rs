use crate::commands::{
    AddonCommandSet, AddonSource, AddonVisitor, CommandDescriptor, CommandRegistry, HelpError,
    Project,
};

/// Descriptor with token aliases and no description.
pub fn descriptor(name: &str, aliases: &[&str]) -> CommandDescriptor {
    CommandDescriptor::new(name, "").with_aliases(aliases.iter().copied())
}

/// `alpha` (alias `a`) then `beta` (alias `b`).
pub fn alpha_beta_registry() -> CommandRegistry {
    CommandRegistry::from_descriptors([descriptor("alpha", &["a"]), descriptor("beta", &["b"])])
}

/// Two addons: `deploy-addon` with `deploy` (alias `dp`), `lint-addon` with `lint`.
pub fn project_with_addons() -> Project {
    Project::new(vec![
        AddonCommandSet::new(
            "deploy-addon",
            CommandRegistry::from_descriptors([descriptor("deploy", &["dp"])]),
        ),
        AddonCommandSet::new(
            "lint-addon",
            CommandRegistry::from_descriptors([descriptor("lint", &[])]),
        ),
    ])
}

/// Command names in registry order.
pub fn names(registry: &CommandRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|command| command.descriptor().name.clone())
        .collect()
}

/// Addon source whose traversal always fails.
pub struct FailingAddons;

impl AddonSource for FailingAddons {
    fn each_addon_command(&self, _visit: &mut AddonVisitor<'_>) -> Result<(), HelpError> {
        Err(HelpError::Addon {
            addon: "broken".to_string(),
            message: "package.json could not be read".to_string(),
        })
    }
}
