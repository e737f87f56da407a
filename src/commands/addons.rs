//! Addon-provided command sets.

use tracing::{debug, warn};

use super::error::Result;
use super::registry::CommandRegistry;

/// Commands contributed by one addon.
#[derive(Debug, Clone)]
pub struct AddonCommandSet {
    pub name: String,
    pub commands: CommandRegistry,
}

impl AddonCommandSet {
    pub fn new(name: &str, commands: CommandRegistry) -> Self {
        Self {
            name: name.to_string(),
            commands,
        }
    }
}

/// Visitor callback for [`AddonSource::each_addon_command`].
pub type AddonVisitor<'a> = dyn FnMut(&str, &CommandRegistry) -> Result<()> + 'a;

/// Something that can enumerate addon command sets, e.g. a loaded project.
pub trait AddonSource {
    /// Call `visit` once per addon, in addon order. Errors from the traversal
    /// or from `visit` are returned as-is.
    fn each_addon_command(&self, visit: &mut AddonVisitor<'_>) -> Result<()>;
}

/// The project model: an ordered list of addons.
#[derive(Debug, Clone, Default)]
pub struct Project {
    addons: Vec<AddonCommandSet>,
}

impl Project {
    pub fn new(addons: Vec<AddonCommandSet>) -> Self {
        Self { addons }
    }

    pub fn addons(&self) -> &[AddonCommandSet] {
        &self.addons
    }
}

impl AddonSource for Project {
    fn each_addon_command(&self, visit: &mut AddonVisitor<'_>) -> Result<()> {
        for addon in &self.addons {
            debug!(addon = %addon.name, commands = addon.commands.len(), "visiting addon");
            visit(&addon.name, &addon.commands)?;
        }
        Ok(())
    }
}

/// Copy of `primary` with every addon command merged in, in traversal order.
pub fn merge_addon_commands(
    primary: &CommandRegistry,
    addons: Option<&dyn AddonSource>,
) -> Result<CommandRegistry> {
    let mut merged = primary.clone();
    if let Some(source) = addons {
        source.each_addon_command(&mut |addon_name, commands| {
            for name in merged.merge(commands) {
                warn!(addon = addon_name, command = %name, "addon command replaces an existing command");
            }
            Ok(())
        })?;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::error::HelpError;
    use crate::test_helpers::{alpha_beta_registry, descriptor, names, FailingAddons};

    fn project() -> Project {
        Project::new(vec![
            AddonCommandSet::new(
                "deploy-addon",
                CommandRegistry::from_descriptors([descriptor("deploy", &["dp"])]),
            ),
            AddonCommandSet::new(
                "lint-addon",
                CommandRegistry::from_descriptors([descriptor("lint", &[]), descriptor("beta", &[])]),
            ),
        ])
    }

    #[test]
    fn visits_addons_in_order() {
        let project = project();
        let mut seen = Vec::new();
        project
            .each_addon_command(&mut |name, commands| {
                seen.push((name.to_string(), names(commands)));
                Ok(())
            })
            .unwrap();
        assert_eq!(
            seen,
            vec![
                ("deploy-addon".to_string(), vec!["deploy".to_string()]),
                ("lint-addon".to_string(), vec!["lint".to_string(), "beta".to_string()]),
            ]
        );
    }

    #[test]
    fn merge_without_source_is_a_copy() {
        let primary = alpha_beta_registry();
        let merged = merge_addon_commands(&primary, None).unwrap();
        assert_eq!(names(&merged), names(&primary));
    }

    #[test]
    fn merge_appends_and_overrides() {
        let primary = alpha_beta_registry();
        let project = project();
        let merged = merge_addon_commands(&primary, Some(&project)).unwrap();
        assert_eq!(names(&merged), vec!["alpha", "beta", "deploy", "lint"]);
        assert_eq!(merged.resolve("dp").unwrap().descriptor().name, "deploy");
        // Replaced in place: the addon's `beta` has no `b` alias.
        assert!(merged.resolve("b").is_err());
        assert_eq!(names(&primary), vec!["alpha", "beta"]);
        assert!(primary.resolve("b").is_ok());
    }

    #[test]
    fn traversal_failure_propagates() {
        let primary = alpha_beta_registry();
        let err = merge_addon_commands(&primary, Some(&FailingAddons)).unwrap_err();
        assert!(matches!(err, HelpError::Addon { ref addon, .. } if addon == "broken"));
    }
}
