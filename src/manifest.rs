//! Project manifest: extra primary commands plus addon command sets.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::commands::{AddonCommandSet, CommandDescriptor, CommandRegistry, Project};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
    #[serde(default)]
    pub addons: Vec<AddonManifest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddonManifest {
    pub name: String,
    #[serde(default)]
    pub commands: Vec<CommandDescriptor>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid JSON in manifest: {0}")]
    InvalidJson(String),
    #[error("IO error reading manifest: {0}")]
    IoError(#[from] std::io::Error),
}

pub fn load_manifest(path: &Path) -> Result<ProjectManifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ManifestError::InvalidJson(e.to_string()))
}

impl ProjectManifest {
    /// Append the manifest's own commands to `registry`.
    ///
    /// A command whose key is already registered overrides it in place.
    pub fn extend_registry(&self, registry: &mut CommandRegistry) -> Vec<String> {
        let overridden =
            registry.merge(&CommandRegistry::from_descriptors(self.commands.iter().cloned()));
        for name in &overridden {
            info!(command = %name, "manifest command overrides a built-in command");
        }
        overridden
    }

    /// The addon side of the manifest, in file order.
    pub fn project(&self) -> Project {
        Project::new(
            self.addons
                .iter()
                .map(|addon| {
                    AddonCommandSet::new(
                        &addon.name,
                        CommandRegistry::from_descriptors(addon.commands.iter().cloned()),
                    )
                })
                .collect(),
        )
    }
}
