//! Scaffold Service - main application orchestrator.
//!
//! This module coordinates the scaffolding workflow:
//! 1. Validate the manifest
//! 2. Run the generator registry in order
//! 3. Hand the artifacts to the tree builder, the packager or the filesystem
//!
//! The free functions are the engine's entry points. [`ScaffoldService`]
//! adds the one workflow that needs a driven port: extracting straight into
//! a project directory.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::{
        ApplicationError,
        archive::{archive_file_name, package},
        ports::{DeliverySink, Filesystem},
    },
    domain::{Artifact, DomainValidator as validator, Manifest, TreeNode, files_to_tree},
    error::KilnResult,
    generators::GENERATOR_REGISTRY,
};

/// Run every generator for `manifest` and return the artifacts in registry
/// order.
///
/// Rejects the manifest before any generator runs. Deterministic: the same
/// manifest always yields the same list.
#[instrument(skip_all, fields(manifest = %manifest))]
pub fn generate_scaffold(manifest: &Manifest) -> KilnResult<Vec<Artifact>> {
    validator::validate_manifest(manifest)?;

    let mut artifacts = Vec::new();
    for entry in GENERATOR_REGISTRY {
        let produced = entry.generate(manifest);
        trace!(generator = entry.name, count = produced.len(), "Generator ran");
        artifacts.extend(produced);
    }

    validator::validate_artifacts(&artifacts)?;
    debug!(files = artifacts.len(), "Scaffold generated");
    Ok(artifacts)
}

/// Package `artifacts` and hand the archive to `sink` as
/// `<name>-scaffold.zip`.
///
/// Compression runs on the blocking pool as one unit of work. The sink is
/// called exactly once, and only with a complete archive.
#[instrument(skip_all, fields(project = %manifest.name(), files = artifacts.len()))]
pub async fn generate_and_deliver(
    artifacts: &[Artifact],
    manifest: &Manifest,
    sink: &dyn DeliverySink,
) -> KilnResult<()> {
    let owned = artifacts.to_vec();
    let bytes = tokio::task::spawn_blocking(move || package(&owned))
        .await
        .map_err(|e| ApplicationError::TaskFailed {
            reason: e.to_string(),
        })??;

    let file_name = archive_file_name(manifest.name());
    sink.deliver(&file_name, &bytes)?;

    info!(file = %file_name, bytes = bytes.len(), "Archive delivered");
    Ok(())
}

/// Main scaffolding service.
///
/// Orchestrates generation and writing a project directory to disk.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use kiln_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(Box::new(filesystem));
    /// let root = service.scaffold(&manifest, "./projects", false)?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate the artifacts and the sorted preview tree in one go.
    pub fn preview(&self, manifest: &Manifest) -> KilnResult<(Vec<Artifact>, Vec<TreeNode>)> {
        let artifacts = generate_scaffold(manifest)?;
        let tree = files_to_tree(&artifacts);
        Ok((artifacts, tree))
    }

    /// Scaffold a project directory named after the manifest inside
    /// `parent`.
    ///
    /// Returns the project root. An existing directory is an error unless
    /// `force` is set, in which case it is replaced.
    #[instrument(
        skip_all,
        fields(
            manifest = %manifest,
            parent = %parent.as_ref().display(),
            force
        )
    )]
    pub fn scaffold(
        &self,
        manifest: &Manifest,
        parent: impl AsRef<Path>,
        force: bool,
    ) -> KilnResult<PathBuf> {
        let artifacts = generate_scaffold(manifest)?;
        let root = parent.as_ref().join(manifest.name().as_str());
        self.write_project(&root, &artifacts, force)?;
        Ok(root)
    }

    /// Write `artifacts` under `root` with rollback on failure.
    pub fn write_project(&self, root: &Path, artifacts: &[Artifact], force: bool) -> KilnResult<()> {
        if self.filesystem.exists(root) {
            if !force {
                return Err(ApplicationError::ProjectExists {
                    path: root.to_path_buf(),
                }
                .into());
            }
            warn!(path = %root.display(), "Replacing existing project directory");
            self.filesystem.remove_dir_all(root)?;
        }

        match self.write_all(root, artifacts) {
            Ok(()) => {
                info!(files = artifacts.len(), "Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_all(&self, root: &Path, artifacts: &[Artifact]) -> KilnResult<()> {
        self.filesystem.create_dir_all(root)?;

        for artifact in artifacts {
            let path = artifact
                .path
                .segments()
                .fold(root.to_path_buf(), |acc, segment| acc.join(segment));

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &artifact.content)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
