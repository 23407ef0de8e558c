use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::common::ArtifactPath, error::DomainError};

/// One generated file: a project-relative path and its literal text.
///
/// Artifacts are created fresh on every generation call and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub path: ArtifactPath,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<ArtifactPath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Empty marker file that keeps an otherwise-empty directory in the tree.
    pub fn placeholder(dir: &str) -> Self {
        Self::new(ArtifactPath::new(format!("{dir}/.gitkeep")), "")
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Check the list-level invariant: no two artifacts share a path.
pub fn validate_artifacts(artifacts: &[Artifact]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(artifacts.len());
    for artifact in artifacts {
        if !seen.insert(artifact.path.as_str()) {
            return Err(DomainError::DuplicatePath {
                path: artifact.path.to_string(),
            });
        }
    }
    Ok(())
}
