pub mod artifact;
pub mod common;
pub mod manifest;
pub mod tree;

pub use crate::domain::DomainError;
pub use artifact::Artifact;
pub use common::ArtifactPath;
pub use manifest::{Manifest, ManifestBuilder, ProjectName, RawManifest};
pub use tree::{NodeKind, TreeNode};
