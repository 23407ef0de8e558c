// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Kiln.
//!
//! This module holds the manifest model and the rules every generated file
//! set obeys. Generators, packaging and delivery live outside it and only
//! consume what is defined here.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application layer
//! - **Immutable entities**: A built `Manifest` has no setters
//! - **Closed sets**: Every enumerated choice is a Rust enum, parsed once
//!
// Public API - what the world sees
pub mod capabilities;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    artifact::{Artifact, validate_artifacts},
    common::ArtifactPath,
    manifest::{MAX_NAME_LEN, Manifest, ManifestBuilder, ProjectName, RawManifest},
    tree::{NodeKind, TreeNode, files_to_tree, find_node, forest_file_count, render_tree},
};

pub use catalog::{TEMPLATE_CATALOG, TemplatePreset, find_template, templates_for};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{Framework, Language, PackageManager, Styling};

pub use capabilities::{FRAMEWORK_REGISTRY, FrameworkDef, framework_def};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Manifest Tests
    // ========================================================================

    #[test]
    fn validator_accepts_built_manifest() {
        let manifest = find_template("next-ts-tailwind")
            .unwrap()
            .manifest("site", Some("Marketing site"))
            .unwrap();
        assert!(DomainValidator::validate_manifest(&manifest).is_ok());
    }

    #[test]
    fn deserialised_manifest_passes_validation() {
        let json = r#"{"framework":"node","language":"js","styling":"none",
            "packageManager":"npm","name":"ok-name","lint":false,"prettier":false,"git":true}"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert!(DomainValidator::validate_manifest(&manifest).is_ok());
    }

    #[test]
    fn manifest_display_summarises_choices() {
        let manifest = find_template("node-js-minimal")
            .unwrap()
            .manifest("api", None)
            .unwrap();
        assert_eq!(manifest.to_string(), "api (node js, styling none, npm)");
    }

    // ========================================================================
    // Artifact + Tree Tests
    // ========================================================================

    #[test]
    fn validator_rejects_duplicate_artifacts() {
        let list = [Artifact::new("a.txt", ""), Artifact::new("a.txt", "")];
        assert!(DomainValidator::validate_artifacts(&list).is_err());
    }

    #[test]
    fn tree_leaf_count_matches_artifacts() {
        let list = [
            Artifact::new("package.json", "{}"),
            Artifact::new("src/index.ts", ""),
            Artifact::new("src/lib/.gitkeep", ""),
        ];
        let forest = files_to_tree(&list);
        assert_eq!(forest_file_count(&forest), list.len());
    }

    // ========================================================================
    // Capability Tests
    // ========================================================================

    #[test]
    fn framework_display_name_comes_from_registry() {
        assert_eq!(Framework::React.display_name(), "React (Vite)");
        assert_eq!(Framework::Static.capabilities().source_root, "src");
    }
}
