use crate::domain::{
    entities::{Artifact, Manifest, artifact},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_manifest(manifest: &Manifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    pub fn validate_artifacts(artifacts: &[Artifact]) -> Result<(), DomainError> {
        artifact::validate_artifacts(artifacts)
    }
}
