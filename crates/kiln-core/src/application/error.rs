//! Application layer errors.
//!
//! These errors represent failures in packaging, delivery and
//! materialisation, not manifest rules. Rule violations are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Writing the zip container failed.
    #[error("Packaging failed: {reason}")]
    PackagingFailed { reason: String },

    /// Reading a zip container back failed.
    #[error("Could not read archive: {reason}")]
    UnpackingFailed { reason: String },

    /// The delivery sink rejected the archive.
    #[error("Delivery of {file_name} failed: {reason}")]
    DeliveryFailed { file_name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A manifest file could not be read or parsed.
    #[error("Invalid manifest file {path}: {reason}")]
    ManifestUnreadable { path: PathBuf, reason: String },

    /// A blocking task panicked or was cancelled by the runtime.
    #[error("Background task failed: {reason}")]
    TaskFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PackagingFailed { .. } => vec![
                "Packaging is stateless, so retrying is safe".into(),
                "Check available memory if the failure repeats".into(),
            ],
            Self::UnpackingFailed { .. } => vec![
                "Make sure the file is a zip archive produced by kiln".into(),
                "Re-download or regenerate the archive".into(),
            ],
            Self::DeliveryFailed { file_name, .. } => vec![
                format!("Could not hand over {file_name}"),
                "Check that the output directory is writable".into(),
                "Or pick another location with --output".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::ManifestUnreadable { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Manifest files are JSON (.json) or TOML (.toml)".into(),
                "Field names are camelCase, e.g. packageManager".into(),
            ],
            Self::TaskFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. }
            | Self::UnpackingFailed { .. }
            | Self::ManifestUnreadable { .. } => ErrorCategory::Validation,
            Self::PackagingFailed { .. }
            | Self::DeliveryFailed { .. }
            | Self::FilesystemError { .. }
            | Self::TaskFailed { .. } => ErrorCategory::Internal,
        }
    }
}
