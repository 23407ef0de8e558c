// ============================================================================
// domain/error.rs - MANIFEST AND ARTIFACT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Manifest Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unknown {field} '{value}' (expected one of: {})", .expected.join(", "))]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Artifact Errors
    // ========================================================================
    #[error("Invalid artifact path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    #[error("No template with id '{id}'")]
    UnknownTemplate { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{field}'"),
                "Every manifest needs framework, language, styling, package manager and name"
                    .into(),
            ],
            Self::UnknownVariant {
                field, expected, ..
            } => {
                let mut out = vec![format!("Supported values for {field}:")];
                out.extend(expected.iter().map(|v| format!("  • {v}")));
                out
            }
            Self::InvalidProjectName { .. } => vec![
                "Use lowercase letters, digits, hyphens and underscores only".into(),
                "Keep the name at most 214 characters long".into(),
                "Examples: my-app, api_server, site2".into(),
            ],
            Self::UnknownTemplate { id } => vec![
                format!("Template '{id}' is not in the catalog"),
                "Try: kiln templates".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two generators produced '{path}'"),
                "This is a bug in the generator set, please report it".into(),
            ],
            Self::InvalidPath { .. } => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::UnknownVariant { .. }
            | Self::InvalidProjectName { .. }
            | Self::InvalidPath { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_message_lists_expected_values() {
        let err = DomainError::UnknownVariant {
            field: "styling",
            value: "less".into(),
            expected: &["tailwind", "css"],
        };
        assert_eq!(
            err.to_string(),
            "Unknown styling 'less' (expected one of: tailwind, css)"
        );
        assert!(err.suggestions().iter().any(|s| s.contains("tailwind")));
    }

    #[test]
    fn duplicate_path_is_internal() {
        let err = DomainError::DuplicatePath {
            path: "package.json".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
