use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A forward-slash separated path relative to the project root.
///
/// Invariant: never empty, never absolute, no empty / `.` / `..` segments and
/// no backslashes. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactPath(String);

impl ArtifactPath {
    /// Create a new artifact path.
    ///
    /// # Panics
    /// Panics if the path is malformed (use `try_new` for fallible).
    pub fn new(path: impl Into<String>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(e) => panic!("ArtifactPath invariant violated: {e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let reject = |reason: &str| DomainError::InvalidPath {
            path: path.clone(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(reject("path is empty"));
        }
        if path.starts_with('/') {
            return Err(reject("path must be relative"));
        }
        if path.contains('\\') {
            return Err(reject("use '/' as the separator"));
        }
        for segment in path.split('/') {
            match segment {
                "" => return Err(reject("path contains an empty segment")),
                "." | ".." => return Err(reject("path contains a relative segment")),
                _ => {}
            }
        }

        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Last segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ArtifactPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtifactPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl TryFrom<String> for ArtifactPath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ArtifactPath> for String {
    fn from(path: ArtifactPath) -> Self {
        path.0
    }
}

impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
