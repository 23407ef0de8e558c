//! The `Manifest` aggregate root, its builder and its raw input form.
//!
//! A `Manifest` is the fully-resolved, validated set of choices the generator
//! set consumes. Once a `Manifest` exists every field is guaranteed to hold a
//! member of its closed set and the project name satisfies its rule.
//!
//! Two construction paths exist:
//! - [`ManifestBuilder`] for typed callers (CLI flags, template presets)
//! - [`RawManifest`] for string-keyed input (config files, JSON from a wizard),
//!   converted with `Manifest::try_from`
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Framework, Language, PackageManager, Styling},
};

/// Longest name a package registry accepts.
pub const MAX_NAME_LEN: usize = 214;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// Project folder and package name.
///
/// Invariant: non-empty, at most [`MAX_NAME_LEN`] characters, only
/// `a-z`, `0-9`, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reject = |reason: String| DomainError::InvalidProjectName {
            name: name.clone(),
            reason,
        };

        if name.is_empty() {
            return Err(reject("name cannot be empty".into()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(reject(format!(
                "name is {} characters, the limit is {MAX_NAME_LEN}",
                name.len()
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-' | '_'))
        {
            return Err(reject(format!("character '{bad}' is not allowed")));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Aggregate root ───────────────────────────────────────────────────────────

/// A fully-validated scaffold manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    framework: Framework,
    language: Language,
    styling: Styling,
    package_manager: PackageManager,
    name: ProjectName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    lint: bool,
    prettier: bool,
    git: bool,
}

impl Manifest {
    /// Start building a new `Manifest`.
    pub fn builder() -> ManifestBuilder {
        ManifestBuilder::new()
    }

    pub const fn framework(&self) -> Framework {
        self.framework
    }
    pub const fn language(&self) -> Language {
        self.language
    }
    pub const fn styling(&self) -> Styling {
        self.styling
    }
    pub const fn package_manager(&self) -> PackageManager {
        self.package_manager
    }
    pub fn name(&self) -> &ProjectName {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub const fn lint(&self) -> bool {
        self.lint
    }
    pub const fn prettier(&self) -> bool {
        self.prettier
    }
    pub const fn git(&self) -> bool {
        self.git
    }

    pub const fn is_typescript(&self) -> bool {
        self.language.is_typescript()
    }

    /// Re-check the invariants that serde or struct updates could bypass.
    ///
    /// Called by the orchestrator before any generator runs.
    pub fn validate(&self) -> Result<(), DomainError> {
        ProjectName::parse(self.name.as_str())?;
        Ok(())
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, styling {}, {})",
            self.name, self.framework, self.language, self.styling, self.package_manager
        )
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Builder for [`Manifest`].
///
/// The enumerated fields and the name are required; `build()` reports the
/// first one missing. Tooling flags default to no lint, no prettier, git on.
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    framework: Option<Framework>,
    language: Option<Language>,
    styling: Option<Styling>,
    package_manager: Option<PackageManager>,
    name: Option<String>,
    description: Option<String>,
    lint: Option<bool>,
    prettier: Option<bool>,
    git: Option<bool>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn styling(mut self, styling: Styling) -> Self {
        self.styling = Some(styling);
        self
    }

    pub fn package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = Some(package_manager);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Blank descriptions are treated as absent.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }

    pub fn lint(mut self, lint: bool) -> Self {
        self.lint = Some(lint);
        self
    }

    pub fn prettier(mut self, prettier: bool) -> Self {
        self.prettier = Some(prettier);
        self
    }

    pub fn git(mut self, git: bool) -> Self {
        self.git = Some(git);
        self
    }

    pub fn build(self) -> Result<Manifest, DomainError> {
        let framework = self
            .framework
            .ok_or(DomainError::MissingRequiredField { field: "framework" })?;
        let language = self
            .language
            .ok_or(DomainError::MissingRequiredField { field: "language" })?;
        let styling = self
            .styling
            .ok_or(DomainError::MissingRequiredField { field: "styling" })?;
        let package_manager = self.package_manager.ok_or(DomainError::MissingRequiredField {
            field: "packageManager",
        })?;
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;

        Ok(Manifest {
            framework,
            language,
            styling,
            package_manager,
            name: ProjectName::parse(name)?,
            description: self.description,
            lint: self.lint.unwrap_or(false),
            prettier: self.prettier.unwrap_or(false),
            git: self.git.unwrap_or(true),
        })
    }
}

// ── Raw input ────────────────────────────────────────────────────────────────

/// String-keyed, possibly partial manifest as produced by a wizard or a
/// config file. Every field is optional; conversion reports what is missing
/// or out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawManifest {
    pub framework: Option<String>,
    pub language: Option<String>,
    pub styling: Option<String>,
    pub package_manager: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub lint: Option<bool>,
    pub prettier: Option<bool>,
    pub git: Option<bool>,
}

impl RawManifest {
    /// Fill every unset field of `self` from `fallback`.
    pub fn or(self, fallback: RawManifest) -> Self {
        Self {
            framework: self.framework.or(fallback.framework),
            language: self.language.or(fallback.language),
            styling: self.styling.or(fallback.styling),
            package_manager: self.package_manager.or(fallback.package_manager),
            name: self.name.or(fallback.name),
            description: self.description.or(fallback.description),
            lint: self.lint.or(fallback.lint),
            prettier: self.prettier.or(fallback.prettier),
            git: self.git.or(fallback.git),
        }
    }
}

impl From<&Manifest> for RawManifest {
    fn from(m: &Manifest) -> Self {
        Self {
            framework: Some(m.framework.to_string()),
            language: Some(m.language.to_string()),
            styling: Some(m.styling.to_string()),
            package_manager: Some(m.package_manager.to_string()),
            name: Some(m.name.to_string()),
            description: m.description.clone(),
            lint: Some(m.lint),
            prettier: Some(m.prettier),
            git: Some(m.git),
        }
    }
}

impl TryFrom<RawManifest> for Manifest {
    type Error = DomainError;

    fn try_from(raw: RawManifest) -> Result<Self, Self::Error> {
        fn required<T: std::str::FromStr<Err = DomainError>>(
            value: Option<String>,
            field: &'static str,
        ) -> Result<T, DomainError> {
            value
                .ok_or(DomainError::MissingRequiredField { field })?
                .parse()
        }

        let mut builder = Manifest::builder()
            .framework(required(raw.framework, "framework")?)
            .language(required(raw.language, "language")?)
            .styling(required(raw.styling, "styling")?)
            .package_manager(required(raw.package_manager, "packageManager")?);

        if let Some(name) = raw.name {
            builder = builder.name(name);
        }
        if let Some(description) = raw.description {
            builder = builder.description(description);
        }
        if let Some(lint) = raw.lint {
            builder = builder.lint(lint);
        }
        if let Some(prettier) = raw.prettier {
            builder = builder.prettier(prettier);
        }
        if let Some(git) = raw.git {
            builder = builder.git(git);
        }

        builder.build()
    }
}
