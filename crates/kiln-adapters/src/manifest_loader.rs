//! Manifest files on disk.
//!
//! A manifest file holds the same camelCase fields as the interchange JSON,
//! in either JSON or TOML. Every field is optional at this stage: the CLI
//! merges the loaded [`RawManifest`] with config defaults and flags before
//! the strict conversion to a [`Manifest`](kiln_core::domain::Manifest).
//!
//! # `kiln.toml` example
//!
//! ```toml
//! name           = "storefront"
//! description    = "Shop front end"
//! framework      = "next"        # next | react | node | static
//! language       = "ts"          # ts | js
//! styling        = "tailwind"    # tailwind | css | scss | sass | none
//! packageManager = "pnpm"        # npm | yarn | pnpm | bun
//! lint           = true
//! prettier       = true
//! git            = true
//! ```

use std::{fs, path::Path};

use kiln_core::{application::ApplicationError, domain::RawManifest, error::KilnResult};
use tracing::{debug, instrument};

/// Serialisation format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick the format from the file extension. Anything other than
    /// `.toml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Read and parse a manifest file.
///
/// # Errors
///
/// Returns [`ApplicationError::ManifestUnreadable`] if the file cannot be read
/// or does not parse in its format.
#[instrument(fields(path = %path.display()))]
pub fn load_manifest(path: &Path) -> KilnResult<RawManifest> {
    let unreadable = |reason: String| ApplicationError::ManifestUnreadable {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|e| unreadable(e.to_string()))?;
    let format = ManifestFormat::from_path(path);

    let raw = parse_manifest(&text, format).map_err(unreadable)?;
    debug!(?format, "Manifest file loaded");
    Ok(raw)
}

/// Parse manifest text in the given format.
pub fn parse_manifest(text: &str, format: ManifestFormat) -> Result<RawManifest, String> {
    match format {
        ManifestFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        ManifestFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::{
        domain::{Framework, Manifest, PackageManager},
        error::KilnError,
    };
    use tempfile::TempDir;

    const TOML: &str = r#"
name = "storefront"
framework = "next"
language = "ts"
styling = "tailwind"
packageManager = "pnpm"
lint = true
"#;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ManifestFormat::from_path(Path::new("a.TOML")), ManifestFormat::Toml);
        assert_eq!(ManifestFormat::from_path(Path::new("a.json")), ManifestFormat::Json);
        assert_eq!(ManifestFormat::from_path(Path::new("kiln")), ManifestFormat::Json);
    }

    #[test]
    fn toml_manifest_converts_to_domain() {
        let raw = parse_manifest(TOML, ManifestFormat::Toml).unwrap();
        assert_eq!(raw.prettier, None);

        let manifest = Manifest::try_from(raw).unwrap();
        assert_eq!(manifest.framework(), Framework::Next);
        assert_eq!(manifest.package_manager(), PackageManager::Pnpm);
    }

    #[test]
    fn partial_json_is_accepted() {
        let raw = parse_manifest(r#"{"framework":"react"}"#, ManifestFormat::Json).unwrap();
        assert_eq!(raw.framework.as_deref(), Some("react"));
        assert!(raw.name.is_none());
    }

    #[test]
    fn load_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kiln.toml");
        fs::write(&path, TOML).unwrap();

        let raw = load_manifest(&path).unwrap();
        assert_eq!(raw.name.as_deref(), Some("storefront"));
    }

    #[test]
    fn broken_file_is_manifest_unreadable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kiln.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(matches!(
            load_manifest(&path).unwrap_err(),
            KilnError::Application(ApplicationError::ManifestUnreadable { .. })
        ));
    }

    #[test]
    fn missing_file_is_manifest_unreadable() {
        assert!(load_manifest(Path::new("/definitely/missing.toml")).is_err());
    }
}
