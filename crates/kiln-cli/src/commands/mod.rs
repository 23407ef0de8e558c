//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on `kiln-core` and
//! `kiln-adapters`, then reports through the [`OutputManager`]. Manifest
//! resolution is shared by `new` and `preview` and lives here.
//!
//! [`OutputManager`]: crate::output::OutputManager

pub mod completions;
pub mod config;
pub mod init;
pub mod inspect;
pub mod new;
pub mod preview;
pub mod prompt;
pub mod templates;

use tracing::debug;

use kiln_adapters::load_manifest;
use kiln_core::domain::{self, Manifest, RawManifest, TemplatePreset, find_template};

use crate::{cli::ManifestArgs, config::AppConfig, error::CliResult};

/// Resolve the manifest for `new`/`preview`.
///
/// Layers, highest priority first: flags, `--manifest` file, `--template`
/// preset, config defaults. When `interactive` is set, required choices that
/// are still missing are asked for.
pub fn resolve_manifest(
    args: &ManifestArgs,
    config: &AppConfig,
    interactive: bool,
) -> CliResult<Manifest> {
    let file = match &args.manifest {
        Some(path) => load_manifest(path)?,
        None => RawManifest::default(),
    };

    let preset = match &args.template {
        Some(id) => preset_layer(find_template(id)?),
        None => RawManifest::default(),
    };

    let mut raw = flag_layer(args)
        .or(file)
        .or(preset)
        .or(config.defaults.as_raw_manifest());

    if interactive {
        prompt::fill_missing(&mut raw)?;
    }

    debug!(?raw, "Manifest layers merged");
    Ok(Manifest::try_from(raw)?)
}

fn flag_layer(args: &ManifestArgs) -> RawManifest {
    RawManifest {
        framework: args.framework.map(|f| domain::Framework::from(f).to_string()),
        language: args.language.map(|l| domain::Language::from(l).to_string()),
        styling: args.styling.map(|s| domain::Styling::from(s).to_string()),
        package_manager: args
            .package_manager
            .map(|p| domain::PackageManager::from(p).to_string()),
        name: args.name.clone(),
        description: args.description.clone(),
        lint: args.no_lint.then_some(false),
        prettier: args.no_prettier.then_some(false),
        git: args.no_git.then_some(false),
    }
}

fn preset_layer(preset: &TemplatePreset) -> RawManifest {
    RawManifest {
        framework: Some(preset.framework.to_string()),
        language: Some(preset.language.to_string()),
        styling: Some(preset.styling.to_string()),
        package_manager: Some(preset.package_manager.to_string()),
        lint: Some(preset.lint),
        prettier: Some(preset.prettier),
        git: Some(preset.git),
        ..RawManifest::default()
    }
}
