//! Implementation of the `kiln new` command.
//!
//! Responsibility: resolve a manifest, generate the artifacts once, then
//! either package them into `<name>-scaffold.zip` or extract them into
//! `<output>/<name>`. No generation logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use kiln_adapters::{ArchiveFileSink, LocalFilesystem};
use kiln_core::{
    application::{ScaffoldService, archive_file_name, generate_and_deliver, generate_scaffold},
    domain::{Artifact, Manifest, files_to_tree},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    commands::{prompt, resolve_manifest},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// How the scaffold leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Archive,
    Directory,
}

/// Machine-readable result of `kiln new`.
#[derive(Debug, Serialize)]
struct NewReport<'a> {
    name: &'a str,
    delivery: Delivery,
    path: String,
    files: usize,
}

/// Execute the `kiln new` command.
///
/// 1. Merge flags, manifest file, template and config into a manifest
/// 2. Generate the artifact list
/// 3. Stop after printing the tree if `--dry-run`
/// 4. Refuse to clobber existing output unless `--force`
/// 5. Confirm when attached to a terminal, unless `--yes`
/// 6. Write the archive or the directory
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let interactive = prompt::is_interactive(global, output);
    let manifest = resolve_manifest(&args.manifest, config, interactive)?;
    let artifacts = generate_scaffold(&manifest)?;

    let output_dir = output_dir(args.output.as_deref(), config);
    let delivery = if args.extract {
        Delivery::Directory
    } else {
        Delivery::Archive
    };
    let destination = destination(&output_dir, &manifest, delivery);

    debug!(
        manifest = %manifest,
        files = artifacts.len(),
        destination = %destination.display(),
        "Scaffold resolved"
    );

    if args.dry_run {
        output.tree(manifest.name().as_str(), &files_to_tree(&artifacts))?;
        if !output.is_machine_readable() {
            output.info(&format!(
                "Dry run: would write {} files to {}",
                artifacts.len(),
                destination.display()
            ))?;
        }
        return Ok(());
    }

    if destination.exists() && !args.force {
        return Err(CliError::OutputExists { path: destination });
    }

    if interactive && !args.yes {
        prompt::show_summary(output, &summary_rows(&manifest, &destination))?;
        if !prompt::confirm("Create this project?")? {
            return Err(CliError::Cancelled);
        }
    }

    info!(project = %manifest.name(), ?delivery, "Writing scaffold");
    let spinner = output.spinner(&format!("Firing {}...", manifest.name()));
    let written = match delivery {
        Delivery::Archive => write_archive(&artifacts, &manifest, &output_dir),
        Delivery::Directory => write_directory(&artifacts, &destination, args.force),
    };
    spinner.finish_and_clear();
    written?;

    if output.is_machine_readable() {
        output.json(&NewReport {
            name: manifest.name().as_str(),
            delivery,
            path: destination.display().to_string(),
            files: artifacts.len(),
        })?;
        return Ok(());
    }

    report_success(output, &manifest, &destination, delivery, artifacts.len())
}

// ── Delivery ──────────────────────────────────────────────────────────────────

fn write_archive(artifacts: &[Artifact], manifest: &Manifest, dir: &Path) -> CliResult<()> {
    let sink = ArchiveFileSink::new(dir);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "failed to start the async runtime")?;

    runtime.block_on(generate_and_deliver(artifacts, manifest, &sink))?;
    Ok(())
}

fn write_directory(artifacts: &[Artifact], root: &Path, force: bool) -> CliResult<()> {
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    service.write_project(root, artifacts, force)?;
    Ok(())
}

// ── Paths ─────────────────────────────────────────────────────────────────────

/// `--output`, else the configured directory, else the working directory.
fn output_dir(flag: Option<&Path>, config: &AppConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.output.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn destination(dir: &Path, manifest: &Manifest, delivery: Delivery) -> PathBuf {
    match delivery {
        Delivery::Archive => dir.join(archive_file_name(manifest.name())),
        Delivery::Directory => dir.join(manifest.name().as_str()),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn summary_rows(manifest: &Manifest, destination: &Path) -> Vec<(&'static str, String)> {
    let tooling: Vec<&str> = [
        (manifest.lint(), "eslint"),
        (manifest.prettier(), "prettier"),
        (manifest.git(), "git"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    vec![
        ("Project", manifest.name().to_string()),
        ("Framework", manifest.framework().display_name().to_string()),
        ("Language", manifest.language().display_name().to_string()),
        ("Styling", manifest.styling().display_name().to_string()),
        ("Package manager", manifest.package_manager().to_string()),
        (
            "Tooling",
            if tooling.is_empty() {
                "none".to_string()
            } else {
                tooling.join(", ")
            },
        ),
        ("Destination", destination.display().to_string()),
    ]
}

fn report_success(
    output: &OutputManager,
    manifest: &Manifest,
    destination: &Path,
    delivery: Delivery,
    files: usize,
) -> CliResult<()> {
    let name = manifest.name();
    let pm = manifest.package_manager();

    match delivery {
        Delivery::Archive => output.success(&format!(
            "Packed {files} files into {}",
            destination.display()
        ))?,
        Delivery::Directory => output.success(&format!(
            "Created '{name}' with {files} files at {}",
            destination.display()
        ))?,
    }

    output.print("")?;
    output.print("Next steps:")?;
    if delivery == Delivery::Archive {
        let file_name = archive_file_name(name);
        output.print(&format!("  unzip {file_name} -d {name}"))?;
    }
    output.print(&format!("  cd {name}"))?;
    output.print(&format!("  {}", pm.install_command()))?;
    output.print(&format!("  {}", pm.run_command("dev")))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{Framework, Language, PackageManager, Styling};

    fn manifest() -> Manifest {
        Manifest::builder()
            .framework(Framework::React)
            .language(Language::Ts)
            .styling(Styling::Css)
            .package_manager(PackageManager::Pnpm)
            .name("shop")
            .lint(false)
            .prettier(true)
            .build()
            .unwrap()
    }

    #[test]
    fn archive_destination_uses_scaffold_suffix() {
        let path = destination(Path::new("out"), &manifest(), Delivery::Archive);
        assert_eq!(path, PathBuf::from("out").join("shop-scaffold.zip"));
    }

    #[test]
    fn directory_destination_is_project_name() {
        let path = destination(Path::new("out"), &manifest(), Delivery::Directory);
        assert_eq!(path, PathBuf::from("out").join("shop"));
    }

    #[test]
    fn output_flag_beats_config_directory() {
        let mut config = AppConfig::default();
        config.output.directory = Some(PathBuf::from("/from/config"));

        assert_eq!(
            output_dir(Some(Path::new("/from/flag")), &config),
            PathBuf::from("/from/flag")
        );
        assert_eq!(output_dir(None, &config), PathBuf::from("/from/config"));
        assert_eq!(output_dir(None, &AppConfig::default()), PathBuf::from("."));
    }

    #[test]
    fn summary_lists_enabled_tooling_only() {
        let rows = summary_rows(&manifest(), Path::new("out/shop-scaffold.zip"));
        let tooling = rows.iter().find(|(label, _)| *label == "Tooling").unwrap();
        assert_eq!(tooling.1, "prettier, git");
    }

    #[test]
    fn report_names_delivery_in_lowercase() {
        let report = NewReport {
            name: "shop",
            delivery: Delivery::Archive,
            path: "shop-scaffold.zip".into(),
            files: 12,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["delivery"], "archive");
        assert_eq!(json["files"], 12);
    }

    #[test]
    fn write_archive_creates_zip() {
        let dir = tempfile::tempdir().unwrap();
        let m = manifest();
        let artifacts = generate_scaffold(&m).unwrap();

        write_archive(&artifacts, &m, dir.path()).unwrap();

        let bytes = std::fs::read(dir.path().join("shop-scaffold.zip")).unwrap();
        let back = kiln_core::application::unpack(&bytes).unwrap();
        assert_eq!(back, artifacts);
    }
}
