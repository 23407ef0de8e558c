//! `kiln inspect`: list or read back an archive produced by `kiln new`.

use std::path::Path;

use tracing::{debug, instrument};

use kiln_core::{
    application::unpack,
    domain::{Artifact, files_to_tree},
};

use crate::{
    cli::InspectArgs,
    commands::preview::lookup,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(archive = %args.archive.display()))]
pub fn execute(args: InspectArgs, output: &OutputManager) -> CliResult<()> {
    let artifacts = read_archive(&args.archive)?;
    debug!(entries = artifacts.len(), "Archive unpacked");

    match args.show {
        Some(path) => output.data(&lookup(&artifacts, &path)?.content)?,
        None => output.tree(&root_label(&args.archive), &files_to_tree(&artifacts))?,
    }
    Ok(())
}

fn read_archive(path: &Path) -> CliResult<Vec<Artifact>> {
    if !path.exists() {
        return Err(CliError::FileNotFound {
            path: path.display().to_string(),
            available: Vec::new(),
        });
    }

    let bytes =
        std::fs::read(path).with_cli_context(|| format!("failed to read {}", path.display()))?;
    Ok(unpack(&bytes)?)
}

/// `my-app-scaffold.zip` is shown as `my-app`.
fn root_label(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("archive");
    stem.strip_suffix("-scaffold").unwrap_or(stem).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::application::package;

    #[test]
    fn root_label_drops_scaffold_suffix() {
        assert_eq!(root_label(Path::new("out/my-app-scaffold.zip")), "my-app");
        assert_eq!(root_label(Path::new("other.zip")), "other");
    }

    #[test]
    fn missing_archive_is_not_found() {
        let err = read_archive(Path::new("/no/such/file.zip")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn reads_back_packaged_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo-scaffold.zip");
        let artifacts = vec![
            Artifact::new("package.json", "{}\n"),
            Artifact::new("src/index.js", "export {};\n"),
        ];
        std::fs::write(&path, package(&artifacts).unwrap()).unwrap();

        assert_eq!(read_archive(&path).unwrap(), artifacts);
    }

    #[test]
    fn garbage_is_rejected_as_user_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.zip");
        std::fs::write(&path, b"not a zip").unwrap();

        assert_eq!(read_archive(&path).unwrap_err().exit_code(), 2);
    }
}
