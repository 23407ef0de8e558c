//! Zip packaging of an artifact list.
//!
//! Entries are written in input order with Deflate at level 9. Every entry
//! carries the same fixed timestamp and permissions, so identical artifact
//! lists produce byte-identical archives.

use std::io::{Cursor, Read, Write};

use tracing::{debug, instrument};
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter, write::SimpleFileOptions};

use crate::{
    application::ApplicationError,
    domain::{Artifact, ArtifactPath, ProjectName},
    error::KilnResult,
};

/// Extension of produced archives, without the dot.
pub const ARCHIVE_EXTENSION: &str = "zip";

const COMPRESSION_LEVEL: i64 = 9;
const FILE_MODE: u32 = 0o644;

/// Suggested file name for a project's archive: `<name>-scaffold.zip`.
pub fn archive_file_name(name: &ProjectName) -> String {
    format!("{name}-scaffold.{ARCHIVE_EXTENSION}")
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .last_modified_time(DateTime::default())
        .unix_permissions(FILE_MODE)
}

fn packaging_failed(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::PackagingFailed {
        reason: e.to_string(),
    }
}

fn unpacking_failed(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::UnpackingFailed {
        reason: e.to_string(),
    }
}

/// Serialise `artifacts` into an in-memory zip container.
#[instrument(skip_all, fields(entries = artifacts.len()))]
pub fn package(artifacts: &[Artifact]) -> KilnResult<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = entry_options();

        for artifact in artifacts {
            zip.start_file(artifact.path.as_str(), options)
                .map_err(packaging_failed)?;
            zip.write_all(artifact.content.as_bytes())
                .map_err(packaging_failed)?;
        }

        zip.finish().map_err(packaging_failed)?;
    }

    debug!(bytes = buffer.len(), "Archive written");
    Ok(buffer)
}

/// Read a container produced by [`package`] back into artifacts, entry order
/// preserved. Directory entries are skipped.
#[instrument(skip_all, fields(bytes = bytes.len()))]
pub fn unpack(bytes: &[u8]) -> KilnResult<Vec<Artifact>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(unpacking_failed)?;
    let mut artifacts = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(unpacking_failed)?;
        if entry.is_dir() {
            continue;
        }

        let path = ArtifactPath::try_new(entry.name()).map_err(unpacking_failed)?;
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(unpacking_failed)?;

        artifacts.push(Artifact { path, content });
    }

    Ok(artifacts)
}
