//! Filesystem adapters.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

use std::{io, path::Path};

use kiln_core::{application::ApplicationError, error::KilnError};

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KilnError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
