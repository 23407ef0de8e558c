//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use crate::error::KilnResult;
use std::path::Path;

/// Port for handing a finished archive to the outside world.
///
/// Implemented by:
/// - `kiln_adapters::sink::ArchiveFileSink` (writes `<dir>/<file_name>`)
/// - `kiln_adapters::sink::MemorySink` (captures deliveries for tests)
///
/// ## Contract
///
/// - Invoked at most once per delivery, with the complete archive
/// - Never receives partial or streamed content
/// - Failures are reported as `ApplicationError::DeliveryFailed`
#[cfg_attr(test, mockall::automock)]
pub trait DeliverySink: Send + Sync {
    /// Persist or transmit `bytes` under the suggested `file_name`.
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> KilnResult<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Used when a scaffold is extracted straight into a project directory
/// instead of being delivered as an archive.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> KilnResult<()>;
}
