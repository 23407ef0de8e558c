//! Infrastructure adapters for Kiln.
//!
//! This crate implements the ports defined in `kiln-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod manifest_loader;
pub mod sink;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest_loader::{ManifestFormat, load_manifest};
pub use sink::{ArchiveFileSink, MemorySink};
