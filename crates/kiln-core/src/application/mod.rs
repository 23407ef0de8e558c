//! Application layer for Kiln.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (scaffold generation, catalog queries)
//! - **Archive**: Zip packaging of generated artifacts
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer and the generator set
//! but contains no manifest rules itself. Those live in `crate::domain`.

pub mod archive;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ScaffoldService,
    TemplateInfo, // DTO for template metadata
    TemplateService,
    generate_and_deliver,
    generate_scaffold,
};

pub use archive::{ARCHIVE_EXTENSION, archive_file_name, package, unpack};

// Re-export port traits (for adapter implementation)
pub use ports::{DeliverySink, Filesystem};

pub use error::ApplicationError;
