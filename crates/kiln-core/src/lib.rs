//! Kiln Core - scaffold engine
//!
//! This crate turns a validated project manifest into a deterministic set of
//! text files for a JavaScript/TypeScript project, and packages that set as
//! a zip archive. It follows hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             kiln-cli (CLI)              │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (generate_scaffold, ScaffoldService,   │
//! │   generate_and_deliver, archive)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Driven: Filesystem, DeliverySink)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      kiln-adapters (Infrastructure)     │
//! │ (LocalFilesystem, ArchiveFileSink, ...) │
//! └─────────────────────────────────────────┘
//!
//! ┌──────────────────────┐  ┌───────────────────────┐
//! │  Generators          │  │  Domain Layer         │
//! │  (one per file kind) │─▶│  (Manifest, Artifact, │
//! │  pure functions      │  │   TreeNode, catalog)  │
//! └──────────────────────┘  └───────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kiln_core::{
//!     domain::{Framework, Language, Manifest, PackageManager, Styling},
//!     files_to_tree, generate_scaffold,
//! };
//!
//! // 1. Build a manifest
//! let manifest = Manifest::builder()
//!     .framework(Framework::React)
//!     .language(Language::Ts)
//!     .styling(Styling::Tailwind)
//!     .package_manager(PackageManager::Pnpm)
//!     .name("my-app")
//!     .build()
//!     .unwrap();
//!
//! // 2. Generate the file set and its preview tree
//! let artifacts = generate_scaffold(&manifest).unwrap();
//! let tree = files_to_tree(&artifacts);
//! assert!(!tree.is_empty());
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// One pure function per generated file kind
pub mod generators;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

pub use application::{generate_and_deliver, generate_scaffold};
pub use domain::files_to_tree;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DeliverySink, Filesystem, ScaffoldService, TemplateInfo, TemplateService,
        archive_file_name, generate_and_deliver, generate_scaffold, package, unpack,
    };
    pub use crate::domain::{
        Artifact, ArtifactPath, Framework, Language, Manifest, ManifestBuilder, NodeKind,
        PackageManager, ProjectName, RawManifest, Styling, TreeNode, files_to_tree, render_tree,
    };
    pub use crate::error::{KilnError, KilnResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
