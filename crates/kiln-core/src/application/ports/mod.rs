//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kiln-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DeliverySink`: Receives the finished archive
//!   - `Filesystem`: File operations for in-place extraction
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DeliverySink, Filesystem};

#[cfg(test)]
pub use output::{MockDeliverySink, MockFilesystem};
