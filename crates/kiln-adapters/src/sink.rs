//! Delivery sinks.
//!
//! The engine hands a finished archive to exactly one [`DeliverySink`]. The
//! CLI uses [`ArchiveFileSink`] to drop it into a directory; tests capture it
//! with [`MemorySink`].

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use kiln_core::{
    application::{ApplicationError, ports::DeliverySink},
    error::KilnResult,
};
use tracing::{debug, instrument};

/// Writes each delivered archive to `<dir>/<file_name>`.
///
/// The directory is created on first delivery. An existing file with the
/// same name is overwritten.
#[derive(Debug, Clone)]
pub struct ArchiveFileSink {
    dir: PathBuf,
}

impl ArchiveFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where an archive called `file_name` lands.
    pub fn target(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl DeliverySink for ArchiveFileSink {
    #[instrument(skip(self, bytes), fields(dir = %self.dir.display(), bytes = bytes.len()))]
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> KilnResult<()> {
        let failed = |e: std::io::Error| ApplicationError::DeliveryFailed {
            file_name: file_name.to_string(),
            reason: e.to_string(),
        };

        std::fs::create_dir_all(&self.dir).map_err(failed)?;
        let target = self.target(file_name);
        std::fs::write(&target, bytes).map_err(failed)?;

        debug!(path = %target.display(), "Archive written");
        Ok(())
    }
}

/// Captures deliveries in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(file_name, bytes)` pair received so far, in order.
    pub fn deliveries(&self) -> Vec<(String, Vec<u8>)> {
        self.deliveries
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.deliveries.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DeliverySink for MemorySink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> KilnResult<()> {
        let mut deliveries =
            self.deliveries
                .lock()
                .map_err(|_| ApplicationError::DeliveryFailed {
                    file_name: file_name.to_string(),
                    reason: "sink lock poisoned".into(),
                })?;
        deliveries.push((file_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}
