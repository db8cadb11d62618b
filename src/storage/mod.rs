// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::extractors::AuditRecord;
use crate::utils::error::WriteError;

/// Writes extracted records to a single JSON file.
pub struct RecordWriter {
    path: PathBuf,
}

impl RecordWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes `records` as a pretty-printed JSON array (two-space indent,
    /// non-ASCII kept as-is) and returns how many were written.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, records: &[AuditRecord]) -> Result<usize, WriteError> {
        let json = serde_json::to_string_pretty(records)?;

        fs::write(&self.path, json)
            .map_err(|e| WriteError::Io { path: self.path.clone(), source: e })?;

        tracing::info!("Saved {} record(s) to {}", records.len(), self.path.display());
        Ok(records.len())
    }
}
