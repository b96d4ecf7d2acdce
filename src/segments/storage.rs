use std::fs;
use std::path::{Path, PathBuf};

use crate::segments::SegmentError;
use crate::segments::db_types::Segment;

/// Where the segment list lives.
///
/// The list is always read and written whole.
pub trait SegmentRepository {
    fn load(&self) -> Result<Vec<Segment>, SegmentError>;
    fn save(&mut self, segments: &[Segment]) -> Result<(), SegmentError>;
}

/// Segment list kept in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSegmentStore {
    path: PathBuf,
}

impl JsonFileSegmentStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SegmentRepository for JsonFileSegmentStore {
    fn load(&self) -> Result<Vec<Segment>, SegmentError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }

        let segments = serde_json::from_str(&json)?;
        Ok(segments)
    }

    fn save(&mut self, segments: &[Segment]) -> Result<(), SegmentError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(segments)?;
        fs::write(&self.path, json)?;

        tracing::debug!("Saved {} segments to {}", segments.len(), self.path.display());
        Ok(())
    }
}

/// In-memory segment list
#[derive(Debug, Clone, Default)]
pub struct InMemorySegmentStore {
    segments: Vec<Segment>,
}

impl InMemorySegmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SegmentRepository for InMemorySegmentStore {
    fn load(&self) -> Result<Vec<Segment>, SegmentError> {
        Ok(self.segments.clone())
    }

    fn save(&mut self, segments: &[Segment]) -> Result<(), SegmentError> {
        self.segments = segments.to_vec();
        Ok(())
    }
}
