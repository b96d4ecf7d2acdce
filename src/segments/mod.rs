pub mod db_types;
pub mod operations;
pub mod processor;
pub mod processor_enums;
pub mod storage;

pub use db_types::{Segment, SegmentFilters, SegmentInputArgs, SelectedCategory};
pub use storage::{InMemorySegmentStore, JsonFileSegmentStore, SegmentRepository};

/// Errors raised by segment operations
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Segment {0} not found")]
    NotFound(String),

    #[error("Segment storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Segment storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for the segments processor
#[derive(Clone, Debug, Default)]
pub struct SegmentsConfig {}
