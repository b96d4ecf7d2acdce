use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::analysis::AnalysisConfig;
use crate::segments::storage::{JsonFileSegmentStore, SegmentRepository};
use crate::transactions::{TransactionRecord, load_transactions_from_path};

pub type SharedSegmentStore = Arc<Mutex<Box<dyn SegmentRepository + Send>>>;

/// Shared state handed to every processor and HTTP handler
#[derive(Clone)]
pub struct AppConfig {
    /// The source table, loaded once and never mutated
    pub transactions: Arc<Vec<TransactionRecord>>,
    pub segments: SharedSegmentStore,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn new<S>(transactions: Vec<TransactionRecord>, segments: S) -> Self
    where
        S: SegmentRepository + Send + 'static,
    {
        let store: Box<dyn SegmentRepository + Send> = Box::new(segments);
        Self {
            transactions: Arc::new(transactions),
            segments: Arc::new(Mutex::new(store)),
            analysis: AnalysisConfig::default(),
        }
    }

    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    /// Load the source table and open the segment store.
    ///
    /// `DATA_PATH` defaults to `./data.csv`, `SEGMENTS_PATH` to `./segments.json`.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let data_path = PathBuf::from(
            std::env::var("DATA_PATH").unwrap_or_else(|_| "./data.csv".to_string()),
        );
        let segments_path = PathBuf::from(
            std::env::var("SEGMENTS_PATH").unwrap_or_else(|_| "./segments.json".to_string()),
        );

        Ok(Self::from_paths(data_path, segments_path)?.with_analysis(AnalysisConfig::from_env()))
    }

    pub fn from_paths(data_path: PathBuf, segments_path: PathBuf) -> Result<Self> {
        let table = load_transactions_from_path(&data_path)
            .with_context(|| format!("DATA_PATH {} could not be loaded", data_path.display()))?;

        tracing::info!("Using segment store at {}", segments_path.display());

        Ok(Self::new(table.records, JsonFileSegmentStore::new(segments_path)))
    }
}
