use thiserror::Error;

use crate::{config::ConfigError, ingest::IngestError, report::ReportError};

/// Any failure that aborts a run. Nothing is retried and no partial report
/// is written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
