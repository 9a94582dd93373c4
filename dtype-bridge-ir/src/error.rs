use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error raised by an external model or serializer.
pub type ExternalError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum IrError {
    #[error("Model has no outputs to name")]
    NoOutputs,
    #[error("Failed to name output {index}: {source}")]
    Tagging {
        index: usize,
        #[source]
        source: ExternalError,
    },
    #[error("Failed to create model version directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize model to {structure:?} / {weights:?}: {source}")]
    Serialize {
        structure: PathBuf,
        weights: PathBuf,
        #[source]
        source: ExternalError,
    },
    #[error("Logger initialization failed: {0}")]
    LoggerInit(String),
}
