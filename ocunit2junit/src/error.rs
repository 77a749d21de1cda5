use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("missing required <log-file> argument")]
    MissingLogFile,

    #[error("unparseable suite timestamp: {text:?}")]
    Timestamp { text: String },

    #[error("unparseable case duration: {text:?}")]
    Duration { text: String },
}
