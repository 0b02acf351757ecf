//! Error types for the listing TUI.

/// Failures of the simulated remote services
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("listing generation failed: {0}")]
    Generation(String),
    #[error("export to Seller Central failed: {0}")]
    Export(String),
    #[error("could not encode export request: {0}")]
    Encode(String),
}

/// Configuration loading failures, raised before the terminal is taken over
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read post file {path}: {source}")]
    PostFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter '{0}'")]
    LogFilter(String),
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
