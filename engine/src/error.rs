use thiserror::Error;

/// Transport-level failures of the engine: file access, CSV plumbing,
/// configuration and export. Cell-level parse failures are deliberately not
/// represented here; the pipeline contract collapses those to blank/0.0 and
/// never halts.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Export error: {0}")]
    ExportError(String),

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
