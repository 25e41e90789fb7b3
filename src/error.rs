use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TfStatsError>;

#[derive(Debug, Error)]
pub enum TfStatsError {
    #[error("state file not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read state file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("state file '{}' is not valid JSON: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but has no top-level `resources` sequence.
    #[error("{origin}: no top-level 'resources' list found")]
    MissingResources { origin: String },

    #[error("failed to write '{}': {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
