use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("environment not ready: missing required tools: {0}")]
    EnvironmentNotReady(String),

    #[error("retrieval failed for {framework}: {reason}")]
    RetrievalFailed { framework: String, reason: String },

    #[error("destination '{0}' is not covered by the workspace manifest")]
    DestinationOutsideManifest(String),

    #[error("cleanup failed: could not remove staging area '{path}'")]
    CleanupFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InstallError>;
