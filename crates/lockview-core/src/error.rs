use crate::feature::DenialSignal;
use crate::url_policy::PatternError;
use std::path::PathBuf;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {}: {source}", .path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("serde error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Denied(#[from] DenialSignal),
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}
