use std::{fmt, io, path::PathBuf};

/// Result type used across the predictor library.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// All errors the predictor service can produce.
#[derive(Debug)]
pub enum PredictorError {
    /// The artifact file is missing or cannot be read.
    ArtifactNotFound { path: PathBuf, source: io::Error },
    /// The artifact file was read but does not describe a usable model.
    ArtifactCorrupt { path: PathBuf, reason: String },
    /// The model rejected the input row or failed while evaluating it.
    PredictionError(String),
}

impl PredictorError {
    /// Whether the error happened while loading the artifact.
    ///
    /// Load errors leave the process without a model and must halt it;
    /// prediction errors only affect the request that caused them.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ArtifactNotFound { .. } | Self::ArtifactCorrupt { .. }
        )
    }
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactNotFound { path, source } => {
                write!(f, "model file '{}' not found ({source})", path.display())
            }
            Self::ArtifactCorrupt { path, reason } => {
                write!(f, "model file '{}' is not a valid artifact: {reason}", path.display())
            }
            Self::PredictionError(msg) => write!(f, "prediction failed: {msg}"),
        }
    }
}

impl std::error::Error for PredictorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArtifactNotFound { source, .. } => Some(source),
            _ => None,
        }
    }
}
