use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use super::{FeatureRecord, FeatureRow, LinearModel, Predictor};
use crate::{PredictorError, Result};

/// Owns the loaded artifact and answers prediction requests.
///
/// A service only exists once its artifact loaded successfully; there is no
/// way to build one in a half-loaded state.
pub struct PredictorService {
    artifact_path: PathBuf,
    model: Box<dyn Predictor>,
}

impl PredictorService {
    /// Loads the linear model artifact at `path`.
    ///
    /// # Errors
    /// Returns `ArtifactNotFound` if the file is missing or unreadable and
    /// `ArtifactCorrupt` if its contents are not a valid model. Both are
    /// fatal for the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("loading model artifact from {}", path.display());

        let content =
            fs::read_to_string(path).map_err(|source| PredictorError::ArtifactNotFound {
                path: path.to_path_buf(),
                source,
            })?;

        let model =
            LinearModel::from_json(&content).map_err(|reason| PredictorError::ArtifactCorrupt {
                path: path.to_path_buf(),
                reason,
            })?;

        info!(
            "model loaded: {} feature(s) [{}]",
            model.features().len(),
            model.features().join(", ")
        );
        Ok(Self::with_predictor(path, model))
    }

    /// Wraps an already built predictor.
    pub fn with_predictor(artifact_path: impl Into<PathBuf>, model: impl Predictor + 'static) -> Self {
        Self {
            artifact_path: artifact_path.into(),
            model: Box::new(model),
        }
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    pub fn features(&self) -> &[String] {
        self.model.features()
    }

    /// Predicts the marks for a sanitized record.
    ///
    /// # Errors
    /// Returns `PredictionError` if the model rejects the record or yields a
    /// non-finite value. The service stays usable afterwards.
    pub fn predict(&self, record: FeatureRecord) -> Result<f64> {
        let y = self.predict_row(&record.to_row())?;
        debug!(
            "predicted {y:.4} for number_courses={} time_study={:.1}",
            record.number_courses, record.time_study
        );
        Ok(y)
    }

    /// Predicts from an arbitrary row, checked against the model schema.
    ///
    /// # Errors
    /// Returns `PredictionError` on any schema mismatch or model fault.
    pub fn predict_row(&self, row: &FeatureRow) -> Result<f64> {
        let y = self.model.predict(row).inspect_err(|e| warn!("{e}"))?;

        if !y.is_finite() {
            let err = PredictorError::PredictionError(format!("model produced a non-finite value: {y}"));
            warn!("{err}");
            return Err(err);
        }

        Ok(y)
    }
}

impl fmt::Debug for PredictorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictorService")
            .field("artifact_path", &self.artifact_path)
            .field("features", &self.features())
            .finish()
    }
}
