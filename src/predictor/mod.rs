mod linear;
mod record;
mod service;

pub use linear::LinearModel;
pub use record::{FeatureRecord, FeatureRow, NUMBER_COURSES, TIME_STUDY};
pub use service::PredictorService;

use crate::Result;

/// A trained model able to score a single row.
///
/// Implementations are immutable once built, so a loaded predictor can be
/// shared by reference between callers.
pub trait Predictor: Send + Sync {
    /// Column names, in order, the model was trained on.
    fn features(&self) -> &[String];

    /// Evaluates the model on one row.
    ///
    /// # Errors
    /// Returns `PredictionError` if the row does not match [`Predictor::features`]
    /// or the model fails internally.
    fn predict(&self, row: &FeatureRow) -> Result<f64>;
}
