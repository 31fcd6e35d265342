pub mod app;
pub mod config;
pub mod error;
pub mod policy;
pub mod predictor;
pub mod report;
pub mod ui;

pub use error::{PredictorError, Result};
pub use predictor::{FeatureRecord, FeatureRow, LinearModel, Predictor, PredictorService};
pub use report::PredictionReport;
