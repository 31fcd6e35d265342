use std::collections::HashSet;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::{FeatureRow, Predictor};
use crate::Result;

/// On-disk form of a linear model, as re-exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinearArtifact {
    features: Vec<String>,
    intercept: f64,
    coefficients: Vec<f64>,
}

/// Ordinary least squares model: `y = intercept + coefficients · x`.
#[derive(Debug, Clone)]
pub struct LinearModel {
    features: Vec<String>,
    intercept: f64,
    coefficients: Array1<f64>,
}

impl LinearModel {
    /// Creates a model from its trained parameters.
    ///
    /// # Errors
    /// Returns a human-readable string if the parameters do not describe a
    /// usable model.
    pub fn new(
        features: Vec<String>,
        intercept: f64,
        coefficients: Vec<f64>,
    ) -> std::result::Result<Self, String> {
        if features.is_empty() {
            return Err("features must not be empty".into());
        }
        if features.len() != coefficients.len() {
            return Err(format!(
                "expected one coefficient per feature: {} features, {} coefficients",
                features.len(),
                coefficients.len()
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = features.iter().find(|f| !seen.insert(f.as_str())) {
            return Err(format!("duplicate feature: {dup}"));
        }

        if !intercept.is_finite() {
            return Err("intercept must be finite".into());
        }
        if let Some(idx) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(format!("coefficient {idx} ({}) must be finite", features[idx]));
        }

        Ok(Self {
            features,
            intercept,
            coefficients: Array1::from_vec(coefficients),
        })
    }

    /// Parses a model from its JSON artifact.
    ///
    /// # Errors
    /// Returns a human-readable string if the document is not valid JSON,
    /// misses a field, or fails [`LinearModel::new`]'s checks.
    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        let artifact: LinearArtifact =
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

        Self::new(artifact.features, artifact.intercept, artifact.coefficients)
    }

    /// Serializes the model back into its JSON artifact form.
    pub fn to_json(&self) -> String {
        let artifact = LinearArtifact {
            features: self.features.clone(),
            intercept: self.intercept,
            coefficients: self.coefficients.to_vec(),
        };

        // Plain strings and finite floats always serialize.
        serde_json::to_string_pretty(&artifact).unwrap_or_default()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }
}

impl Predictor for LinearModel {
    fn features(&self) -> &[String] {
        &self.features
    }

    fn predict(&self, row: &FeatureRow) -> Result<f64> {
        row.ensure_matches(&self.features)?;

        let x = ArrayView1::from(row.values());
        Ok(self.intercept + self.coefficients.dot(&x))
    }
}
