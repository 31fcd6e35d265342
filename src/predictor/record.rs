use crate::{PredictorError, Result};

/// Column name of the course count feature.
pub const NUMBER_COURSES: &str = "number_courses";

/// Column name of the study time feature.
pub const TIME_STUDY: &str = "time_study";

/// The two features the marks model is trained on.
///
/// Values are expected to be sanitized by the caller, see [`crate::policy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRecord {
    pub number_courses: u8,
    pub time_study: f64,
}

impl FeatureRecord {
    pub fn new(number_courses: u8, time_study: f64) -> Self {
        Self {
            number_courses,
            time_study,
        }
    }

    /// Builds the single-row input the artifact consumes.
    pub fn to_row(&self) -> FeatureRow {
        FeatureRow::new()
            .with(NUMBER_COURSES, f64::from(self.number_courses))
            .with(TIME_STUDY, self.time_study)
    }
}

impl From<FeatureRecord> for FeatureRow {
    fn from(record: FeatureRecord) -> Self {
        record.to_row()
    }
}

/// A single row of named columns, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column to the row.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.columns.push(name.into());
        self.values.push(value);
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks the row against the schema a model was trained on.
    ///
    /// # Errors
    /// Returns `PredictionError` if the column count, names or order differ
    /// from `features`, or if any value is not finite.
    pub fn ensure_matches(&self, features: &[String]) -> Result<()> {
        if self.len() != features.len() {
            return Err(PredictorError::PredictionError(format!(
                "expected {} columns ({}), got {}",
                features.len(),
                features.join(", "),
                self.len()
            )));
        }

        for (idx, (got, expected)) in self.columns.iter().zip(features).enumerate() {
            if got != expected {
                return Err(PredictorError::PredictionError(format!(
                    "column {idx}: expected '{expected}', got '{got}'"
                )));
            }
        }

        if let Some((name, value)) = self
            .columns
            .iter()
            .zip(&self.values)
            .find(|(_, v)| !v.is_finite())
        {
            return Err(PredictorError::PredictionError(format!(
                "column '{name}' is not a finite number: {value}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Vec<String> {
        vec![NUMBER_COURSES.to_string(), TIME_STUDY.to_string()]
    }

    #[test]
    fn record_row_follows_training_schema() {
        let row = FeatureRecord::new(3, 4.5).to_row();

        assert_eq!(row.columns(), schema().as_slice());
        assert_eq!(row.values(), &[3.0, 4.5]);
        assert!(row.ensure_matches(&schema()).is_ok());
    }

    #[test]
    fn missing_column_is_rejected() {
        let row = FeatureRow::new().with(NUMBER_COURSES, 3.0);
        let err = row.ensure_matches(&schema()).unwrap_err();

        assert!(matches!(err, PredictorError::PredictionError(_)));
        assert!(err.to_string().contains("expected 2 columns"));
    }

    #[test]
    fn swapped_columns_are_rejected() {
        let row = FeatureRow::new()
            .with(TIME_STUDY, 4.5)
            .with(NUMBER_COURSES, 3.0);

        let err = row.ensure_matches(&schema()).unwrap_err();
        assert!(err.to_string().contains("column 0"));
    }

    #[test]
    fn nan_value_is_rejected() {
        let row = FeatureRow::new()
            .with(NUMBER_COURSES, 3.0)
            .with(TIME_STUDY, f64::NAN);

        assert!(row.ensure_matches(&schema()).is_err());
    }
}
