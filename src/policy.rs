//! Input sanitization applied at the UI boundary before a
//! [`FeatureRecord`] reaches the model.
//!
//! Out-of-range values are clamped into the trained range, never rejected.

use std::num::{IntErrorKind, ParseIntError};

use crate::predictor::FeatureRecord;

pub const COURSES_MIN: u8 = 1;
pub const COURSES_MAX: u8 = 10;
pub const COURSES_DEFAULT: u8 = 3;

pub const TIME_STUDY_MIN: f64 = 0.0;
pub const TIME_STUDY_MAX: f64 = 10.0;
pub const TIME_STUDY_DEFAULT: f64 = 4.5;
pub const TIME_STUDY_STEP: f64 = 0.1;

/// Clamps a raw course count into `[COURSES_MIN, COURSES_MAX]`.
pub fn clamp_courses(raw: i64) -> u8 {
    raw.clamp(i64::from(COURSES_MIN), i64::from(COURSES_MAX)) as u8
}

/// Parses a typed course count and clamps it.
///
/// Counts too large (or too small) for `i64` saturate to the range bounds.
///
/// # Errors
/// Returns the parse error if `text` is not a whole number.
pub fn parse_courses(text: &str) -> Result<u8, ParseIntError> {
    match text.trim().parse::<i64>() {
        Ok(raw) => Ok(clamp_courses(raw)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(COURSES_MAX),
            IntErrorKind::NegOverflow => Ok(COURSES_MIN),
            _ => Err(e),
        },
    }
}

/// Clamps study hours into `[TIME_STUDY_MIN, TIME_STUDY_MAX]` and snaps them
/// to one decimal. NaN maps to the lower bound.
pub fn clamp_time_study(raw: f64) -> f64 {
    if raw.is_nan() {
        return TIME_STUDY_MIN;
    }

    let clamped = raw.clamp(TIME_STUDY_MIN, TIME_STUDY_MAX);
    (clamped * 10.0).round() / 10.0
}

/// Builds a record from raw user input.
pub fn sanitize(number_courses: i64, time_study: f64) -> FeatureRecord {
    FeatureRecord::new(clamp_courses(number_courses), clamp_time_study(time_study))
}

/// Moves the course count by `delta`, staying in range.
pub fn step_courses(current: u8, delta: i64) -> u8 {
    clamp_courses(i64::from(current).saturating_add(delta))
}

/// Moves study hours by `steps` increments of [`TIME_STUDY_STEP`].
pub fn step_time_study(current: f64, steps: i32) -> f64 {
    clamp_time_study(current + f64::from(steps) * TIME_STUDY_STEP)
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self::new(COURSES_DEFAULT, TIME_STUDY_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courses_above_range_clamp_to_max() {
        let record = sanitize(15, 5.0);
        assert_eq!(record, FeatureRecord::new(10, 5.0));
    }

    #[test]
    fn courses_below_range_clamp_to_min() {
        assert_eq!(clamp_courses(0), 1);
        assert_eq!(clamp_courses(-20), 1);
        assert_eq!(clamp_courses(i64::MAX), 10);
    }

    #[test]
    fn typed_courses_saturate_beyond_i64() {
        assert_eq!(parse_courses("99999999999999999999"), Ok(10));
        assert_eq!(parse_courses("-99999999999999999999"), Ok(1));
        assert_eq!(parse_courses(" 7 "), Ok(7));
        assert!(parse_courses("7.5").is_err());
        assert!(parse_courses("").is_err());
    }

    #[test]
    fn time_study_snaps_to_one_decimal() {
        assert_eq!(clamp_time_study(4.54), 4.5);
        assert_eq!(clamp_time_study(4.56), 4.6);
        assert_eq!(clamp_time_study(12.0), 10.0);
        assert_eq!(clamp_time_study(-0.3), 0.0);
    }

    #[test]
    fn time_study_non_finite() {
        assert_eq!(clamp_time_study(f64::NAN), TIME_STUDY_MIN);
        assert_eq!(clamp_time_study(f64::INFINITY), TIME_STUDY_MAX);
        assert_eq!(clamp_time_study(f64::NEG_INFINITY), TIME_STUDY_MIN);
    }

    #[test]
    fn steps_stay_on_the_grid() {
        assert_eq!(step_time_study(4.5, 1), 4.6);
        assert_eq!(step_time_study(4.5, -5), 4.0);
        assert_eq!(step_time_study(9.95, 3), 10.0);
        assert_eq!(step_courses(10, 1), 10);
        assert_eq!(step_courses(1, -1), 1);
        assert_eq!(step_courses(3, 1), 4);
    }

    #[test]
    fn default_record_matches_widget_defaults() {
        assert_eq!(FeatureRecord::default(), FeatureRecord::new(3, 4.5));
    }
}
