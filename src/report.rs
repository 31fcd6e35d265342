//! Turns a raw prediction into what the presentation layer shows.

pub const CHART_TITLE: &str = "Predicted Marks Visualization";
pub const BAR_LABEL: &str = "Predicted Marks";
pub const Y_LABEL: &str = "Marks";

/// Fixed y-axis of the marks chart.
pub const Y_RANGE: (f64, f64) = (0.0, 100.0);

/// Formats a prediction with exactly two decimals.
pub fn format_prediction(value: f64) -> String {
    format!("{value:.2}")
}

/// Single-bar chart description for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub bar_label: &'static str,
    pub bar_value: f64,
    pub y_label: &'static str,
    pub y_range: (f64, f64),
}

impl ChartSpec {
    pub fn new(bar_value: f64) -> Self {
        Self {
            title: CHART_TITLE,
            bar_label: BAR_LABEL,
            bar_value,
            y_label: Y_LABEL,
            y_range: Y_RANGE,
        }
    }

    /// Height of the bar as drawn, limited to the y-axis.
    pub fn bar_height(&self) -> f64 {
        let (low, high) = self.y_range;
        self.bar_value.clamp(low, high)
    }
}

/// Everything rendered after a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    pub value: f64,
    pub chart: ChartSpec,
}

impl PredictionReport {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            chart: ChartSpec::new(value),
        }
    }

    pub fn formatted(&self) -> String {
        format_prediction(self.value)
    }

    pub fn headline(&self) -> String {
        format!("Predicted Marks: {}", self.formatted())
    }
}
