use crossterm::event::KeyCode;
use log::info;
use ratatui::{widgets::Block, Frame};

use crate::{
    policy,
    predictor::{FeatureRecord, PredictorService},
    report::PredictionReport,
    ui::{layout, theme::Theme, widgets},
};

use super::Action;

/// Focusable elements of the sidebar, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NumberCourses,
    TimeStudy,
    Predict,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::NumberCourses => Self::TimeStudy,
            Self::TimeStudy => Self::Predict,
            Self::Predict => Self::NumberCourses,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::NumberCourses => Self::Predict,
            Self::TimeStudy => Self::NumberCourses,
            Self::Predict => Self::TimeStudy,
        }
    }
}

/// Result of the last "Predict Marks" press.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Report(PredictionReport),
    Failed(String),
}

pub struct PredictState {
    record: FeatureRecord,
    selected: Field,
    input: String,
    outcome: Option<Outcome>,
    error: Option<String>,
}

impl PredictState {
    pub fn new(record: FeatureRecord) -> Self {
        Self {
            record,
            selected: Field::NumberCourses,
            input: String::new(),
            outcome: None,
            error: None,
        }
    }

    pub fn record(&self) -> FeatureRecord {
        self.record
    }

    pub fn selected(&self) -> Field {
        self.selected
    }

    /// Text typed into the selected field and not yet committed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Input error shown in the bottom bar until the next key press.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Changing an input hides a result computed for the old values.
    fn set_record(&mut self, record: FeatureRecord) {
        if record != self.record {
            self.record = record;
            self.outcome = None;
        }
    }
}

pub fn handle_key(state: &mut PredictState, key: KeyCode, service: &PredictorService) -> Action {
    state.error = None;

    match key {
        KeyCode::Esc if !state.input.is_empty() => {
            state.input.clear();
            Action::None
        }
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::Down => {
            commit(state);
            state.selected = state.selected.next();
            Action::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            commit(state);
            state.selected = state.selected.prev();
            Action::None
        }
        KeyCode::Left | KeyCode::Char('-') => {
            step(state, -1);
            Action::None
        }
        KeyCode::Right | KeyCode::Char('+') => {
            step(state, 1);
            Action::None
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            if state.selected != Field::Predict {
                state.input.push(c);
            }
            Action::None
        }
        KeyCode::Backspace => {
            state.input.pop();
            Action::None
        }
        KeyCode::Enter => {
            match state.selected {
                Field::Predict => predict(state, service),
                _ => commit(state),
            }
            Action::None
        }
        _ => Action::None,
    }
}

/// Applies the typed text to the selected field through the input policy.
fn commit(state: &mut PredictState) {
    if state.input.is_empty() {
        return;
    }

    let text = std::mem::take(&mut state.input);
    let mut record = state.record;

    match state.selected {
        Field::NumberCourses => match policy::parse_courses(&text) {
            Ok(courses) => record.number_courses = courses,
            Err(_) => {
                state.error = Some(format!("'{text}' is not a whole number"));
                return;
            }
        },
        Field::TimeStudy => match text.parse::<f64>() {
            Ok(raw) => record.time_study = policy::clamp_time_study(raw),
            Err(_) => {
                state.error = Some(format!("'{text}' is not a number"));
                return;
            }
        },
        Field::Predict => return,
    }

    state.set_record(record);
}

fn step(state: &mut PredictState, delta: i32) {
    commit(state);

    let mut record = state.record;
    match state.selected {
        Field::NumberCourses => {
            record.number_courses = policy::step_courses(record.number_courses, i64::from(delta))
        }
        Field::TimeStudy => record.time_study = policy::step_time_study(record.time_study, delta),
        Field::Predict => return,
    }

    state.set_record(record);
}

fn predict(state: &mut PredictState, service: &PredictorService) {
    let outcome = match service.predict(state.record) {
        Ok(value) => {
            info!("predicted marks {value:.2}");
            Outcome::Report(PredictionReport::new(value))
        }
        Err(e) => Outcome::Failed(format!("An error occurred during prediction: {e}")),
    };

    state.outcome = Some(outcome);
}

pub fn draw(f: &mut Frame, state: &PredictState, service: &PredictorService) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (title_area, body_area, error_area, footer_area) = layout::vertical(area);
    let (sidebar_area, main_area) = layout::body(body_area);
    let (result_area, chart_area) = layout::main(main_area);

    f.render_widget(widgets::title(), title_area);
    f.render_widget(widgets::sidebar(state), sidebar_area);

    match state.outcome() {
        Some(Outcome::Report(report)) => {
            f.render_widget(widgets::result(report), result_area);
            f.render_widget(widgets::chart(&report.chart), chart_area);
        }
        Some(Outcome::Failed(msg)) => {
            f.render_widget(widgets::failure(msg), result_area);
            f.render_widget(widgets::empty_chart(), chart_area);
        }
        None => {
            f.render_widget(widgets::idle(), result_area);
            f.render_widget(widgets::empty_chart(), chart_area);
        }
    }

    if let Some(err) = state.error() {
        f.render_widget(widgets::error_bar(err), error_area);
    }

    f.render_widget(widgets::footer(service.artifact_path()), footer_area);
}
