use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

use marks_predictor::{
    report::format_prediction,
    ui::screens::predict::{self, Outcome, PredictState},
    FeatureRecord, LinearModel, PredictorService,
};

fn service() -> PredictorService {
    let model = LinearModel::new(
        vec!["number_courses".into(), "time_study".into()],
        -7.4557,
        vec![1.8638, 5.3992],
    )
    .unwrap();
    PredictorService::with_predictor("ols_model.json", model)
}

fn render(state: &PredictState, service: &PredictorService) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
    terminal.draw(|f| predict::draw(f, state, service)).unwrap();

    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn predicted_marks_are_rendered_with_two_decimals() {
    let service = service();
    let expected = service.predict(FeatureRecord::new(3, 4.5)).unwrap();
    let expected_text = format_prediction(expected);
    assert_eq!(expected_text, "22.43");

    let mut state = PredictState::new(FeatureRecord::default());
    for key in [KeyCode::Tab, KeyCode::Tab, KeyCode::Enter] {
        predict::handle_key(&mut state, key, &service);
    }

    let Some(Outcome::Report(report)) = state.outcome() else {
        panic!("expected a report, got {:?}", state.outcome());
    };
    assert_eq!(report.value, expected);
    assert_eq!(report.chart.bar_value, expected);
    assert_eq!(report.chart.bar_height(), expected);
    assert_eq!(report.chart.y_range, (0.0, 100.0));

    let screen = render(&state, &service);
    assert!(screen.contains("Predicted Marks: 22.43"));
    assert!(!screen.contains("22.432"));
    assert!(screen.contains("Predicted Marks Visualization"));
}

#[test]
fn idle_screen_shows_defaults() {
    let service = service();
    let state = PredictState::new(FeatureRecord::default());
    let screen = render(&state, &service);

    assert!(screen.contains("Marks Prediction App"));
    assert!(screen.contains("Number of Courses"));
    assert!(screen.contains("4.5"));
    assert!(screen.contains("no prediction yet"));
    assert!(!screen.contains("Predicted Marks:"));
}

#[test]
fn input_error_is_shown_in_error_bar() {
    let service = service();
    let mut state = PredictState::new(FeatureRecord::default());
    for key in [KeyCode::Tab, KeyCode::Char('.'), KeyCode::Char('.'), KeyCode::Enter] {
        predict::handle_key(&mut state, key, &service);
    }

    let screen = render(&state, &service);
    assert!(screen.contains("'..' is not a number"));
}
