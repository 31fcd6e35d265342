use std::path::Path;

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};

use crate::report::{self, ChartSpec, PredictionReport};

use super::{
    screens::predict::{Field, PredictState},
    theme::Theme,
};

const BAR_WIDTH: u16 = 17;

pub fn title() -> Paragraph<'static> {
    Paragraph::new(Span::styled("Marks Prediction App", Theme::title()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        )
}

pub fn sidebar(state: &PredictState) -> Paragraph<'static> {
    let record = state.record();

    let mut lines = vec![Line::from("")];
    lines.extend(input_lines(
        state,
        Field::NumberCourses,
        "Number of Courses",
        record.number_courses.to_string(),
        "1 - 10",
    ));
    lines.push(Line::from(""));
    lines.extend(input_lines(
        state,
        Field::TimeStudy,
        "Time Studied (in hours)",
        format!("{:.1}", record.time_study),
        "0.0 - 10.0, step 0.1",
    ));
    lines.push(Line::from(""));

    let button_style = if state.selected() == Field::Predict {
        Theme::selected()
    } else {
        Theme::title()
    };
    lines.push(Line::from(Span::styled("[ Predict Marks ]", button_style)));

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border())
            .title(" Input Features ")
            .title_style(Theme::title()),
    )
}

fn input_lines(
    state: &PredictState,
    field: Field,
    label: &'static str,
    value: String,
    range: &'static str,
) -> Vec<Line<'static>> {
    let selected = state.selected() == field;

    let value_line = if selected && !state.input().is_empty() {
        Line::from(vec![
            Span::styled(format!(" {}", state.input()), Theme::text()),
            Span::styled("█", Theme::title()),
        ])
    } else if selected {
        Line::from(vec![
            Span::styled(" ◀ ", Theme::muted()),
            Span::styled(value, Theme::selected()),
            Span::styled(" ▶", Theme::muted()),
        ])
    } else {
        Line::from(Span::styled(format!(" {value}"), Theme::text()))
    };

    vec![
        Line::from(Span::styled(label, Theme::title())),
        value_line,
        Line::from(Span::styled(format!(" {range}"), Theme::muted())),
    ]
}

pub fn result(report: &PredictionReport) -> Paragraph<'static> {
    Paragraph::new(Span::styled(report.headline(), Theme::result()))
        .alignment(Alignment::Center)
        .block(result_block())
}

pub fn failure(message: &str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(message.to_string(), Theme::error()))
        .wrap(Wrap { trim: true })
        .block(result_block())
}

pub fn idle() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "Choose the inputs and press Predict Marks",
        Theme::muted(),
    ))
    .alignment(Alignment::Center)
    .block(result_block())
}

fn result_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Result ")
        .title_style(Theme::title())
}

/// Single-bar chart; bar values are kept in hundredths so the drawn height
/// tracks the two-decimal prediction.
pub fn chart(chart: &ChartSpec) -> BarChart<'static> {
    let (low, high) = chart.y_range;

    let bar = Bar::default()
        .label(Line::from(chart.bar_label))
        .value(hundredths(chart.bar_height() - low))
        .text_value(report::format_prediction(chart.bar_value))
        .style(Theme::bar());

    BarChart::default()
        .block(chart_block(chart))
        .data(BarGroup::default().bars(&[bar]))
        .bar_width(BAR_WIDTH)
        .bar_style(Theme::bar())
        .value_style(Theme::selected())
        .label_style(Theme::text())
        .max(hundredths(high - low))
}

pub fn empty_chart() -> Paragraph<'static> {
    Paragraph::new(Span::styled("no prediction yet", Theme::muted()))
        .alignment(Alignment::Center)
        .block(chart_block(&ChartSpec::new(0.0)))
}

fn chart_block(chart: &ChartSpec) -> Block<'static> {
    let (low, high) = chart.y_range;

    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(format!(
            " {}  |  {} [{low:.0}, {high:.0}] ",
            chart.title, chart.y_label
        ))
        .title_style(Theme::title())
}

pub fn error_bar(message: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(" ✖ ", Theme::error()),
        Span::styled(message.to_string(), Theme::error()),
    ]))
}

pub fn footer(artifact_path: &Path) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(format!("model: {}", artifact_path.display()), Theme::muted()),
        Span::styled("    tab/↑↓ ", Theme::title()),
        Span::styled("select  ", Theme::muted()),
        Span::styled("←→ ", Theme::title()),
        Span::styled("step  ", Theme::muted()),
        Span::styled("enter ", Theme::title()),
        Span::styled("confirm  ", Theme::muted()),
        Span::styled("q ", Theme::title()),
        Span::styled("quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center)
}

fn hundredths(value: f64) -> u64 {
    (value.max(0.0) * 100.0).round() as u64
}
