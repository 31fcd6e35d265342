use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SIDEBAR_WIDTH: u16 = 34;

/// Computes the page regions.
///
/// # Returns
/// (title, body, error_bar, footer)
pub fn vertical(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Splits the body into (sidebar, main).
pub fn body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the main panel into (result, chart).
pub fn main(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    (rows[0], rows[1])
}
