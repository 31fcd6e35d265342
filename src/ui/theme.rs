use ratatui::style::{Color, Modifier, Style};

/// Light-on-dark palette built around the marks green.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(18, 20, 24);
    pub const FG: Color = Color::Rgb(240, 242, 246);
    pub const FG_MUTED: Color = Color::Rgb(153, 153, 153);

    pub const GREEN: Color = Color::Rgb(76, 175, 80);
    pub const ORANGE: Color = Color::Rgb(255, 87, 34);
    pub const RED: Color = Color::Rgb(255, 70, 70);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::GREEN)
    }

    /// Page and panel titles.
    pub fn title() -> Style {
        Style::default().fg(Self::GREEN).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Selected input or button.
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::GREEN)
            .add_modifier(Modifier::BOLD)
    }

    /// The prediction headline.
    pub fn result() -> Style {
        Style::default().fg(Self::ORANGE).add_modifier(Modifier::BOLD)
    }

    pub fn bar() -> Style {
        Style::default().fg(Self::GREEN)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::RED).add_modifier(Modifier::BOLD)
    }
}
