use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    predictor::{FeatureRecord, PredictorService},
    ui::screens::{predict, Action},
};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the prediction UI against an already loaded service.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(service: &PredictorService, initial: FeatureRecord) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = predict::PredictState::new(initial);

    loop {
        terminal.draw(|f| predict::draw(f, &state, service))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if predict::handle_key(&mut state, k.code, service) == Action::Quit {
                    break;
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
