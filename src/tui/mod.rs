//! Terminal User Interface for gelete

mod input;
mod render;

use crate::app::{App, Event, Handler, Mode};
use crate::git::BranchMutator;
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::debug;

/// Run the interactive session until the user exits
///
/// The terminal is restored before returning, whether or not the session
/// failed. The finished [`App`] is handed back so the caller can report
/// its outcome.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or read
/// from.
pub fn run(mut app: App, mutator: &impl BranchMutator) -> Result<App> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);

    let result = run_loop(&mut terminal, &mut app, &event_handler, mutator);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
    mutator: &impl BranchMutator,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // The progress overlay is on screen; run the pass before reading input
        if matches!(app.mode, Mode::Deleting(_)) {
            run_pass(app, mutator, || event_handler.discard_pending())?;
            continue;
        }

        match event_handler.next()? {
            Event::Key(key) => {
                debug!(code = ?key.code, mode = ?app.mode, "Key pressed");
                input::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run the pending deletion pass, then drop whatever was typed meanwhile
///
/// A key buffered during the safe pass must never answer the force prompt
/// that the pass may open.
fn run_pass(
    app: &mut App,
    mutator: &impl BranchMutator,
    discard_pending: impl FnOnce() -> Result<usize>,
) -> Result<()> {
    app.process_deletions(mutator);
    discard_pending()?;
    Ok(())
}
