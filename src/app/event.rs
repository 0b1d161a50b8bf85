//! Terminal input for the session loop

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tracing::debug;

/// What the session loop reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Nothing arrived before the poll interval ran out
    Tick,
    /// A key was pressed
    Key(KeyEvent),
    /// The terminal changed size
    Resize(u16, u16),
}

/// Reads terminal input with a bounded wait
#[derive(Debug)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Wait at most `poll_interval_ms` for each event
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait for the next event
    ///
    /// Key releases and repeats come back as ticks, so one physical press
    /// yields one `Key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.poll_interval)? {
            return Ok(Event::Tick);
        }
        Ok(match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        })
    }

    /// Throw away everything already queued on the terminal
    ///
    /// Called after a deletion pass: keys typed while git was running were
    /// aimed at the screen the user saw before, not at the prompt that
    /// follows.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read
    pub fn discard_pending(&self) -> Result<usize> {
        let discarded = drain(
            || Ok(event::poll(Duration::ZERO)?),
            || Ok(event::read().map(drop)?),
        )?;
        if discarded > 0 {
            debug!(discarded, "Dropped input typed during deletion");
        }
        Ok(discarded)
    }

    /// Configured wait per poll
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Read until `pending` reports nothing left, returning how many were read
fn drain(
    mut pending: impl FnMut() -> Result<bool>,
    mut read: impl FnMut() -> Result<()>,
) -> Result<usize> {
    let mut discarded = 0;
    while pending()? {
        read()?;
        discarded += 1;
    }
    Ok(discarded)
}
