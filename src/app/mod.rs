//! Application state and logic

mod event;
mod outcome;
mod state;

pub use event::{Event, Handler};
pub use outcome::{FailureKind, Outcome, UNMERGED_MARKERS, classify_failure};
pub use state::{App, Mode, Pass};
