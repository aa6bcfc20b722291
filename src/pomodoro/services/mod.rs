//! Application services for Pomodoro tracking.

mod tracker;

pub use tracker::{PomodoroTrackerError, PomodoroTrackerResult, PomodoroTrackerService};
