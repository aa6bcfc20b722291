//! In-memory adapter for the Pomodoro tracker.

mod session;

pub use session::InMemorySessionRepository;
