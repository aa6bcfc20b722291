//! Diesel schema for session persistence.

diesel::table! {
    /// Pomodoro session records keyed by task back-reference.
    pomodoro_sessions (id) {
        /// Session identifier drawn from the `BIGSERIAL` sequence.
        id -> BigInt,
        /// Non-owning reference into the task id space.
        task_id -> BigInt,
        /// Start timestamp.
        started_at -> Timestamptz,
        /// End timestamp, set once at completion.
        ended_at -> Nullable<Timestamptz>,
        /// Completion flag; false while the session is active.
        completed -> Bool,
    }
}
