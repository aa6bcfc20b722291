//! Pomodoro focus sessions for Tempo.
//!
//! This module implements the session tracker: starting a timed focus
//! session against an existing task, stopping the single active session
//! for a task, and aggregating completed-session statistics. A session is
//! timestamp bookkeeping only; no timer or alarm mechanism runs anywhere.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
