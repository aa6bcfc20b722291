//! Task records and lifecycle management for Tempo.
//!
//! This module implements the task store: creating task records with
//! unique titles, listing with an optional status filter, retrieval by
//! id, full-replacement updates, and permanent deletion. The module
//! follows hexagonal architecture:
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
