//! Task lifecycle management for Docket.
//!
//! This module implements the task-tracking core: creating task records
//! from caller-supplied drafts, merge-patch updates, status transitions
//! with completion timestamping, filtered and sorted listings, and
//! derived statistics. The module follows hexagonal architecture:
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
