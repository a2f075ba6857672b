//! Docket: in-memory task tracking core.
//!
//! This crate provides the domain logic of a task-tracking backend: the
//! task record and its lifecycle rules, an identity-keyed store, a pure
//! filter/sort query engine, and derived summary statistics.
//!
//! # Architecture
//!
//! Docket follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! Transport concerns (HTTP routing, request validation, wire formats) are
//! outside this crate; callers hand it pre-validated input.
//!
//! # Modules
//!
//! - [`task`]: Task records, lifecycle transitions, queries, and stats

pub mod task;
