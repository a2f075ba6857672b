//! Unit tests for the task module.

mod fixtures;

mod stats_tests;
