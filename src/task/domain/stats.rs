//! Summary statistics derived from a store snapshot.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Status breakdown and completion ratio for a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Number of tasks counted.
    pub total: usize,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: usize,
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Completed share as a rounded integer percentage; zero when `total`
    /// is zero.
    pub completion_rate: u8,
}

impl TaskStats {
    /// Computes statistics over a snapshot of tasks.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut completed = 0usize;
        let mut pending = 0usize;
        let mut in_progress = 0usize;
        for task in tasks {
            match task.status() {
                TaskStatus::Pending => pending += 1,
                TaskStatus::InProgress => in_progress += 1,
                TaskStatus::Completed => completed += 1,
            }
        }

        Self {
            total: tasks.len(),
            completed,
            pending,
            in_progress,
            completion_rate: rounded_percentage(completed, tasks.len()),
        }
    }
}

/// Rounded (half-up) integer percentage of `part` in `total`; zero for an
/// empty total.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "the completion rate is defined as a rounded integer ratio"
)]
fn rounded_percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scaled = (part * 200 + total) / (total * 2);
    u8::try_from(scaled).unwrap_or(u8::MAX)
}
