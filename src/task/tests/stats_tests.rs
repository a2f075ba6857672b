//! Unit tests for the stats aggregator.

use super::fixtures::{instant, stored_task};
use crate::task::domain::{Task, TaskPriority, TaskStats, TaskStatus};
use rstest::rstest;

fn tasks_with_statuses(statuses: &[TaskStatus]) -> Vec<Task> {
    statuses
        .iter()
        .enumerate()
        .map(|(index, status)| {
            stored_task(
                &format!("Task {index}"),
                *status,
                TaskPriority::Medium,
                None,
                instant(2024, 10, 1),
            )
        })
        .collect()
}

#[rstest]
fn empty_snapshot_yields_all_zeroes() {
    let stats = TaskStats::from_tasks(&[]);
    assert_eq!(
        stats,
        TaskStats {
            total: 0,
            completed: 0,
            pending: 0,
            in_progress: 0,
            completion_rate: 0,
        }
    );
}

#[rstest]
fn counts_partition_by_status() {
    let tasks = tasks_with_statuses(&[
        TaskStatus::Pending,
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Completed,
        TaskStatus::Completed,
    ]);

    let stats = TaskStats::from_tasks(&tasks);

    assert_eq!(stats.total, 6);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.completed + stats.pending + stats.in_progress, stats.total);
    assert_eq!(stats.completion_rate, 50);
}

#[rstest]
#[case(&[TaskStatus::Completed, TaskStatus::Pending, TaskStatus::Pending], 33)]
#[case(&[TaskStatus::Completed, TaskStatus::Completed, TaskStatus::Pending], 67)]
#[case(&[TaskStatus::Completed], 100)]
#[case(&[TaskStatus::Pending], 0)]
fn completion_rate_rounds_to_nearest_percent(
    #[case] statuses: &[TaskStatus],
    #[case] expected: u8,
) {
    let stats = TaskStats::from_tasks(&tasks_with_statuses(statuses));
    assert_eq!(stats.completion_rate, expected);
}

#[rstest]
fn completion_rate_rounds_halves_up() {
    // 1 of 8 completed is 12.5 percent.
    let mut statuses = vec![TaskStatus::Pending; 7];
    statuses.push(TaskStatus::Completed);
    let stats = TaskStats::from_tasks(&tasks_with_statuses(&statuses));
    assert_eq!(stats.completion_rate, 13);
}
