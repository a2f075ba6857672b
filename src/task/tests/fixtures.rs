//! Shared builders for task unit tests.

use crate::task::domain::{
    Task, TaskDescription, TaskId, TaskParts, TaskPriority, TaskStatus, TaskTitle,
};
use chrono::{DateTime, TimeZone, Utc};

/// Builds a fixed UTC instant for fixture data.
pub fn instant(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Builds a stored task with fixed timestamps and no description.
pub fn stored_task(
    title: &str,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
) -> Task {
    Task::from_parts(TaskParts {
        id: TaskId::new(),
        title: TaskTitle::new(title).expect("valid fixture title"),
        description: None,
        status,
        priority,
        due_date,
        completed_at: None,
        created_at,
        updated_at: created_at,
    })
}

/// Builds a stored task carrying a description.
pub fn stored_task_with_description(
    title: &str,
    description: &str,
    created_at: DateTime<Utc>,
) -> Task {
    Task::from_parts(TaskParts {
        id: TaskId::new(),
        title: TaskTitle::new(title).expect("valid fixture title"),
        description: Some(TaskDescription::new(description).expect("valid fixture description")),
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        due_date: None,
        completed_at: None,
        created_at,
        updated_at: created_at,
    })
}
