//! Filter and sort engine over task snapshots.
//!
//! The engine is pure: it consumes a snapshot of tasks plus a filter
//! specification and returns the matching tasks in the requested order.
//! The caller supplies the "now" instant so overdue evaluation is
//! reproducible.

use super::{ParseSortFieldError, ParseSortOrderError, Task, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Field a task listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Order by creation instant.
    #[default]
    CreatedAt,
    /// Order by latest mutation instant.
    UpdatedAt,
    /// Order by due date; tasks without one sort last in both directions.
    DueDate,
    /// Order by priority ordinal.
    Priority,
    /// Order by title, case-insensitively.
    Title,
}

impl SortField {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }
}

impl TryFrom<&str> for SortField {
    type Error = ParseSortFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            "due_date" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            _ => Err(ParseSortFieldError(value.to_owned())),
        }
    }
}

/// Direction a task listing is ordered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest value first.
    Asc,
    /// Largest value first.
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Applies the direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = ParseSortOrderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortOrderError(value.to_owned())),
        }
    }
}

/// Conjunctive filter and ordering specification for task listings.
///
/// All filter fields are optional and AND-combined when present. The
/// default filter matches every task and orders by creation instant,
/// newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    search: Option<String>,
    is_overdue: bool,
    sort_by: SortField,
    sort_order: SortOrder,
}

impl TaskFilter {
    /// Creates a filter matching every task with the default ordering.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            priority: None,
            search: None,
            is_overdue: false,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }

    /// Keeps only tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Keeps only tasks with the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Keeps only tasks whose title or description contains the term,
    /// case-insensitively. A task without a description never matches on
    /// its description.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Keeps only overdue tasks: due date set, in the past, and status not
    /// [`TaskStatus::Completed`].
    #[must_use]
    pub const fn overdue_only(mut self) -> Self {
        self.is_overdue = true;
        self
    }

    /// Sets the field to order by.
    #[must_use]
    pub const fn with_sort_by(mut self, sort_by: SortField) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Sets the ordering direction.
    #[must_use]
    pub const fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Returns the tasks matching the filter in the requested order.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>, now: DateTime<Utc>) -> Vec<Task> {
        let mut matched: Vec<Task> = tasks
            .into_iter()
            .filter(|task| self.matches(task, now))
            .collect();
        matched.sort_by(|left, right| self.compare(left, right));
        matched
    }

    /// Returns whether a single task satisfies every present filter field.
    #[must_use]
    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        if self.status.is_some_and(|status| task.status() != status) {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| task.priority() != priority)
        {
            return false;
        }
        if let Some(term) = &self.search {
            if !matches_search(task, term) {
                return false;
            }
        }
        if self.is_overdue && !task.is_overdue_at(now) {
            return false;
        }
        true
    }

    fn compare(&self, left: &Task, right: &Task) -> Ordering {
        match self.sort_by {
            SortField::CreatedAt => self
                .sort_order
                .apply(left.created_at().cmp(&right.created_at())),
            SortField::UpdatedAt => self
                .sort_order
                .apply(left.updated_at().cmp(&right.updated_at())),
            SortField::DueDate => self.compare_due_dates(left.due_date(), right.due_date()),
            SortField::Priority => self.sort_order.apply(left.priority().cmp(&right.priority())),
            SortField::Title => self
                .sort_order
                .apply(compare_titles(left.title(), right.title())),
        }
    }

    /// Tasks without a due date sort after dated ones in both directions;
    /// only the dated/dated leg honours the requested direction.
    fn compare_due_dates(
        &self,
        left: Option<DateTime<Utc>>,
        right: Option<DateTime<Utc>>,
    ) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(left_due), Some(right_due)) => self.sort_order.apply(left_due.cmp(&right_due)),
        }
    }
}

/// Case-insensitive substring match against title or description.
fn matches_search(task: &Task, term: &str) -> bool {
    let needle = term.to_lowercase();
    task.title().as_str().to_lowercase().contains(&needle)
        || task
            .description()
            .is_some_and(|description| description.as_str().to_lowercase().contains(&needle))
}

/// Unicode lowercase fold standing in for locale-aware collation.
fn compare_titles(left: &TaskTitle, right: &TaskTitle) -> Ordering {
    left.as_str().to_lowercase().cmp(&right.as_str().to_lowercase())
}
