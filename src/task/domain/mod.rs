//! Domain model for task records and their read-side engines.
//!
//! The task domain models record creation, merge-patch mutation, status
//! lifecycle timestamping, filtered/sorted queries, and summary statistics
//! while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod query;
mod stats;
mod task;

pub use error::{
    ParseSortFieldError, ParseSortOrderError, ParseTaskPriorityError, ParseTaskStatusError,
    TaskDomainError,
};
pub use ids::{TaskDescription, TaskId, TaskTitle};
pub use query::{SortField, SortOrder, TaskFilter};
pub use stats::TaskStats;
pub use task::{Task, TaskDraft, TaskParts, TaskPatch, TaskPriority, TaskStatus};
