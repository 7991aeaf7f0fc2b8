// ABOUTME: Aggregate task counts shown on the dashboard cards
// ABOUTME: Always derived from the current list, never stored

use serde::Serialize;
use taskdeck_models::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            Self {
                total: tasks.len(),
                ..Self::default()
            },
            |mut stats, task| {
                match task.status {
                    TaskStatus::Completed => stats.completed += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::Pending => stats.pending += 1,
                }
                stats
            },
        )
    }
}
