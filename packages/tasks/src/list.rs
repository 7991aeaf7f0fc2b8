// ABOUTME: Row derivation for the task list view
// ABOUTME: Turns tasks into display-ready labels and badge colours

use taskdeck_models::Task;

use crate::badges::{BadgeColor, BadgePalette};
use crate::dates::{format_created_date, format_due_date};

pub const EMPTY_TASKS_MESSAGE: &str = "No tasks found. Create your first task to get started!";
pub const NO_USERS_ASSIGNED: &str = "No users assigned";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status_label: String,
    pub status_color: BadgeColor,
    pub priority_label: String,
    pub priority_color: BadgeColor,
    pub due_date: String,
    pub assignees: Vec<String>,
    pub created: String,
}

impl TaskRow {
    pub fn from_task(task: &Task, palette: &BadgePalette) -> Self {
        let priority = task.priority();

        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            status_label: task.status.label(),
            status_color: palette.status_badge(task.status),
            priority_label: priority.unwrap_or_default().as_str().to_string(),
            priority_color: palette.priority_badge(priority),
            due_date: format_due_date(task.due_date()),
            assignees: task.users.iter().map(|u| u.username.clone()).collect(),
            created: format_created_date(&task.created_at),
        }
    }

    pub fn rows(tasks: &[Task], palette: &BadgePalette) -> Vec<Self> {
        tasks.iter().map(|t| Self::from_task(t, palette)).collect()
    }

    /// Comma separated usernames, or the placeholder when nobody is assigned.
    pub fn assignees_label(&self) -> String {
        if self.assignees.is_empty() {
            NO_USERS_ASSIGNED.to_string()
        } else {
            self.assignees.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taskdeck_models::{TaskDetails, TaskPriority, TaskStatus, User};

    fn base_task() -> Task {
        Task {
            id: "t1".to_string(),
            title: "Plan sprint".to_string(),
            description: "Pick stories".to_string(),
            status: TaskStatus::InProgress,
            details: None,
            users: Vec::new(),
            created_at: "2024-02-10T08:30:00Z".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_row_without_details() {
        let row = TaskRow::from_task(&base_task(), &BadgePalette::default());

        assert_eq!(row.status_label, "in progress");
        assert_eq!(row.status_color, BadgeColor::Blue);
        assert_eq!(row.priority_label, "medium");
        assert_eq!(row.priority_color, BadgeColor::Gray);
        assert_eq!(row.due_date, "-");
        assert_eq!(row.created, "Feb 10, 2024");
        assert_eq!(row.assignees_label(), "No users assigned");
    }

    #[test]
    fn test_row_with_details_and_users() {
        let mut task = base_task();
        task.details = Some(TaskDetails {
            priority: Some(TaskPriority::High),
            due_date: Some("2024-03-01T00:00:00Z".to_string()),
            notes: None,
        });
        task.users = vec![
            User {
                id: "u1".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            User {
                id: "u2".to_string(),
                username: "linus".to_string(),
                email: "linus@example.com".to_string(),
            },
        ];

        let row = TaskRow::from_task(&task, &BadgePalette::default());
        assert_eq!(row.priority_label, "high");
        assert_eq!(row.priority_color, BadgeColor::Red);
        assert_eq!(row.due_date, "Mar 01, 2024");
        assert_eq!(row.assignees_label(), "ada, linus");
    }

    #[test]
    fn test_malformed_dates_do_not_break_the_row() {
        let mut task = base_task();
        task.created_at = "sometime".to_string();
        task.details = Some(TaskDetails {
            due_date: Some("soon".to_string()),
            ..TaskDetails::default()
        });

        let row = TaskRow::from_task(&task, &BadgePalette::default());
        assert_eq!(row.created, "Invalid date");
        assert_eq!(row.due_date, "Invalid date");
    }
}
