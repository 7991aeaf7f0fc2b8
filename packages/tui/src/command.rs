use taskdeck_models::{CreateTaskRequest, CreateUserRequest, UpdateTaskRequest};

/// Side effects requested by the dashboard state machine. The app loop hands
/// them to the effects runner; the state itself never touches the network.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadTasks { generation: u64 },
    LoadUsers { generation: u64 },
    LoadPanelUsers { generation: u64 },
    CreateTask(CreateTaskRequest),
    UpdateTask { task_id: String, request: UpdateTaskRequest },
    DeleteTask { task_id: String },
    AssignUser { task_id: String, user_id: String },
    UnassignUser { task_id: String, user_id: String },
    CreateUser(CreateUserRequest),
}

/// Task mutations whose outcome is reported with a notification followed by a
/// full task reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
    Assign,
    Unassign,
}

impl MutationKind {
    pub fn success_message(&self) -> &'static str {
        match self {
            MutationKind::Create => "Task created successfully",
            MutationKind::Update => "Task updated successfully",
            MutationKind::Delete => "Task deleted successfully",
            MutationKind::Assign => "User assigned successfully",
            MutationKind::Unassign => "User removed successfully",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            MutationKind::Create => "Failed to create task",
            MutationKind::Update => "Failed to update task",
            MutationKind::Delete => "Failed to delete task",
            MutationKind::Assign => "Failed to assign user",
            MutationKind::Unassign => "Failed to remove user",
        }
    }

    /// Assignment changes reload the task list whatever the outcome.
    pub fn reloads_on_failure(&self) -> bool {
        matches!(self, MutationKind::Assign | MutationKind::Unassign)
    }
}
