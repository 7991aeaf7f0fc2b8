// ABOUTME: Create/edit task dialog state machine and its form schema
// ABOUTME: A payload is only handed to the submit handler once every field validates

use taskdeck_models::{
    CreateTaskRequest, Task, TaskDetailsInput, TaskPriority, TaskStatus, ValidationErrors,
};
use tracing::debug;

use crate::dates::{parse_input_date, to_input_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Title,
    Description,
    Status,
    Priority,
    DueDate,
    Notes,
}

impl TaskField {
    pub const ALL: [TaskField; 6] = [
        TaskField::Title,
        TaskField::Description,
        TaskField::Status,
        TaskField::Priority,
        TaskField::DueDate,
        TaskField::Notes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TaskField::Title => "title",
            TaskField::Description => "description",
            TaskField::Status => "status",
            TaskField::Priority => "priority",
            TaskField::DueDate => "due_date",
            TaskField::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskField::Title => "Title",
            TaskField::Description => "Description",
            TaskField::Status => "Status",
            TaskField::Priority => "Priority",
            TaskField::DueDate => "Due Date",
            TaskField::Notes => "Notes",
        }
    }

    /// Allowed values for the fields backed by a fixed enumeration.
    pub fn options(&self) -> Option<Vec<&'static str>> {
        match self {
            TaskField::Status => Some(TaskStatus::ALL.iter().map(|s| s.as_str()).collect()),
            TaskField::Priority => Some(TaskPriority::ALL.iter().map(|p| p.as_str()).collect()),
            _ => None,
        }
    }
}

/// Raw, unvalidated field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
    pub notes: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Pending.as_str().to_string(),
            priority: TaskPriority::Medium.as_str().to_string(),
            due_date: String::new(),
            notes: String::new(),
        }
    }
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_str().to_string(),
            priority: task.priority().unwrap_or_default().as_str().to_string(),
            due_date: to_input_date(task.due_date()),
            notes: task.notes().unwrap_or_default().to_string(),
        }
    }

    pub fn get(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
            TaskField::Status => &self.status,
            TaskField::Priority => &self.priority,
            TaskField::DueDate => &self.due_date,
            TaskField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: TaskField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TaskField::Title => self.title = value,
            TaskField::Description => self.description = value,
            TaskField::Status => self.status = value,
            TaskField::Priority => self.priority = value,
            TaskField::DueDate => self.due_date = value,
            TaskField::Notes => self.notes = value,
        }
    }

    pub fn validate(&self) -> Result<CreateTaskRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add(TaskField::Title.name(), "Title is required");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.add(TaskField::Description.name(), "Description is required");
        }

        let status = match self.status.parse::<TaskStatus>() {
            Ok(status) => status,
            Err(_) => {
                errors.add(TaskField::Status.name(), "Invalid status");
                TaskStatus::default()
            }
        };

        let priority = match self.priority.parse::<TaskPriority>() {
            Ok(priority) => priority,
            Err(_) => {
                errors.add(TaskField::Priority.name(), "Invalid priority");
                TaskPriority::default()
            }
        };

        let due_date = if self.due_date.trim().is_empty() {
            None
        } else {
            let parsed = parse_input_date(&self.due_date);
            if parsed.is_none() {
                errors.add(TaskField::DueDate.name(), "Invalid date");
            }
            parsed
        };

        let notes = Some(self.notes.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        errors.into_result(CreateTaskRequest {
            title: title.to_string(),
            description: description.to_string(),
            status,
            details: Some(TaskDetailsInput {
                priority: Some(priority),
                due_date,
                notes,
            }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit { task_id: String },
}

#[derive(Debug, Clone, Default)]
pub struct TaskDialog {
    mode: Option<DialogMode>,
    form: TaskForm,
    errors: ValidationErrors,
}

impl TaskDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<&DialogMode> {
        self.mode.as_ref()
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            Some(DialogMode::Edit { .. }) => "Edit Task",
            _ => "Create New Task",
        }
    }

    pub fn open_create(&mut self) {
        self.mode = Some(DialogMode::Create);
        self.form = TaskForm::default();
        self.errors = ValidationErrors::new();
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.mode = Some(DialogMode::Edit {
            task_id: task.id.clone(),
        });
        self.form = TaskForm::from_task(task);
        self.errors = ValidationErrors::new();
    }

    pub fn close(&mut self) {
        self.mode = None;
        self.errors = ValidationErrors::new();
    }

    /// Updates one field and clears any error previously shown for it.
    pub fn set_field(&mut self, field: TaskField, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(field.name());
    }

    /// Validates the form and, when valid, calls `on_submit` exactly once with
    /// the task id being edited (`None` when creating) and the payload.
    ///
    /// Returns whether the handler was called. The dialog stays open; callers
    /// close it once the request succeeds.
    pub fn submit<F>(&mut self, on_submit: F) -> bool
    where
        F: FnOnce(Option<&str>, CreateTaskRequest),
    {
        let Some(mode) = self.mode.as_ref() else {
            return false;
        };

        match self.form.validate() {
            Ok(payload) => {
                self.errors = ValidationErrors::new();
                let task_id = match mode {
                    DialogMode::Create => None,
                    DialogMode::Edit { task_id } => Some(task_id.as_str()),
                };
                on_submit(task_id, payload);
                true
            }
            Err(errors) => {
                debug!("Task form rejected: {}", errors);
                self.errors = errors;
                false
            }
        }
    }
}
