// ABOUTME: Task and user data model shared by the server, client and dashboard
// ABOUTME: Wire types, request payloads and field-level validation errors

pub mod task;
pub mod user;
pub mod validation;

pub use task::{
    CreateTaskRequest, Task, TaskDetails, TaskDetailsInput, TaskPriority, TaskStatus,
    UpdateTaskRequest,
};
pub use user::{CreateUserRequest, UpdateUserRequest, User};
pub use validation::{UnknownVariant, ValidationErrors};
