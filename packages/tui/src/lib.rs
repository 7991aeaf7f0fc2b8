//! Taskdeck TUI - terminal dashboard for tasks and users
//!
//! The dashboard state is a pure state machine: key presses and API results
//! go in, commands come out. The app loop runs those commands as background
//! API calls and feeds their results back as events.

pub mod app;
pub mod assign;
pub mod command;
pub mod effects;
pub mod events;
pub mod input;
pub mod notifications;
pub mod reload;
pub mod state;
pub mod task_editor;
pub mod ui;
pub mod user_management;

pub use app::App;
pub use command::{Command, MutationKind};
pub use events::{ApiEvent, AppEvent};
pub use state::{DashboardState, Focus};
