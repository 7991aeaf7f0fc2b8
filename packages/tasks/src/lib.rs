// ABOUTME: Task presentation logic independent of any renderer
// ABOUTME: Dialog state machine, list rows, badge colour tables, stats and date display

pub mod badges;
pub mod dates;
pub mod dialog;
pub mod list;
pub mod stats;

pub use badges::{priority_color, status_color, BadgeColor, BadgePalette};
pub use dates::{format_created_date, format_due_date, parse_timestamp, to_input_date};
pub use dialog::{DialogMode, TaskDialog, TaskField, TaskForm};
pub use list::{TaskRow, EMPTY_TASKS_MESSAGE, NO_USERS_ASSIGNED};
pub use stats::TaskStats;
