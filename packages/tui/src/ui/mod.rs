pub mod assign;
pub mod dashboard;
pub mod task_dialog;
pub mod tasks;
pub mod users;
pub mod widgets;

use crate::state::DashboardState;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use widgets::{ConfirmationDialogWidget, NotificationsWidget, StatusBarWidget};

/// Main UI rendering function
pub fn render(frame: &mut Frame, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Stat cards
            Constraint::Min(6),    // Task list and user panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    dashboard::render_header(frame, chunks[0]);
    dashboard::render_stats(frame, state, chunks[1]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(chunks[2]);
    tasks::render(frame, state, main[0]);
    users::render(frame, state, main[1]);

    frame.render_widget(StatusBarWidget::new(state), chunks[3]);

    // Overlays, topmost last
    task_dialog::render(frame, &state.task_editor, frame.area());
    assign::render(frame, state, frame.area());
    if let Some(pending) = &state.pending_delete {
        frame.render_widget(ConfirmationDialogWidget::new(&pending.dialog), frame.area());
    }
    frame.render_widget(
        NotificationsWidget::new(state.notifications.iter()),
        frame.area(),
    );
}
