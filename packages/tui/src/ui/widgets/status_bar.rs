use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::state::{DashboardState, Focus};

/// Bottom line: where the keyboard is focused and what the keys do there
pub struct StatusBarWidget<'a> {
    state: &'a DashboardState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }

    fn mode(&self) -> (&'static str, Color) {
        if self.state.pending_delete.is_some() {
            ("CONFIRM", Color::Red)
        } else if self.state.task_editor.is_open() {
            ("FORM", Color::Yellow)
        } else if self.state.assign_modal.is_some() {
            ("ASSIGN", Color::Magenta)
        } else if self.state.user_management.is_editing() && self.state.focus() == Focus::Users {
            ("NEW USER", Color::Green)
        } else {
            match self.state.focus() {
                Focus::Tasks => ("TASKS", Color::Cyan),
                Focus::Users => ("USERS", Color::Cyan),
            }
        }
    }

    fn shortcuts(&self) -> &'static str {
        if self.state.pending_delete.is_some() {
            return "Tab: Switch • Enter: Choose • y: Delete • n/Esc: Cancel";
        }
        if self.state.task_editor.is_open() {
            return "Tab/↓: Next field • ←/→: Change choice • Enter: Save • Esc: Cancel";
        }
        if self.state.assign_modal.is_some() {
            return "↑↓: Select • Enter: Assign • x: Remove • Esc: Close";
        }
        match self.state.focus() {
            Focus::Users if self.state.user_management.is_editing() => {
                "Tab: Next field • Enter: Create User • Esc: Done"
            }
            Focus::Users => "n: New User • Tab: Tasks • r: Reload • q: Quit",
            Focus::Tasks => {
                "↑↓: Select • n: New • e: Edit • a: Assign • d: Delete • Tab: Users • r: Reload • q: Quit"
            }
        }
    }

    fn context(&self) -> String {
        let total = self.state.tasks().len();
        match self.state.selected_index() {
            Some(index) if self.state.focus() == Focus::Tasks => {
                format!(" Task {}/{}", index + 1, total)
            }
            _ => format!(" {} tasks • {} users", total, self.state.users().len()),
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (mode, mode_color) = self.mode();
        let shortcuts = self.shortcuts();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(mode.len() as u16 + 2),
                Constraint::Min(10),
                Constraint::Length(shortcuts.chars().count() as u16),
            ])
            .split(area);

        Paragraph::new(format!(" {} ", mode))
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(mode_color)
                    .add_modifier(Modifier::BOLD),
            )
            .render(chunks[0], buf);

        Paragraph::new(self.context())
            .style(Style::default().fg(Color::Gray))
            .render(chunks[1], buf);

        Paragraph::new(shortcuts)
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[2], buf);
    }
}
