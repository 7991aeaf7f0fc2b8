use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::state::DashboardState;
use crate::ui::widgets::StatCard;

pub const HEADER_TITLE: &str = "Task Management Dashboard";
const HEADER_SUBTITLE: &str = "Manage your tasks and the people working on them";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            HEADER_TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(HEADER_SUBTITLE, Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// The four summary cards, computed from the current task list.
pub fn render_stats(frame: &mut Frame, state: &DashboardState, area: Rect) {
    let stats = state.stats();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    frame.render_widget(StatCard::new("Total Tasks", stats.total), chunks[0]);
    frame.render_widget(
        StatCard::new("Completed", stats.completed).color(Color::Green),
        chunks[1],
    );
    frame.render_widget(
        StatCard::new("In Progress", stats.in_progress).color(Color::Blue),
        chunks[2],
    );
    frame.render_widget(
        StatCard::new("Pending", stats.pending).color(Color::Yellow),
        chunks[3],
    );
}
