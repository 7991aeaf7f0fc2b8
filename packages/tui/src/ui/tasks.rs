use ratatui::layout::Constraint;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use taskdeck_tasks::{TaskRow, EMPTY_TASKS_MESSAGE};

use crate::state::{DashboardState, Focus};
use crate::ui::widgets::badge_span;

fn block(focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title("Tasks")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn row(task: &TaskRow) -> Row<'static> {
    let title = Text::from(vec![
        Line::styled(
            task.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(task.description.clone(), Style::default().fg(Color::Gray)),
    ]);

    let assignees = if task.assignees.is_empty() {
        Cell::from(Span::styled(
            task.assignees_label(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Cell::from(task.assignees_label())
    };

    Row::new(vec![
        Cell::from(title),
        Cell::from(badge_span(&task.status_label, task.status_color)),
        Cell::from(badge_span(&task.priority_label, task.priority_color)),
        Cell::from(task.due_date.clone()),
        assignees,
        Cell::from(task.created.clone()),
    ])
    .height(2)
}

/// Task table, or the empty-state message when there are no tasks.
pub fn render(frame: &mut Frame, state: &DashboardState, area: Rect) {
    let block = block(state.focus() == Focus::Tasks);

    if state.is_loading_tasks() && state.tasks().is_empty() {
        let loading = Paragraph::new("Loading tasks...")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let rows = state.rows();
    if rows.is_empty() {
        let empty = Paragraph::new(EMPTY_TASKS_MESSAGE)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        "Task",
        "Status",
        "Priority",
        "Due Date",
        "Assigned Users",
        "Created",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let widths = [
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Length(20),
        Constraint::Length(13),
    ];

    let table = Table::new(rows.iter().map(row), widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(state.selected_index());
    frame.render_stateful_widget(table, area, &mut table_state);
}
