use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use taskdeck_users::UserField;

use crate::state::{DashboardState, Focus};
use crate::ui::widgets::{avatar_span, FormField, FormWidget};
use crate::user_management::{UserManagement, NO_USERS_MESSAGE};

fn create_form(panel: &UserManagement) -> FormWidget<'_> {
    let fields = UserField::ALL
        .iter()
        .map(|&field| {
            let focused = panel.is_editing() && panel.focused_field() == field;
            let cursor = if focused {
                panel.input().cursor()
            } else {
                0
            };
            FormField::new(field.label(), panel.form().get(field))
                .error(panel.errors().get(field.name()))
                .focused(focused, cursor)
        })
        .collect();

    let footer = if panel.is_submitting() {
        "Creating..."
    } else if panel.is_editing() {
        "Enter: Create User"
    } else {
        "n: New User"
    };

    FormWidget::new("Create New User", fields).footer(footer)
}

/// The user management panel: create form on top, user list below.
pub fn render(frame: &mut Frame, state: &DashboardState, area: Rect) {
    let panel = &state.user_management;
    let border = if state.focus() == Focus::Users {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let outer = Block::default()
        .title("User Management")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let form = create_form(panel);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form.height()), Constraint::Min(3)])
        .split(inner);
    frame.render_widget(form, chunks[0]);

    let list_block = Block::default().title("Users").borders(Borders::TOP);

    if panel.is_loading() && panel.users().is_empty() {
        frame.render_widget(
            Paragraph::new("Loading users...")
                .style(Style::default().fg(Color::Gray))
                .block(list_block),
            chunks[1],
        );
        return;
    }

    if panel.users().is_empty() {
        frame.render_widget(
            Paragraph::new(NO_USERS_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .block(list_block),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = panel
        .users()
        .iter()
        .map(|user| {
            ListItem::new(vec![
                Line::from(vec![
                    avatar_span(user),
                    Span::raw(" "),
                    Span::styled(
                        user.username.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::styled(
                    format!("     {}", user.email),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(list_block), chunks[1]);
}
