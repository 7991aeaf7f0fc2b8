use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::state::DashboardState;
use crate::ui::widgets::{avatar_span, centered_rect};
use crate::user_management::NO_USERS_MESSAGE;

/// Modal listing every user; already assigned users are ticked.
pub fn render(frame: &mut Frame, state: &DashboardState, area: Rect) {
    let Some(modal) = state.assign_modal.as_ref() else {
        return;
    };

    let height = (state.users().len() as u16 + 4).clamp(6, 16);
    let modal_area = centered_rect(40, height, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(format!("Assign User to \"{}\"", modal.task_title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if state.users().is_empty() {
        let message = if state.is_loading_users() {
            "Loading users..."
        } else {
            NO_USERS_MESSAGE
        };
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::Gray))
                .block(block),
            modal_area,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .users()
        .iter()
        .map(|user| {
            let marker = if modal.is_assigned(&user.id) { "✓ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                avatar_span(user),
                Span::raw(format!(" {} ", user.username)),
                Span::styled(format!("<{}>", user.email), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(modal.selected()));
    frame.render_stateful_widget(list, modal_area, &mut list_state);
}
