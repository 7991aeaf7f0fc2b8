use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered_rect;

/// Result of user interaction with the confirmation dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DialogResult {
    Confirmed,
    Cancelled,
    /// Still waiting for input
    Pending,
}

/// Which button is currently focused
#[derive(Debug, Clone, PartialEq)]
pub enum DialogFocus {
    /// Default, so a stray Enter never confirms a destructive action
    Cancel,
    Confirm,
}

#[derive(Debug, Clone)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Red styling for destructive actions
    pub dangerous: bool,
    pub focus: DialogFocus,
    pub details: Option<String>,
}

impl ConfirmationDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            dangerous: false,
            focus: DialogFocus::Cancel,
            details: None,
        }
    }

    /// The dialog shown before a task is deleted.
    pub fn delete_task(title: &str) -> Self {
        Self::new("Delete Task", format!("Delete \"{}\"?", title))
            .dangerous()
            .with_buttons("Delete", "Cancel")
            .with_details("Its user assignments are removed as well.")
    }

    pub fn dangerous(mut self) -> Self {
        self.dangerous = true;
        self
    }

    pub fn with_buttons(mut self, confirm_text: impl Into<String>, cancel_text: impl Into<String>) -> Self {
        self.confirm_text = confirm_text.into();
        self.cancel_text = cancel_text.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            DialogFocus::Cancel => DialogFocus::Confirm,
            DialogFocus::Confirm => DialogFocus::Cancel,
        };
    }

    pub fn handle_key(&mut self, key: KeyCode) -> DialogResult {
        match key {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.next_focus();
                DialogResult::Pending
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                DialogFocus::Cancel => DialogResult::Cancelled,
                DialogFocus::Confirm => DialogResult::Confirmed,
            },
            KeyCode::Char('y') => DialogResult::Confirmed,
            KeyCode::Esc | KeyCode::Char('n') => DialogResult::Cancelled,
            _ => DialogResult::Pending,
        }
    }
}

pub struct ConfirmationDialogWidget<'a> {
    dialog: &'a ConfirmationDialog,
}

impl<'a> ConfirmationDialogWidget<'a> {
    pub fn new(dialog: &'a ConfirmationDialog) -> Self {
        Self { dialog }
    }

    fn accent(&self) -> Color {
        if self.dialog.dangerous {
            Color::Red
        } else {
            Color::Yellow
        }
    }
}

impl<'a> Widget for ConfirmationDialogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = if self.dialog.details.is_some() { 10 } else { 8 };
        let dialog_area = centered_rect(50, height, area);
        Clear.render(dialog_area, buf);

        let accent = self.accent();
        let block = Block::default()
            .title(self.dialog.title.clone())
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(2)])
            .split(inner);

        let mut lines = vec![Line::raw(self.dialog.message.as_str()), Line::raw("")];
        if let Some(details) = &self.dialog.details {
            lines.extend(details.lines().map(|l| {
                Line::styled(l.to_string(), Style::default().fg(Color::Gray))
            }));
        }
        if self.dialog.dangerous {
            lines.push(Line::styled(
                "This action cannot be undone!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let focused = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let cancel_style = match self.dialog.focus {
            DialogFocus::Cancel => focused.bg(Color::Blue),
            DialogFocus::Confirm => Style::default().fg(Color::Gray),
        };
        let confirm_style = match self.dialog.focus {
            DialogFocus::Confirm => focused.bg(accent),
            DialogFocus::Cancel => Style::default().fg(accent),
        };

        let buttons = Line::from(vec![
            Span::styled(format!("[{}]", self.dialog.cancel_text), cancel_style),
            Span::raw("   "),
            Span::styled(format!("[{}]", self.dialog.confirm_text), confirm_style),
        ]);
        let hints = Line::styled(
            "Tab: Switch • Enter: Choose • y/n",
            Style::default().fg(Color::DarkGray),
        );

        Paragraph::new(vec![buttons, hints])
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_cancels_by_default() {
        let mut dialog = ConfirmationDialog::delete_task("Buy milk");
        assert_eq!(dialog.handle_key(KeyCode::Enter), DialogResult::Cancelled);
    }

    #[test]
    fn test_switching_focus_then_enter_confirms() {
        let mut dialog = ConfirmationDialog::delete_task("Buy milk");
        assert_eq!(dialog.handle_key(KeyCode::Tab), DialogResult::Pending);
        assert_eq!(dialog.handle_key(KeyCode::Enter), DialogResult::Confirmed);
    }

    #[test]
    fn test_shortcut_keys() {
        let mut dialog = ConfirmationDialog::new("Title", "Message");
        assert_eq!(dialog.handle_key(KeyCode::Char('y')), DialogResult::Confirmed);
        assert_eq!(dialog.handle_key(KeyCode::Esc), DialogResult::Cancelled);
        assert_eq!(dialog.handle_key(KeyCode::Char('z')), DialogResult::Pending);
    }
}
