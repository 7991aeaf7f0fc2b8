use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::notifications::{Notification, NotificationLevel};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Stack of toasts in the top-right corner, newest at the bottom
pub struct NotificationsWidget<'a> {
    items: Vec<&'a Notification>,
}

impl<'a> NotificationsWidget<'a> {
    pub fn new(items: impl Iterator<Item = &'a Notification>) -> Self {
        Self {
            items: items.collect(),
        }
    }
}

impl<'a> Widget for NotificationsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        let fits = (area.height / TOAST_HEIGHT) as usize;
        let skip = self.items.len().saturating_sub(fits);

        for (row, item) in self.items.iter().skip(skip).enumerate() {
            let toast = Rect {
                x: area.x + area.width - width,
                y: area.y + row as u16 * TOAST_HEIGHT,
                width,
                height: TOAST_HEIGHT,
            };
            let color = match item.level {
                NotificationLevel::Success => Color::Green,
                NotificationLevel::Error => Color::Red,
            };

            Clear.render(toast, buf);
            Paragraph::new(item.message.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .render(toast, buf);
        }
    }
}
