use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// One of the summary cards above the task list
pub struct StatCard<'a> {
    title: &'a str,
    value: usize,
    color: Color,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: usize) -> Self {
        Self {
            title,
            value,
            color: Color::White,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl<'a> Widget for StatCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(self.value.to_string())
            .style(Style::default().fg(self.color).add_modifier(Modifier::BOLD))
            .block(block)
            .render(area, buf);
    }
}
