use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// A single labelled input as the form widget shows it
#[derive(Debug, Clone)]
pub struct FormField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    /// Fixed choices; the value is shown as a selector instead of free text
    pub options: Option<Vec<&'static str>>,
    pub focused: bool,
    /// Cursor position in chars, for the focused text field
    pub cursor: usize,
}

impl<'a> FormField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            error: None,
            options: None,
            focused: false,
            cursor: value.chars().count(),
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn options(mut self, options: Option<Vec<&'static str>>) -> Self {
        self.options = options;
        self
    }

    pub fn focused(mut self, focused: bool, cursor: usize) -> Self {
        self.focused = focused;
        self.cursor = cursor;
        self
    }

    fn value_spans(&self) -> Vec<Span<'a>> {
        if self.options.is_some() {
            let style = if self.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            return vec![Span::styled(format!("< {} >", self.value), style)];
        }

        if !self.focused {
            return vec![Span::raw(self.value)];
        }

        let split = self
            .value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len());
        let (before, rest) = self.value.split_at(split);
        let mut chars = rest.chars();
        let under_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());

        vec![
            Span::raw(before),
            Span::styled(under_cursor, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(chars.as_str()),
        ]
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let label_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut value = vec![Span::styled(format!("{:<12}", self.label), label_style)];
        value.extend(self.value_spans());

        let mut lines = vec![Line::from(value)];
        if let Some(error) = self.error {
            lines.push(Line::styled(
                format!("{:<12}{}", "", error),
                Style::default().fg(Color::Red),
            ));
        }
        lines
    }
}

/// Titled box of form fields with an optional hint line at the bottom
pub struct FormWidget<'a> {
    title: &'a str,
    fields: Vec<FormField<'a>>,
    footer: Option<&'a str>,
    border: Color,
}

impl<'a> FormWidget<'a> {
    pub fn new(title: &'a str, fields: Vec<FormField<'a>>) -> Self {
        Self {
            title,
            fields,
            footer: None,
            border: Color::Cyan,
        }
    }

    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    /// Rows needed to show every field and the footer inside borders.
    pub fn height(&self) -> u16 {
        let field_rows: usize = self.fields.iter().map(|f| f.lines().len()).sum();
        let footer_rows = if self.footer.is_some() { 2 } else { 0 };
        (field_rows + footer_rows + 2) as u16
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border));

        let mut lines: Vec<Line> = self.fields.iter().flat_map(|f| f.lines()).collect();
        if let Some(footer) = self.footer {
            lines.push(Line::raw(""));
            lines.push(Line::styled(footer, Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_error_adds_a_line() {
        let field = FormField::new("Title", "").error(Some("Title is required"));
        let lines = field.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[1]).trim(), "Title is required");
    }

    #[test]
    fn test_cursor_highlights_character() {
        let field = FormField::new("Title", "milk").focused(true, 1);
        let spans = field.value_spans();
        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["m", "i", "lk"]);
    }

    #[test]
    fn test_cursor_at_end_shows_block() {
        let field = FormField::new("Title", "ab").focused(true, 2);
        let contents: Vec<String> = field
            .value_spans()
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(contents, vec!["ab", " ", ""]);
    }

    #[test]
    fn test_selection_field_renders_selector() {
        let field = FormField::new("Status", "pending").options(Some(vec!["pending"]));
        let spans = field.value_spans();
        assert_eq!(spans[0].content, "< pending >");
    }

    #[test]
    fn test_height_counts_errors_and_footer() {
        let form = FormWidget::new(
            "Create New Task",
            vec![
                FormField::new("Title", "").error(Some("Title is required")),
                FormField::new("Notes", ""),
            ],
        )
        .footer("Enter: Save");
        assert_eq!(form.height(), 7);
    }
}
