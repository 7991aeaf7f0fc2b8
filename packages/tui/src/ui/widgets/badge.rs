use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use taskdeck_tasks::BadgeColor;

/// Terminal rendering of a badge colour: dark text on the matching hue.
pub fn badge_style(color: BadgeColor) -> Style {
    let bg = match color {
        BadgeColor::Green => Color::Green,
        BadgeColor::Blue => Color::Blue,
        BadgeColor::Yellow => Color::Yellow,
        BadgeColor::Red => Color::Red,
        BadgeColor::Orange => Color::Rgb(255, 165, 0),
        BadgeColor::Gray => Color::Gray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

pub fn badge_span(label: &str, color: BadgeColor) -> Span<'static> {
    Span::styled(format!(" {} ", label), badge_style(color))
}
