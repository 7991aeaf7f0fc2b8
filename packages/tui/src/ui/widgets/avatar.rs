use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use taskdeck_models::User;

const AVATAR_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Red,
];

/// Initials in a coloured box; the colour is stable for a given username.
pub fn avatar_span(user: &User) -> Span<'static> {
    let index = user.username.bytes().map(usize::from).sum::<usize>() % AVATAR_COLORS.len();
    Span::styled(
        format!("({:^2})", user.initials()),
        Style::default()
            .fg(AVATAR_COLORS[index])
            .add_modifier(Modifier::BOLD),
    )
}
