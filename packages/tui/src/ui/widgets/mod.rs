pub mod avatar;
pub mod badge;
pub mod card;
pub mod dialog;
pub mod form;
pub mod notifications;
pub mod status_bar;

pub use avatar::avatar_span;
pub use badge::{badge_span, badge_style};
pub use card::StatCard;
pub use dialog::{ConfirmationDialog, ConfirmationDialogWidget, DialogFocus, DialogResult};
pub use form::{FormField, FormWidget};
pub use notifications::NotificationsWidget;
pub use status_bar::StatusBarWidget;

use ratatui::layout::Rect;

/// A rectangle `percent_x` wide and `height` rows tall, centred in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width.saturating_mul(percent_x) / 100)
        .max(40)
        .min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
