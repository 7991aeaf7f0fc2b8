use ratatui::prelude::*;
use ratatui::widgets::Clear;
use taskdeck_tasks::TaskField;

use crate::task_editor::TaskEditor;
use crate::ui::widgets::{centered_rect, FormField, FormWidget};

const HINT: &str = "Tab/↓: Next • ←/→: Change choice • Enter: Save • Esc: Cancel";
const SAVING: &str = "Saving...";

pub fn render(frame: &mut Frame, editor: &TaskEditor, area: Rect) {
    if !editor.is_open() {
        return;
    }

    let dialog = editor.dialog();
    let fields = TaskField::ALL
        .iter()
        .map(|&field| {
            let focused = editor.focused_field() == field;
            let cursor = if focused {
                editor.input().cursor()
            } else {
                0
            };
            FormField::new(field.label(), dialog.form().get(field))
                .error(dialog.errors().get(field.name()))
                .options(field.options())
                .focused(focused, cursor)
        })
        .collect();

    let footer = if editor.is_submitting() { SAVING } else { HINT };
    let form = FormWidget::new(dialog.title(), fields)
        .footer(footer)
        .border(Color::Yellow);
    let dialog_area = centered_rect(60, form.height(), area);

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(form, dialog_area);
}
