use crossterm::event::{KeyCode, KeyEvent};
use taskdeck_models::{Task, UpdateTaskRequest};
use taskdeck_tasks::{TaskDialog, TaskField};
use tui_input::Input;

use crate::command::Command;
use crate::input;

/// Keyboard front-end for the task dialog: tracks the focused field and its
/// line editor while the dialog owns the values and validation.
#[derive(Debug, Default)]
pub struct TaskEditor {
    dialog: TaskDialog,
    focused: usize,
    input: Input,
    /// Bumped every time the dialog opens
    session: u64,
    /// Session whose create or update request is still running
    in_flight: Option<u64>,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> &TaskDialog {
        &self.dialog
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn focused_field(&self) -> TaskField {
        TaskField::ALL[self.focused]
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// True while the open dialog's own request is running.
    pub fn is_submitting(&self) -> bool {
        self.is_open() && self.in_flight == Some(self.session)
    }

    pub fn open_create(&mut self) {
        self.dialog.open_create();
        self.session += 1;
        self.focus(0);
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.dialog.open_edit(task);
        self.session += 1;
        self.focus(0);
    }

    pub fn close(&mut self) {
        self.dialog.close();
    }

    pub fn next_field(&mut self) {
        self.focus((self.focused + 1) % TaskField::ALL.len());
    }

    pub fn previous_field(&mut self) {
        let len = TaskField::ALL.len();
        self.focus((self.focused + len - 1) % len);
    }

    fn focus(&mut self, index: usize) {
        self.focused = index;
        let value = self.dialog.form().get(self.focused_field()).to_string();
        self.input = Input::default().with_value(value);
    }

    /// Handle a key while the dialog is open. Returns the create or update
    /// command when the key submitted a valid form.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Command> {
        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),
            _ => self.edit_focused(key),
        }
        None
    }

    fn edit_focused(&mut self, key: &KeyEvent) {
        let field = self.focused_field();

        if let Some(options) = field.options() {
            let forward = match key.code {
                KeyCode::Right | KeyCode::Char(' ') => true,
                KeyCode::Left => false,
                _ => return,
            };
            let next = cycle(&options, self.dialog.form().get(field), forward);
            self.dialog.set_field(field, next.clone());
            self.input = Input::default().with_value(next);
            return;
        }

        if input::edit(&mut self.input, key) {
            self.dialog.set_field(field, self.input.value());
        }
    }

    /// Validate and turn the form into a request. The dialog stays open until
    /// the request succeeds. Only one create or update runs at a time.
    pub fn submit(&mut self) -> Option<Command> {
        if self.in_flight.is_some() {
            return None;
        }

        let mut command = None;
        self.dialog.submit(|task_id, payload| {
            command = Some(match task_id {
                None => Command::CreateTask(payload),
                Some(task_id) => Command::UpdateTask {
                    task_id: task_id.to_string(),
                    request: UpdateTaskRequest::from(payload),
                },
            });
        });
        if command.is_some() {
            self.in_flight = Some(self.session);
        }
        command
    }

    /// Record the outcome of the running request. A success closes the dialog
    /// only if it is still the one that submitted.
    pub fn finish(&mut self, succeeded: bool) {
        let submitted = self.in_flight.take();
        if succeeded && submitted == Some(self.session) {
            self.close();
        }
    }
}

fn cycle(options: &[&'static str], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    options[next].to_string()
}
