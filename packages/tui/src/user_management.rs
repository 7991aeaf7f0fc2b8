use crossterm::event::{KeyCode, KeyEvent};
use taskdeck_models::{User, ValidationErrors};
use taskdeck_users::{UserField, UserForm};
use tracing::{debug, warn};
use tui_input::Input;

use crate::command::Command;
use crate::input;
use crate::notifications::Notification;
use crate::reload::ReloadGuard;

pub const NO_USERS_MESSAGE: &str = "No users found";

/// Self-contained user panel: its own user list and load lifecycle plus the
/// create-user form.
#[derive(Debug)]
pub struct UserManagement {
    users: Vec<User>,
    loading: bool,
    reloads: ReloadGuard,
    form: UserForm,
    errors: ValidationErrors,
    editing: bool,
    focused: usize,
    input: Input,
    submitting: bool,
}

impl Default for UserManagement {
    fn default() -> Self {
        Self::new()
    }
}

impl UserManagement {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            reloads: ReloadGuard::new(),
            form: UserForm::default(),
            errors: ValidationErrors::new(),
            editing: false,
            focused: 0,
            input: Input::default(),
            submitting: false,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focused_field(&self) -> UserField {
        UserField::ALL[self.focused]
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Issue a fresh load of the panel's user list.
    pub fn load(&mut self) -> Command {
        self.loading = true;
        Command::LoadPanelUsers {
            generation: self.reloads.begin(),
        }
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
        self.focus(0);
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    fn focus(&mut self, index: usize) {
        self.focused = index;
        let value = self.form.get(self.focused_field()).to_string();
        self.input = Input::default().with_value(value);
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Command> {
        let count = UserField::ALL.len();
        match key.code {
            KeyCode::Esc => self.stop_editing(),
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus((self.focused + 1) % count),
            KeyCode::BackTab | KeyCode::Up => self.focus((self.focused + count - 1) % count),
            _ => {
                if input::edit(&mut self.input, key) {
                    let field = self.focused_field();
                    self.form.set(field, self.input.value());
                    self.errors.remove(field.name());
                }
            }
        }
        None
    }

    /// Validate the form; a valid form becomes a create request. Invalid
    /// input never reaches the network.
    pub fn submit(&mut self) -> Option<Command> {
        if self.submitting {
            return None;
        }

        match self.form.validate() {
            Ok(request) => {
                self.errors = ValidationErrors::new();
                self.submitting = true;
                Some(Command::CreateUser(request))
            }
            Err(errors) => {
                debug!("User form rejected: {}", errors);
                self.errors = errors;
                None
            }
        }
    }

    /// Apply a finished panel load. Returns a notification when it failed.
    pub fn apply_load(
        &mut self,
        generation: u64,
        result: Result<Vec<User>, String>,
    ) -> Option<Notification> {
        if !self.reloads.is_current(generation) {
            debug!("Discarding stale user panel load {}", generation);
            return None;
        }

        self.loading = false;
        match result {
            Ok(users) => {
                self.users = users;
                None
            }
            Err(e) => {
                warn!("Failed to load users: {}", e);
                Some(Notification::error("Failed to load users"))
            }
        }
    }

    /// Apply the outcome of a create-user request. A success clears the form
    /// and asks for a reload; a failure leaves the form as typed.
    pub fn apply_created(
        &mut self,
        result: Result<User, String>,
    ) -> (Notification, Option<Command>) {
        self.submitting = false;
        match result {
            Ok(user) => {
                debug!("Created user {}", user.id);
                self.form.clear();
                self.errors = ValidationErrors::new();
                self.focus(0);
                (
                    Notification::success("User created successfully"),
                    Some(self.load()),
                )
            }
            Err(e) => {
                warn!("Failed to create user: {}", e);
                (Notification::error("Failed to create user"), None)
            }
        }
    }
}
