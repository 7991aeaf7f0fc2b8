use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck_models::{Task, User};
use taskdeck_tasks::{BadgePalette, TaskRow, TaskStats};
use tracing::{debug, warn};

use crate::assign::AssignModal;
use crate::command::{Command, MutationKind};
use crate::events::ApiEvent;
use crate::notifications::{Notification, Notifications};
use crate::reload::ReloadGuard;
use crate::task_editor::TaskEditor;
use crate::ui::widgets::{ConfirmationDialog, DialogResult};
use crate::user_management::UserManagement;

/// Which half of the dashboard receives list navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tasks,
    Users,
}

/// Delete confirmation waiting for an answer
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub task_id: String,
    pub dialog: ConfirmationDialog,
}

/// Everything the dashboard shows. Key presses and API results go in,
/// commands for the effects runner come out; nothing here performs I/O.
#[derive(Debug)]
pub struct DashboardState {
    tasks: Vec<Task>,
    users: Vec<User>,
    selected_task: usize,
    focus: Focus,
    loading_tasks: bool,
    loading_users: bool,
    task_reloads: ReloadGuard,
    user_reloads: ReloadGuard,
    pub palette: BadgePalette,
    pub task_editor: TaskEditor,
    pub user_management: UserManagement,
    pub assign_modal: Option<AssignModal>,
    pub pending_delete: Option<PendingDelete>,
    pub notifications: Notifications,
    should_quit: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            users: Vec::new(),
            selected_task: 0,
            focus: Focus::Tasks,
            loading_tasks: true,
            loading_users: true,
            task_reloads: ReloadGuard::new(),
            user_reloads: ReloadGuard::new(),
            palette: BadgePalette::default(),
            task_editor: TaskEditor::new(),
            user_management: UserManagement::new(),
            assign_modal: None,
            pending_delete: None,
            notifications: Notifications::default(),
            should_quit: false,
        }
    }

    /// Initial loads, issued together so they run in parallel.
    pub fn start(&mut self) -> Vec<Command> {
        vec![
            self.reload_tasks(),
            self.reload_users(),
            self.user_management.load(),
        ]
    }

    pub fn reload_tasks(&mut self) -> Command {
        self.loading_tasks = true;
        Command::LoadTasks {
            generation: self.task_reloads.begin(),
        }
    }

    pub fn reload_users(&mut self) -> Command {
        self.loading_users = true;
        Command::LoadUsers {
            generation: self.user_reloads.begin(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading_tasks(&self) -> bool {
        self.loading_tasks
    }

    pub fn is_loading_users(&self) -> bool {
        self.loading_users
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recomputed from the current list on every call.
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    pub fn rows(&self) -> Vec<TaskRow> {
        TaskRow::rows(&self.tasks, &self.palette)
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.selected_task)
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_task)
    }

    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        if self.pending_delete.is_some() {
            return self.handle_delete_confirmation(key.code);
        }
        if self.task_editor.is_open() {
            return self.task_editor.handle_key(&key).into_iter().collect();
        }
        if self.assign_modal.is_some() {
            return self.handle_assign_key(key.code);
        }
        if self.focus == Focus::Users && self.user_management.is_editing() {
            return self.user_management.handle_key(&key).into_iter().collect();
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Tasks => Focus::Users,
                    Focus::Users => Focus::Tasks,
                };
            }
            KeyCode::Char('r') => {
                return vec![
                    self.reload_tasks(),
                    self.reload_users(),
                    self.user_management.load(),
                ];
            }
            _ => {
                return match self.focus {
                    Focus::Tasks => self.handle_task_list_key(key.code),
                    Focus::Users => self.handle_user_panel_key(key.code),
                };
            }
        }
        Vec::new()
    }

    fn handle_task_list_key(&mut self, code: KeyCode) -> Vec<Command> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_task(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_task(),
            KeyCode::Char('n') => self.task_editor.open_create(),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(task) = self.tasks.get(self.selected_task) {
                    self.task_editor.open_edit(task);
                }
            }
            KeyCode::Char('a') => {
                if let Some(task) = self.tasks.get(self.selected_task) {
                    self.assign_modal = Some(AssignModal::for_task(task));
                    return vec![self.reload_users()];
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(task) = self.tasks.get(self.selected_task) {
                    self.pending_delete = Some(PendingDelete {
                        task_id: task.id.clone(),
                        dialog: ConfirmationDialog::delete_task(&task.title),
                    });
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_user_panel_key(&mut self, code: KeyCode) -> Vec<Command> {
        if matches!(code, KeyCode::Char('n') | KeyCode::Char('i') | KeyCode::Enter) {
            self.user_management.start_editing();
        }
        Vec::new()
    }

    fn handle_delete_confirmation(&mut self, code: KeyCode) -> Vec<Command> {
        let Some(pending) = self.pending_delete.as_mut() else {
            return Vec::new();
        };

        match pending.dialog.handle_key(code) {
            DialogResult::Pending => Vec::new(),
            DialogResult::Cancelled => {
                self.pending_delete = None;
                Vec::new()
            }
            DialogResult::Confirmed => match self.pending_delete.take() {
                Some(pending) => vec![Command::DeleteTask {
                    task_id: pending.task_id,
                }],
                None => Vec::new(),
            },
        }
    }

    fn handle_assign_key(&mut self, code: KeyCode) -> Vec<Command> {
        let user_count = self.users.len();
        let Some(modal) = self.assign_modal.as_mut() else {
            return Vec::new();
        };

        match code {
            KeyCode::Esc => self.assign_modal = None,
            KeyCode::Up | KeyCode::Char('k') => modal.select_previous(user_count),
            KeyCode::Down | KeyCode::Char('j') => modal.select_next(user_count),
            KeyCode::Enter => {
                if let Some(user) = modal.selected_user(&self.users) {
                    let command = Command::AssignUser {
                        task_id: modal.task_id.clone(),
                        user_id: user.id.clone(),
                    };
                    self.assign_modal = None;
                    return vec![command];
                }
            }
            KeyCode::Char('x') => {
                if let Some(user) = modal.selected_user(&self.users) {
                    if modal.is_assigned(&user.id) {
                        let command = Command::UnassignUser {
                            task_id: modal.task_id.clone(),
                            user_id: user.id.clone(),
                        };
                        self.assign_modal = None;
                        return vec![command];
                    }
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn select_previous_task(&mut self) {
        if !self.tasks.is_empty() {
            let len = self.tasks.len();
            self.selected_task = (self.selected_task + len - 1) % len;
        }
    }

    fn select_next_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_task = (self.selected_task + 1) % self.tasks.len();
        }
    }

    /// Apply a finished API call and return any follow-up commands.
    pub fn apply(&mut self, event: ApiEvent) -> Vec<Command> {
        match event {
            ApiEvent::TasksLoaded { generation, result } => {
                if !self.task_reloads.is_current(generation) {
                    debug!("Discarding stale task load {}", generation);
                    return Vec::new();
                }
                self.loading_tasks = false;
                match result {
                    Ok(tasks) => {
                        self.tasks = tasks;
                        if self.selected_task >= self.tasks.len() {
                            self.selected_task = self.tasks.len().saturating_sub(1);
                        }
                    }
                    Err(e) => {
                        warn!("Failed to load tasks: {}", e);
                        self.notify(Notification::error("Failed to load tasks"));
                    }
                }
                Vec::new()
            }
            ApiEvent::UsersLoaded { generation, result } => {
                if !self.user_reloads.is_current(generation) {
                    debug!("Discarding stale user load {}", generation);
                    return Vec::new();
                }
                self.loading_users = false;
                match result {
                    Ok(users) => {
                        self.users = users;
                        if let Some(modal) = self.assign_modal.as_mut() {
                            modal.clamp(self.users.len());
                        }
                    }
                    Err(e) => {
                        warn!("Failed to load users: {}", e);
                        self.notify(Notification::error("Failed to load users"));
                    }
                }
                Vec::new()
            }
            ApiEvent::PanelUsersLoaded { generation, result } => {
                if let Some(notification) = self.user_management.apply_load(generation, result) {
                    self.notify(notification);
                }
                Vec::new()
            }
            ApiEvent::MutationFinished { kind, result } => {
                if matches!(kind, MutationKind::Create | MutationKind::Update) {
                    self.task_editor.finish(result.is_ok());
                }
                self.mutation_finished(kind, result)
            }
            ApiEvent::UserCreated { result } => {
                let (notification, command) = self.user_management.apply_created(result);
                self.notify(notification);
                command.into_iter().collect()
            }
        }
    }

    fn mutation_finished(&mut self, kind: MutationKind, result: Result<(), String>) -> Vec<Command> {
        match result {
            Ok(()) => {
                self.notify(Notification::success(kind.success_message()));
                vec![self.reload_tasks()]
            }
            Err(e) => {
                warn!("Task mutation {:?} failed: {}", kind, e);
                self.notify(Notification::error(kind.failure_message()));
                if kind.reloads_on_failure() {
                    vec![self.reload_tasks()]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taskdeck_models::TaskStatus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: "Something to do".to_string(),
            status,
            details: None,
            users: vec![],
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: None,
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: format!("user-{}", id),
            email: format!("{}@example.com", id),
        }
    }

    fn generation_of(command: &Command) -> u64 {
        match command {
            Command::LoadTasks { generation }
            | Command::LoadUsers { generation }
            | Command::LoadPanelUsers { generation } => *generation,
            other => panic!("not a load command: {:?}", other),
        }
    }

    /// Start the dashboard and answer the initial loads.
    fn loaded(tasks: Vec<Task>, users: Vec<User>) -> DashboardState {
        let mut state = DashboardState::new();
        let commands = state.start();
        state.apply(ApiEvent::TasksLoaded {
            generation: generation_of(&commands[0]),
            result: Ok(tasks),
        });
        state.apply(ApiEvent::UsersLoaded {
            generation: generation_of(&commands[1]),
            result: Ok(users.clone()),
        });
        state.apply(ApiEvent::PanelUsersLoaded {
            generation: generation_of(&commands[2]),
            result: Ok(users),
        });
        state
    }

    #[test]
    fn test_start_loads_tasks_and_users_together() {
        let mut state = DashboardState::new();
        let commands = state.start();

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], Command::LoadTasks { .. }));
        assert!(matches!(commands[1], Command::LoadUsers { .. }));
        assert!(matches!(commands[2], Command::LoadPanelUsers { .. }));
        assert!(state.is_loading_tasks());
    }

    #[test]
    fn test_stats_follow_the_current_list() {
        let state = loaded(
            vec![
                task("1", TaskStatus::Completed),
                task("2", TaskStatus::Completed),
                task("3", TaskStatus::Pending),
                task("4", TaskStatus::InProgress),
            ],
            vec![],
        );

        let stats = state.stats();
        assert_eq!(
            (stats.total, stats.completed, stats.in_progress, stats.pending),
            (4, 2, 1, 1)
        );
    }

    #[test]
    fn test_stale_task_load_never_overwrites_newer_one() {
        let mut state = loaded(vec![], vec![]);
        let older = generation_of(&state.reload_tasks());
        let newer = generation_of(&state.reload_tasks());

        state.apply(ApiEvent::TasksLoaded {
            generation: newer,
            result: Ok(vec![task("new", TaskStatus::Pending)]),
        });
        state.apply(ApiEvent::TasksLoaded {
            generation: older,
            result: Ok(vec![task("old", TaskStatus::Pending)]),
        });

        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.tasks()[0].id, "new");
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut state = loaded(vec![task("1", TaskStatus::Pending)], vec![]);
        let generation = generation_of(&state.reload_tasks());

        state.apply(ApiEvent::TasksLoaded {
            generation,
            result: Err("connection refused".to_string()),
        });

        assert_eq!(state.tasks().len(), 1);
        assert!(!state.is_loading_tasks());
        assert_eq!(
            state.notifications.latest().map(|n| n.message.as_str()),
            Some("Failed to load tasks")
        );
    }

    fn type_text(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Open the create dialog and fill in the required fields.
    fn fill_new_task(state: &mut DashboardState) {
        state.handle_key(key(KeyCode::Char('n')));
        type_text(state, "Buy milk");
        state.handle_key(key(KeyCode::Tab));
        type_text(state, "Two litres");
    }

    fn create_count(commands: &[Command]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, Command::CreateTask(_)))
            .count()
    }

    #[test]
    fn test_create_success_notifies_closes_dialog_and_reloads() {
        let mut state = loaded(vec![], vec![]);
        fill_new_task(&mut state);
        assert_eq!(create_count(&state.handle_key(key(KeyCode::Enter))), 1);
        assert!(state.task_editor.is_open());

        let commands = state.apply(ApiEvent::MutationFinished {
            kind: MutationKind::Create,
            result: Ok(()),
        });

        assert!(!state.task_editor.is_open());
        assert!(matches!(commands.as_slice(), [Command::LoadTasks { .. }]));
        assert_eq!(
            state.notifications.latest().map(|n| n.message.as_str()),
            Some("Task created successfully")
        );
    }

    #[test]
    fn test_failed_update_leaves_dialog_and_list_untouched() {
        let mut state = loaded(vec![task("1", TaskStatus::Pending)], vec![]);
        state.handle_key(key(KeyCode::Char('e')));

        let commands = state.apply(ApiEvent::MutationFinished {
            kind: MutationKind::Update,
            result: Err("500".to_string()),
        });

        assert!(commands.is_empty());
        assert!(state.task_editor.is_open());
        assert_eq!(state.tasks().len(), 1);
        assert_eq!(
            state.notifications.latest().map(|n| n.message.as_str()),
            Some("Failed to update task")
        );
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = loaded(vec![task("1", TaskStatus::Pending)], vec![]);

        assert!(state.handle_key(key(KeyCode::Char('d'))).is_empty());
        assert!(state.pending_delete.is_some());

        assert!(state.handle_key(key(KeyCode::Esc)).is_empty());
        assert!(state.pending_delete.is_none());

        state.handle_key(key(KeyCode::Char('d')));
        let commands = state.handle_key(key(KeyCode::Char('y')));
        assert_eq!(
            commands,
            vec![Command::DeleteTask {
                task_id: "1".to_string()
            }]
        );
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_assign_flow_closes_modal_and_always_reloads() {
        let mut state = loaded(
            vec![task("1", TaskStatus::Pending)],
            vec![user("a"), user("b")],
        );

        let commands = state.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(commands.as_slice(), [Command::LoadUsers { .. }]));
        assert!(state.assign_modal.is_some());

        state.handle_key(key(KeyCode::Down));
        let commands = state.handle_key(key(KeyCode::Enter));
        assert_eq!(
            commands,
            vec![Command::AssignUser {
                task_id: "1".to_string(),
                user_id: "b".to_string()
            }]
        );
        assert!(state.assign_modal.is_none());

        let commands = state.apply(ApiEvent::MutationFinished {
            kind: MutationKind::Assign,
            result: Err("404".to_string()),
        });
        assert!(matches!(commands.as_slice(), [Command::LoadTasks { .. }]));
        assert_eq!(
            state.notifications.latest().map(|n| n.message.as_str()),
            Some("Failed to assign user")
        );
    }

    #[test]
    fn test_unassign_only_for_assigned_users() {
        let mut assigned = task("1", TaskStatus::Pending);
        assigned.users = vec![user("a")];
        let mut state = loaded(vec![assigned], vec![user("a"), user("b")]);

        state.handle_key(key(KeyCode::Char('a')));
        state.handle_key(key(KeyCode::Down));
        assert!(state.handle_key(key(KeyCode::Char('x'))).is_empty());

        state.handle_key(key(KeyCode::Up));
        assert_eq!(
            state.handle_key(key(KeyCode::Char('x'))),
            vec![Command::UnassignUser {
                task_id: "1".to_string(),
                user_id: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_actions_on_empty_list_do_nothing() {
        let mut state = loaded(vec![], vec![]);

        assert!(state.handle_key(key(KeyCode::Char('e'))).is_empty());
        assert!(state.handle_key(key(KeyCode::Char('a'))).is_empty());
        assert!(state.handle_key(key(KeyCode::Char('d'))).is_empty());
        assert!(!state.task_editor.is_open());
        assert!(state.assign_modal.is_none());
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_keys_go_to_open_dialog_first() {
        let mut state = loaded(vec![], vec![]);
        state.handle_key(key(KeyCode::Char('n')));

        state.handle_key(key(KeyCode::Char('q')));
        assert!(!state.should_quit());
        assert_eq!(state.task_editor.dialog().form().title, "q");
    }

    #[test]
    fn test_user_panel_typing_after_focus_switch() {
        let mut state = loaded(vec![], vec![]);
        state.handle_key(key(KeyCode::Tab));
        assert_eq!(state.focus(), Focus::Users);

        state.handle_key(key(KeyCode::Char('n')));
        assert!(state.user_management.is_editing());
        for c in "bob".chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(state.user_management.form().username, "bob");

        state.handle_key(key(KeyCode::Esc));
        state.handle_key(key(KeyCode::Char('q')));
        assert!(state.should_quit());
    }

    #[test]
    fn test_selection_clamped_after_shorter_reload() {
        let mut state = loaded(
            vec![task("1", TaskStatus::Pending), task("2", TaskStatus::Pending)],
            vec![],
        );
        state.handle_key(key(KeyCode::Down));
        assert_eq!(state.selected_task().map(|t| t.id.as_str()), Some("2"));

        let generation = generation_of(&state.reload_tasks());
        state.apply(ApiEvent::TasksLoaded {
            generation,
            result: Ok(vec![task("1", TaskStatus::Pending)]),
        });
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_repeated_enter_sends_one_create_until_answered() {
        let mut state = loaded(vec![], vec![]);
        fill_new_task(&mut state);

        let mut commands = state.handle_key(key(KeyCode::Enter));
        commands.extend(state.handle_key(key(KeyCode::Enter)));
        assert_eq!(create_count(&commands), 1);
        assert!(state.task_editor.is_submitting());

        state.apply(ApiEvent::MutationFinished {
            kind: MutationKind::Create,
            result: Err("500".to_string()),
        });
        assert!(state.task_editor.is_open());
        assert!(!state.task_editor.is_submitting());
        assert_eq!(create_count(&state.handle_key(key(KeyCode::Enter))), 1);
    }

    #[test]
    fn test_late_create_success_keeps_edit_dialog_open() {
        let mut state = loaded(vec![task("1", TaskStatus::Pending)], vec![]);
        fill_new_task(&mut state);
        assert_eq!(create_count(&state.handle_key(key(KeyCode::Enter))), 1);

        state.handle_key(key(KeyCode::Esc));
        state.handle_key(key(KeyCode::Char('e')));
        type_text(&mut state, " edited");

        let commands = state.apply(ApiEvent::MutationFinished {
            kind: MutationKind::Create,
            result: Ok(()),
        });

        assert!(matches!(commands.as_slice(), [Command::LoadTasks { .. }]));
        assert!(state.task_editor.is_open());
        assert_eq!(state.task_editor.dialog().form().title, "Task 1 edited");
    }
}
