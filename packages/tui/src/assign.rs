use taskdeck_models::{Task, User};

/// Secondary modal listing users to assign to one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignModal {
    pub task_id: String,
    pub task_title: String,
    assigned: Vec<String>,
    selected: usize,
}

impl AssignModal {
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: task.id.clone(),
            task_title: task.title.clone(),
            assigned: task.users.iter().map(|u| u.id.clone()).collect(),
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_assigned(&self, user_id: &str) -> bool {
        self.assigned.iter().any(|id| id == user_id)
    }

    pub fn select_next(&mut self, user_count: usize) {
        if user_count > 0 {
            self.selected = (self.selected + 1) % user_count;
        }
    }

    pub fn select_previous(&mut self, user_count: usize) {
        if user_count > 0 {
            self.selected = (self.selected + user_count - 1) % user_count;
        }
    }

    /// Keep the highlight inside a user list that may have been reloaded.
    pub fn clamp(&mut self, user_count: usize) {
        if self.selected >= user_count {
            self.selected = user_count.saturating_sub(1);
        }
    }

    pub fn selected_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        users.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_models::TaskStatus;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: id.to_string(),
            email: format!("{}@example.com", id),
        }
    }

    fn task_with(users: Vec<User>) -> Task {
        Task {
            id: "t1".to_string(),
            title: "Plan sprint".to_string(),
            description: "Next two weeks".to_string(),
            status: TaskStatus::Pending,
            details: None,
            users,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_selection_wraps_around() {
        let mut modal = AssignModal::for_task(&task_with(vec![]));
        modal.select_previous(3);
        assert_eq!(modal.selected(), 2);
        modal.select_next(3);
        assert_eq!(modal.selected(), 0);
    }

    #[test]
    fn test_selection_on_empty_list() {
        let mut modal = AssignModal::for_task(&task_with(vec![]));
        modal.select_next(0);
        assert_eq!(modal.selected(), 0);
        assert!(modal.selected_user(&[]).is_none());
    }

    #[test]
    fn test_remembers_current_assignees() {
        let modal = AssignModal::for_task(&task_with(vec![user("u1")]));
        assert!(modal.is_assigned("u1"));
        assert!(!modal.is_assigned("u2"));
    }

    #[test]
    fn test_clamp_after_shorter_reload() {
        let mut modal = AssignModal::for_task(&task_with(vec![]));
        modal.select_previous(5);
        modal.clamp(2);
        assert_eq!(modal.selected(), 1);
        let users = vec![user("a"), user("b")];
        assert_eq!(modal.selected_user(&users).map(|u| u.id.as_str()), Some("b"));
    }
}
