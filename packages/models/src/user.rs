// ABOUTME: User type definitions
// ABOUTME: Users can be assigned to any number of tasks

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl User {
    /// Up to two uppercase initials taken from the username, for avatars.
    pub fn initials(&self) -> String {
        let parts: Vec<&str> = self
            .username
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-' || c == '.')
            .filter(|p| !p.is_empty())
            .collect();

        let initials: String = match parts.as_slice() {
            [] => String::new(),
            [single] => single.chars().take(2).collect(),
            [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
        };

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials.to_uppercase()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: "u".to_string(),
            username: name.to_string(),
            email: "u@example.com".to_string(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("ada lovelace").initials(), "AL");
        assert_eq!(user("grace_b_hopper").initials(), "GH");
        assert_eq!(user("linus").initials(), "LI");
        assert_eq!(user("x").initials(), "X");
        assert_eq!(user("  ").initials(), "?");
    }
}
