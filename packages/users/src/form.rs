// ABOUTME: User create/update validation
// ABOUTME: Produces request payloads only when username and email are acceptable

use lazy_static::lazy_static;
use regex::Regex;
use taskdeck_models::{CreateUserRequest, UpdateUserRequest, ValidationErrors};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Username,
    Email,
}

impl UserField {
    pub const ALL: [UserField; 2] = [UserField::Username, UserField::Email];

    pub fn name(&self) -> &'static str {
        match self {
            UserField::Username => "username",
            UserField::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserField::Username => "Username",
            UserField::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
}

impl UserForm {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Username => &self.username,
            UserField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        match field {
            UserField::Username => self.username = value.into(),
            UserField::Email => self.email = value.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<CreateUserRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let username = check_username(&self.username, &mut errors);
        let email = check_email(&self.email, &mut errors);

        errors.into_result(CreateUserRequest { username, email })
    }
}

/// Validates only the fields present in a partial update.
pub fn validate_update(update: &UpdateUserRequest) -> Result<UpdateUserRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let username = update
        .username
        .as_deref()
        .map(|u| check_username(u, &mut errors));
    let email = update.email.as_deref().map(|e| check_email(e, &mut errors));

    errors.into_result(UpdateUserRequest { username, email })
}

fn check_username(raw: &str, errors: &mut ValidationErrors) -> String {
    let username = raw.trim();
    if username.is_empty() {
        errors.add(UserField::Username.name(), "Username is required");
    }
    username.to_string()
}

fn check_email(raw: &str, errors: &mut ValidationErrors) -> String {
    let email = raw.trim();
    if !is_valid_email(email) {
        errors.add(UserField::Email.name(), "Invalid email address");
    }
    email.to_string()
}
