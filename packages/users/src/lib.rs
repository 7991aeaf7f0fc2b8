// ABOUTME: User management form rules
// ABOUTME: Username and email validation shared by the dashboard and the server

pub mod form;

pub use form::{is_valid_email, validate_update, UserField, UserForm};
