// ABOUTME: Badge colour tables for task status and priority
// ABOUTME: Pure lookups; unknown values fall back to gray

use taskdeck_models::{TaskPriority, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Green,
    Blue,
    Yellow,
    Red,
    Orange,
    Gray,
}

impl BadgeColor {
    /// Utility classes used by the web dashboard for the same badge.
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeColor::Green => "bg-green-100 text-green-800",
            BadgeColor::Blue => "bg-blue-100 text-blue-800",
            BadgeColor::Yellow => "bg-yellow-100 text-yellow-800",
            BadgeColor::Red => "bg-red-100 text-red-800",
            BadgeColor::Orange => "bg-orange-100 text-orange-800",
            BadgeColor::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

pub fn status_color(status: &str) -> BadgeColor {
    match status {
        "completed" => BadgeColor::Green,
        "in_progress" => BadgeColor::Blue,
        "pending" => BadgeColor::Yellow,
        _ => BadgeColor::Gray,
    }
}

pub fn priority_color(priority: Option<&str>) -> BadgeColor {
    match priority {
        Some("high") => BadgeColor::Red,
        Some("medium") => BadgeColor::Orange,
        Some("low") => BadgeColor::Green,
        _ => BadgeColor::Gray,
    }
}

/// The pair of colour functions a task list is rendered with.
#[derive(Debug, Clone, Copy)]
pub struct BadgePalette {
    pub status: fn(&str) -> BadgeColor,
    pub priority: fn(Option<&str>) -> BadgeColor,
}

impl BadgePalette {
    pub fn status_badge(&self, status: TaskStatus) -> BadgeColor {
        (self.status)(status.as_str())
    }

    pub fn priority_badge(&self, priority: Option<TaskPriority>) -> BadgeColor {
        (self.priority)(priority.map(|p| p.as_str()))
    }
}

impl Default for BadgePalette {
    fn default() -> Self {
        Self {
            status: status_color,
            priority: priority_color,
        }
    }
}
