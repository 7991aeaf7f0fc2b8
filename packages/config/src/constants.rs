// ABOUTME: Environment variable name constants and their defaults
// ABOUTME: Centralized definitions of every environment variable Taskdeck reads

// Server
pub const PORT: &str = "PORT";
pub const HOST: &str = "HOST";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

// Persistence
pub const TASKDECK_DATABASE_PATH: &str = "TASKDECK_DATABASE_PATH";

// External AI backend
pub const BACKEND_URL: &str = "BACKEND_URL";

// Terminal dashboard
pub const TASKDECK_API_URL: &str = "TASKDECK_API_URL";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_DATABASE_PATH: &str = "taskdeck.db";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Fixed rewrite target for `/api/chat`. Not configurable.
pub const CHAT_REWRITE_URL: &str = "http://localhost:5000/chat";

pub const EMOTION_RECOGNITION_PATH: &str = "/chat/emotion-recognition";
pub const HABIT_TRAINER_PATH: &str = "/chat/habit-trainer";
