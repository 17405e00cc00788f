//! Success message constants used throughout the application.

// Health messages
pub const STATUS_OK: &str = "OK";
pub const MSG_SERVER_RUNNING: &str = "Server is running";
