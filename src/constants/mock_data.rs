//! Fixed values returned by the mock auth and user services.

// Auth
pub const MOCK_TOKEN: &str = "mock-jwt-token";
pub const LOGIN_USER_ID: u32 = 1;
pub const SIGNUP_USER_ID: u32 = 2;

// Users
pub const DEMO_USER_NAME: &str = "John Doe";
pub const DEMO_USER_EMAIL: &str = "john@example.com";
pub const SECOND_DEMO_USER_NAME: &str = "Jane Doe";

/// User id used by profile updates whose body carries no `userId`.
pub const DEFAULT_PROFILE_USER_ID: &str = "1";

// JSON keys the services overwrite in echoed payloads
pub const FIELD_ID: &str = "id";
pub const FIELD_UPDATED: &str = "updated";
pub const FIELD_USER_ID: &str = "userId";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
