//! Error message constants used throughout the application.

// Request errors
pub const ERR_INVALID_JSON_BODY: &str =
    "Request body is not a valid JSON object of the expected shape";

// Routing errors
pub const ERR_ROUTE_NOT_FOUND: &str = "No route matches the requested method and path";
