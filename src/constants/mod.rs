//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the application,
//! including error codes, error messages, success messages and the mock records
//! returned by the services.

pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod mock_data;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use mock_data::*;
