//! Data models organized by type.

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
