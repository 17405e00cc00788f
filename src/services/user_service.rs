//! User service returning fixed user records and echoing profile updates.

use log::debug;

use crate::constants::{DEMO_USER_EMAIL, DEMO_USER_NAME, SECOND_DEMO_USER_NAME};
use crate::models::{ProfileUpdate, ProfileUpdateResponse, UserRecord, UserSummary};

#[derive(Debug, Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// Look up a user. Every id resolves to the same demo record.
    pub fn find_one(&self, id: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: DEMO_USER_NAME.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
        }
    }

    pub fn find_all(&self) -> Vec<UserSummary> {
        vec![
            UserSummary {
                id: 1,
                name: DEMO_USER_NAME.to_string(),
            },
            UserSummary {
                id: 2,
                name: SECOND_DEMO_USER_NAME.to_string(),
            },
        ]
    }

    /// Echo an update back with `id` and `updated` set.
    pub fn update_profile(
        &self,
        user_id: &str,
        update_data: ProfileUpdate,
    ) -> ProfileUpdateResponse {
        let fields = update_data.into_fields();
        debug!(
            "Echoing {} profile field(s) for user {}",
            fields.len(),
            user_id
        );

        ProfileUpdateResponse::new(fields, user_id.to_string())
    }
}
