use kb_core::UserSummary;

use serde::Serialize;

/// Creator or author embedded in task and comment responses
#[derive(Debug, Serialize)]
pub struct UserSummaryDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(u: UserSummary) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name,
            email: u.email,
        }
    }
}
