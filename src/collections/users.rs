use crate::entity::{Collection, Record};
use crate::filter::Searchable;
use crate::ids;
use serde::{Deserialize, Serialize};

pub const USER_ROLES: &[&str] = &["admin", "manager", "user"];
pub const USER_STATUSES: &[&str] = &["active", "inactive", "suspended"];

/// Back-office user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created_at: String,
    pub last_login: String,
}

impl User {
    /// New user with a generated id, created today, never logged in.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        User {
            id: ids::prefixed_id("user"),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: status.into(),
            created_at: ids::today(),
            last_login: "Never".to_string(),
        }
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection for User {
    const NAME: &'static str = "users";
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn status(&self) -> &str {
        &self.status
    }
}
