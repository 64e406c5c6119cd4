use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "user";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never the plain password.
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl Account {
    pub fn new(name: &str, email: &str, password_hash: String, role: Option<&str>) -> Self {
        let now = DateTime::now();
        let role = role
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_ROLE)
            .to_string();

        Account {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn id_hex(&self) -> String {
        self.id.map(|oid| oid.to_hex()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Account {
    pub fn test_account(name: &str, email: &str) -> Self {
        Account::new(name, email, "not-a-real-hash".to_string(), None)
    }
}
