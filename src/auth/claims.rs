use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Account;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String, // Account ObjectId hex
    pub role: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(account: &Account, expiration_hours: i64) -> Self {
        Self::issued_at(account, Utc::now(), expiration_hours)
    }

    pub fn issued_at(account: &Account, issued: DateTime<Utc>, expiration_hours: i64) -> Self {
        let exp = issued + Duration::hours(expiration_hours);

        Self {
            user_id: account.id_hex(),
            role: account.role.clone(),
            iat: issued.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
