use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account as reported by `GET /admin/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub storage_used_mb: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl AdminUser {
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.username.to_lowercase().contains(needle_lower)
    }
}
