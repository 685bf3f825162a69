use serde::{Deserialize, Serialize};

/// Aggregate counters from `GET /admin/stats`. Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub total_users: i64,
    pub admin_users: i64,
    pub active_users: i64,
    pub currently_logged_in_users: i64,
    /// Megabytes.
    pub total_storage_used: i64,
    pub total_storage_quota: i64,
}
