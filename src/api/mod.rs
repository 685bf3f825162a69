// Atomic API modules
pub mod client;
pub mod envelope;
pub mod error;
pub mod stats;
pub mod users;
pub mod assets;

use async_trait::async_trait;

use crate::models::{AdminUser, UserAsset, UserStats};

// Re-export commonly used items
pub use client::ApiClient;
pub use envelope::{decode_envelope, Ack, Envelope};
pub use error::ApiError;
pub use stats::load_stats;
pub use users::{delete_user, load_users, set_admin_status};
pub use assets::{delete_asset, load_user_assets};

/// Everything the console needs from the remote admin API.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Whether a session token is available at all.
    fn has_credentials(&self) -> bool;
    async fn load_stats(&self) -> Result<UserStats, ApiError>;
    async fn load_users(&self) -> Result<Vec<AdminUser>, ApiError>;
    async fn set_admin_status(&self, user_id: i64, is_admin: bool) -> Result<Ack, ApiError>;
    async fn delete_user(&self, user_id: i64) -> Result<Ack, ApiError>;
    async fn load_user_assets(&self, user_id: i64) -> Result<Vec<UserAsset>, ApiError>;
    async fn delete_asset(&self, item_id: i64) -> Result<Ack, ApiError>;
}

#[async_trait]
impl AdminApi for ApiClient {
    fn has_credentials(&self) -> bool {
        ApiClient::has_credentials(self)
    }

    async fn load_stats(&self) -> Result<UserStats, ApiError> {
        stats::load_stats(self).await
    }

    async fn load_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        users::load_users(self).await
    }

    async fn set_admin_status(&self, user_id: i64, is_admin: bool) -> Result<Ack, ApiError> {
        users::set_admin_status(self, user_id, is_admin).await
    }

    async fn delete_user(&self, user_id: i64) -> Result<Ack, ApiError> {
        users::delete_user(self, user_id).await
    }

    async fn load_user_assets(&self, user_id: i64) -> Result<Vec<UserAsset>, ApiError> {
        assets::load_user_assets(self, user_id).await
    }

    async fn delete_asset(&self, item_id: i64) -> Result<Ack, ApiError> {
        assets::delete_asset(self, item_id).await
    }
}
