use reqwest::Method;

use crate::models::UserStats;
use super::client::ApiClient;
use super::error::ApiError;

/// `GET /admin/stats`
pub async fn load_stats(client: &ApiClient) -> Result<UserStats, ApiError> {
    client
        .call::<UserStats>(Method::GET, "/admin/stats", &[], None)
        .await?
        .into_data()
}
