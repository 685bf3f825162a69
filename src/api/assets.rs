use reqwest::Method;
use serde_json::Value;

use crate::models::UserAsset;
use super::client::ApiClient;
use super::envelope::Ack;
use super::error::ApiError;

/// `GET /admin/users/assets?user_id=`
pub async fn load_user_assets(client: &ApiClient, user_id: i64) -> Result<Vec<UserAsset>, ApiError> {
    let params = [("user_id", user_id.to_string())];
    let envelope = client
        .call::<Vec<UserAsset>>(Method::GET, "/admin/users/assets", &params, None)
        .await?;
    Ok(envelope.into_list())
}

/// `POST /admin/users/assets/delete?item_id=`
pub async fn delete_asset(client: &ApiClient, item_id: i64) -> Result<Ack, ApiError> {
    let params = [("item_id", item_id.to_string())];
    let envelope = client
        .call::<Value>(Method::POST, "/admin/users/assets/delete", &params, None)
        .await?;
    tracing::info!(item_id, "Asset deleted");
    Ok(envelope.into_ack())
}
