use reqwest::Method;
use serde_json::{json, Value};

use crate::models::AdminUser;
use super::client::ApiClient;
use super::envelope::Ack;
use super::error::ApiError;

/// `GET /admin/users`
pub async fn load_users(client: &ApiClient) -> Result<Vec<AdminUser>, ApiError> {
    let envelope = client
        .call::<Vec<AdminUser>>(Method::GET, "/admin/users", &[], None)
        .await?;
    Ok(envelope.into_list())
}

/// `POST /admin/users/admin-status` with `{user_id, is_admin}`.
pub async fn set_admin_status(client: &ApiClient, user_id: i64, is_admin: bool) -> Result<Ack, ApiError> {
    let body = json!({ "user_id": user_id, "is_admin": is_admin });
    let envelope = client
        .call::<Value>(Method::POST, "/admin/users/admin-status", &[], Some(body))
        .await?;
    tracing::info!(user_id, is_admin, "Admin status changed");
    Ok(envelope.into_ack())
}

/// `POST /admin/users/delete?user_id=`
pub async fn delete_user(client: &ApiClient, user_id: i64) -> Result<Ack, ApiError> {
    let params = [("user_id", user_id.to_string())];
    let envelope = client
        .call::<Value>(Method::POST, "/admin/users/delete", &params, None)
        .await?;
    tracing::info!(user_id, "User deleted");
    Ok(envelope.into_ack())
}
