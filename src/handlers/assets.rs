use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::models::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct AssetNameForm {
    #[serde(default)]
    pub name: String,
}

pub async fn delete_asset_post(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Form(form): Form<AssetNameForm>,
) -> Response {
    state.console.lock().await.request_delete_asset(item_id, &form.name);
    Redirect::to("/").into_response()
}

pub async fn close_assets_post(State(state): State<AppState>) -> Response {
    state.console.lock().await.close_assets();
    Redirect::to("/").into_response()
}
