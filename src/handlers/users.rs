use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::models::AppState;
use crate::render;
use crate::utils::parse_flag;

use super::helpers::{render_fragment, UsernameForm};

#[derive(Deserialize, Debug, Default)]
pub struct ToggleAdminForm {
    #[serde(default)]
    pub make_admin: Option<String>,
}

pub async fn toggle_admin_post(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<ToggleAdminForm>,
) -> Response {
    let make_admin = parse_flag(form.make_admin.as_deref(), true);
    state.console.lock().await.request_toggle_admin(user_id, make_admin);
    Redirect::to("/").into_response()
}

pub async fn delete_user_post(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<UsernameForm>,
) -> Response {
    state.console.lock().await.request_delete_user(user_id, &form.username);
    Redirect::to("/").into_response()
}

pub async fn view_assets_post(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<UsernameForm>,
) -> Response {
    state.console.lock().await.view_user_assets(user_id, &form.username).await;
    Redirect::to("/").into_response()
}

/// The assets modal as it currently stands; never fetches.
pub async fn assets_modal_fragment(State(state): State<AppState>) -> Response {
    let console = state.console.lock().await;
    render_fragment(render::assets_modal(console.assets_modal()))
}
