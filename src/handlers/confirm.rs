use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::models::AppState;
use crate::render;

use super::helpers::render_fragment;

pub async fn confirm_post(State(state): State<AppState>) -> Response {
    let mut console = state.console.lock().await;
    if console.confirm().await.is_none() {
        tracing::debug!("Confirm with nothing pending");
    }
    Redirect::to("/").into_response()
}

pub async fn cancel_post(State(state): State<AppState>) -> Response {
    state.console.lock().await.cancel();
    Redirect::to("/").into_response()
}

pub async fn dialog_fragment(State(state): State<AppState>) -> Response {
    let console = state.console.lock().await;
    render_fragment(render::confirm_dialog(console.dialog()))
}
