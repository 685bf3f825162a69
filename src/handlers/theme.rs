use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::models::AppState;

pub async fn toggle_post(State(state): State<AppState>) -> Response {
    match state.theme.lock() {
        Ok(mut manager) => {
            manager.toggle();
        }
        Err(e) => tracing::error!(%e, "Theme lock poisoned"),
    }
    Redirect::to("/").into_response()
}
