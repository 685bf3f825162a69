use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::api::ApiClient;
use crate::console::AdminConsole;
use crate::models::AppState;
use crate::render::{self, DashboardView};
use crate::theme::Theme;

#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Query string of the full page: search term and active tab.
#[derive(Deserialize, Debug, Default)]
pub struct DashboardQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UsernameForm {
    #[serde(default)]
    pub username: String,
}

pub fn plain_html<S: AsRef<str>>(s: S) -> Response {
    Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref())).into_response()
}

/// Turn a rendered fragment into a response; render failures become a 500.
pub fn render_fragment(rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, plain_html("Failed to render page")).into_response()
        }
    }
}

pub fn current_theme(state: &AppState) -> Theme {
    match state.theme.lock() {
        Ok(manager) => manager.current(),
        Err(e) => {
            tracing::error!(%e, "Theme lock poisoned");
            Theme::default()
        }
    }
}

pub fn render_dashboard(state: &AppState, console: &mut AdminConsole<ApiClient>) -> Response {
    let alerts = console.take_alerts();
    let api_hostname = crate::utils::hostname_from_url(&state.api_base_url);
    let console = &*console;
    let view = DashboardView {
        theme: current_theme(state),
        api_hostname: &api_hostname,
        search: console.search_term(),
        section: console.section(),
        alerts: &alerts,
        stats: console.stats(),
        users: console.visible_users(),
        assets_modal: console.assets_modal(),
        dialog: console.dialog(),
        redirect: console.pending_redirect(),
    };
    render_fragment(render::dashboard(&view))
}
