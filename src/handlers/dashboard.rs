use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::models::{AppState, Section, UserStats};
use crate::render;

use super::helpers::{render_dashboard, render_fragment, DashboardQuery, SearchQuery};

/// Every full page load fetches stats and users again. A page that carries a
/// pending redirect ends the session, so the next load starts clean.
pub async fn dashboard_get(State(state): State<AppState>, Query(query): Query<DashboardQuery>) -> Response {
    let mut console = state.console.lock().await;
    if let Some(q) = query.q.as_deref() {
        console.set_search(q);
    }
    if let Some(section) = query.section.as_deref() {
        console.set_section(Section::parse(section));
    }
    console.initialize().await;
    let response = render_dashboard(&state, &mut console);
    if console.pending_redirect().is_some() {
        console.reset_session();
    }
    response
}

/// Search: re-filters the cached users on every call, no fetch.
pub async fn users_fragment(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Response {
    let mut console = state.console.lock().await;
    console.set_search(query.q.as_deref().unwrap_or(""));
    render_fragment(render::users_table(console.visible_users()))
}

pub async fn stats_fragment(State(state): State<AppState>) -> Response {
    let console = state.console.lock().await;
    let stats = console.stats().cloned().unwrap_or_default();
    render_fragment(render::stats_cards(&stats))
}

pub async fn storage_fragment(State(state): State<AppState>) -> Response {
    let console = state.console.lock().await;
    let stats: UserStats = console.stats().cloned().unwrap_or_default();
    render_fragment(render::storage_details(&stats))
}

pub async fn refresh_post(State(state): State<AppState>) -> Response {
    let mut console = state.console.lock().await;
    console.refresh().await;
    Redirect::to("/").into_response()
}
