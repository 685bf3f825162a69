use axum::{
    routing::{get, post},
    Router,
};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let static_routes = Router::new()
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        )));

    Router::new()
        .route("/", get(handlers::dashboard::dashboard_get))
        .route("/refresh", post(handlers::dashboard::refresh_post))
        .route("/fragments/users", get(handlers::dashboard::users_fragment))
        .route("/fragments/stats", get(handlers::dashboard::stats_fragment))
        .route("/fragments/storage", get(handlers::dashboard::storage_fragment))
        .route("/fragments/confirm", get(handlers::confirm::dialog_fragment))
        .route("/fragments/assets", get(handlers::users::assets_modal_fragment))
        .route("/users/:user_id/admin", post(handlers::users::toggle_admin_post))
        .route("/users/:user_id/delete", post(handlers::users::delete_user_post))
        .route("/users/:user_id/assets", post(handlers::users::view_assets_post))
        .route("/assets/:item_id/delete", post(handlers::assets::delete_asset_post))
        .route("/assets/close", post(handlers::assets::close_assets_post))
        .route("/confirm", post(handlers::confirm::confirm_post))
        .route("/cancel", post(handlers::confirm::cancel_post))
        .route("/theme/toggle", post(handlers::theme::toggle_post))
        .merge(static_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
