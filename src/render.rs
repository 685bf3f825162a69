//! Pure view functions: borrowed data in, HTML fragment out.
//!
//! User-controlled text only reaches the output through the `esc` template
//! filter (`utils::escape_html`).

use askama::Template;

use crate::config::ALERT_TTL_SECS;
use crate::console::{AssetsModal, AssetsState, ConfirmDialog};
use crate::models::{AdminUser, Alert, PendingRedirect, Section, UserAsset, UserRow, UserStats};
use crate::templates::{
    AlertsTemplate, AssetsModalTemplate, ConfirmDialogTemplate, DashboardTemplate, NavLink, StatsCardsTemplate,
    StorageDetailsTemplate, UserAssetsTemplate, UsersTableTemplate,
};
use crate::theme::Theme;
use crate::utils::{build_query_string, format_date, format_last_login, format_storage_mb, mb_to_gb};

pub fn user_row(user: &AdminUser) -> UserRow {
    let (toggle_label, toggle_class) = if user.is_admin {
        ("Remove Admin", "btn-success")
    } else {
        ("Make Admin", "btn-warning")
    };
    UserRow {
        id: user.id,
        username: user.username.clone(),
        is_admin: user.is_admin,
        target_admin: !user.is_admin,
        toggle_label,
        toggle_class,
        storage_display: format_storage_mb(user.storage_used_mb),
        created_display: format_date(&user.created_at),
        last_login_display: format_last_login(user.last_login.as_ref()),
    }
}

/// Table body rows for the users table.
pub fn users_table<'a>(users: impl IntoIterator<Item = &'a AdminUser>) -> askama::Result<String> {
    let rows: Vec<UserRow> = users.into_iter().map(user_row).collect();
    UsersTableTemplate { rows: &rows }.render()
}

pub fn stats_cards(stats: &UserStats) -> askama::Result<String> {
    StatsCardsTemplate {
        total_users: stats.total_users,
        admin_users: stats.admin_users,
        active_users: stats.active_users,
        currently_logged_in_users: stats.currently_logged_in_users,
        storage_gb: mb_to_gb(stats.total_storage_used),
    }
    .render()
}

pub fn storage_details(stats: &UserStats) -> askama::Result<String> {
    StorageDetailsTemplate {
        storage_gb: mb_to_gb(stats.total_storage_used),
        total_users: stats.total_users,
        admin_users: stats.admin_users,
    }
    .render()
}

pub fn user_assets(assets: &[UserAsset], username: &str) -> askama::Result<String> {
    UserAssetsTemplate { username, assets }.render()
}

/// The assets modal; closed when `modal` is `None`.
pub fn assets_modal(modal: Option<&AssetsModal>) -> askama::Result<String> {
    let Some(modal) = modal else {
        return AssetsModalTemplate { open: false, user_id: 0, body: "" }.render();
    };
    let body = match &modal.state {
        AssetsState::Loading => "<div class=\"loading-spinner\"></div> Loading assets...".to_string(),
        AssetsState::Loaded(assets) => user_assets(assets, &modal.username)?,
        AssetsState::Failed(msg) => format!("<p>{}</p>", crate::utils::escape_html(msg)),
    };
    AssetsModalTemplate {
        open: true,
        user_id: modal.user_id,
        body: &body,
    }
    .render()
}

pub fn confirm_dialog<A>(dialog: &ConfirmDialog<A>) -> askama::Result<String> {
    ConfirmDialogTemplate {
        shown: dialog.is_shown(),
        message: dialog.message().unwrap_or(""),
    }
    .render()
}

pub fn alerts(alerts: &[Alert]) -> askama::Result<String> {
    AlertsTemplate {
        alerts,
        dismiss_after_ms: ALERT_TTL_SECS * 1000,
    }
    .render()
}

/// Tab links for the page header. Each link keeps the current search term.
pub fn section_nav(active: Section, search: &str) -> Vec<NavLink> {
    Section::ALL
        .iter()
        .map(|section| {
            let mut params = vec![("section", section.as_str())];
            if !search.is_empty() {
                params.push(("q", search));
            }
            NavLink {
                id: section.as_str(),
                label: section.label(),
                href: format!("/?{}", build_query_string(&params)),
                active: *section == active,
            }
        })
        .collect()
}

/// Everything the full page needs, borrowed from the console and theme.
pub struct DashboardView<'a> {
    pub theme: Theme,
    pub api_hostname: &'a str,
    pub search: &'a str,
    pub section: Section,
    pub alerts: &'a [Alert],
    pub stats: Option<&'a UserStats>,
    pub users: Vec<&'a AdminUser>,
    pub assets_modal: Option<&'a AssetsModal>,
    pub dialog: &'a ConfirmDialog,
    pub redirect: Option<&'a PendingRedirect>,
}

pub fn dashboard(view: &DashboardView<'_>) -> askama::Result<String> {
    let empty = UserStats::default();
    let stats = view.stats.unwrap_or(&empty);
    let alerts_html = alerts(view.alerts)?;
    let stats_html = stats_cards(stats)?;
    let users_html = users_table(view.users.iter().copied())?;
    let storage_html = storage_details(stats)?;
    let assets_html = assets_modal(view.assets_modal)?;
    let confirm_html = confirm_dialog(view.dialog)?;
    let nav = section_nav(view.section, view.search);
    let (redirect_secs, redirect_location) = view
        .redirect
        .map(|r| (r.delay_secs(), r.location.as_str()))
        .unwrap_or((0, ""));

    DashboardTemplate {
        theme: view.theme.as_str(),
        theme_icon_class: view.theme.icon_class(),
        theme_toggle_title: view.theme.toggle_title(),
        api_hostname: view.api_hostname,
        search: view.search,
        section: view.section.as_str(),
        nav: &nav,
        alerts_html: &alerts_html,
        stats_html: &stats_html,
        users_html: &users_html,
        storage_html: &storage_html,
        assets_html: &assets_html,
        confirm_html: &confirm_html,
        has_redirect: view.redirect.is_some(),
        redirect_secs,
        redirect_location,
    }
    .render()
}
