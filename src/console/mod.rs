//! Interaction coordination for the admin console.
//!
//! `AdminConsole` is the single owner of everything the views show: the last
//! fetched users and stats, the search term, the open assets modal, the
//! confirmation dialog and the alert queue. Every state-changing action is
//! confirmed first and followed by a full re-fetch; nothing is patched locally.
//!
//! Admin authorization is delegated to the API. The console never decides who
//! is an admin; it reacts to 401/403 by scheduling a redirect and going quiet.

pub mod alerts;
pub mod dialog;
pub mod search;

use chrono::Utc;
use std::time::Duration;

use crate::api::{Ack, AdminApi, ApiError};
use crate::config::{RedirectSettings, LOGIN_REDIRECT_PATH};
use crate::models::{AdminUser, Alert, PendingRedirect, Section, UserAsset, UserStats};
use crate::utils::absolute_url;

pub use alerts::AlertQueue;
pub use dialog::{ConfirmDialog, DialogState, PendingAction};
pub use search::filter_users;

/// Contents of the per-user assets modal.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetsState {
    Loading,
    Loaded(Vec<UserAsset>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetsModal {
    pub user_id: i64,
    pub username: String,
    pub state: AssetsState,
}

pub struct AdminConsole<A: AdminApi> {
    api: A,
    redirects: RedirectSettings,
    users: Vec<AdminUser>,
    stats: Option<UserStats>,
    search: String,
    section: Section,
    assets_modal: Option<AssetsModal>,
    dialog: ConfirmDialog,
    alerts: AlertQueue,
    redirect: Option<PendingRedirect>,
}

impl<A: AdminApi> AdminConsole<A> {
    pub fn new(api: A, redirects: RedirectSettings) -> Self {
        Self {
            api,
            redirects,
            users: Vec::new(),
            stats: None,
            search: String::new(),
            section: Section::default(),
            assets_modal: None,
            dialog: ConfirmDialog::new(),
            alerts: AlertQueue::default(),
            redirect: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn users(&self) -> &[AdminUser] {
        &self.users
    }

    pub fn stats(&self) -> Option<&UserStats> {
        self.stats.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn dialog(&self) -> &ConfirmDialog {
        &self.dialog
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn assets_modal(&self) -> Option<&AssetsModal> {
        self.assets_modal.as_ref()
    }

    pub fn pending_redirect(&self) -> Option<&PendingRedirect> {
        self.redirect.as_ref()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Once a redirect is scheduled the console stops talking to the API.
    fn halted(&self) -> bool {
        self.redirect.is_some()
    }

    /// Page load: session check, then stats, then users. Runs again on every
    /// full page load; a no-op while a redirect is pending.
    pub async fn initialize(&mut self) {
        if self.halted() {
            return;
        }
        if !self.api.has_credentials() {
            tracing::info!("No admin session token; sending operator to login");
            self.schedule_redirect(LOGIN_REDIRECT_PATH, Duration::ZERO);
            return;
        }
        self.load_stats().await;
        self.load_users().await;
    }

    /// Fetch the stats snapshot and replace the cached one. Returns whether it succeeded.
    pub async fn load_stats(&mut self) -> bool {
        if self.halted() {
            return false;
        }
        match self.api.load_stats().await {
            Ok(stats) => {
                self.stats = Some(stats);
                true
            }
            Err(e) => {
                tracing::error!(%e, "Error loading stats");
                self.record_failure(&e, "Failed to load statistics", false);
                false
            }
        }
    }

    /// Fetch all users and replace the cached collection. Returns whether it succeeded.
    pub async fn load_users(&mut self) -> bool {
        if self.halted() {
            return false;
        }
        match self.api.load_users().await {
            Ok(users) => {
                tracing::debug!(count = users.len(), "Users loaded");
                self.users = users;
                true
            }
            Err(e) => {
                tracing::error!(%e, "Error loading users");
                self.record_failure(&e, "Failed to load users", false);
                false
            }
        }
    }

    pub async fn refresh(&mut self) {
        self.load_users().await;
        self.load_stats().await;
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// End the current page session once its redirect has been delivered.
    ///
    /// Everything but the API handle and redirect settings goes back to its
    /// initial state, so the next page load starts over and talks to the API again.
    pub fn reset_session(&mut self) {
        tracing::debug!(redirected = self.redirect.is_some(), "Page session ended");
        self.users.clear();
        self.stats = None;
        self.search.clear();
        self.section = Section::default();
        self.assets_modal = None;
        self.dialog.cancel();
        self.alerts = AlertQueue::default();
        self.redirect = None;
    }

    /// Cached users filtered by the current search term.
    pub fn visible_users(&self) -> Vec<&AdminUser> {
        filter_users(&self.users, &self.search)
    }

    pub fn request_toggle_admin(&mut self, user_id: i64, make_admin: bool) {
        self.request(PendingAction::SetAdminStatus { user_id, make_admin });
    }

    pub fn request_delete_user(&mut self, user_id: i64, username: &str) {
        self.request(PendingAction::DeleteUser {
            user_id,
            username: username.to_string(),
        });
    }

    pub fn request_delete_asset(&mut self, item_id: i64, name: &str) {
        self.request(PendingAction::DeleteAsset {
            item_id,
            name: name.to_string(),
        });
    }

    fn request(&mut self, action: PendingAction) {
        let message = action.describe();
        self.dialog.request(message, action);
    }

    /// Run the bound action, then re-fetch what it touched.
    ///
    /// Returns `None` when nothing was pending (or a redirect is already
    /// scheduled), otherwise the API result.
    pub async fn confirm(&mut self) -> Option<Result<Ack, ApiError>> {
        if self.halted() {
            self.dialog.cancel();
            return None;
        }
        let action = self.dialog.confirm()?;
        let result = match &action {
            PendingAction::SetAdminStatus { user_id, make_admin } => {
                self.api.set_admin_status(*user_id, *make_admin).await
            }
            PendingAction::DeleteUser { user_id, .. } => self.api.delete_user(*user_id).await,
            PendingAction::DeleteAsset { item_id, .. } => self.api.delete_asset(*item_id).await,
        };

        match &result {
            Ok(_) => {
                self.alerts.success(action.success_message());
                self.after_success(&action).await;
            }
            Err(e) => {
                tracing::error!(%e, ?action, "Confirmed action failed");
                self.record_failure(e, action.failure_message(), true);
            }
        }
        Some(result)
    }

    pub fn cancel(&mut self) {
        if self.dialog.cancel() {
            tracing::debug!("Confirmation cancelled");
        }
    }

    async fn after_success(&mut self, action: &PendingAction) {
        match action {
            PendingAction::SetAdminStatus { .. } | PendingAction::DeleteUser { .. } => {
                self.load_users().await;
                self.load_stats().await;
            }
            PendingAction::DeleteAsset { .. } => {
                let open = self
                    .assets_modal
                    .as_ref()
                    .map(|m| (m.user_id, m.username.clone()));
                if let Some((user_id, username)) = open {
                    self.view_user_assets(user_id, &username).await;
                }
                self.load_stats().await;
            }
        }
    }

    /// Open the assets modal for one user and fetch its contents.
    pub async fn view_user_assets(&mut self, user_id: i64, username: &str) {
        if self.halted() {
            return;
        }
        self.assets_modal = Some(AssetsModal {
            user_id,
            username: username.to_string(),
            state: AssetsState::Loading,
        });
        let state = match self.api.load_user_assets(user_id).await {
            Ok(assets) => AssetsState::Loaded(assets),
            Err(e) => {
                tracing::error!(%e, user_id, "Error loading user assets");
                let text = match e {
                    ApiError::Rejected(_) => "Failed to load assets",
                    _ => "Error loading assets",
                };
                if matches!(e, ApiError::Forbidden | ApiError::Unauthorized) {
                    self.record_failure(&e, text, false);
                }
                AssetsState::Failed(text.to_string())
            }
        };
        if let Some(modal) = self.assets_modal.as_mut() {
            if modal.user_id == user_id {
                modal.state = state;
            }
        }
    }

    pub fn close_assets(&mut self) {
        self.assets_modal = None;
    }

    /// Alerts still inside their display window; the queue is emptied.
    pub fn take_alerts(&mut self) -> Vec<Alert> {
        self.alerts.take_visible(Utc::now())
    }

    fn record_failure(&mut self, err: &ApiError, fallback: &str, prefer_server_message: bool) {
        match err {
            ApiError::Forbidden => {
                self.alerts.error("Admin access required");
                let path = self.redirects.forbidden_path.clone();
                let delay = self.redirects.forbidden_delay;
                self.schedule_redirect(&path, delay);
            }
            ApiError::Unauthorized => {
                self.alerts.error("Your session has expired, please log in again");
                self.schedule_redirect(LOGIN_REDIRECT_PATH, Duration::ZERO);
            }
            _ if prefer_server_message => self.alerts.error(err.user_message(fallback)),
            _ => self.alerts.error(fallback),
        }
    }

    fn schedule_redirect(&mut self, path: &str, delay: Duration) {
        if self.redirect.is_some() {
            return;
        }
        let location = absolute_url(&self.redirects.api_base_url, path);
        tracing::warn!(%location, delay_ms = delay.as_millis() as u64, "Scheduling redirect");
        self.redirect = Some(PendingRedirect { location, delay });
        self.dialog.cancel();
    }
}
