//! Coordinator behaviour against a scripted in-memory admin API.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use admin_console::api::{Ack, AdminApi, ApiError};
use admin_console::config::RedirectSettings;
use admin_console::console::{AdminConsole, AssetsState, PendingAction};
use admin_console::models::{AdminUser, AlertKind, UserAsset, UserStats};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

/// Scripted failure for the next call to an endpoint.
#[derive(Clone, Copy)]
enum Fail {
    Forbidden,
    Unauthorized,
    Status(&'static str),
    Rejected,
    Decode,
}

impl Fail {
    fn into_error(self) -> ApiError {
        match self {
            Fail::Forbidden => ApiError::Forbidden,
            Fail::Unauthorized => ApiError::Unauthorized,
            Fail::Status(msg) => ApiError::Status { status: 400, message: msg.to_string() },
            Fail::Rejected => ApiError::Rejected(None),
            Fail::Decode => ApiError::Decode("expected value at line 1 column 1".to_string()),
        }
    }
}

#[derive(Default)]
struct Script {
    calls: Vec<String>,
    failures: HashMap<&'static str, VecDeque<Fail>>,
}

#[derive(Clone)]
struct FakeApi {
    credentials: bool,
    users: Vec<AdminUser>,
    assets: Vec<UserAsset>,
    script: Arc<Mutex<Script>>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            credentials: true,
            users: vec![user(1, "alice", true), user(2, "Bob", false), user(3, "malice", false)],
            assets: vec![UserAsset {
                id: 11,
                name: "Sword".into(),
                url: None,
                inventory_name: "Main".into(),
                folder_name: "Weapons".into(),
            }],
            script: Arc::new(Mutex::new(Script::default())),
        }
    }

    fn fail_next(&self, endpoint: &'static str, fail: Fail) {
        self.script
            .lock()
            .unwrap()
            .failures
            .entry(endpoint)
            .or_default()
            .push_back(fail);
    }

    fn calls(&self) -> Vec<String> {
        self.script.lock().unwrap().calls.clone()
    }

    fn clear_calls(&self) {
        self.script.lock().unwrap().calls.clear();
    }

    fn record(&self, endpoint: &'static str, call: String) -> Result<(), ApiError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(call);
        match script.failures.get_mut(endpoint).and_then(|q| q.pop_front()) {
            Some(fail) => Err(fail.into_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    fn has_credentials(&self) -> bool {
        self.credentials
    }

    async fn load_stats(&self) -> Result<UserStats, ApiError> {
        self.record("stats", "GET /admin/stats".into())?;
        Ok(UserStats {
            total_users: self.users.len() as i64,
            admin_users: 1,
            ..UserStats::default()
        })
    }

    async fn load_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.record("users", "GET /admin/users".into())?;
        Ok(self.users.clone())
    }

    async fn set_admin_status(&self, user_id: i64, is_admin: bool) -> Result<Ack, ApiError> {
        self.record(
            "admin-status",
            format!("POST /admin/users/admin-status user_id={} is_admin={}", user_id, is_admin),
        )?;
        Ok(Ack::default())
    }

    async fn delete_user(&self, user_id: i64) -> Result<Ack, ApiError> {
        self.record("delete-user", format!("POST /admin/users/delete user_id={}", user_id))?;
        Ok(Ack::default())
    }

    async fn load_user_assets(&self, user_id: i64) -> Result<Vec<UserAsset>, ApiError> {
        self.record("assets", format!("GET /admin/users/assets user_id={}", user_id))?;
        Ok(self.assets.clone())
    }

    async fn delete_asset(&self, item_id: i64) -> Result<Ack, ApiError> {
        self.record("delete-asset", format!("POST /admin/users/assets/delete item_id={}", item_id))?;
        Ok(Ack::default())
    }
}

fn user(id: i64, name: &str, is_admin: bool) -> AdminUser {
    AdminUser {
        id,
        username: name.to_string(),
        is_admin,
        storage_used_mb: 1.0,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        last_login: None,
    }
}

fn console_with(api: FakeApi) -> AdminConsole<FakeApi> {
    AdminConsole::new(api, RedirectSettings::new("http://api.local"))
}

mod loading {
    use super::*;

    #[tokio::test]
    async fn test_initialize_loads_stats_then_users() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.initialize().await;

        assert_eq!(api.calls(), vec!["GET /admin/stats", "GET /admin/users"]);
        assert_eq!(console.users().len(), 3);
        assert_eq!(console.stats().map(|s| s.total_users), Some(3));
        assert!(console.pending_redirect().is_none());
    }

    #[tokio::test]
    async fn test_missing_session_redirects_to_login() {
        let mut api = FakeApi::new();
        api.credentials = false;
        let mut console = console_with(api.clone());
        console.initialize().await;

        assert!(api.calls().is_empty());
        let redirect = console.pending_redirect().unwrap();
        assert_eq!(redirect.location, "http://api.local/login?from=admin");
        assert_eq!(redirect.delay, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_forbidden_stats_redirects_once_and_goes_quiet() {
        let api = FakeApi::new();
        api.fail_next("stats", Fail::Forbidden);
        let mut console = console_with(api.clone());
        console.initialize().await;

        assert_eq!(api.calls(), vec!["GET /admin/stats"]);
        let redirect = console.pending_redirect().unwrap();
        assert_eq!(redirect.location, "http://api.local/dashboard");
        assert_eq!(redirect.delay, Duration::from_secs(2));

        // Nothing else reaches the API afterwards.
        console.refresh().await;
        console.view_user_assets(1, "alice").await;
        console.request_toggle_admin(2, true);
        assert!(console.confirm().await.is_none());
        assert_eq!(api.calls().len(), 1);

        let alerts = console.take_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Admin access required");
    }

    #[tokio::test]
    async fn test_unauthorized_redirects_to_login() {
        let api = FakeApi::new();
        api.fail_next("users", Fail::Unauthorized);
        let mut console = console_with(api.clone());
        console.load_users().await;

        let redirect = console.pending_redirect().unwrap();
        assert_eq!(redirect.location, "http://api.local/login?from=admin");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_users() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        assert!(console.load_users().await);

        api.fail_next("users", Fail::Rejected);
        assert!(!console.load_users().await);
        assert_eq!(console.users().len(), 3);

        let alerts = console.take_alerts();
        assert_eq!(alerts[0].kind, AlertKind::Error);
        assert_eq!(alerts[0].message, "Failed to load users");
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn test_search_filters_cached_users_without_requests() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.load_users().await;
        api.clear_calls();

        console.set_search("ALI");
        let names: Vec<&str> = console.visible_users().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "malice"]);

        console.set_search("");
        assert_eq!(console.visible_users().len(), 3);
        assert!(api.calls().is_empty());
    }
}

mod confirmations {
    use super::*;

    #[tokio::test]
    async fn test_toggle_admin_posts_once_then_refetches() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());

        console.request_toggle_admin(2, true);
        assert_eq!(
            console.dialog().message(),
            Some("Are you sure you want to grant admin privileges to this user?")
        );
        assert!(api.calls().is_empty());

        let result = console.confirm().await;
        assert!(matches!(result, Some(Ok(_))));
        assert_eq!(
            api.calls(),
            vec![
                "POST /admin/users/admin-status user_id=2 is_admin=true",
                "GET /admin/users",
                "GET /admin/stats",
            ]
        );
        assert!(!console.dialog().is_shown());

        let alerts = console.take_alerts();
        assert_eq!(alerts[0].message, "Admin status updated successfully");
        assert_eq!(alerts[0].kind, AlertKind::Success);
    }

    #[tokio::test]
    async fn test_delete_user_refetches_users_then_stats() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.request_delete_user(2, "Bob");
        assert_eq!(
            console.dialog().message(),
            Some("Are you sure you want to delete user \"Bob\"? This action cannot be undone and will delete all their data.")
        );

        assert!(matches!(console.confirm().await, Some(Ok(_))));
        assert_eq!(
            api.calls(),
            vec!["POST /admin/users/delete user_id=2", "GET /admin/users", "GET /admin/stats"]
        );
        let alerts = console.take_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "User deleted successfully");
    }

    #[tokio::test]
    async fn test_forbidden_mutation_schedules_dashboard_redirect() {
        let api = FakeApi::new();
        api.fail_next("admin-status", Fail::Forbidden);
        let mut console = console_with(api.clone());
        console.request_toggle_admin(2, true);

        assert!(matches!(console.confirm().await, Some(Err(ApiError::Forbidden))));
        assert_eq!(api.calls(), vec!["POST /admin/users/admin-status user_id=2 is_admin=true"]);
        let redirect = console.pending_redirect().unwrap();
        assert_eq!(redirect.location, "http://api.local/dashboard");
        assert_eq!(redirect.delay, Duration::from_secs(2));
        assert_eq!(console.take_alerts()[0].message, "Admin access required");
    }

    #[tokio::test]
    async fn test_cancel_sends_nothing() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.request_delete_user(2, "Bob");
        console.cancel();

        assert!(console.confirm().await.is_none());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_second_request_replaces_first() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.request_delete_user(2, "Bob");
        console.request_toggle_admin(3, false);

        assert_eq!(
            console.dialog().pending(),
            Some(&PendingAction::SetAdminStatus { user_id: 3, make_admin: false })
        );
        console.confirm().await;
        assert_eq!(api.calls()[0], "POST /admin/users/admin-status user_id=3 is_admin=false");
        assert!(!api.calls().iter().any(|c| c.contains("/admin/users/delete")));
    }

    #[tokio::test]
    async fn test_server_message_surfaces_on_failure() {
        let api = FakeApi::new();
        api.fail_next("delete-user", Fail::Status("Cannot delete your own account"));
        let mut console = console_with(api.clone());
        console.request_delete_user(1, "alice");

        assert!(matches!(console.confirm().await, Some(Err(_))));
        // No refetch after a failed mutation.
        assert_eq!(api.calls(), vec!["POST /admin/users/delete user_id=1"]);

        let alerts = console.take_alerts();
        assert_eq!(alerts[0].message, "Cannot delete your own account");
    }

    #[tokio::test]
    async fn test_rejected_without_message_uses_fallback() {
        let api = FakeApi::new();
        api.fail_next("admin-status", Fail::Rejected);
        let mut console = console_with(api.clone());
        console.request_toggle_admin(2, true);
        console.confirm().await;

        assert_eq!(console.take_alerts()[0].message, "Failed to update admin status");
    }
}

mod assets {
    use super::*;

    #[tokio::test]
    async fn test_view_assets_fills_modal() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.view_user_assets(2, "Bob").await;

        let modal = console.assets_modal().unwrap();
        assert_eq!(modal.user_id, 2);
        assert_eq!(modal.username, "Bob");
        assert!(matches!(&modal.state, AssetsState::Loaded(a) if a.len() == 1));

        console.close_assets();
        assert!(console.assets_modal().is_none());
    }

    #[tokio::test]
    async fn test_asset_load_failure_shows_in_modal() {
        let api = FakeApi::new();
        api.fail_next("assets", Fail::Rejected);
        let mut console = console_with(api.clone());
        console.view_user_assets(2, "Bob").await;

        let modal = console.assets_modal().unwrap();
        assert_eq!(modal.state, AssetsState::Failed("Failed to load assets".into()));
    }

    #[tokio::test]
    async fn test_asset_decode_failure_is_error_loading() {
        let api = FakeApi::new();
        api.fail_next("assets", Fail::Decode);
        let mut console = console_with(api.clone());
        console.view_user_assets(2, "Bob").await;

        let modal = console.assets_modal().unwrap();
        assert_eq!(modal.state, AssetsState::Failed("Error loading assets".into()));
        assert!(console.pending_redirect().is_none());
    }

    #[tokio::test]
    async fn test_forbidden_assets_fetch_schedules_redirect() {
        let api = FakeApi::new();
        api.fail_next("assets", Fail::Forbidden);
        let mut console = console_with(api.clone());
        console.view_user_assets(2, "Bob").await;

        assert_eq!(
            console.pending_redirect().map(|r| r.location.as_str()),
            Some("http://api.local/dashboard")
        );
        assert!(matches!(
            console.assets_modal().map(|m| &m.state),
            Some(AssetsState::Failed(_))
        ));
    }

    #[tokio::test]
    async fn test_asset_delete_without_modal_refreshes_stats_only() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.request_delete_asset(11, "Sword");
        console.confirm().await;

        assert_eq!(
            api.calls(),
            vec!["POST /admin/users/assets/delete item_id=11", "GET /admin/stats"]
        );
        assert!(console.assets_modal().is_none());
    }

    #[tokio::test]
    async fn test_asset_delete_refreshes_open_modal_and_stats() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.view_user_assets(2, "Bob").await;
        api.clear_calls();

        console.request_delete_asset(11, "Sword");
        assert_eq!(
            console.dialog().message(),
            Some("Are you sure you want to delete asset \"Sword\"?")
        );
        console.confirm().await;

        assert_eq!(
            api.calls(),
            vec![
                "POST /admin/users/assets/delete item_id=11",
                "GET /admin/users/assets user_id=2",
                "GET /admin/stats",
            ]
        );
        assert_eq!(console.take_alerts()[0].message, "Asset deleted successfully");
    }
}

mod page_sessions {
    use super::*;
    use admin_console::models::Section;

    #[tokio::test]
    async fn test_reset_after_forbidden_lets_next_load_talk_to_api() {
        let api = FakeApi::new();
        api.fail_next("stats", Fail::Forbidden);
        let mut console = console_with(api.clone());
        console.initialize().await;
        assert!(console.pending_redirect().is_some());

        console.reset_session();
        assert!(console.pending_redirect().is_none());

        console.initialize().await;
        assert_eq!(
            api.calls(),
            vec!["GET /admin/stats", "GET /admin/stats", "GET /admin/users"]
        );
        assert_eq!(console.users().len(), 3);
        assert!(console.pending_redirect().is_none());
    }

    #[tokio::test]
    async fn test_initialize_refetches_on_every_call() {
        let api = FakeApi::new();
        api.fail_next("users", Fail::Status("boom"));
        let mut console = console_with(api.clone());
        console.initialize().await;
        assert!(console.users().is_empty());

        console.initialize().await;
        assert_eq!(console.users().len(), 3);
    }

    #[tokio::test]
    async fn test_reset_clears_view_state() {
        let api = FakeApi::new();
        let mut console = console_with(api.clone());
        console.initialize().await;
        console.set_search("ali");
        console.set_section(Section::Storage);
        console.view_user_assets(2, "Bob").await;
        console.request_delete_user(2, "Bob");

        console.reset_session();
        assert!(console.users().is_empty());
        assert!(console.stats().is_none());
        assert_eq!(console.search_term(), "");
        assert_eq!(console.section(), Section::Overview);
        assert!(console.assets_modal().is_none());
        assert!(!console.dialog().is_shown());
        assert!(console.take_alerts().is_empty());
    }
}
