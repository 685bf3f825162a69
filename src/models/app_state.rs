use std::sync::{Arc, Mutex};

use crate::api::ApiClient;
use crate::console::AdminConsole;
use crate::theme::ThemeManager;

#[derive(Clone)]
pub struct AppState {
    /// One console per process; handlers hold the lock across the awaited API calls.
    pub console: Arc<tokio::sync::Mutex<AdminConsole<ApiClient>>>,
    pub theme: Arc<Mutex<ThemeManager>>,
    pub api_base_url: String,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(console: AdminConsole<ApiClient>, theme: ThemeManager, api_base_url: String) -> Self {
        Self {
            console: Arc::new(tokio::sync::Mutex::new(console)),
            theme: Arc::new(Mutex::new(theme)),
            api_base_url,
            custom_css: None,
        }
    }
}
