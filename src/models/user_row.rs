use serde::Serialize;

/// Display-ready projection of an `AdminUser`; text fields are still raw and get
/// escaped by the template.
#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
    pub target_admin: bool,
    pub toggle_label: &'static str,
    pub toggle_class: &'static str,
    pub storage_display: String,
    pub created_display: String,
    pub last_login_display: String,
}
