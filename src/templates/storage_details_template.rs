use askama::Template;

#[derive(Template)]
#[template(path = "storage_details.html", escape = "none")]
pub struct StorageDetailsTemplate {
    pub storage_gb: String,
    pub total_users: i64,
    pub admin_users: i64,
}
