use askama::Template;
use crate::models::Alert;
use super::filters;

#[derive(Template)]
#[template(path = "alerts.html", escape = "none")]
pub struct AlertsTemplate<'a> {
    pub alerts: &'a [Alert],
    pub dismiss_after_ms: i64,
}
