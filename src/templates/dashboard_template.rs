use askama::Template;
use super::filters;

/// One tab link in the page header.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Full admin page. Every `*_html` field is a fragment that was already
/// rendered (and escaped) by its own template.
#[derive(Template)]
#[template(path = "dashboard.html", escape = "none")]
pub struct DashboardTemplate<'a> {
    pub theme: &'a str,
    pub theme_icon_class: &'a str,
    pub theme_toggle_title: &'a str,
    pub api_hostname: &'a str,
    pub search: &'a str,
    pub section: &'a str,
    pub nav: &'a [NavLink],
    pub alerts_html: &'a str,
    pub stats_html: &'a str,
    pub users_html: &'a str,
    pub storage_html: &'a str,
    pub assets_html: &'a str,
    pub confirm_html: &'a str,
    pub has_redirect: bool,
    pub redirect_secs: u64,
    pub redirect_location: &'a str,
}
