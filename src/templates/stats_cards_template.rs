use askama::Template;

#[derive(Template)]
#[template(path = "stats_cards.html", escape = "none")]
pub struct StatsCardsTemplate {
    pub total_users: i64,
    pub admin_users: i64,
    pub active_users: i64,
    pub currently_logged_in_users: i64,
    pub storage_gb: String,
}
