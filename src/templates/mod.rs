// Escaping filter shared by every template
pub mod filters;

// Fragment templates
pub mod users_table_template;
pub mod stats_cards_template;
pub mod storage_details_template;
pub mod user_assets_template;
pub mod confirm_dialog_template;
pub mod alerts_template;

// Full page
pub mod dashboard_template;

// Re-export all templates
pub use users_table_template::UsersTableTemplate;
pub use stats_cards_template::StatsCardsTemplate;
pub use storage_details_template::StorageDetailsTemplate;
pub use user_assets_template::{AssetsModalTemplate, UserAssetsTemplate};
pub use confirm_dialog_template::ConfirmDialogTemplate;
pub use alerts_template::AlertsTemplate;
pub use dashboard_template::{DashboardTemplate, NavLink};
