pub mod admin_user;
pub mod alert;
pub mod app_state;
pub mod redirect;
pub mod section;
pub mod user_asset;
pub mod user_row;
pub mod user_stats;

pub use admin_user::AdminUser;
pub use alert::{Alert, AlertKind};
pub use app_state::AppState;
pub use redirect::PendingRedirect;
pub use section::Section;
pub use user_asset::UserAsset;
pub use user_row::UserRow;
pub use user_stats::UserStats;
