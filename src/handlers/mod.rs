pub mod helpers;
pub mod dashboard;
pub mod users;
pub mod assets;
pub mod confirm;
pub mod theme;
