//! Admin console for a file-hosting service.
//!
//! Talks to the service's `/admin/*` HTTP API, renders users, assets and
//! storage statistics as HTML fragments, and coordinates confirm-before-act
//! workflows for every mutating action.

pub mod api;
pub mod config;
pub mod console;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod templates;
pub mod theme;
pub mod utils;

pub use api::{AdminApi, ApiClient, ApiError};
pub use console::AdminConsole;
pub use routes::build_router;
