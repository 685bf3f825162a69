// HTML and display helpers
pub mod escape;
pub mod format;

// URL handling utilities
pub mod url_parser;
pub mod url_builder;
pub mod query_string;

// Parsing utilities
pub mod parse_flag;

// Re-export all utilities for convenient access
pub use escape::escape_html;
pub use format::{format_date, format_last_login, format_storage_mb, mb_to_gb};
pub use url_parser::hostname_from_url;
pub use url_builder::absolute_url;
pub use query_string::build_query_string;
pub use parse_flag::parse_flag;
