//! Error types for the admin API client
use thiserror::Error;

/// Errors surfaced by admin API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 403: the session is valid but lacks admin privileges
    #[error("Admin access required")]
    Forbidden,

    /// HTTP 401: no session or an expired one
    #[error("Authentication required")]
    Unauthorized,

    /// Any other non-2xx status; `message` is the plain-text body the server wrote
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// 2xx response that is not a well-formed envelope
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Envelope with `success: false`
    #[error("Request rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Text for the operator-facing alert. Server-supplied messages win over `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Forbidden => "Admin access required".to_string(),
            ApiError::Rejected(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let rejected = ApiError::Rejected(Some("User not found".into()));
        assert_eq!(rejected.user_message("Failed to delete user"), "User not found");

        let status = ApiError::Status { status: 400, message: "Cannot delete your own account".into() };
        assert_eq!(status.user_message("Failed to delete user"), "Cannot delete your own account");
    }

    #[test]
    fn user_message_falls_back() {
        assert_eq!(ApiError::Rejected(None).user_message("Failed"), "Failed");
        assert_eq!(ApiError::Rejected(Some("  ".into())).user_message("Failed"), "Failed");
        assert_eq!(ApiError::Decode("eof".into()).user_message("Failed"), "Failed");
        assert_eq!(
            ApiError::Status { status: 500, message: String::new() }.user_message("Failed"),
            "Failed"
        );
        assert_eq!(ApiError::Forbidden.user_message("Failed"), "Admin access required");
    }
}
