use reqwest::header::COOKIE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::AUTH_COOKIE_NAME;
use super::envelope::{decode_envelope, Envelope};
use super::error::ApiError;

/// HTTP client for the remote admin API.
///
/// Authorization is entirely the server's job: the client forwards the
/// operator's session cookie and reports 401/403 back to the caller.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    api_base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(api_base_url: &str, auth_token: Option<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("admin-console/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_base_url: crate::config::sanitize_base_url(api_base_url),
            auth_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn has_credentials(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Core request: builds the call, sends it and classifies the response.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Envelope<T>, ApiError> {
        let url = format!("{}{}", self.api_base_url, endpoint);
        let mut req = self.client.request(method.clone(), &url);

        if let Some(token) = &self.auth_token {
            let cookie = cookie::Cookie::new(AUTH_COOKIE_NAME, token.as_str());
            req = req.header(COOKIE, cookie.to_string());
        }
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(b) = body {
            req = req.json(&b);
        }

        let resp = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%e, %method, endpoint, "Admin API request failed");
                return Err(ApiError::Request(e));
            }
        };
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        tracing::debug!(%method, endpoint, status, "Admin API response");

        let decoded = decode_envelope(status, &text);
        if let Err(e) = &decoded {
            tracing::warn!(%e, %method, endpoint, status, "Admin API call unsuccessful");
        }
        decoded
    }
}
