use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;

/// `{success, data, message}` wrapper used by every admin endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Server confirmation for a mutating call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Payload that must be present (stats).
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Decode("envelope has no data".to_string()))
    }

    pub fn into_ack(self) -> Ack {
        Ack { message: self.message }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Collections encode "no rows" as `null`; treat that as empty.
    pub fn into_list(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Classify a raw response. Status checks come before the body is looked at.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    match status {
        403 => return Err(ApiError::Forbidden),
        401 => return Err(ApiError::Unauthorized),
        200..=299 => {}
        _ => {
            return Err(ApiError::Status {
                status,
                message: body.trim().to_string(),
            })
        }
    }
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected(envelope.message));
    }
    Ok(envelope)
}
