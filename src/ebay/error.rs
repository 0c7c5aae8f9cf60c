use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Trading API.
///
/// The API answers almost everything with HTTP 200 and reports call-level
/// problems through `Ack`; non-2xx statuses only come from the gateway.
#[derive(Error, Debug)]
pub enum EbayError {
    #[error("eBay API error: {0}")]
    ApiError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("eBay unavailable (HTTP {status}): {body}")]
    Unavailable { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("XML write error: {0}")]
    XmlWriteError(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl EbayError {
    /// Classify a non-2xx gateway reply.
    pub fn from_http_status(status: StatusCode, body: String) -> Self {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            EbayError::AuthenticationError(body)
        } else if status.is_server_error() {
            EbayError::Unavailable {
                status: status.as_u16(),
                body,
            }
        } else {
            // a 404 here almost always means EBAY_API_URL is wrong
            EbayError::UnexpectedResponse(format!("HTTP {}: {}", status.as_u16(), body))
        }
    }
}
