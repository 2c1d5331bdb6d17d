use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tracing::{error, warn};

/// Failure of a call to the remote blog API.
///
/// The controller treats every variant the same way (log and carry on); the
/// split only makes the log line say where things went wrong.
#[derive(Debug)]
pub enum ClientError {
    /// The base URL plus path did not form a valid URL.
    InvalidUrl(String),
    /// Connect, DNS or protocol failure before a response arrived.
    Transport(reqwest::Error),
    /// The server answered with a non-2xx status.
    Status(reqwest::StatusCode),
    /// The body was not the JSON we expected.
    Decode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidUrl(msg) => write!(f, "invalid url: {}", msg),
            ClientError::Transport(e) => write!(f, "request failed: {}", e),
            ClientError::Status(status) => write!(f, "server answered {}", status),
            ClientError::Decode(e) => write!(f, "malformed response body: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(e) => Some(e),
            ClientError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e)
    }
}

/// Failure to read or write the persisted base URL.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "config store io error: {}", e),
            StoreError::Format(e) => write!(f, "config store is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Format(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Format(e)
    }
}

/// Errors a page handler can return to the browser.
#[derive(Debug)]
pub enum WebError {
    NotFound,
    BadRequest(String),
    Render(askama::Error),
}

impl From<askama::Error> for WebError {
    fn from(e: askama::Error) -> Self {
        WebError::Render(e)
    }
}

/// Convert handler errors to HTTP responses
///
/// Remote API failures never get here: the controller swallows them. This
/// only covers requests the page cannot act on, and a page that fails to render.
impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            WebError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            WebError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                      "error": msg
                    })),
                )
                    .into_response();
            }
            WebError::Render(e) => {
                error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
