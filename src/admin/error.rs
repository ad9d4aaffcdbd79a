// admin/error.rs - Error taxonomy for the product management dashboard
//
// Errors are Clone + PartialEq so they can live inside reactive signals and
// be compared directly in tests.

use thiserror::Error;

/// Message shown when a new product is submitted without its images.
pub const MISSING_ATTACHMENTS_MSG: &str = "Images and thumbnail are required";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// Create mode requires both a thumbnail and at least one gallery image.
    #[error("Images and thumbnail are required")]
    MissingAttachments,

    /// A create/update/delete request is still waiting for the server.
    #[error("Another request is already in progress")]
    Busy,

    /// A response arrived for a request that is no longer the current one.
    #[error("Response belongs to a request that is no longer in flight")]
    StaleRequest,

    #[error("Unknown product field: {0}")]
    UnknownField(String),

    /// Non-2xx response. `message` is the body's `message` field when present.
    #[error("Server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Could not read attachment: {0}")]
    Attachment(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    /// Display text, or the server's own message when it sent one.
    ///
    /// Used for errors raised before any request goes out, such as missing
    /// attachments or an unreadable file.
    pub fn banner_message(&self) -> String {
        match self {
            AdminError::Server { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// The `message` field of a server error body, if the server sent one.
    ///
    /// This is what a failed create/update/delete puts in the error banner;
    /// any other failure leaves the banner empty.
    pub fn server_message(&self) -> Option<String> {
        match self {
            AdminError::Server { message, .. } => message.clone(),
            _ => None,
        }
    }

    /// True for errors raised locally, before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AdminError::MissingAttachments
                | AdminError::Busy
                | AdminError::StaleRequest
                | AdminError::UnknownField(_)
                | AdminError::Attachment(_)
        )
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AdminError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AdminError::Server { status: status.as_u16(), message: None }
        } else {
            AdminError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attachments_message() {
        assert_eq!(AdminError::MissingAttachments.to_string(), MISSING_ATTACHMENTS_MSG);
        assert_eq!(AdminError::MissingAttachments.banner_message(), MISSING_ATTACHMENTS_MSG);
    }

    #[test]
    fn test_banner_prefers_server_message() {
        let err = AdminError::Server { status: 400, message: Some("Title is required".to_string()) };
        assert_eq!(err.banner_message(), "Title is required");

        let err = AdminError::Server { status: 500, message: None };
        assert_eq!(err.banner_message(), "Server returned 500: no message");
    }

    #[test]
    fn test_server_message_only_from_body() {
        let err = AdminError::Server { status: 400, message: Some("Title is required".to_string()) };
        assert_eq!(err.server_message().as_deref(), Some("Title is required"));
        assert_eq!(AdminError::Server { status: 500, message: None }.server_message(), None);
        assert_eq!(AdminError::Transport("refused".to_string()).server_message(), None);
        assert_eq!(AdminError::MissingAttachments.server_message(), None);
    }

    #[test]
    fn test_local_errors() {
        assert!(AdminError::MissingAttachments.is_local());
        assert!(AdminError::Busy.is_local());
        assert!(!AdminError::Transport("refused".to_string()).is_local());
        assert!(!AdminError::Server { status: 404, message: None }.is_local());
    }
}
