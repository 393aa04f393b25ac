// Error types for the transfer client
use std::fmt;

/// Failure of a transfer client operation.
///
/// Display collapses to the stable per-operation message the callers match
/// on; the underlying cause (HTTP status, detail text) stays on the value
/// for logging and inspection.
#[derive(Debug, Clone)]
pub enum TransferClientError {
    /// Listing failed: network error, non-2xx status or decode failure.
    Fetch {
        status: Option<u16>,
        detail: String,
    },

    /// Creation failed. `message` is the server's error body `message`
    /// field when one was present.
    Create {
        message: Option<String>,
        status: Option<u16>,
        detail: String,
    },
}

impl TransferClientError {
    /// HTTP status of the failed response, if one was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            Self::Create { status, .. } => *status,
        }
    }

    /// Underlying cause text (transport error or raw response body).
    pub fn detail(&self) -> &str {
        match self {
            Self::Fetch { detail, .. } => detail,
            Self::Create { detail, .. } => detail,
        }
    }
}

impl fmt::Display for TransferClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch { .. } => write!(f, "Error fetching transfers"),
            Self::Create { message, .. } => match message {
                Some(msg) => write!(f, "{}", msg),
                None => write!(f, "Failed to create transfer"),
            },
        }
    }
}

impl std::error::Error for TransferClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_display_is_fixed() {
        let err = TransferClientError::Fetch {
            status: Some(500),
            detail: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Error fetching transfers");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.detail(), "Internal Server Error");
    }

    #[test]
    fn test_create_display_prefers_server_message() {
        let err = TransferClientError::Create {
            message: Some("duplicate account".to_string()),
            status: Some(400),
            detail: "{\"message\":\"duplicate account\"}".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate account");
    }

    #[test]
    fn test_create_display_fallback() {
        let err = TransferClientError::Create {
            message: None,
            status: None,
            detail: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to create transfer");
    }
}
