//! Error type shared by every client operation.

use thiserror::Error;

/// Errors returned by [`CookMasterClient`](crate::client::CookMasterClient).
///
/// Local validation problems are reported as [`CookMasterError::InvalidArgument`]
/// and never touch the network. Everything the server (or the network) reports
/// comes back as [`CookMasterError::Api`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookMasterError {
    /// Caller input rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server answered with a status >= 400, or every attempt failed at the
    /// transport level (in which case `status` is `None`).
    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
    },
}

impl CookMasterError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn api(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Api {
            message: message.into(),
            status,
        }
    }

    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            Self::InvalidArgument(_) => None,
        }
    }

    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. } => message,
            Self::InvalidArgument(message) => message,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, CookMasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_accessors() {
        let err = CookMasterError::api("not found", Some(404));
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "not found");
        assert_eq!(err.to_string(), "not found");
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_has_no_status() {
        let err = CookMasterError::invalid("id must be a positive integer");
        assert_eq!(err.status(), None);
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("id must be a positive integer"));
    }
}
