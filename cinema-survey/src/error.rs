use std::path::PathBuf;

/// Error type for record store operations.
///
/// Any failure of a create or fetch call. Callers treat every variant the
/// same way; the variant only records the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status (auth, validation, server error).
    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The store is not reachable (used by in-process stores).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The save task ended without reporting a result.
    #[error("Save interrupted before completion")]
    Interrupted,
}

impl PersistenceError {
    /// Create a rejection error.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status, if the store answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the store answered with a non-success status.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Error type for loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_carries_status() {
        let err = PersistenceError::rejected(400, "Failed to create record.");
        assert!(err.is_rejected());
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.to_string(),
            "Request rejected with status 400: Failed to create record."
        );
    }

    #[test]
    fn unavailable_has_no_status() {
        let err = PersistenceError::Unavailable("offline".to_string());
        assert!(!err.is_rejected());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Store unavailable: offline");
    }
}
