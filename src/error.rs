use thiserror::Error;

pub const VALIDATION_EMPTY_LIST: &str = "Add at least one competitor URL before starting the analysis";

/// Why an analysis attempt ended without a report.
///
/// `Display` yields only the message so it can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Network(String),

    /// The session store went away before the attempt could be recorded.
    #[error("Analysis session is no longer available")]
    SessionClosed,
}

impl AnalysisError {
    pub fn empty_list() -> Self {
        AnalysisError::Validation(VALIDATION_EMPTY_LIST.to_string())
    }

    /// Generic message for a non-2xx response without a usable `detail`.
    pub fn http_fallback(status: u16) -> Self {
        AnalysisError::Http {
            status,
            message: format!("Analysis request failed (HTTP {})", status),
        }
    }

    /// Network failure; blank messages are replaced with a generic one.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AnalysisError::Network("Could not reach the analysis service".to_string())
        } else {
            AnalysisError::Network(message)
        }
    }
}

impl From<AnalysisError> for String {
    fn from(err: AnalysisError) -> Self {
        err.to_string()
    }
}
