/// Reasons the device location could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location services are not supported")]
    Unsupported,
}

/// Everything that can end a lookup attempt.
///
/// None of these are fatal: the controller stores them in its state and the
/// user can simply submit again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid city name: {0:?}")]
    InvalidCity(String),
    #[error("City not found")]
    NotFound,
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Transport(format!("malformed response: {err}"))
    }
}
