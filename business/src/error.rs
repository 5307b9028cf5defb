use thiserror::Error;

/// Why a watchstamps request failed.
///
/// The dashboard coalesces all of these into one banner message; the enum
/// exists so commands build those messages consistently.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API returned status: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// HTTP 2xx but `isSuccess: false` in the body.
    #[error("API reported failure")]
    Unsuccessful,
}
