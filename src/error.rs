use thiserror::Error;

/// Errors raised by the engine's mutating operations. All are synchronous and
/// non-retryable; the calling layer decides whether to retry the user action.
/// No operation leaves partial state behind when it fails.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Operation attempted in the wrong lifecycle state, e.g. starting a trip
    /// while one is already active.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A referenced vehicle, driver, trip or zone id does not resolve.
    #[error("not found: {0}")]
    NotFound(String),
}
