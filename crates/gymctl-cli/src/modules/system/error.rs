use thiserror::Error;

/// Terminal outcomes of a dispatched API call. Actions propagate these
/// through `anyhow`; tests and callers that care about the kind downcast.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// Any non-2xx response the dispatcher will not recover from. Never
    /// retried automatically.
    #[error("request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    /// The refresh flow is exhausted and the local session has been cleared.
    #[error("session expired; please sign in again")]
    SessionExpired,

    /// Transport-level failure, no response at all. The user retries by
    /// re-running the command.
    #[error("server unreachable: {0}")]
    NetworkUnavailable(String),

    /// Rejected client-side before any request was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A 2xx response whose body does not match the declared shape.
    #[error("malformed response body: {0}")]
    Decode(String),
}
