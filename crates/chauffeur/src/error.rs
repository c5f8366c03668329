// Error types for chauffeur

use thiserror::Error;

/// Result type alias for chauffeur operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving a browser through the wrapper
#[derive(Debug, Error)]
pub enum Error {
    /// Element lookup found nothing for the given locator
    ///
    /// This is the "no such element" class of driver response. Existence-style
    /// checks soften it to `false`; everything else surfaces it.
    #[error("No such element: {0}")]
    NoSuchElement(String),

    /// The element reference is no longer attached to the DOM
    ///
    /// Reads that race a page update land here. `Session::text` retries this
    /// class once; `Session::texts_of_list` degrades the affected entry to an
    /// empty string.
    #[error("Stale element reference: {0}")]
    StaleElement(String),

    /// A wait expired before its condition became true
    ///
    /// Carries the message configured on the wait.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid argument provided to a method
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other failure reported by the WebDriver client, forwarded unchanged
    #[error("WebDriver error (status {status}): {message}")]
    WebDriver { status: u16, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Screenshot payload was not valid base64
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// True for the "no such element" class, looking through context wrappers.
    pub fn is_no_such_element(&self) -> bool {
        match self {
            Error::NoSuchElement(_) => true,
            Error::Context(_, source) => source.is_no_such_element(),
            _ => false,
        }
    }

    /// True for the "stale element reference" class, looking through context wrappers.
    pub fn is_stale_element(&self) -> bool {
        match self {
            Error::StaleElement(_) => true,
            Error::Context(_, source) => source.is_stale_element(),
            _ => false,
        }
    }
}
