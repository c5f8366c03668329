// Condition polling
//
// The one self-contained primitive in this crate: evaluate an async predicate
// until it holds, its deadline passes, or the check itself fails.

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant};

use crate::error::{Error, Result};

/// Default timeout for waits (5 seconds)
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for waits (300ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(300);

/// Configuration for one wait call. Immutable once the wait starts.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use chauffeur::{wait_until, WaitOptions};
///
/// let options = WaitOptions::new("spinner never went away")
///     .timeout(Duration::from_secs(10))
///     .interval(Duration::from_millis(250));
/// wait_until(&options, || async { session.is_displayed(&By::id("content")).await }).await?;
/// ```
#[derive(Debug, Clone)]
pub struct WaitOptions {
    timeout: Duration,
    interval: Duration,
    message: String,
}

impl WaitOptions {
    /// Creates options with the default timeout and interval. `message` is
    /// what the timeout error will carry.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            interval: DEFAULT_POLL_INTERVAL,
            message: message.into(),
        }
    }

    /// Sets a custom timeout for this wait.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this wait.
    ///
    /// Must be positive; [`wait_until`] rejects a zero interval.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Polls `predicate` until it returns `Ok(true)`, fails, or the timeout in
/// `options` elapses.
///
/// The predicate reports `Ok(true)` (condition met), `Ok(false)` (not yet), or
/// `Err` (the check itself failed, e.g. the session died). A predicate error
/// ends the wait immediately with that error: infrastructure failure is not
/// the same outcome as the condition not holding yet, and is never retried.
/// On expiry the returned [`Error::Timeout`] carries the configured message.
///
/// Attempts are strictly sequential: the next one is issued `interval` after
/// the previous one resolved false. With a zero timeout the predicate is
/// evaluated exactly once. Completion is one of success, timeout, or
/// predicate error; there is no cancellation.
pub async fn wait_until<F, Fut>(options: &WaitOptions, mut predicate: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    if options.interval.is_zero() {
        return Err(Error::InvalidArgument(
            "wait interval must be positive".into(),
        ));
    }

    let deadline = Instant::now() + options.timeout;
    loop {
        if predicate().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(Error::Timeout(options.message.clone()));
        }
        time::sleep(options.interval).await;
    }
}
