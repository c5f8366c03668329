//! chauffeur: a convenience layer over a Selenium WebDriver client.
//!
//! The crate wraps an existing WebDriver client — anything implementing
//! [`WebDriverClient`] — behind a [`Session`] facade of find / interact /
//! check / wait operations parameterized by an explicit locator strategy
//! ([`By`]), plus a generic condition poller ([`wait_until`]). There is no
//! protocol implementation here: session lifecycle, locator translation, and
//! wire encoding stay with the client.
//!
//! # Examples
//!
//! ## Finding and interacting
//!
//! ```ignore
//! use std::sync::Arc;
//! use chauffeur::{By, Session, SessionOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client: Arc<dyn chauffeur::WebDriverClient> = connect_client().await?;
//!     let session = Session::new(client, SessionOptions::new("target/screenshots"));
//!
//!     session.load_page("https://example.com/login").await?;
//!     session.clear_and_type(&By::id("user"), "alice").await?;
//!     session.clear_and_type(&By::id("password"), "hunter2").await?;
//!     session.click(&By::css("button[type=submit]")).await?;
//!
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Waiting on conditions
//!
//! ```ignore
//! use std::time::Duration;
//! use chauffeur::{By, UrlPattern, WaitOptions, wait_until};
//! use regex::Regex;
//!
//! // Built-in waits
//! session.wait_for_displayed(&By::id("results")).await?;
//! let url = session
//!     .wait_for_url_change(&UrlPattern::Matches(Regex::new(r"/dashboard")?), true)
//!     .await?;
//!
//! // Or any condition at all
//! let options = WaitOptions::new("cart never emptied")
//!     .timeout(Duration::from_secs(8))
//!     .interval(Duration::from_millis(250));
//! wait_until(&options, || async {
//!     Ok(session.count(".cart-row").await? == 0)
//! })
//! .await?;
//! ```
//!
//! ## Screenshots
//!
//! ```ignore
//! let path = session.take_screenshot("checkout", "before-submit").await?;
//! println!("saved {}", path.display());
//! ```

pub mod client;
pub mod wait;

mod by;
mod element;
mod error;
mod keys;
mod logging;
mod screenshot;
mod session;

// Re-export error types
pub use error::{Error, Result};

// Re-export the locator strategy and special keys
pub use by::By;
pub use keys::Key;

// Re-export the client capability and its data types
pub use client::{ElementId, MouseButton, Point, Size, WebDriverClient};

// Re-export the session facade
pub use element::Element;
pub use session::{Session, SessionOptions, UrlPattern};

// Re-export the condition poller
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, WaitOptions, wait_until};

// Re-export logging and screenshot persistence
pub use logging::{DriverLog, TracingLog};
pub use screenshot::ScreenshotStore;
