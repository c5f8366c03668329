// WebDriver client capability
//
// The seam between this crate and the pre-existing WebDriver client it wraps.
// The client owns session lifecycle, locator-strategy translation, and
// wire-protocol encoding; the wrapper only composes these operations.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::by::By;
use crate::error::Result;

/// Opaque element reference issued by the WebDriver client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Element position in CSS pixels, relative to the document origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Rendered element size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Mouse button for raw mouse commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// The wire code for this button.
    pub const fn code(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

/// Async operations the wrapper consumes from an external WebDriver client.
///
/// Implementations are expected to map the "no such element" and "stale
/// element reference" response classes to [`Error::NoSuchElement`] and
/// [`Error::StaleElement`] so the wrapper's softening and retry behavior can
/// recognize them; every other failure goes through [`Error::WebDriver`]
/// unchanged.
///
/// [`Error::NoSuchElement`]: crate::Error::NoSuchElement
/// [`Error::StaleElement`]: crate::Error::StaleElement
/// [`Error::WebDriver`]: crate::Error::WebDriver
#[async_trait]
pub trait WebDriverClient: Send + Sync {
    // Element lookup
    async fn find_element(&self, by: &By) -> Result<ElementId>;
    async fn find_elements(&self, by: &By) -> Result<Vec<ElementId>>;
    async fn active_element(&self) -> Result<ElementId>;

    // Element interaction
    async fn click_element(&self, element: &ElementId) -> Result<()>;
    async fn submit_element(&self, element: &ElementId) -> Result<()>;
    async fn clear_element(&self, element: &ElementId) -> Result<()>;
    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()>;

    // Element state
    async fn is_displayed(&self, element: &ElementId) -> Result<bool>;
    async fn is_selected(&self, element: &ElementId) -> Result<bool>;
    async fn is_enabled(&self, element: &ElementId) -> Result<bool>;

    // Element data
    async fn element_text(&self, element: &ElementId) -> Result<String>;
    async fn element_attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>>;
    async fn element_css_value(&self, element: &ElementId, property: &str) -> Result<String>;
    async fn element_tag_name(&self, element: &ElementId) -> Result<String>;
    async fn element_size(&self, element: &ElementId) -> Result<Size>;
    async fn element_location(&self, element: &ElementId) -> Result<Point>;
    async fn elements_equal(&self, a: &ElementId, b: &ElementId) -> Result<bool>;

    // Navigation
    async fn goto(&self, url: &str) -> Result<()>;
    async fn current_url(&self) -> Result<String>;
    async fn title(&self) -> Result<String>;
    async fn page_source(&self) -> Result<String>;

    // Script execution in the browser context
    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value>;
    async fn execute_async_script(&self, script: &str, args: Vec<Value>) -> Result<Value>;

    // Windows
    async fn window_handles(&self) -> Result<Vec<String>>;
    async fn window_handle(&self) -> Result<String>;
    async fn switch_to_window(&self, handle: &str) -> Result<()>;

    // Alerts
    async fn accept_alert(&self) -> Result<()>;
    async fn dismiss_alert(&self) -> Result<()>;
    async fn alert_text(&self) -> Result<String>;

    // Raw input
    /// Sends keystrokes to the element that currently has focus.
    async fn send_keys_to_active(&self, keys: &str) -> Result<()>;
    /// Moves the pointer to `element` (its center), then by `offset` if given;
    /// with no element, moves relative to the current pointer position.
    async fn move_to(&self, element: Option<&ElementId>, offset: Option<(i64, i64)>) -> Result<()>;
    async fn button_down(&self, button: MouseButton) -> Result<()>;
    async fn button_up(&self, button: MouseButton) -> Result<()>;
    /// Double-clicks at the current pointer position.
    async fn double_click(&self) -> Result<()>;

    // Session
    /// Captures a screenshot of the current page, base64-encoded as it
    /// arrives on the wire.
    async fn take_screenshot(&self) -> Result<String>;
    async fn quit(&self) -> Result<()>;
}
