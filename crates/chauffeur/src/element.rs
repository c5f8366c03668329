// Element handle
//
// A found element: the client capability plus the reference the client issued
// for it. Every operation delegates to the client; the handle holds no other
// state.

use std::fmt;
use std::sync::Arc;

use crate::client::{ElementId, Point, Size, WebDriverClient};
use crate::error::Result;

/// A handle to an element previously located in the page.
///
/// Handles stay valid as long as the element remains attached to the DOM;
/// operations on a detached element surface the client's stale-element error.
#[derive(Clone)]
pub struct Element {
    client: Arc<dyn WebDriverClient>,
    id: ElementId,
}

impl Element {
    pub(crate) fn new(client: Arc<dyn WebDriverClient>, id: ElementId) -> Self {
        Self { client, id }
    }

    /// The client-issued reference for this element.
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub async fn click(&self) -> Result<()> {
        self.client.click_element(&self.id).await
    }

    /// Submits the form this element belongs to.
    pub async fn submit(&self) -> Result<()> {
        self.client.submit_element(&self.id).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.client.clear_element(&self.id).await
    }

    pub async fn send_keys(&self, text: &str) -> Result<()> {
        self.client.send_keys(&self.id, text).await
    }

    pub async fn text(&self) -> Result<String> {
        self.client.element_text(&self.id).await
    }

    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.client.element_attribute(&self.id, name).await
    }

    /// The computed value of a CSS property.
    pub async fn css_value(&self, property: &str) -> Result<String> {
        self.client.element_css_value(&self.id, property).await
    }

    pub async fn tag_name(&self) -> Result<String> {
        self.client.element_tag_name(&self.id).await
    }

    pub async fn size(&self) -> Result<Size> {
        self.client.element_size(&self.id).await
    }

    pub async fn location(&self) -> Result<Point> {
        self.client.element_location(&self.id).await
    }

    pub async fn is_displayed(&self) -> Result<bool> {
        self.client.is_displayed(&self.id).await
    }

    pub async fn is_selected(&self) -> Result<bool> {
        self.client.is_selected(&self.id).await
    }

    pub async fn is_enabled(&self) -> Result<bool> {
        self.client.is_enabled(&self.id).await
    }

    /// Whether the `checked` attribute is present and truthy, the way checkbox
    /// state reads over the wire.
    pub async fn is_checked(&self) -> Result<bool> {
        let checked = self.attribute("checked").await?;
        Ok(checked.is_some_and(|value| !value.is_empty() && value != "false"))
    }

    /// Whether this handle and `other` refer to the same DOM element.
    pub async fn equals(&self, other: &Element) -> Result<bool> {
        self.client.elements_equal(&self.id, &other.id).await
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element").field("id", &self.id).finish()
    }
}
