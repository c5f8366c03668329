// Locator strategies
//
// One explicit strategy value replaces the per-strategy method families of
// callback-style wrappers: every session operation that touches an element
// takes a `By`, and the client translates it to whatever its wire speaks.

use std::fmt;

/// How an element is identified in the page.
///
/// # Examples
///
/// ```ignore
/// use chauffeur::By;
///
/// session.click(&By::id("submit")).await?;
/// session.type_text(&By::css("form input[name=q]"), "rust").await?;
/// let rows = session.find_all(&By::class_name("result-row")).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum By {
    /// A single class name
    ClassName(String),
    /// A CSS selector
    Css(String),
    /// The `id` attribute
    Id(String),
    /// The `name` attribute
    Name(String),
    /// Exact anchor text
    LinkText(String),
    /// Anchor text substring
    PartialLinkText(String),
    /// A tag name
    TagName(String),
    /// An XPath expression
    XPath(String),
}

impl By {
    pub fn class_name(value: impl Into<String>) -> Self {
        By::ClassName(value.into())
    }

    pub fn css(value: impl Into<String>) -> Self {
        By::Css(value.into())
    }

    pub fn id(value: impl Into<String>) -> Self {
        By::Id(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        By::Name(value.into())
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        By::LinkText(value.into())
    }

    pub fn partial_link_text(value: impl Into<String>) -> Self {
        By::PartialLinkText(value.into())
    }

    pub fn tag_name(value: impl Into<String>) -> Self {
        By::TagName(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        By::XPath(value.into())
    }

    /// The W3C location strategy name for this locator.
    pub fn strategy(&self) -> &'static str {
        match self {
            By::ClassName(_) => "class name",
            By::Css(_) => "css selector",
            By::Id(_) => "id",
            By::Name(_) => "name",
            By::LinkText(_) => "link text",
            By::PartialLinkText(_) => "partial link text",
            By::TagName(_) => "tag name",
            By::XPath(_) => "xpath",
        }
    }

    /// The selector value this locator carries.
    pub fn selector(&self) -> &str {
        match self {
            By::ClassName(value)
            | By::Css(value)
            | By::Id(value)
            | By::Name(value)
            | By::LinkText(value)
            | By::PartialLinkText(value)
            | By::TagName(value)
            | By::XPath(value) => value,
        }
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.strategy(), self.selector())
    }
}
