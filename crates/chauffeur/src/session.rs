// Session facade
//
// The convenience surface over the WebDriver client: find / interact / check /
// getter / wait families parameterized by locator strategy, plus browser-level
// utilities. Methods announce themselves on the verbose log level and
// delegate; the client owns everything protocol-shaped.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::by::By;
use crate::client::{MouseButton, Point, Size, WebDriverClient};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::logging::{DriverLog, TracingLog};
use crate::screenshot::ScreenshotStore;
use crate::wait::{WaitOptions, wait_until};

// Per-operation wait tunings.
const URL_CHANGE_TIMEOUT: Duration = Duration::from_millis(12_500);
const URL_CHANGE_INTERVAL: Duration = Duration::from_millis(200);
const ATTRIBUTE_WAIT_TIMEOUT: Duration = Duration::from_secs(5);
const ATTRIBUTE_WAIT_INTERVAL: Duration = Duration::from_millis(500);
const ELEMENTS_WAIT_TIMEOUT: Duration = Duration::from_secs(5);
const ELEMENTS_WAIT_INTERVAL: Duration = Duration::from_millis(500);
const INNER_HTML_WAIT_TIMEOUT: Duration = Duration::from_secs(10);
const INNER_HTML_WAIT_INTERVAL: Duration = Duration::from_millis(100);

// Settle delay between opening a dropdown and clicking one of its options.
const DROPDOWN_SETTLE: Duration = Duration::from_millis(500);

// A `text` read that races a DOM update gets this many attempts total.
const TEXT_STALE_ATTEMPTS: usize = 2;

const STOP_LOADING_SCRIPT: &str = "window.stop();";
const INNER_HTML_SCRIPT: &str =
    "var el = document.querySelector(arguments[0]); return el ? el.innerHTML : null;";
const OPTION_VALUES_SCRIPT: &str = "var out = []; \
     document.querySelectorAll(arguments[0]).forEach(function (el) { out.push(el.textContent); }); \
     return out;";
const MAKE_VISIBLE_SCRIPT: &str = "var el = document.querySelector(arguments[0]); \
     if (el) { el.style.display = ''; el.style.visibility = 'visible'; }";

/// Construction options for [`Session`].
pub struct SessionOptions {
    screenshots_dir: PathBuf,
    logger: Arc<dyn DriverLog>,
}

impl SessionOptions {
    /// Creates options with screenshots rooted at `screenshots_dir`.
    pub fn new(screenshots_dir: impl Into<PathBuf>) -> Self {
        Self {
            screenshots_dir: screenshots_dir.into(),
            logger: Arc::new(TracingLog),
        }
    }

    /// Replaces the default `tracing`-backed logger.
    pub fn logger(mut self, logger: Arc<dyn DriverLog>) -> Self {
        self.logger = logger;
        self
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new("screenshots")
    }
}

/// How an expected URL is matched in [`Session::wait_for_url_change`].
#[derive(Debug, Clone)]
pub enum UrlPattern {
    /// Exact string equality
    Exact(String),
    /// Regex match anywhere in the URL
    Matches(Regex),
}

impl UrlPattern {
    fn is_match(&self, url: &str) -> bool {
        match self {
            UrlPattern::Exact(expected) => url == expected,
            UrlPattern::Matches(pattern) => pattern.is_match(url),
        }
    }
}

impl From<Regex> for UrlPattern {
    fn from(pattern: Regex) -> Self {
        UrlPattern::Matches(pattern)
    }
}

impl From<&str> for UrlPattern {
    fn from(expected: &str) -> Self {
        UrlPattern::Exact(expected.to_string())
    }
}

impl From<String> for UrlPattern {
    fn from(expected: String) -> Self {
        UrlPattern::Exact(expected)
    }
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlPattern::Exact(expected) => write!(f, "'{expected}'"),
            UrlPattern::Matches(pattern) => write!(f, "/{pattern}/"),
        }
    }
}

/// A live browser session, wrapped.
///
/// The session exclusively owns its client handle; issuing concurrent
/// operations against one session is the caller's responsibility to avoid,
/// as the underlying WebDriver session generally does not support concurrent
/// commands.
pub struct Session {
    client: Arc<dyn WebDriverClient>,
    screenshots: ScreenshotStore,
    log: Arc<dyn DriverLog>,
}

impl Session {
    pub fn new(client: Arc<dyn WebDriverClient>, options: SessionOptions) -> Self {
        Self {
            client,
            screenshots: ScreenshotStore::new(options.screenshots_dir),
            log: options.logger,
        }
    }

    /// The underlying client capability, for operations this surface does not
    /// cover.
    pub fn client(&self) -> &Arc<dyn WebDriverClient> {
        &self.client
    }

    fn element(&self, id: crate::client::ElementId) -> Element {
        Element::new(Arc::clone(&self.client), id)
    }

    // Find methods

    /// Finds a single element.
    pub async fn find(&self, by: &By) -> Result<Element> {
        self.log.verbose(&format!("find {by}"));
        let id = self.client.find_element(by).await?;
        Ok(self.element(id))
    }

    /// Finds a single element, or `None` when the lookup misses.
    ///
    /// Only the "no such element" class is softened; other failures surface.
    pub async fn find_if_exists(&self, by: &By) -> Result<Option<Element>> {
        self.log.verbose(&format!("find_if_exists {by}"));
        match self.client.find_element(by).await {
            Ok(id) => Ok(Some(self.element(id))),
            Err(error) if error.is_no_such_element() => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Finds every matching element.
    pub async fn find_all(&self, by: &By) -> Result<Vec<Element>> {
        self.log.verbose(&format!("find_all {by}"));
        let ids = self.client.find_elements(by).await?;
        Ok(ids.into_iter().map(|id| self.element(id)).collect())
    }

    /// Whether at least one element matches.
    pub async fn exists(&self, by: &By) -> Result<bool> {
        self.log.verbose(&format!("exists {by}"));
        Ok(!self.client.find_elements(by).await?.is_empty())
    }

    // Interaction methods

    pub async fn click(&self, by: &By) -> Result<()> {
        self.log.verbose(&format!("click {by}"));
        self.find(by).await?.click().await
    }

    /// Submits the form the matched element belongs to.
    pub async fn submit(&self, by: &By) -> Result<()> {
        self.log.verbose(&format!("submit {by}"));
        self.find(by).await?.submit().await
    }

    /// Types `text` into the matched element.
    pub async fn type_text(&self, by: &By, text: &str) -> Result<()> {
        self.log.verbose(&format!("type_text {by}"));
        self.find(by).await?.send_keys(text).await
    }

    /// Clears the matched element, then types `text` into it.
    pub async fn clear_and_type(&self, by: &By, text: &str) -> Result<()> {
        self.log.verbose(&format!("clear_and_type {by}"));
        let element = self.find(by).await?;
        element.clear().await?;
        element.send_keys(text).await
    }

    /// Moves the pointer to the matched element, offset by `(x_offset, y_offset)`.
    pub async fn move_mouse_to(&self, by: &By, x_offset: i64, y_offset: i64) -> Result<()> {
        self.log
            .verbose(&format!("move_mouse_to {by} offset ({x_offset}, {y_offset})"));
        let element = self.find(by).await?;
        self.client
            .move_to(Some(element.id()), Some((x_offset, y_offset)))
            .await
    }

    /// Left-clicks via raw mouse events at the matched element's position.
    pub async fn mouse_down_up(&self, by: &By) -> Result<()> {
        self.log.verbose(&format!("mouse_down_up {by}"));
        self.move_mouse_to(by, 0, 0).await?;
        self.client.button_down(MouseButton::Left).await?;
        self.client.button_up(MouseButton::Left).await
    }

    /// Alias for [`mouse_down_up`](Self::mouse_down_up): some widgets only
    /// react to raw button events, not element clicks.
    pub async fn mouse_click(&self, by: &By) -> Result<()> {
        self.log.verbose(&format!("mouse_click {by}"));
        self.mouse_down_up(by).await
    }

    /// Double-clicks at the matched element's position.
    pub async fn double_click(&self, by: &By) -> Result<()> {
        self.log.verbose(&format!("double_click {by}"));
        self.move_mouse_to(by, 0, 0).await?;
        self.client.double_click().await
    }

    // Check methods

    /// Whether the matched element is displayed. A missing element reads as
    /// `false` rather than an error.
    pub async fn is_displayed(&self, by: &By) -> Result<bool> {
        self.log.verbose(&format!("is_displayed {by}"));
        match self.find(by).await {
            Ok(element) => element.is_displayed().await,
            Err(error) if error.is_no_such_element() => Ok(false),
            Err(error) => Err(error),
        }
    }

    pub async fn is_selected(&self, by: &By) -> Result<bool> {
        self.log.verbose(&format!("is_selected {by}"));
        self.find(by).await?.is_selected().await
    }

    pub async fn is_enabled(&self, by: &By) -> Result<bool> {
        self.log.verbose(&format!("is_enabled {by}"));
        self.find(by).await?.is_enabled().await
    }

    /// Whether the matched checkbox or radio button is checked.
    pub async fn is_checked(&self, by: &By) -> Result<bool> {
        self.log.verbose(&format!("is_checked {by}"));
        self.find(by).await?.is_checked().await
    }

    /// Whether the matched element's text contains `needle`.
    pub async fn has_text(&self, by: &By, needle: &str) -> Result<bool> {
        self.log.verbose(&format!("has_text {by}"));
        let text = self.find(by).await?.text().await?;
        Ok(text.contains(needle))
    }

    // Getter methods

    /// The matched element's visible text.
    ///
    /// A read that lands on a detached element is retried once with a fresh
    /// lookup; past that the stale-element error surfaces. The retry covers a
    /// flaky driver response, not a contract.
    pub async fn text(&self, by: &By) -> Result<String> {
        self.log.verbose(&format!("text {by}"));
        let mut attempt = 1;
        loop {
            let element = self.find(by).await?;
            match element.text().await {
                Err(error) if error.is_stale_element() && attempt < TEXT_STALE_ATTEMPTS => {
                    self.log
                        .warn(&format!("text {by} read a detached element, retrying"));
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    pub async fn attribute(&self, by: &By, name: &str) -> Result<Option<String>> {
        self.log.verbose(&format!("attribute {by} '{name}'"));
        self.find(by).await?.attribute(name).await
    }

    /// The computed value of a CSS property on the matched element.
    pub async fn css_value(&self, by: &By, property: &str) -> Result<String> {
        self.log.verbose(&format!("css_value {by} '{property}'"));
        self.find(by).await?.css_value(property).await
    }

    pub async fn size(&self, by: &By) -> Result<Size> {
        self.log.verbose(&format!("size {by}"));
        self.find(by).await?.size().await
    }

    pub async fn location(&self, by: &By) -> Result<Point> {
        self.log.verbose(&format!("location {by}"));
        self.find(by).await?.location().await
    }

    // Wait methods

    /// Waits until the matched element is displayed.
    pub async fn wait_for_displayed(&self, by: &By) -> Result<()> {
        self.log.verbose(&format!("wait_for_displayed {by}"));
        let options = WaitOptions::new(format!("element {by} never became visible"));
        wait_until(&options, move || async move { self.is_displayed(by).await }).await
    }

    /// Waits until the matched element is displayed, then returns it.
    pub async fn wait_for_element(&self, by: &By) -> Result<Element> {
        self.log.verbose(&format!("wait_for_element {by}"));
        self.wait_for_displayed(by).await?;
        self.find(by).await
    }

    /// Waits until the matched element is displayed, then reports whether its
    /// text contains `needle`.
    pub async fn wait_for_text(&self, by: &By, needle: &str) -> Result<bool> {
        self.log.verbose(&format!("wait_for_text {by}"));
        let element = self.wait_for_element(by).await?;
        Ok(element.text().await?.contains(needle))
    }

    /// Waits for the current URL to change to (`to = true`) or away from
    /// (`to = false`) `expected`, then returns the URL it landed on.
    pub async fn wait_for_url_change(&self, expected: &UrlPattern, to: bool) -> Result<String> {
        let direction = if to { "to" } else { "from" };
        self.log
            .verbose(&format!("wait_for_url_change {direction} {expected}"));
        let options = WaitOptions::new(format!("URL did not change {direction} {expected}"))
            .timeout(URL_CHANGE_TIMEOUT)
            .interval(URL_CHANGE_INTERVAL);
        wait_until(&options, move || async move {
            let url = self.client.current_url().await?;
            Ok(expected.is_match(&url) == to)
        })
        .await?;
        self.current_url().await
    }

    /// Waits until the matched element carries `attribute` (with value
    /// `expected`, when given), then returns the attribute's value.
    pub async fn wait_for_attribute(
        &self,
        by: &By,
        attribute: &str,
        expected: Option<&str>,
    ) -> Result<String> {
        self.log
            .verbose(&format!("wait_for_attribute {by} '{attribute}'"));
        let message = format!("'{attribute}' -- not found on {by}");
        let options = WaitOptions::new(message.clone())
            .timeout(ATTRIBUTE_WAIT_TIMEOUT)
            .interval(ATTRIBUTE_WAIT_INTERVAL);
        wait_until(&options, move || async move {
            match self.attribute(by, attribute).await? {
                Some(value) => Ok(expected.is_none_or(|want| value == want)),
                None => Ok(false),
            }
        })
        .await?;
        // The attribute was just observed; a vanish between the last poll and
        // this read counts as the wait failing.
        self.attribute(by, attribute)
            .await?
            .ok_or(Error::Timeout(message))
    }

    /// Waits until at least one element matches, then returns them all.
    pub async fn wait_for_elements(&self, by: &By) -> Result<Vec<Element>> {
        self.log.verbose(&format!("wait_for_elements {by}"));
        let options = WaitOptions::new(format!("{by} -- not found"))
            .timeout(ELEMENTS_WAIT_TIMEOUT)
            .interval(ELEMENTS_WAIT_INTERVAL);
        wait_until(&options, move || async move {
            match self.client.find_elements(by).await {
                Ok(ids) => Ok(!ids.is_empty()),
                Err(error) if error.is_no_such_element() => Ok(false),
                Err(error) => Err(error),
            }
        })
        .await?;
        self.find_all(by).await
    }

    /// Waits until the inner HTML of the first element matching `css` matches
    /// `pattern`. Useful for text that exists in the DOM without being
    /// visible.
    pub async fn wait_for_inner_html(&self, css: &str, pattern: &Regex) -> Result<()> {
        self.log.verbose(&format!("wait_for_inner_html '{css}'"));
        let options = WaitOptions::new(format!("/{pattern}/ -- not found in '{css}'"))
            .timeout(INNER_HTML_WAIT_TIMEOUT)
            .interval(INNER_HTML_WAIT_INTERVAL);
        wait_until(&options, move || async move {
            match self.inner_html(css).await? {
                Some(html) => Ok(pattern.is_match(&html)),
                None => Ok(false),
            }
        })
        .await
    }

    /// Polls a JavaScript expression in the browser until it evaluates truthy.
    pub async fn wait_for_condition_in_browser(
        &self,
        expression: &str,
        timeout: Duration,
        interval: Duration,
    ) -> Result<()> {
        self.log
            .verbose(&format!("wait_for_condition_in_browser '{expression}'"));
        let script = format!("return !!({expression});");
        let script = script.as_str();
        let options = WaitOptions::new(format!("condition '{expression}' never became true"))
            .timeout(timeout)
            .interval(interval);
        wait_until(&options, move || async move {
            let value = self.client.execute_script(script, Vec::new()).await?;
            Ok(value.as_bool().unwrap_or(false))
        })
        .await
    }

    // Browser-level and utility methods

    /// Navigates to `url`, which must be absolute http(s). Any in-flight page
    /// load is stopped first.
    pub async fn load_page(&self, url: &str) -> Result<()> {
        self.log.verbose(&format!("load_page {url}"));
        let parsed = Url::parse(url)
            .map_err(|error| Error::InvalidArgument(format!("need a full URL, got '{url}': {error}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::InvalidArgument(format!(
                "need an http(s) URL, got '{url}'"
            )));
        }
        self.stop_loading().await;
        self.client.goto(url).await
    }

    /// Halts any in-flight page load. Failures are logged, not returned.
    pub async fn stop_loading(&self) {
        self.log.verbose("stop_loading");
        if let Err(error) = self
            .client
            .execute_script(STOP_LOADING_SCRIPT, Vec::new())
            .await
        {
            self.log.error(&format!("stopping the page load failed: {error}"));
        }
    }

    /// Re-navigates to the current URL.
    pub async fn reload_page(&self) -> Result<()> {
        self.log.verbose("reload_page");
        let url = self.client.current_url().await?;
        self.load_page(&url).await
    }

    pub async fn current_url(&self) -> Result<String> {
        self.log.verbose("current_url");
        let url = self.client.current_url().await?;
        self.log.verbose(&format!("-- current url is {url}"));
        Ok(url)
    }

    pub async fn title(&self) -> Result<String> {
        self.log.verbose("title");
        self.client.title().await
    }

    /// The full page source.
    pub async fn page_source(&self) -> Result<String> {
        self.log.verbose("page_source");
        self.client.page_source().await
    }

    /// Plain delay; the session is idle for the duration.
    pub async fn short_wait(&self, duration: Duration) {
        self.log.verbose(&format!("short_wait {duration:?}"));
        tokio::time::sleep(duration).await;
    }

    pub async fn window_handles(&self) -> Result<Vec<String>> {
        self.log.verbose("window_handles");
        self.client.window_handles().await
    }

    pub async fn current_window_handle(&self) -> Result<String> {
        self.log.verbose("current_window_handle");
        self.client.window_handle().await
    }

    pub async fn switch_to_window(&self, handle: &str) -> Result<()> {
        self.log.verbose(&format!("switch_to_window '{handle}'"));
        self.client.switch_to_window(handle).await
    }

    pub async fn accept_alert(&self) -> Result<()> {
        self.log.verbose("accept_alert");
        self.client.accept_alert().await
    }

    pub async fn dismiss_alert(&self) -> Result<()> {
        self.log.verbose("dismiss_alert");
        self.client.dismiss_alert().await
    }

    pub async fn alert_text(&self) -> Result<String> {
        self.log.verbose("alert_text");
        self.client.alert_text().await
    }

    /// Ends the session and closes the browser.
    pub async fn quit(&self) -> Result<()> {
        self.log.verbose("quit");
        self.client.quit().await
    }

    /// Runs a synchronous script in the browser and returns its result.
    /// Arguments arrive in the script as `arguments[0..]`.
    pub async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.log.verbose("execute_script");
        let result = self.client.execute_script(script, args).await?;
        self.log.debug(&format!("execute_script result: {result}"));
        Ok(result)
    }

    /// Runs an asynchronous script in the browser; the script signals
    /// completion through the callback the client appends to its arguments.
    pub async fn execute_async_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.log.verbose("execute_async_script");
        let result = self.client.execute_async_script(script, args).await?;
        self.log.debug(&format!("execute_async_script result: {result}"));
        Ok(result)
    }

    /// Sends keystrokes to whatever currently has focus. Mix in
    /// [`Key`](crate::Key) codepoints for non-printable keys.
    pub async fn type_keys(&self, keys: &str) -> Result<()> {
        self.log.verbose("type_keys");
        self.client.send_keys_to_active(keys).await
    }

    pub async fn active_element(&self) -> Result<Element> {
        self.log.verbose("active_element");
        let id = self.client.active_element().await?;
        Ok(self.element(id))
    }

    /// Captures a screenshot and writes it to
    /// `<screenshots_dir>/<subdir>/<filename>.png`, returning the path.
    pub async fn take_screenshot(&self, subdir: &str, filename: &str) -> Result<PathBuf> {
        self.log.verbose(&format!("take_screenshot {subdir}/{filename}"));
        let payload = self.client.take_screenshot().await?;
        let bytes = BASE64.decode(payload.as_bytes())?;
        let path = self.screenshots.save(subdir, filename, &bytes).await?;
        self.log
            .verbose(&format!("saved screenshot to {}", path.display()));
        Ok(path)
    }

    // CSS-scripted helpers

    /// The inner HTML of the first element matching `css`, read in the
    /// browser context.
    pub async fn inner_html(&self, css: &str) -> Result<Option<String>> {
        self.log.verbose(&format!("inner_html '{css}'"));
        let value = self
            .client
            .execute_script(INNER_HTML_SCRIPT, vec![Value::String(css.to_string())])
            .await?;
        Ok(value.as_str().map(str::to_owned))
    }

    /// How many elements match `css`.
    pub async fn count(&self, css: &str) -> Result<usize> {
        self.log.verbose(&format!("count '{css}'"));
        Ok(self.client.find_elements(&By::css(css)).await?.len())
    }

    /// The text of every element matching `css`, in document order.
    ///
    /// An entry that detaches mid-sweep reads as an empty string rather than
    /// failing the whole listing; a caller checking the actual text still
    /// fails, a caller counting rows does not.
    pub async fn texts_of_list(&self, css: &str) -> Result<Vec<String>> {
        self.log.verbose(&format!("texts_of_list '{css}'"));
        let elements = self.find_all(&By::css(css)).await?;
        let mut texts = Vec::with_capacity(elements.len());
        for element in &elements {
            match element.text().await {
                Ok(text) => texts.push(text),
                Err(error) if error.is_stale_element() => texts.push(String::new()),
                Err(error) => return Err(error),
            }
        }
        Ok(texts)
    }

    /// The text content of every element matching `css`, collected in one
    /// round trip in the browser context.
    pub async fn option_values(&self, css: &str) -> Result<Vec<String>> {
        self.log.verbose(&format!("option_values '{css}'"));
        let value = self
            .client
            .execute_script(OPTION_VALUES_SCRIPT, vec![Value::String(css.to_string())])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Forces the first element matching `css` to be displayable.
    pub async fn make_visible(&self, css: &str) -> Result<()> {
        self.log.verbose(&format!("make_visible '{css}'"));
        self.client
            .execute_script(MAKE_VISIBLE_SCRIPT, vec![Value::String(css.to_string())])
            .await?;
        Ok(())
    }

    /// Whether an element matching `css` exists, and — when `text` is given —
    /// contains that text.
    pub async fn has_element_with_text(&self, css: &str, text: Option<&str>) -> Result<bool> {
        self.log.verbose(&format!("has_element_with_text '{css}'"));
        if !self.exists(&By::css(css)).await? {
            return Ok(false);
        }
        match text {
            Some(needle) => self.has_text(&By::css(css), needle).await,
            None => Ok(true),
        }
    }

    /// Opens the dropdown matching `dropdown_css` with a raw mouse click,
    /// lets it settle, then clicks the option matching `option_css`.
    pub async fn select_option_from_dropdown(
        &self,
        dropdown_css: &str,
        option_css: &str,
    ) -> Result<()> {
        self.log.verbose(&format!(
            "select_option_from_dropdown '{dropdown_css}' -> '{option_css}'"
        ));
        self.mouse_click(&By::css(dropdown_css)).await?;
        self.short_wait(DROPDOWN_SETTLE).await;
        self.click(&By::css(option_css)).await
    }

    // Drag sequences

    /// Simulates a click-and-drag: press on `start`, move over `end_element`,
    /// then to `end_offset` relative to it, and release.
    pub async fn drag_element(
        &self,
        start: &Element,
        end_element: &Element,
        end_offset: (i64, i64),
    ) -> Result<()> {
        self.log
            .verbose(&format!("drag_element to offset {end_offset:?}"));
        self.client.move_to(Some(start.id()), None).await?;
        self.client.button_down(MouseButton::Left).await?;
        self.client.move_to(Some(end_element.id()), None).await?;
        self.client
            .move_to(Some(end_element.id()), Some(end_offset))
            .await?;
        self.client.button_up(MouseButton::Left).await
    }

    /// Clicks `start`, then clicks again at `end_offset` relative to
    /// `end_element`.
    pub async fn click_and_stamp(
        &self,
        start: &Element,
        end_element: &Element,
        end_offset: (i64, i64),
    ) -> Result<()> {
        self.log
            .verbose(&format!("click_and_stamp at offset {end_offset:?}"));
        self.client.move_to(Some(start.id()), None).await?;
        self.client.button_down(MouseButton::Left).await?;
        self.client.button_up(MouseButton::Left).await?;
        self.client.move_to(Some(end_element.id()), None).await?;
        self.client
            .move_to(Some(end_element.id()), Some(end_offset))
            .await?;
        self.client.button_down(MouseButton::Left).await?;
        self.client.button_up(MouseButton::Left).await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("screenshots", &self.screenshots)
            .finish_non_exhaustive()
    }
}
