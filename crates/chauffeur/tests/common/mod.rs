// Test support: a scripted WebDriverClient
//
// Results are programmed per operation with push_* helpers (each queue falls
// back to a benign default when drained), and every call is recorded so tests
// can assert both outcomes and the exact sequence sent to the client.
#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use chauffeur::{By, DriverLog, ElementId, MouseButton, Point, Result, Size, WebDriverClient};
use parking_lot::Mutex;
use serde_json::Value;

/// Installs a fmt subscriber once, so `RUST_LOG=chauffeur=trace` shows the
/// session's chatter while debugging tests.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[derive(Default)]
struct State {
    calls: Vec<String>,
    find_element: VecDeque<Result<ElementId>>,
    find_elements: VecDeque<Result<Vec<ElementId>>>,
    element_text: VecDeque<Result<String>>,
    element_attribute: VecDeque<Result<Option<String>>>,
    element_css_value: VecDeque<Result<String>>,
    is_displayed: VecDeque<Result<bool>>,
    is_selected: VecDeque<Result<bool>>,
    is_enabled: VecDeque<Result<bool>>,
    current_url: VecDeque<Result<String>>,
    execute_script: VecDeque<Result<Value>>,
    execute_async_script: VecDeque<Result<Value>>,
    take_screenshot: VecDeque<Result<String>>,
}

#[derive(Default)]
pub struct MockClient {
    state: Mutex<State>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_find_element(&self, result: Result<ElementId>) {
        self.state.lock().find_element.push_back(result);
    }

    pub fn push_find_elements(&self, result: Result<Vec<ElementId>>) {
        self.state.lock().find_elements.push_back(result);
    }

    pub fn push_element_text(&self, result: Result<String>) {
        self.state.lock().element_text.push_back(result);
    }

    pub fn push_element_attribute(&self, result: Result<Option<String>>) {
        self.state.lock().element_attribute.push_back(result);
    }

    pub fn push_element_css_value(&self, result: Result<String>) {
        self.state.lock().element_css_value.push_back(result);
    }

    pub fn push_is_displayed(&self, result: Result<bool>) {
        self.state.lock().is_displayed.push_back(result);
    }

    pub fn push_is_selected(&self, result: Result<bool>) {
        self.state.lock().is_selected.push_back(result);
    }

    pub fn push_is_enabled(&self, result: Result<bool>) {
        self.state.lock().is_enabled.push_back(result);
    }

    pub fn push_current_url(&self, result: Result<String>) {
        self.state.lock().current_url.push_back(result);
    }

    pub fn push_execute_script(&self, result: Result<Value>) {
        self.state.lock().execute_script.push_back(result);
    }

    pub fn push_execute_async_script(&self, result: Result<Value>) {
        self.state.lock().execute_async_script.push_back(result);
    }

    pub fn push_take_screenshot(&self, result: Result<String>) {
        self.state.lock().take_screenshot.push_back(result);
    }

    /// Every call recorded so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// How many recorded calls start with `prefix`.
    pub fn count_calls(&self, prefix: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.state.lock().calls.push(call);
    }
}

#[async_trait]
impl WebDriverClient for MockClient {
    async fn find_element(&self, by: &By) -> Result<ElementId> {
        let mut state = self.state.lock();
        state.calls.push(format!("find_element {by}"));
        state
            .find_element
            .pop_front()
            .unwrap_or_else(|| Ok(ElementId::new("element-1")))
    }

    async fn find_elements(&self, by: &By) -> Result<Vec<ElementId>> {
        let mut state = self.state.lock();
        state.calls.push(format!("find_elements {by}"));
        state
            .find_elements
            .pop_front()
            .unwrap_or_else(|| Ok(vec![ElementId::new("element-1")]))
    }

    async fn active_element(&self) -> Result<ElementId> {
        self.record("active_element".into());
        Ok(ElementId::new("active-1"))
    }

    async fn click_element(&self, element: &ElementId) -> Result<()> {
        self.record(format!("click_element {element}"));
        Ok(())
    }

    async fn submit_element(&self, element: &ElementId) -> Result<()> {
        self.record(format!("submit_element {element}"));
        Ok(())
    }

    async fn clear_element(&self, element: &ElementId) -> Result<()> {
        self.record(format!("clear_element {element}"));
        Ok(())
    }

    async fn send_keys(&self, element: &ElementId, text: &str) -> Result<()> {
        self.record(format!("send_keys {element} '{text}'"));
        Ok(())
    }

    async fn is_displayed(&self, element: &ElementId) -> Result<bool> {
        let mut state = self.state.lock();
        state.calls.push(format!("is_displayed {element}"));
        state.is_displayed.pop_front().unwrap_or(Ok(true))
    }

    async fn is_selected(&self, element: &ElementId) -> Result<bool> {
        let mut state = self.state.lock();
        state.calls.push(format!("is_selected {element}"));
        state.is_selected.pop_front().unwrap_or(Ok(true))
    }

    async fn is_enabled(&self, element: &ElementId) -> Result<bool> {
        let mut state = self.state.lock();
        state.calls.push(format!("is_enabled {element}"));
        state.is_enabled.pop_front().unwrap_or(Ok(true))
    }

    async fn element_text(&self, element: &ElementId) -> Result<String> {
        let mut state = self.state.lock();
        state.calls.push(format!("element_text {element}"));
        state
            .element_text
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    async fn element_attribute(&self, element: &ElementId, name: &str) -> Result<Option<String>> {
        let mut state = self.state.lock();
        state.calls.push(format!("element_attribute {element} '{name}'"));
        state.element_attribute.pop_front().unwrap_or(Ok(None))
    }

    async fn element_css_value(&self, element: &ElementId, property: &str) -> Result<String> {
        let mut state = self.state.lock();
        state
            .calls
            .push(format!("element_css_value {element} '{property}'"));
        state
            .element_css_value
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    async fn element_tag_name(&self, element: &ElementId) -> Result<String> {
        self.record(format!("element_tag_name {element}"));
        Ok("div".to_string())
    }

    async fn element_size(&self, element: &ElementId) -> Result<Size> {
        self.record(format!("element_size {element}"));
        Ok(Size {
            width: 120.0,
            height: 40.0,
        })
    }

    async fn element_location(&self, element: &ElementId) -> Result<Point> {
        self.record(format!("element_location {element}"));
        Ok(Point { x: 10.0, y: 20.0 })
    }

    async fn elements_equal(&self, a: &ElementId, b: &ElementId) -> Result<bool> {
        self.record(format!("elements_equal {a} {b}"));
        Ok(a == b)
    }

    async fn goto(&self, url: &str) -> Result<()> {
        self.record(format!("goto {url}"));
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let mut state = self.state.lock();
        state.calls.push("current_url".to_string());
        state
            .current_url
            .pop_front()
            .unwrap_or_else(|| Ok("http://example.test/".to_string()))
    }

    async fn title(&self) -> Result<String> {
        self.record("title".into());
        Ok("Example".to_string())
    }

    async fn page_source(&self) -> Result<String> {
        self.record("page_source".into());
        Ok("<html></html>".to_string())
    }

    async fn execute_script(&self, script: &str, _args: Vec<Value>) -> Result<Value> {
        let mut state = self.state.lock();
        state.calls.push(format!("execute_script {script}"));
        state.execute_script.pop_front().unwrap_or(Ok(Value::Null))
    }

    async fn execute_async_script(&self, script: &str, _args: Vec<Value>) -> Result<Value> {
        let mut state = self.state.lock();
        state.calls.push(format!("execute_async_script {script}"));
        state
            .execute_async_script
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }

    async fn window_handles(&self) -> Result<Vec<String>> {
        self.record("window_handles".into());
        Ok(vec!["w-1".to_string(), "w-2".to_string()])
    }

    async fn window_handle(&self) -> Result<String> {
        self.record("window_handle".into());
        Ok("w-1".to_string())
    }

    async fn switch_to_window(&self, handle: &str) -> Result<()> {
        self.record(format!("switch_to_window {handle}"));
        Ok(())
    }

    async fn accept_alert(&self) -> Result<()> {
        self.record("accept_alert".into());
        Ok(())
    }

    async fn dismiss_alert(&self) -> Result<()> {
        self.record("dismiss_alert".into());
        Ok(())
    }

    async fn alert_text(&self) -> Result<String> {
        self.record("alert_text".into());
        Ok("Are you sure?".to_string())
    }

    async fn send_keys_to_active(&self, keys: &str) -> Result<()> {
        self.record(format!("send_keys_to_active '{keys}'"));
        Ok(())
    }

    async fn move_to(&self, element: Option<&ElementId>, offset: Option<(i64, i64)>) -> Result<()> {
        self.record(format!(
            "move_to {:?} {:?}",
            element.map(ElementId::as_str),
            offset
        ));
        Ok(())
    }

    async fn button_down(&self, button: MouseButton) -> Result<()> {
        self.record(format!("button_down {}", button.code()));
        Ok(())
    }

    async fn button_up(&self, button: MouseButton) -> Result<()> {
        self.record(format!("button_up {}", button.code()));
        Ok(())
    }

    async fn double_click(&self) -> Result<()> {
        self.record("double_click".into());
        Ok(())
    }

    async fn take_screenshot(&self) -> Result<String> {
        let mut state = self.state.lock();
        state.calls.push("take_screenshot".to_string());
        state
            .take_screenshot
            .pop_front()
            .unwrap_or_else(|| Ok("aGVsbG8=".to_string()))
    }

    async fn quit(&self) -> Result<()> {
        self.record("quit".into());
        Ok(())
    }
}

/// A DriverLog that collects messages per level, for asserting what the
/// session reports.
#[derive(Default)]
pub struct CollectingLog {
    verbose: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CollectingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose_lines(&self) -> Vec<String> {
        self.verbose.lock().clone()
    }

    pub fn warning_lines(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.errors.lock().clone()
    }
}

impl DriverLog for CollectingLog {
    fn warn(&self, message: &str) {
        self.warnings.lock().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }

    fn verbose(&self, message: &str) {
        self.verbose.lock().push(message.to_string());
    }
}
