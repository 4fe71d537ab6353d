// PageHandle - the shared primitive set every page object builds on
//
// Composition instead of inheritance: each page object holds a PageHandle
// by value (cheap clone over an Arc'd driver) and composes these
// primitives into domain operations. The handle never caches DOM state;
// every call re-queries the live session.

use crate::driver::{Driver, Element};
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Default timeout for element visibility waits.
pub const DEFAULT_ELEMENT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Timeout for full-page navigation waits.
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_millis(30000);

/// A page-object-friendly wrapper over one browser session.
///
/// Cheap to clone; all clones address the same session. A `PageHandle`
/// never outlives its driver (the `Arc` guarantees it) and holds no state
/// of its own.
#[derive(Clone)]
pub struct PageHandle {
    driver: Arc<dyn Driver>,
}

impl PageHandle {
    /// Creates a handle over the given driver session
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self { driver }
    }

    /// Access to the underlying driver, for test scenarios that need a
    /// primitive the page objects do not expose
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// Navigates to a specific URL
    pub async fn navigate_to(&self, url: &str) -> Result<()> {
        tracing::debug!(%url, "navigate");
        self.driver.goto(url).await
    }

    /// URL the session is currently at
    pub async fn current_url(&self) -> Result<String> {
        self.driver.current_url().await
    }

    /// Waits for a selector to be visible, with the default timeout
    pub async fn wait_for_element(&self, selector: &str) -> Result<()> {
        self.wait_for_element_within(selector, DEFAULT_ELEMENT_TIMEOUT)
            .await
    }

    /// Waits for a selector to be visible, with an explicit timeout
    pub async fn wait_for_element_within(&self, selector: &str, timeout: Duration) -> Result<()> {
        tracing::debug!(%selector, timeout_ms = timeout.as_millis() as u64, "wait for element");
        self.driver.wait_for_visible(selector, timeout).await
    }

    /// Fills an input field, replacing its current value
    pub async fn fill_input(&self, selector: &str, text: &str) -> Result<()> {
        tracing::debug!(%selector, "fill input");
        self.driver.fill(selector, text).await
    }

    /// Clicks an element
    pub async fn click(&self, selector: &str) -> Result<()> {
        tracing::debug!(%selector, "click");
        self.driver.click(selector).await
    }

    /// Trimmed text content of an element
    pub async fn get_text(&self, selector: &str) -> Result<String> {
        self.driver.text_content(selector).await
    }

    /// Attribute value of an element
    pub async fn get_attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        self.driver.attribute(selector, name).await
    }

    /// Whether an element is visible.
    ///
    /// Never fails: any underlying query error maps to `false`. This is
    /// the probe used to assert a negative ("is the badge gone?"), so an
    /// absent element must not raise.
    pub async fn is_visible(&self, selector: &str) -> bool {
        self.driver.is_visible(selector).await.unwrap_or(false)
    }

    /// Runs `action` while awaiting a full navigation.
    ///
    /// The pre-action URL is recorded before the action is issued, so a
    /// fast navigation cannot be missed; both the action and the
    /// navigation wait must settle before this returns.
    pub async fn wait_for_navigation<F, Fut>(&self, action: F) -> Result<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let before = self.driver.current_url().await?;
        let navigated = self.driver.wait_for_url_change(&before, NAVIGATION_TIMEOUT);
        tokio::try_join!(navigated, action())?;
        Ok(())
    }

    /// All elements matching a selector, in document order
    pub async fn elements(&self, selector: &str) -> Result<Vec<Box<dyn Element>>> {
        self.driver.query_all(selector).await
    }

    /// First element matching a selector, `None` if nothing matches
    pub async fn element(&self, selector: &str) -> Result<Option<Box<dyn Element>>> {
        self.driver.query(selector).await
    }

    /// Suspends for a fixed duration.
    ///
    /// An escape hatch for animation flakiness, not a correctness
    /// mechanism; prefer `wait_for_element`.
    pub async fn wait(&self, ms: u64) {
        self.driver.pause(Duration::from_millis(ms)).await;
    }
}

impl std::fmt::Debug for PageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageHandle").finish_non_exhaustive()
    }
}
