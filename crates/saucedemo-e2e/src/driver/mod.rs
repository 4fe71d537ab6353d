// Driver seam - the browser-automation surface this suite consumes
//
// The page objects never talk to a browser client directly. They hold a
// `PageHandle` which delegates to these two object-safe traits, so the
// engine behind them (a live WebDriver session, an in-memory double) is a
// construction-time choice.
//
// Failure contract: every method reports the underlying engine failure
// unchanged. The fail-soft defaults live one layer up, in `PageHandle` and
// the page objects, never here.

mod webdriver;

pub use webdriver::WebDriverSession;

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A handle to one matched DOM element.
///
/// Mirrors the element-scoped subset of the driver surface the page
/// objects need: trimmed text, attribute lookup, click, and sub-queries
/// scoped to the element's subtree.
#[async_trait]
pub trait Element: Send + Sync {
    /// Trimmed text content of the element
    async fn text(&self) -> Result<String>;

    /// Value of the named attribute, `None` if absent
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// Dispatches a click on the element
    async fn click(&self) -> Result<()>;

    /// First descendant matching `selector`, `None` if nothing matches
    async fn find(&self, selector: &str) -> Result<Option<Box<dyn Element>>>;

    /// Trimmed text of the first descendant matching `selector`;
    /// fails if nothing matches
    async fn find_text(&self, selector: &str) -> Result<String>;
}

/// A page-scoped browser-automation session.
///
/// One instance corresponds to one browser tab/session. The suite issues
/// one operation at a time per session; implementations are not required
/// to support concurrent in-flight calls.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Loads the given URL
    async fn goto(&self, url: &str) -> Result<()>;

    /// URL the session is currently at
    async fn current_url(&self) -> Result<String>;

    /// Suspends until the element matching `selector` is visible, or
    /// `timeout` elapses
    async fn wait_for_visible(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Replaces the value of the first matching input with `text`
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Clicks the first matching element
    async fn click(&self, selector: &str) -> Result<()>;

    /// Trimmed text content of the first matching element
    async fn text_content(&self, selector: &str) -> Result<String>;

    /// Attribute value of the first matching element
    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;

    /// Whether the first matching element is visible. Fails only when the
    /// engine rejects the query itself; an absent element is `Ok(false)`.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// First matching element, `None` if nothing matches
    async fn query(&self, selector: &str) -> Result<Option<Box<dyn Element>>>;

    /// All matching elements, in document order
    async fn query_all(&self, selector: &str) -> Result<Vec<Box<dyn Element>>>;

    /// Current value of the first matching `<select>` control
    async fn select_value(&self, selector: &str) -> Result<String>;

    /// Selects the option with the given value on the first matching
    /// `<select>` control
    async fn set_select_value(&self, selector: &str, value: &str) -> Result<()>;

    /// Suspends until the session's URL differs from `from`, or `timeout`
    /// elapses
    async fn wait_for_url_change(&self, from: &str, timeout: Duration) -> Result<()>;

    /// Unconditionally suspends for the given duration
    async fn pause(&self, duration: Duration);
}
