// WebDriver backend - binds the driver seam to a live browser session
//
// Connects to an externally managed WebDriver endpoint (chromedriver,
// selenium standalone). WebDriver has no "fill" or navigation events, so:
// fill is clear-then-send-keys, and both waits are poll loops on a fixed
// interval.

use crate::config::Config;
use crate::driver::{Driver, Element};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use thirtyfour::components::SelectElement;
use thirtyfour::{By, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WebElement};
use tokio::time::Instant;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A live browser session speaking the WebDriver protocol.
///
/// Cheap to share: the underlying client is handle-based. `quit` ends the
/// browser session for every clone.
pub struct WebDriverSession {
    driver: WebDriver,
}

impl WebDriverSession {
    /// Connects to the configured WebDriver endpoint and opens a session
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.add_arg("--window-size=1280,800")?;
        if config.headless {
            caps.add_arg("--headless=new")?;
        }
        tracing::info!(endpoint = %config.webdriver_url, "connecting to webdriver");
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        Ok(Self { driver })
    }

    /// Ends the browser session
    pub async fn quit(&self) -> Result<()> {
        self.driver.clone().quit().await?;
        Ok(())
    }

    async fn find_one(&self, selector: &str) -> Result<WebElement> {
        let mut found = self.driver.find_all(By::Css(selector)).await?;
        if found.is_empty() {
            return Err(Error::ElementNotFound(selector.to_string()));
        }
        Ok(found.remove(0))
    }
}

#[async_trait]
impl Driver for WebDriverSession {
    async fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn wait_for_visible(&self, selector: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(found) = self.driver.find_all(By::Css(selector)).await
                && let Some(element) = found.first()
                && element.is_displayed().await.unwrap_or(false)
            {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::Timeout {
                    selector: selector.to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.find_one(selector).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.find_one(selector).await?.click().await?;
        Ok(())
    }

    async fn text_content(&self, selector: &str) -> Result<String> {
        let element = self.find_one(selector).await?;
        Ok(element.text().await?.trim().to_string())
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.find_one(selector).await?;
        Ok(element.attr(name).await?)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let found = self.driver.find_all(By::Css(selector)).await?;
        match found.first() {
            Some(element) => Ok(element.is_displayed().await?),
            None => Ok(false),
        }
    }

    async fn query(&self, selector: &str) -> Result<Option<Box<dyn Element>>> {
        let mut found = self.driver.find_all(By::Css(selector)).await?;
        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(Box::new(WdElement(found.remove(0)))))
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<Box<dyn Element>>> {
        let found = self.driver.find_all(By::Css(selector)).await?;
        Ok(found
            .into_iter()
            .map(|element| Box::new(WdElement(element)) as Box<dyn Element>)
            .collect())
    }

    async fn select_value(&self, selector: &str) -> Result<String> {
        let element = self.find_one(selector).await?;
        Ok(element.prop("value").await?.unwrap_or_default())
    }

    async fn set_select_value(&self, selector: &str, value: &str) -> Result<()> {
        let element = self.find_one(selector).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_value(value).await?;
        Ok(())
    }

    async fn wait_for_url_change(&self, from: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let url = self.driver.current_url().await?.to_string();
            if url != from {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::NavigationTimeout {
                    url,
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// An element handle backed by a live WebDriver element
struct WdElement(WebElement);

#[async_trait]
impl Element for WdElement {
    async fn text(&self) -> Result<String> {
        Ok(self.0.text().await?.trim().to_string())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.0.attr(name).await?)
    }

    async fn click(&self) -> Result<()> {
        self.0.click().await?;
        Ok(())
    }

    async fn find(&self, selector: &str) -> Result<Option<Box<dyn Element>>> {
        let mut found = self.0.find_all(By::Css(selector)).await?;
        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(Box::new(WdElement(found.remove(0)))))
    }

    async fn find_text(&self, selector: &str) -> Result<String> {
        match self.find(selector).await? {
            Some(element) => element.text().await,
            None => Err(Error::ElementNotFound(selector.to_string())),
        }
    }
}
