// Runtime configuration for the suite
//
// Resolution order: explicit builder calls, then environment variables,
// then defaults. Environment variables:
//   STOREFRONT_BASE_URL   - storefront under test (default: https://www.saucedemo.com)
//   WEBDRIVER_URL         - WebDriver endpoint (default: http://localhost:9515)
//   STOREFRONT_HEADLESS   - "0"/"false" to run headed (default: headless)
//   STOREFRONT_WAIT_MS    - element wait timeout in milliseconds

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Default storefront under test.
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// Default WebDriver endpoint (chromedriver's standalone port).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Default timeout for element visibility waits, in milliseconds.
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5000;

/// Suite configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the storefront under test
    pub base_url: Url,
    /// WebDriver endpoint the backend connects to
    pub webdriver_url: String,
    /// Run the browser headless
    pub headless: bool,
    /// Timeout for element visibility waits
    pub wait_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            headless: true,
            wait_timeout: Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// Creates a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a Config from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base) = env::var("STOREFRONT_BASE_URL") {
            config.base_url = Url::parse(&base)
                .map_err(|e| Error::InvalidConfig(format!("STOREFRONT_BASE_URL: {e}")))?;
        }
        if let Ok(endpoint) = env::var("WEBDRIVER_URL") {
            config.webdriver_url = endpoint;
        }
        if let Ok(headless) = env::var("STOREFRONT_HEADLESS") {
            config.headless = !matches!(headless.as_str(), "0" | "false" | "no");
        }
        if let Ok(ms) = env::var("STOREFRONT_WAIT_MS") {
            let ms: u64 = ms
                .parse()
                .map_err(|_| Error::InvalidConfig(format!("STOREFRONT_WAIT_MS: '{ms}'")))?;
            config.wait_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Set the storefront base URL
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the WebDriver endpoint
    pub fn webdriver_url(mut self, endpoint: impl Into<String>) -> Self {
        self.webdriver_url = endpoint.into();
        self
    }

    /// Run the browser headless or headed
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the element wait timeout
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Resolves a path against the storefront base URL
    pub fn page_url(&self, path: &str) -> Result<String> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::InvalidConfig(format!("cannot join '{path}': {e}")))?;
        Ok(url.into())
    }
}
