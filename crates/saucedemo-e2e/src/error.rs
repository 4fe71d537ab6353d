// Error types for saucedemo-e2e

use thiserror::Error;

/// Result type alias for saucedemo-e2e operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the storefront
///
/// Only "must exist" lookups produce errors. Probe accessors
/// (`is_visible`, badge count, quantity, error-message retrieval, price
/// extraction) never fail; they return a safe default instead.
#[derive(Debug, Error)]
pub enum Error {
    /// WebDriver-level failure, propagated from the thirtyfour client
    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// Driver-level failure from a non-WebDriver backend
    #[error("driver error: {0}")]
    Driver(String),

    /// Timed out waiting for an element to become visible
    ///
    /// Includes the selector that was being waited on and the timeout used.
    #[error("timed out after {timeout_ms}ms waiting for selector '{selector}'")]
    Timeout { selector: String, timeout_ms: u64 },

    /// A triggered navigation did not complete in time
    #[error("navigation did not complete within {timeout_ms}ms (still at '{url}')")]
    NavigationTimeout { url: String, timeout_ms: u64 },

    /// No element matched the selector
    #[error("element not found: selector '{0}'")]
    ElementNotFound(String),

    /// Named product is not on the inventory listing
    #[error("product with name \"{0}\" not found on inventory list")]
    ProductNotFound(String),

    /// Inventory row index past the end of the listing
    #[error("product index \"{0}\" not found on inventory list")]
    ProductIndexNotFound(usize),

    /// Named product is absent from the supplied catalog fixture,
    /// independent of whether it is rendered on screen
    #[error("product \"{0}\" not found in catalog data")]
    NotInCatalog(String),

    /// Catalog fixture index out of range
    #[error("product index \"{0}\" not found in catalog data")]
    CatalogIndexNotFound(usize),

    /// Named product is not among the cart rows
    #[error("product with name \"{0}\" not found in cart")]
    CartItemNotFound(String),

    /// Cart row index out of range
    #[error("cart item index \"{0}\" not found")]
    CartIndexNotFound(usize),

    /// Named product is not among the checkout overview rows
    #[error("product with name \"{0}\" not found in checkout")]
    CheckoutItemNotFound(String),

    /// Sort control reported a value outside the known option codes
    #[error("unknown sort option code '{0}'")]
    UnknownSortOption(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
