//! saucedemo-e2e: Page-object-model end-to-end suite for the Swag Labs
//! demo storefront
//!
//! Per-page DOM interaction lives behind typed page objects; test
//! scenarios assemble those objects over one shared browser session and
//! assert on what they return. The browser itself sits behind the
//! [`driver::Driver`] seam, so scenarios run unchanged against a live
//! WebDriver session or an in-memory double.
//!
//! # Examples
//!
//! ## Logging in and filling a cart
//!
//! ```ignore
//! use std::sync::Arc;
//! use saucedemo_e2e::{Config, PageHandle, WebDriverSession};
//! use saucedemo_e2e::{fixtures, Header, InventoryPage, LoginPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let session = Arc::new(WebDriverSession::connect(&config).await?);
//!     let page = PageHandle::new(session.clone());
//!
//!     let users = fixtures::users()?;
//!     let catalog = fixtures::products()?;
//!
//!     page.navigate_to(&config.page_url("/")?).await?;
//!     LoginPage::new(page.clone())
//!         .login(&users.users[0], &users.password)
//!         .await?;
//!
//!     let inventory = InventoryPage::new(page.clone());
//!     inventory.wait_for_page_load().await?;
//!     inventory
//!         .add_product_to_cart_by_name(&catalog[0].name, &catalog)
//!         .await?;
//!
//!     assert_eq!(Header::new(page.clone()).cart_badge_count().await, 1);
//!
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod driver;
mod error;
pub mod fixtures;
pub mod pages;
pub mod selectors;

// Re-export error types
pub use error::{Error, Result};

// Re-export configuration
pub use config::Config;

// Re-export the driver seam and the WebDriver backend
pub use driver::{Driver, Element, WebDriverSession};

// Re-export the page handle and page objects
pub use pages::{
    CartPage, CheckoutPage, DEFAULT_ELEMENT_TIMEOUT, Header, InventoryPage, LoginPage, PageHandle,
    ProductDetailsPage, SortOption,
};
