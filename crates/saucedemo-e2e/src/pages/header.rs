// Header page object
//
// The hamburger drawer is a two-state machine, closed and open, toggled
// by distinct controls. Initial state is unknown until probed, so every
// menu-item click goes through the open_if_closed guard and callers never
// manage drawer state themselves.

use crate::error::Result;
use crate::pages::PageHandle;
use crate::selectors::header as selectors;

pub struct Header {
    page: PageHandle,
}

impl Header {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Opens the hamburger drawer and waits for its content
    pub async fn open(&self) -> Result<()> {
        tracing::debug!("open menu");
        self.page.click(selectors::MENU_BUTTON).await?;
        self.page.wait_for_element(selectors::ALL_ITEMS).await
    }

    /// Closes the drawer; a no-op when it is already closed
    pub async fn close(&self) -> Result<()> {
        if self.is_open().await {
            tracing::debug!("close menu");
            self.page.click(selectors::CLOSE_MENU_BUTTON).await?;
        }
        Ok(())
    }

    /// Probe: whether the drawer content is currently visible
    pub async fn is_open(&self) -> bool {
        self.page.is_visible(selectors::ALL_ITEMS).await
    }

    /// Ensures the drawer is open
    pub async fn open_if_closed(&self) -> Result<()> {
        if !self.is_open().await {
            self.open().await?;
        }
        Ok(())
    }

    /// Clicks "All Items" (navigates to the inventory page)
    pub async fn click_all_items(&self) -> Result<()> {
        self.open_if_closed().await?;
        self.page.click(selectors::ALL_ITEMS).await
    }

    /// Clicks "About" (navigates to the vendor's external page)
    pub async fn click_about(&self) -> Result<()> {
        self.open_if_closed().await?;
        self.page.click(selectors::ABOUT).await
    }

    /// Clicks "Logout"
    pub async fn click_logout(&self) -> Result<()> {
        self.open_if_closed().await?;
        self.page.click(selectors::LOGOUT).await
    }

    /// Clicks "Reset App State" (empties the cart)
    pub async fn click_reset_app_state(&self) -> Result<()> {
        self.open_if_closed().await?;
        self.page.click(selectors::RESET_APP_STATE).await
    }

    /// Clicks the shopping cart icon (navigates to the cart)
    pub async fn click_shopping_cart(&self) -> Result<()> {
        self.page.click(selectors::SHOPPING_CART).await
    }

    /// Number shown on the cart badge, 0 when the badge is absent.
    ///
    /// Probe accessor: an empty cart renders no badge at all.
    pub async fn cart_badge_count(&self) -> u32 {
        match self.page.element(selectors::CART_BADGE).await {
            Ok(Some(badge)) => match badge.text().await {
                Ok(text) => text.trim().parse().unwrap_or(0),
                Err(_) => 0,
            },
            _ => 0,
        }
    }

    /// Probe: whether the cart badge is rendered
    pub async fn is_cart_badge_visible(&self) -> bool {
        self.page.is_visible(selectors::CART_BADGE).await
    }
}
