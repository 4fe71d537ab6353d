// Product details page object

use crate::error::Result;
use crate::pages::PageHandle;
use crate::selectors::product_details as selectors;

pub struct ProductDetailsPage {
    page: PageHandle,
}

impl ProductDetailsPage {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Waits until the details page is fully loaded
    pub async fn wait_for_page_load(&self) -> Result<()> {
        self.page.wait_for_element(selectors::PRODUCT_NAME).await
    }

    pub async fn product_name(&self) -> Result<String> {
        self.page.get_text(selectors::PRODUCT_NAME).await
    }

    pub async fn product_description(&self) -> Result<String> {
        self.page.get_text(selectors::PRODUCT_DESCRIPTION).await
    }

    pub async fn product_price(&self) -> Result<String> {
        self.page.get_text(selectors::PRODUCT_PRICE).await
    }

    /// Adds the displayed product to the cart
    pub async fn add_to_cart(&self) -> Result<()> {
        tracing::info!("add to cart from details");
        self.page.click(selectors::ADD_TO_CART_BUTTON).await
    }

    /// Removes the displayed product from the cart
    pub async fn remove_from_cart(&self) -> Result<()> {
        tracing::info!("remove from cart from details");
        self.page.click(selectors::REMOVE_FROM_CART_BUTTON).await
    }

    /// Probe: the add button is only rendered while the product is out of
    /// the cart
    pub async fn is_add_to_cart_visible(&self) -> bool {
        self.page.is_visible(selectors::ADD_TO_CART_BUTTON).await
    }

    /// Probe: the remove button is only rendered while the product is in
    /// the cart
    pub async fn is_remove_visible(&self) -> bool {
        self.page.is_visible(selectors::REMOVE_FROM_CART_BUTTON).await
    }

    /// Returns to the inventory listing
    pub async fn back_to_products(&self) -> Result<()> {
        self.page.click(selectors::BACK_BUTTON).await
    }
}
