// Cart page object

use crate::driver::Element;
use crate::error::{Error, Result};
use crate::pages::PageHandle;
use crate::selectors::cart as selectors;

pub struct CartPage {
    page: PageHandle,
}

impl CartPage {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Waits until the cart page is fully loaded
    pub async fn wait_for_page_load(&self) -> Result<()> {
        self.page.wait_for_element(selectors::CART_CONTAINER).await
    }

    /// All cart rows, in document order
    pub async fn all_cart_items(&self) -> Result<Vec<Box<dyn Element>>> {
        self.page.elements(selectors::CART_ITEM).await
    }

    /// Number of rows currently in the cart
    pub async fn items_count(&self) -> Result<usize> {
        Ok(self.all_cart_items().await?.len())
    }

    /// Cart row by its position
    pub async fn cart_item_by_index(&self, index: usize) -> Result<Box<dyn Element>> {
        let mut items = self.all_cart_items().await?;
        if index >= items.len() {
            return Err(Error::CartIndexNotFound(index));
        }
        Ok(items.swap_remove(index))
    }

    /// Cart row by the product's visible name
    pub async fn cart_item_by_name(&self, product_name: &str) -> Result<Box<dyn Element>> {
        for item in self.all_cart_items().await? {
            let name = item.find_text(selectors::ITEM_NAME).await?;
            if name == product_name {
                return Ok(item);
            }
        }
        Err(Error::CartItemNotFound(product_name.to_string()))
    }

    /// Displayed price text of a cart item, looked up by name
    pub async fn item_price_by_name(&self, product_name: &str) -> Result<String> {
        let item = self.cart_item_by_name(product_name).await?;
        item.find_text(selectors::ITEM_PRICE).await
    }

    /// Quantity of a cart item, looked up by name.
    ///
    /// Some cart layouts omit the quantity indicator for single units, so
    /// an absent quantity element means 1. The item itself must exist.
    pub async fn item_quantity_by_name(&self, product_name: &str) -> Result<u32> {
        let item = self.cart_item_by_name(product_name).await?;
        match item.find(selectors::ITEM_QUANTITY).await? {
            Some(quantity) => Ok(quantity.text().await?.trim().parse().unwrap_or(1)),
            None => Ok(1),
        }
    }

    /// Removes a cart item by the product's visible name
    pub async fn remove_item_by_name(&self, product_name: &str) -> Result<()> {
        tracing::info!(name = %product_name, "remove cart item");
        let item = self.cart_item_by_name(product_name).await?;
        match item.find(selectors::REMOVE_BUTTON).await? {
            Some(button) => button.click().await,
            None => Err(Error::ElementNotFound(selectors::REMOVE_BUTTON.to_string())),
        }
    }

    /// Removes a cart item by its position
    pub async fn remove_item_by_index(&self, index: usize) -> Result<()> {
        tracing::info!(index, "remove cart item");
        let item = self.cart_item_by_index(index).await?;
        match item.find(selectors::REMOVE_BUTTON).await? {
            Some(button) => button.click().await,
            None => Err(Error::ElementNotFound(selectors::REMOVE_BUTTON.to_string())),
        }
    }

    /// Returns to the inventory page
    pub async fn continue_shopping(&self) -> Result<()> {
        self.page.click(selectors::CONTINUE_SHOPPING_BUTTON).await
    }

    /// Proceeds to checkout step one
    pub async fn checkout(&self) -> Result<()> {
        self.page.click(selectors::CHECKOUT_BUTTON).await
    }

    /// The page heading text
    pub async fn page_title(&self) -> Result<String> {
        self.page.get_text(selectors::PAGE_TITLE).await
    }
}
