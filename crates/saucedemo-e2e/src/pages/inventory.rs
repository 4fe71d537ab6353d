// Inventory page object
//
// Lookups by name are a linear scan over the rendered rows, comparing
// trimmed name text. n is the demo catalog size, so O(n) per call is
// fine. Add/remove by name resolve the catalog id through the fixture
// list, not the DOM: a name absent from the catalog fails even when a
// matching row is on screen.

use crate::driver::Element;
use crate::error::{Error, Result};
use crate::fixtures::Product;
use crate::pages::PageHandle;
use crate::selectors::inventory as selectors;

/// Sort control option codes, as the storefront's `<select>` defines them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    NameAscending,
    NameDescending,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::NameAscending,
        SortOption::NameDescending,
        SortOption::PriceLowToHigh,
        SortOption::PriceHighToLow,
    ];

    /// The `value` attribute the sort control uses for this option
    pub fn code(self) -> &'static str {
        match self {
            SortOption::NameAscending => "az",
            SortOption::NameDescending => "za",
            SortOption::PriceLowToHigh => "lohi",
            SortOption::PriceHighToLow => "hilo",
        }
    }

    /// Parses a control value back into an option
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.code() == code)
            .ok_or_else(|| Error::UnknownSortOption(code.to_string()))
    }
}

pub struct InventoryPage {
    page: PageHandle,
}

impl InventoryPage {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Waits until the inventory page is fully loaded
    pub async fn wait_for_page_load(&self) -> Result<()> {
        self.page
            .wait_for_element(selectors::INVENTORY_CONTAINER)
            .await
    }

    /// All product rows on the page, in document order
    pub async fn all_products(&self) -> Result<Vec<Box<dyn Element>>> {
        self.page.elements(selectors::INVENTORY_ITEM).await
    }

    /// Product row by its position on the page
    pub async fn product_by_index(&self, index: usize) -> Result<Box<dyn Element>> {
        let mut products = self.all_products().await?;
        if index >= products.len() {
            return Err(Error::ProductIndexNotFound(index));
        }
        Ok(products.swap_remove(index))
    }

    /// Product row by its visible name
    pub async fn product_by_name(&self, product_name: &str) -> Result<Box<dyn Element>> {
        for product in self.all_products().await? {
            let name = product.find_text(selectors::ITEM_NAME).await?;
            if name == product_name {
                return Ok(product);
            }
        }
        Err(Error::ProductNotFound(product_name.to_string()))
    }

    /// Displayed price text of a product, looked up by name
    pub async fn product_price_by_name(&self, product_name: &str) -> Result<String> {
        let product = self.product_by_name(product_name).await?;
        product.find_text(selectors::ITEM_PRICE).await
    }

    /// Adds a product to the cart, resolving its id via the catalog fixture
    pub async fn add_product_to_cart_by_name(
        &self,
        product_name: &str,
        catalog: &[Product],
    ) -> Result<()> {
        let product = catalog
            .iter()
            .find(|p| p.name == product_name)
            .ok_or_else(|| Error::NotInCatalog(product_name.to_string()))?;
        tracing::info!(name = %product.name, id = %product.id, "add to cart");
        self.page
            .click(&selectors::add_to_cart_button(&product.id))
            .await
    }

    /// Adds a product to the cart by its index in the catalog fixture
    pub async fn add_product_to_cart_by_catalog_index(
        &self,
        index: usize,
        catalog: &[Product],
    ) -> Result<()> {
        let product = catalog
            .get(index)
            .ok_or(Error::CatalogIndexNotFound(index))?;
        tracing::info!(name = %product.name, id = %product.id, "add to cart");
        self.page
            .click(&selectors::add_to_cart_button(&product.id))
            .await
    }

    /// Removes a product from the cart, resolving its id via the catalog
    /// fixture
    pub async fn remove_product_from_cart_by_name(
        &self,
        product_name: &str,
        catalog: &[Product],
    ) -> Result<()> {
        let product = catalog
            .iter()
            .find(|p| p.name == product_name)
            .ok_or_else(|| Error::NotInCatalog(product_name.to_string()))?;
        tracing::info!(name = %product.name, id = %product.id, "remove from cart");
        self.page
            .click(&selectors::remove_from_cart_button(&product.id))
            .await
    }

    /// Opens the details page for a product by clicking its row
    pub async fn open_product_details_by_name(&self, product_name: &str) -> Result<()> {
        tracing::info!(name = %product_name, "open product details");
        let product = self.product_by_name(product_name).await?;
        product.click().await
    }

    /// Sets the sort control to the given option
    pub async fn sort_products(&self, option: SortOption) -> Result<()> {
        tracing::info!(code = option.code(), "sort products");
        self.page
            .driver()
            .set_select_value(selectors::SORT_SELECT, option.code())
            .await
    }

    /// Reads the sort control's current option back
    pub async fn sort_option(&self) -> Result<SortOption> {
        let code = self.page.driver().select_value(selectors::SORT_SELECT).await?;
        SortOption::from_code(&code)
    }
}
