// Checkout page object - covers step one (information), step two
// (overview) and the completion page

use crate::driver::Element;
use crate::error::{Error, Result};
use crate::pages::PageHandle;
use crate::selectors::checkout as selectors;
use regex::Regex;
use std::sync::LazyLock;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+\.?\d*)").expect("price pattern is valid"));

/// Parses the first `$`-prefixed decimal out of a text blob.
///
/// Permissive on purpose: summary row formats vary, so no match degrades
/// to `0.0` instead of failing.
pub fn extract_price(text: &str) -> f64 {
    PRICE_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|amount| amount.as_str().parse().ok())
        .unwrap_or(0.0)
}

pub struct CheckoutPage {
    page: PageHandle,
}

impl CheckoutPage {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Fills the three-field information form
    pub async fn fill_checkout_information(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> Result<()> {
        tracing::info!("filling checkout information");
        self.page.fill_input(selectors::FIRST_NAME, first_name).await?;
        self.page.fill_input(selectors::LAST_NAME, last_name).await?;
        self.page.fill_input(selectors::POSTAL_CODE, postal_code).await
    }

    /// Continues from step one to the overview
    pub async fn continue_to_overview(&self) -> Result<()> {
        self.page.click(selectors::CONTINUE_BUTTON).await
    }

    /// Cancels out of the current checkout step
    pub async fn cancel(&self) -> Result<()> {
        self.page.click(selectors::CANCEL_BUTTON).await
    }

    /// Places the order from the overview
    pub async fn finish(&self) -> Result<()> {
        tracing::info!("placing order");
        self.page.click(selectors::FINISH_BUTTON).await
    }

    /// Returns to the inventory page from the completion page
    pub async fn back_home(&self) -> Result<()> {
        self.page.click(selectors::BACK_HOME_BUTTON).await
    }

    /// All overview rows, in document order
    pub async fn all_checkout_items(&self) -> Result<Vec<Box<dyn Element>>> {
        self.page.elements(selectors::CART_ITEM).await
    }

    /// Overview row by the product's visible name
    pub async fn checkout_item_by_name(&self, product_name: &str) -> Result<Box<dyn Element>> {
        for item in self.all_checkout_items().await? {
            let name = item.find_text(selectors::ITEM_NAME).await?;
            if name == product_name {
                return Ok(item);
            }
        }
        Err(Error::CheckoutItemNotFound(product_name.to_string()))
    }

    /// Displayed price text of an overview row, looked up by name
    pub async fn item_price_by_name(&self, product_name: &str) -> Result<String> {
        let item = self.checkout_item_by_name(product_name).await?;
        item.find_text(selectors::ITEM_PRICE).await
    }

    // The overview renders one flat list of summary values, payment first,
    // shipping second. Positional on purpose: the page carries no
    // per-value labels to key on.

    /// Payment method line of the overview, `None` when the summary list
    /// is empty
    pub async fn payment_info(&self) -> Result<Option<String>> {
        let values = self.page.elements(selectors::SUMMARY_VALUE).await?;
        match values.first() {
            Some(value) => Ok(Some(value.text().await?)),
            None => Ok(None),
        }
    }

    /// Shipping method line of the overview, `None` when the summary list
    /// has fewer than two entries
    pub async fn shipping_info(&self) -> Result<Option<String>> {
        let values = self.page.elements(selectors::SUMMARY_VALUE).await?;
        match values.get(1) {
            Some(value) => Ok(Some(value.text().await?)),
            None => Ok(None),
        }
    }

    /// Item subtotal parsed from the overview
    pub async fn subtotal(&self) -> Result<f64> {
        let text = self.page.get_text(selectors::SUBTOTAL).await?;
        Ok(extract_price(&text))
    }

    /// Tax parsed from the overview
    pub async fn tax(&self) -> Result<f64> {
        let text = self.page.get_text(selectors::TAX).await?;
        Ok(extract_price(&text))
    }

    /// Order total parsed from the overview
    pub async fn total(&self) -> Result<f64> {
        let text = self.page.get_text(selectors::TOTAL).await?;
        Ok(extract_price(&text))
    }

    /// Heading of the completion page
    pub async fn complete_header(&self) -> Result<String> {
        self.page.get_text(selectors::COMPLETE_HEADER).await
    }

    /// Body text of the completion page
    pub async fn complete_text(&self) -> Result<String> {
        self.page.get_text(selectors::COMPLETE_TEXT).await
    }

    /// The error banner text if one is shown, `None` otherwise
    pub async fn error_message(&self) -> Option<String> {
        if self.page.is_visible(selectors::ERROR_MESSAGE).await {
            self.page.get_text(selectors::ERROR_MESSAGE).await.ok()
        } else {
            None
        }
    }

    /// The page heading text
    pub async fn page_title(&self) -> Result<String> {
        self.page.get_text(selectors::PAGE_TITLE).await
    }
}
