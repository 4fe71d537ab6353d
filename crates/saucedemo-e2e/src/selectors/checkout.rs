//! Selectors for the two checkout steps and the completion page

pub const FIRST_NAME: &str = "[data-test=\"firstName\"]";
pub const LAST_NAME: &str = "[data-test=\"lastName\"]";
pub const POSTAL_CODE: &str = "[data-test=\"postalCode\"]";
pub const CONTINUE_BUTTON: &str = "[data-test=\"continue\"]";
pub const CANCEL_BUTTON: &str = "[data-test=\"cancel\"]";
pub const FINISH_BUTTON: &str = "[data-test=\"finish\"]";
pub const BACK_HOME_BUTTON: &str = "[data-test=\"back-to-products\"]";
pub const CART_ITEM: &str = ".cart_item";
pub const ITEM_NAME: &str = "[data-test=\"inventory-item-name\"]";
pub const ITEM_DESCRIPTION: &str = "[data-test=\"inventory-item-desc\"]";
pub const ITEM_PRICE: &str = "[data-test=\"inventory-item-price\"]";

// Payment and shipping share one list of summary values; the overview page
// renders payment at index 0 and shipping at index 1.
pub const SUMMARY_LABEL: &str = ".summary_info_label";
pub const SUMMARY_VALUE: &str = ".summary_value_label";

pub const SUBTOTAL: &str = ".summary_subtotal_label";
pub const TAX: &str = ".summary_tax_label";
pub const TOTAL: &str = ".summary_total_label";
pub const COMPLETE_HEADER: &str = "[data-test=\"complete-header\"]";
pub const COMPLETE_TEXT: &str = "[data-test=\"complete-text\"]";
pub const PONY_EXPRESS_IMAGE: &str = ".pony_express";
pub const ERROR_MESSAGE: &str = "[data-test=\"error\"]";
pub const PAGE_TITLE: &str = "[data-test=\"title\"]";
