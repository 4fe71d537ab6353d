//! Selectors for the cart page

pub const CART_CONTAINER: &str = ".cart_list";
pub const CART_ITEM: &str = ".cart_item";
pub const ITEM_NAME: &str = "[data-test=\"inventory-item-name\"]";
pub const ITEM_DESCRIPTION: &str = "[data-test=\"inventory-item-desc\"]";
pub const ITEM_PRICE: &str = "[data-test=\"inventory-item-price\"]";
pub const ITEM_QUANTITY: &str = ".cart_quantity";
pub const REMOVE_BUTTON: &str = "[data-test=\"remove\"]";
pub const CONTINUE_SHOPPING_BUTTON: &str = "[data-test=\"continue-shopping\"]";
pub const CHECKOUT_BUTTON: &str = "[data-test=\"checkout\"]";
pub const PAGE_TITLE: &str = "[data-test=\"title\"]";
