//! Selectors for the product details page

pub const BACK_BUTTON: &str = "[data-test=\"back-to-products\"]";
pub const PRODUCT_IMAGE: &str = "[data-test=\"inventory-item-img\"]";
pub const PRODUCT_NAME: &str = "[data-test=\"inventory-item-name\"]";
pub const PRODUCT_DESCRIPTION: &str = "[data-test=\"inventory-item-desc\"]";
pub const PRODUCT_PRICE: &str = "[data-test=\"inventory-item-price\"]";
pub const ADD_TO_CART_BUTTON: &str = "[data-test=\"add-to-cart\"]";
pub const REMOVE_FROM_CART_BUTTON: &str = "[data-test=\"remove\"]";
