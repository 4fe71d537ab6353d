//! Selectors for the inventory page

pub const INVENTORY_CONTAINER: &str = "[data-test=\"inventory-container\"]";
pub const INVENTORY_ITEM: &str = "[data-test=\"inventory-item\"]";
pub const ITEM_NAME: &str = "[data-test=\"inventory-item-name\"]";
pub const ITEM_PRICE: &str = "[data-test=\"inventory-item-price\"]";
pub const SORT_SELECT: &str = "[data-test=\"product-sort-container\"]";

/// Add-to-cart button for the product with the given catalog id
pub fn add_to_cart_button(product_id: &str) -> String {
    format!("[data-test=\"add-to-cart-{product_id}\"]")
}

/// Remove-from-cart button for the product with the given catalog id
pub fn remove_from_cart_button(product_id: &str) -> String {
    format!("[data-test=\"remove-{product_id}\"]")
}
