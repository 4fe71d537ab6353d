// Selector maps - one module per page/region
//
// Literal selectors are static strings; the per-product add/remove buttons
// are pure formatting functions over the product's catalog id. Nothing in
// here queries the DOM.

pub mod cart;
pub mod checkout;
pub mod header;
pub mod inventory;
pub mod login;
pub mod product_details;
