// Page objects - one module per storefront screen/region

mod base;
mod cart;
mod checkout;
mod header;
mod inventory;
mod login;
mod product_details;

pub use base::{DEFAULT_ELEMENT_TIMEOUT, NAVIGATION_TIMEOUT, PageHandle};
pub use cart::CartPage;
pub use checkout::{CheckoutPage, extract_price};
pub use header::Header;
pub use inventory::{InventoryPage, SortOption};
pub use login::LoginPage;
pub use product_details::ProductDetailsPage;
