//! Selectors for the application header and the hamburger drawer

pub const MENU_BUTTON: &str = ".react-burger-menu-btn";
pub const CLOSE_MENU_BUTTON: &str = "#react-burger-cross-btn";
pub const ALL_ITEMS: &str = "[data-test=\"inventory-sidebar-link\"]";
pub const ABOUT: &str = "[data-test=\"about-sidebar-link\"]";
pub const LOGOUT: &str = "[data-test=\"logout-sidebar-link\"]";
pub const RESET_APP_STATE: &str = "[data-test=\"reset-sidebar-link\"]";
pub const SHOPPING_CART: &str = "[data-test=\"shopping-cart-link\"]";
pub const CART_BADGE: &str = "[data-test=\"shopping-cart-badge\"]";
