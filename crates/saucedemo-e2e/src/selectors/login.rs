//! Selectors for the login page

pub const USERNAME: &str = "[data-test=\"username\"]";
pub const PASSWORD: &str = "[data-test=\"password\"]";
pub const LOGIN_BUTTON: &str = "[data-test=\"login-button\"]";
pub const ERROR_MESSAGE: &str = "[data-test=\"error\"]";
