// Fixture data - read-only records supplied to test scenarios
//
// The JSON lives under fixtures/ and is embedded at compile time. Records
// are plain serde types; nothing here touches the DOM.

use crate::error::Result;
use serde::Deserialize;

/// One catalog product: the id keys the per-product add/remove selectors
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Login credentials: a list of account names sharing one password
#[derive(Debug, Clone, Deserialize)]
pub struct Users {
    pub users: Vec<String>,
    pub password: String,
}

/// One checkout information form entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFields {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInfo {
    pub checkout_data: Vec<CheckoutFields>,
}

/// Error banners the storefront is expected to show
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessages {
    pub login: LoginMessages,
    pub checkout: CheckoutMessages,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginMessages {
    pub invalid_credentials: String,
    pub username_required: String,
    pub password_required: String,
    pub locked_out: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutMessages {
    pub first_name_required: String,
    pub last_name_required: String,
    pub postal_code_required: String,
}

/// Loads the user credentials fixture
pub fn users() -> Result<Users> {
    Ok(serde_json::from_str(include_str!("../fixtures/users.json"))?)
}

/// Loads the product catalog fixture
pub fn products() -> Result<Vec<Product>> {
    Ok(serde_json::from_str(include_str!(
        "../fixtures/products.json"
    ))?)
}

/// Loads the checkout form entries fixture
pub fn checkout_info() -> Result<CheckoutInfo> {
    Ok(serde_json::from_str(include_str!(
        "../fixtures/checkout_info.json"
    ))?)
}

/// Loads the expected error messages fixture
pub fn error_messages() -> Result<ErrorMessages> {
    Ok(serde_json::from_str(include_str!(
        "../fixtures/error_messages.json"
    ))?)
}
