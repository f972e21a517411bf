//! Request DTOs for the cart service API
//!
//! Defines the structure of incoming HTTP request bodies. Shape validation
//! happens here, before the store is called.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::cart::MAX_QUANTITY;

/// Request body for creating a cart (POST /cart/create)
///
/// The body may be omitted entirely; the currency defaults to USD.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCartRequest {
    /// Optional ISO currency code
    #[serde(default)]
    pub currency: Option<String>,
}

impl CreateCartRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(currency) = &self.currency {
            if currency.trim().is_empty() {
                return Some("Currency must be a non-empty string".to_string());
            }
        }
        None
    }
}

/// Request body for adding an item (POST /cart/:cart_id/items)
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    /// Product SKU; at most one line per SKU exists in a cart
    pub sku: String,
    /// Display name of the product
    pub name: String,
    /// Unit price in the cart's currency
    pub price: Decimal,
    /// Number of units to add
    pub quantity: u32,
}

impl AddItemRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.sku.trim().is_empty() {
            return Some("SKU is required and must be a string".to_string());
        }
        if self.name.trim().is_empty() {
            return Some("Name is required and must be a string".to_string());
        }
        if self.price <= Decimal::ZERO {
            return Some("Price is required and must be a positive number".to_string());
        }
        if self.quantity == 0 {
            return Some("Quantity is required and must be a positive integer".to_string());
        }
        if self.quantity > MAX_QUANTITY {
            return Some("Quantity exceeds maximum allowed value".to_string());
        }
        None
    }
}

/// Request body for updating an item's quantity (PUT /cart/:cart_id/items/:item_id)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuantityRequest {
    /// Replacement quantity for the item
    pub quantity: u32,
}

impl UpdateQuantityRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.quantity == 0 {
            return Some("Quantity must be a positive integer".to_string());
        }
        if self.quantity > MAX_QUANTITY {
            return Some("Quantity exceeds maximum allowed value".to_string());
        }
        None
    }
}
