//! Cart Context Module
//!
//! The mutable cart entity owned by the store, and the read-only view
//! derived from it.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::money::{round_amount, tax_rate, Money};

// == Line Item ==
/// A single line in a cart.
///
/// `item_id` is generated by the store and opaque to callers. Each SKU
/// appears at most once per cart; adding a duplicate SKU merges into the
/// existing line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_id: String,
    pub sku: String,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub subtotal: Money,
}

// == Cart Context ==
/// The mutable server-side record backing a cart.
///
/// Exclusively owned by the store. Item order is insertion order; merging an
/// existing SKU does not change its position.
#[derive(Debug, Clone)]
pub struct CartContext {
    pub cart_id: String,
    pub currency: String,
    pub items: Vec<LineItem>,
    /// Fixed at creation time; never extended by subsequent mutations.
    pub expires_at: u64,
}

impl CartContext {
    /// Creates an empty context expiring at the given Unix millisecond time.
    pub fn new(cart_id: String, currency: String, expires_at: u64) -> Self {
        Self {
            cart_id,
            currency,
            items: Vec::new(),
            expires_at,
        }
    }

    /// Expiry is strict: a context is still live at exactly `expires_at`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }

    /// Derives the displayable cart view from the current items.
    ///
    /// Totals are recomputed on every call; nothing is cached on the entity.
    /// Tax and total are computed from the unrounded running subtotal, then
    /// each amount is rounded to two decimal places independently.
    pub fn build_cart(&self) -> Cart {
        let raw_subtotal: Decimal = self.items.iter().map(|item| item.subtotal.amount).sum();
        let tax = round_amount(raw_subtotal * tax_rate());
        let total = round_amount(raw_subtotal + tax);

        Cart {
            cart_id: self.cart_id.clone(),
            currency: self.currency.clone(),
            items: self.items.clone(),
            subtotal: Money::new(round_amount(raw_subtotal), self.currency.clone()),
            tax: Money::new(tax, self.currency.clone()),
            total: Money::new(total, self.currency.clone()),
            expires_at: self.expires_at,
        }
    }
}

// == Cart View ==
/// Read-only cart materialized for output, with computed totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub cart_id: String,
    pub currency: String,
    pub items: Vec<LineItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    pub expires_at: u64,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(sku: &str, price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            item_id: format!("item-{}", sku),
            sku: sku.to_string(),
            name: sku.to_string(),
            price: Money::new(price, "USD"),
            quantity,
            subtotal: Money::new(price * Decimal::from(quantity), "USD"),
        }
    }

    #[test]
    fn test_build_cart_empty() {
        let context = CartContext::new("cart-1".to_string(), "USD".to_string(), 1_000);
        let cart = context.build_cart();

        assert_eq!(cart.subtotal.amount, dec!(0));
        assert_eq!(cart.tax.amount, dec!(0));
        assert_eq!(cart.total.amount, dec!(0));
        assert_eq!(cart.expires_at, 1_000);
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_build_cart_totals() {
        let mut context = CartContext::new("cart-1".to_string(), "USD".to_string(), 1_000);
        context.items.push(item("A", dec!(5.00), 2));
        context.items.push(item("B", dec!(5.00), 1));

        let cart = context.build_cart();
        assert_eq!(cart.subtotal.amount, dec!(15.00));
        assert_eq!(cart.tax.amount, dec!(1.50));
        assert_eq!(cart.total.amount, dec!(16.50));
        assert_eq!(cart.subtotal.currency, "USD");
        assert_eq!(cart.tax.currency, "USD");
        assert_eq!(cart.total.currency, "USD");
    }

    #[test]
    fn test_build_cart_rounds_tax() {
        let mut context = CartContext::new("cart-1".to_string(), "USD".to_string(), 1_000);
        // 3 x 3.33 = 9.99, tax = 0.999 -> 1.00, total = 10.989 -> 10.99
        context.items.push(item("A", dec!(3.33), 3));

        let cart = context.build_cart();
        assert_eq!(cart.subtotal.amount, dec!(9.99));
        assert_eq!(cart.tax.amount, dec!(1.00));
        assert_eq!(cart.total.amount, dec!(10.99));
    }

    #[test]
    fn test_is_expired_boundary() {
        let context = CartContext::new("cart-1".to_string(), "USD".to_string(), 1_000);

        assert!(!context.is_expired(999));
        assert!(!context.is_expired(1_000));
        assert!(context.is_expired(1_001));
    }

    #[test]
    fn test_build_cart_is_idempotent() {
        let mut context = CartContext::new("cart-1".to_string(), "USD".to_string(), 1_000);
        context.items.push(item("A", dec!(19.99), 3));

        let first = context.build_cart();
        let second = context.build_cart();
        assert_eq!(first.subtotal, second.subtotal);
        assert_eq!(first.tax, second.tax);
        assert_eq!(first.total, second.total);
    }

    #[test]
    fn test_line_item_serializes_camel_case() {
        let line = item("A", dec!(1.50), 2);
        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("itemId").is_some());
        assert!(json.get("subtotal").is_some());
        assert_eq!(json["subtotal"]["amount"].as_f64().unwrap(), 3.0);
    }
}
