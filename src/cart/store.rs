//! Cart Store Module
//!
//! Sole owner of all cart contexts. Enforces identifier uniqueness, TTL
//! expiry and item mutation invariants, and derives the computed cart view.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::cart::context::{Cart, CartContext, LineItem};
use crate::cart::ids::generate_numeric_id;
use crate::cart::money::Money;
use crate::cart::{Clock, DEFAULT_CURRENCY, MAX_ID_ATTEMPTS, MAX_ITEMS_IN_CART};
use crate::error::{CartError, Result};

// == New Context ==
/// Returned by `create_context`: only the identifier and expiry, not the
/// full cart.
#[derive(Debug, Clone)]
pub struct NewContext {
    pub cart_id: String,
    pub expires_at: u64,
}

// == Cart Store ==
/// In-memory cart context store with TTL-based expiration.
pub struct CartStore {
    /// Cart identifier -> context
    contexts: HashMap<String, CartContext>,
    /// Context lifetime in milliseconds
    ttl_ms: u64,
    /// Injected time source used for all expiry comparisons
    clock: Arc<dyn Clock>,
}

impl CartStore {
    // == Constructor ==
    /// Creates a new CartStore.
    ///
    /// # Arguments
    /// * `ttl_secs` - Lifetime of each context from its creation
    /// * `clock` - Time source used for expiry comparisons
    pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            contexts: HashMap::new(),
            ttl_ms: ttl_secs * 1000,
            clock,
        }
    }

    // == Create Context ==
    /// Creates a new empty cart context and returns its identifier and expiry.
    ///
    /// The currency defaults to USD when absent. The expiry is fixed here and
    /// never extended by later mutations.
    pub fn create_context(&mut self, currency: Option<String>) -> Result<NewContext> {
        let currency = currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let cart_id = self.allocate_cart_id()?;
        let expires_at = self.clock.now_ms() + self.ttl_ms;

        let context = CartContext::new(cart_id.clone(), currency, expires_at);
        self.contexts.insert(cart_id.clone(), context);

        Ok(NewContext {
            cart_id,
            expires_at,
        })
    }

    // == Get Cart ==
    /// Returns the derived cart view. No mutation beyond lazy eviction.
    pub fn get_cart(&mut self, cart_id: &str) -> Result<Cart> {
        let context = self.valid_context(cart_id)?;
        Ok(context.build_cart())
    }

    // == Add Item ==
    /// Adds an item to the cart, merging into an existing line if the SKU is
    /// already present.
    ///
    /// On merge the line subtotal is recomputed from the price passed to
    /// THIS call, not the stored unit price, mirroring the back end this
    /// store stands in for. The stored unit price itself is left untouched.
    pub fn add_item(
        &mut self,
        cart_id: &str,
        sku: &str,
        name: &str,
        price: Decimal,
        quantity: u32,
    ) -> Result<Cart> {
        let context = self.valid_context(cart_id)?;
        let currency = context.currency.clone();

        if let Some(item) = context.items.iter_mut().find(|item| item.sku == sku) {
            item.quantity += quantity;
            item.subtotal = Money::new(price * Decimal::from(item.quantity), currency);
        } else {
            if context.items.len() >= MAX_ITEMS_IN_CART {
                return Err(CartError::CartFull {
                    cart_id: cart_id.to_string(),
                    item_count: context.items.len(),
                    max_items: MAX_ITEMS_IN_CART,
                });
            }

            let item = LineItem {
                item_id: generate_numeric_id(),
                sku: sku.to_string(),
                name: name.to_string(),
                price: Money::new(price, currency.clone()),
                quantity,
                subtotal: Money::new(price * Decimal::from(quantity), currency),
            };
            context.items.push(item);
        }

        Ok(context.build_cart())
    }

    // == Update Quantity ==
    /// Overwrites an item's quantity, recomputing its subtotal from the
    /// stored unit price.
    pub fn update_quantity(&mut self, cart_id: &str, item_id: &str, quantity: u32) -> Result<Cart> {
        let context = self.valid_context(cart_id)?;
        let currency = context.currency.clone();

        let item = context
            .items
            .iter_mut()
            .find(|item| item.item_id == item_id)
            .ok_or_else(|| CartError::ItemNotFound {
                item_id: item_id.to_string(),
            })?;

        item.quantity = quantity;
        item.subtotal = Money::new(item.price.amount * Decimal::from(quantity), currency);

        Ok(context.build_cart())
    }

    // == Remove Item ==
    /// Removes an item from the cart, preserving the order of the rest.
    pub fn remove_item(&mut self, cart_id: &str, item_id: &str) -> Result<Cart> {
        let context = self.valid_context(cart_id)?;

        let index = context
            .items
            .iter()
            .position(|item| item.item_id == item_id)
            .ok_or_else(|| CartError::ItemNotFound {
                item_id: item_id.to_string(),
            })?;

        context.items.remove(index);
        Ok(context.build_cart())
    }

    // == Reclaim Expired ==
    /// Evicts every context whose expiry has passed as of a single timestamp
    /// taken at the start of the sweep.
    ///
    /// Returns the number of contexts evicted.
    pub fn reclaim_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_ids: Vec<String> = self
            .contexts
            .iter()
            .filter(|(_, context)| context.is_expired(now))
            .map(|(cart_id, _)| cart_id.clone())
            .collect();

        let count = expired_ids.len();
        for cart_id in expired_ids {
            self.contexts.remove(&cart_id);
        }
        count
    }

    // == Length ==
    /// Returns the current number of live contexts.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no contexts.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    // == Validity Check ==
    /// Resolves a context by id, evicting it first if its TTL has passed
    /// (lazy deletion). Runs before every read and mutation.
    fn valid_context(&mut self, cart_id: &str) -> Result<&mut CartContext> {
        let now = self.clock.now_ms();

        let expired_at = {
            let context =
                self.contexts
                    .get(cart_id)
                    .ok_or_else(|| CartError::CartNotFound {
                        cart_id: cart_id.to_string(),
                    })?;
            if context.is_expired(now) {
                Some(context.expires_at)
            } else {
                None
            }
        };

        if let Some(expired_at) = expired_at {
            self.contexts.remove(cart_id);
            return Err(CartError::ContextExpired {
                cart_id: cart_id.to_string(),
                expired_at,
            });
        }

        self.contexts
            .get_mut(cart_id)
            .ok_or_else(|| CartError::CartNotFound {
                cart_id: cart_id.to_string(),
            })
    }

    fn allocate_cart_id(&self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = generate_numeric_id();
            if !self.contexts.contains_key(&candidate) {
                return Ok(candidate);
            }
        }
        Err(CartError::IdGenerationExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
