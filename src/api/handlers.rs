//! API Handlers
//!
//! HTTP request handlers for each cart service endpoint. Handlers validate
//! request shapes, log structured lines around each store call, and map
//! store outcomes to responses; the store itself never logs.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cart::{Cart, CartStore, SystemClock};
use crate::error::{CartError, Result};
use crate::models::{
    AddItemRequest, CreateCartRequest, CreateCartResponse, HealthResponse, UpdateQuantityRequest,
};

/// Application state shared across all handlers.
///
/// Contains the cart store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cart store
    pub cart: Arc<RwLock<CartStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cart store.
    pub fn new(store: CartStore) -> Self {
        Self {
            cart: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the cart store with the configured TTL and the system clock.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = CartStore::new(config.cart_ttl_secs, Arc::new(SystemClock));
        Self::new(store)
    }
}

/// Handler for POST /cart/create
///
/// Creates a new cart context. The body is optional; currency defaults to USD.
pub async fn create_cart_handler(
    State(state): State<AppState>,
    body: Option<Json<CreateCartRequest>>,
) -> Result<(StatusCode, Json<CreateCartResponse>)> {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CartError::Validation(error_msg));
    }

    info!(currency = ?req.currency, "Creating new cart");

    // Acquire write lock and create the context
    let mut store = state.cart.write().await;
    let created = store.create_context(req.currency)?;

    info!(
        cart_id = %created.cart_id,
        expires_at = created.expires_at,
        "Cart created successfully"
    );

    Ok((StatusCode::CREATED, Json(CreateCartResponse::from(created))))
}

/// Handler for GET /cart/:cart_id
///
/// Returns the cart with computed totals.
pub async fn get_cart_handler(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> Result<Json<Cart>> {
    info!(cart_id = %cart_id, "Retrieving cart");

    // Write lock: expired contexts are evicted on access
    let mut store = state.cart.write().await;
    let cart = store.get_cart(&cart_id)?;

    info!(
        cart_id = %cart_id,
        item_count = cart.items.len(),
        total = %cart.total.amount,
        "Cart retrieved successfully"
    );

    Ok(Json(cart))
}

/// Handler for POST /cart/:cart_id/items
///
/// Adds an item to the cart, merging quantities for an existing SKU.
pub async fn add_item_handler(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<Cart>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CartError::Validation(error_msg));
    }

    info!(
        cart_id = %cart_id,
        sku = %req.sku,
        quantity = req.quantity,
        price = %req.price,
        "Adding item to cart"
    );

    let mut store = state.cart.write().await;
    let cart = store.add_item(&cart_id, &req.sku, &req.name, req.price, req.quantity)?;

    info!(
        cart_id = %cart_id,
        sku = %req.sku,
        item_count = cart.items.len(),
        cart_total = %cart.total.amount,
        "Item added successfully"
    );

    Ok(Json(cart))
}

/// Handler for PUT /cart/:cart_id/items/:item_id
///
/// Overwrites an item's quantity.
pub async fn update_quantity_handler(
    State(state): State<AppState>,
    Path((cart_id, item_id)): Path<(String, String)>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<Cart>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CartError::Validation(error_msg));
    }

    info!(
        cart_id = %cart_id,
        item_id = %item_id,
        new_quantity = req.quantity,
        "Updating item quantity"
    );

    let mut store = state.cart.write().await;
    let cart = store.update_quantity(&cart_id, &item_id, req.quantity)?;

    info!(
        cart_id = %cart_id,
        item_id = %item_id,
        cart_total = %cart.total.amount,
        "Item quantity updated successfully"
    );

    Ok(Json(cart))
}

/// Handler for DELETE /cart/:cart_id/items/:item_id
///
/// Removes an item from the cart.
pub async fn remove_item_handler(
    State(state): State<AppState>,
    Path((cart_id, item_id)): Path<(String, String)>,
) -> Result<Json<Cart>> {
    info!(cart_id = %cart_id, item_id = %item_id, "Removing item from cart");

    let mut store = state.cart.write().await;
    let cart = store.remove_item(&cart_id, &item_id)?;

    info!(
        cart_id = %cart_id,
        item_id = %item_id,
        remaining_items = cart.items.len(),
        cart_total = %cart.total.amount,
        "Item removed successfully"
    );

    Ok(Json(cart))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ManualClock;
    use rust_decimal_macros::dec;

    fn test_state() -> (AppState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000_000));
        let state = AppState::new(CartStore::new(900, clock.clone()));
        (state, clock)
    }

    #[tokio::test]
    async fn test_create_and_get_cart() {
        let (state, _clock) = test_state();

        let (status, Json(created)) =
            create_cart_handler(State(state.clone()), Some(Json(CreateCartRequest::default())))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.cart_id.len(), 12);

        let result = get_cart_handler(State(state), Path(created.cart_id.clone())).await;
        let cart = result.unwrap();
        assert_eq!(cart.cart_id, created.cart_id);
        assert_eq!(cart.currency, "USD");
        assert!(cart.items.is_empty());
    }

    #[tokio::test]
    async fn test_create_cart_without_body() {
        let (state, _clock) = test_state();

        let result = create_cart_handler(State(state), None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_cart_blank_currency_rejected() {
        let (state, _clock) = test_state();

        let req = CreateCartRequest {
            currency: Some("  ".to_string()),
        };
        let result = create_cart_handler(State(state), Some(Json(req))).await;
        assert!(matches!(result, Err(CartError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_cart() {
        let (state, _clock) = test_state();

        let result = get_cart_handler(State(state), Path("000000000000".to_string())).await;
        assert!(matches!(result, Err(CartError::CartNotFound { .. })));
    }

    #[tokio::test]
    async fn test_add_item_and_totals() {
        let (state, _clock) = test_state();

        let (_, Json(created)) =
            create_cart_handler(State(state.clone()), None).await.unwrap();

        let req = AddItemRequest {
            sku: "SKU-1".to_string(),
            name: "Widget".to_string(),
            price: dec!(10.00),
            quantity: 1,
        };
        let cart = add_item_handler(State(state), Path(created.cart_id), Json(req))
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.subtotal.amount, dec!(10.00));
        assert_eq!(cart.tax.amount, dec!(1.00));
        assert_eq!(cart.total.amount, dec!(11.00));
    }

    #[tokio::test]
    async fn test_add_item_invalid_request() {
        let (state, _clock) = test_state();

        let (_, Json(created)) =
            create_cart_handler(State(state.clone()), None).await.unwrap();

        let req = AddItemRequest {
            sku: "SKU-1".to_string(),
            name: "Widget".to_string(),
            price: dec!(-1.00),
            quantity: 1,
        };
        let result = add_item_handler(State(state), Path(created.cart_id), Json(req)).await;
        assert!(matches!(result, Err(CartError::Validation(_))));
    }

    #[tokio::test]
    async fn test_expired_cart_returns_expired_error() {
        let (state, clock) = test_state();

        let (_, Json(created)) =
            create_cart_handler(State(state.clone()), None).await.unwrap();

        clock.advance(900 * 1000 + 1);

        let result = get_cart_handler(State(state), Path(created.cart_id)).await;
        assert!(matches!(result, Err(CartError::ContextExpired { .. })));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "ok");
    }
}
