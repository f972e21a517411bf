//! API Module
//!
//! HTTP handlers and routing for the cart service REST API.
//!
//! # Endpoints
//! - `POST /cart/create` - Create a new cart context
//! - `GET /cart/:cart_id` - Get a cart with computed totals
//! - `POST /cart/:cart_id/items` - Add an item to a cart
//! - `PUT /cart/:cart_id/items/:item_id` - Update an item's quantity
//! - `DELETE /cart/:cart_id/items/:item_id` - Remove an item
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
