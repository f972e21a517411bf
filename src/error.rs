//! Error types for the cart service
//!
//! Provides unified error handling using thiserror. Each error kind carries
//! a stable machine-readable code alongside its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cart Error Enum ==
/// Unified error type for the cart service.
#[derive(Error, Debug)]
pub enum CartError {
    /// Cart context missing from the store
    #[error("Cart not found")]
    CartNotFound { cart_id: String },

    /// Line item missing from the cart
    #[error("Item not found")]
    ItemNotFound { item_id: String },

    /// Cart context past its TTL
    #[error("Cart context expired")]
    ContextExpired { cart_id: String, expired_at: u64 },

    /// Request data failed validation
    #[error("{0}")]
    Validation(String),

    /// Cart already holds the maximum number of distinct SKUs
    #[error("Cart cannot contain more than {max_items} unique items")]
    CartFull {
        cart_id: String,
        item_count: usize,
        max_items: usize,
    },

    /// Identifier generation exhausted its retry budget
    #[error("Failed to generate unique cart ID after {attempts} attempts")]
    IdGenerationExhausted { attempts: u32 },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CartError {
    /// Stable machine-readable code for each error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CartError::CartNotFound { .. } | CartError::ItemNotFound { .. } => "NOT_FOUND",
            CartError::ContextExpired { .. } => "CONTEXT_EXPIRED",
            CartError::Validation(_) | CartError::CartFull { .. } => "VALIDATION_ERROR",
            CartError::IdGenerationExhausted { .. } => "RESOURCE_EXHAUSTED",
            CartError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Structured context identifying the offending entity, if any.
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CartError::CartNotFound { cart_id } => Some(json!({ "cartId": cart_id })),
            CartError::ItemNotFound { item_id } => Some(json!({ "itemId": item_id })),
            CartError::ContextExpired {
                cart_id,
                expired_at,
            } => Some(json!({ "cartId": cart_id, "expiredAt": expired_at })),
            CartError::CartFull {
                cart_id,
                item_count,
                ..
            } => Some(json!({ "cartId": cart_id, "currentItemCount": item_count })),
            _ => None,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let status = match &self {
            CartError::CartNotFound { .. } | CartError::ItemNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CartError::ContextExpired { .. } => StatusCode::GONE,
            CartError::Validation(_) | CartError::CartFull { .. } => StatusCode::BAD_REQUEST,
            CartError::IdGenerationExhausted { .. } | CartError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse::new(self.code(), self.to_string(), self.details());

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cart service.
pub type Result<T> = std::result::Result<T, CartError>;
