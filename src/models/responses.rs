//! Response DTOs for the cart service API
//!
//! Defines the structure of outgoing HTTP response bodies. The full cart
//! view serializes directly; the DTOs here cover the remaining endpoints.

use serde::Serialize;

use crate::cart::NewContext;

/// Response body for cart creation (POST /cart/create)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartResponse {
    /// Identifier of the new cart
    pub cart_id: String,
    /// Expiry of the cart context, Unix milliseconds
    pub expires_at: u64,
}

impl From<NewContext> for CreateCartResponse {
    fn from(created: NewContext) -> Self {
        Self {
            cart_id: created.cart_id,
            expires_at: created.expires_at,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "ok")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Structured context (offending identifiers etc.), when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}
