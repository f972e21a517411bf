//! Request and Response models for the cart service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AddItemRequest, CreateCartRequest, UpdateQuantityRequest};
pub use responses::{CreateCartResponse, ErrorResponse, HealthResponse};
