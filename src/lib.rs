//! Cart Service - An in-memory shopping cart experience service
//!
//! Manages ephemeral cart contexts with TTL expiration and computed totals.

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_reclamation_task;
