//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Reclamation sweep: Evicts expired cart contexts at configured intervals

mod reclamation;

pub use reclamation::spawn_reclamation_task;
