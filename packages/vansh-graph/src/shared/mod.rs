//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! It depends on serde only; no tracing, no I/O.

pub mod models;

// Re-exports for convenience
pub use models::*;
