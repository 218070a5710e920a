//! Usecase Layer - family views served from a member source
//!
//! Designed to be called by request handlers and the CLI; the core itself
//! stays synchronous.

pub mod family_view_service;

pub use family_view_service::FamilyViewService;
