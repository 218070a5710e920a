//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Pure models and rules (no tracing, no I/O)
//! - infrastructure/ - Algorithms over the domain models

// Record Normalizer / Deduplicator
pub mod normalization;

// Tree Builder + Layout
pub mod family_tree;

// Relationship Resolver
pub mod relationship;
