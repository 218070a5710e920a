//! Relationship infrastructure

pub mod resolver;

pub use resolver::{resolve_relationship, RelationshipResolver};
