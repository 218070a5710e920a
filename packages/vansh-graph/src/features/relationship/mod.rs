//! Relationship Feature
//!
//! "How are we related" lookups within one vansh partition, driven purely by
//! serial backlinks. Labels are gendered when the related member's gender is
//! known.

pub mod domain;
pub mod infrastructure;

pub use domain::{RelatedMember, Relation};
pub use infrastructure::{resolve_relationship, RelationshipResolver};
