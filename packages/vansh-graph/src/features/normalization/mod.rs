//! Normalization - Record Normalizer / Deduplicator
//!
//! Turns a heterogeneous, possibly duplicated list of raw member documents
//! into one canonical [`Member`](crate::shared::models::Member) per person.
//!
//! # Architecture
//!
//! ```text
//! raw Value ──ingest_record──▶ Member ──identity_key──▶ merge_records ──▶ Vec<Member>
//! ```
//!
//! Malformed documents are skipped silently; id coercion is best-effort.

pub mod domain;
pub mod infrastructure;

pub use domain::{completeness_score, identity_key, is_present};
pub use infrastructure::{
    deduplicate, deduplicate_raw, deduplicate_raw_with_stats, ingest_record, merge_records,
    DedupStats,
};
