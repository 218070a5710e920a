//! Normalization infrastructure
//!
//! - `ingest`: raw document → `Member`
//! - `deduplicator`: merge + collapse duplicates

pub mod deduplicator;
pub mod ingest;

pub use deduplicator::{
    deduplicate, deduplicate_raw, deduplicate_raw_with_stats, merge_records, DedupStats,
};
pub use ingest::ingest_record;
