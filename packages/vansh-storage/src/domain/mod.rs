//! Domain layer for the member source port
//!
//! # Domain Models
//!
//! - `MemberBatch`: one bulk read of raw member documents
//!
//! # Port Trait
//!
//! - `MemberSource`: fetch-by-vansh abstraction over a document store
//!
//! Documents are handed over as raw `serde_json::Value`s. Field reconciliation
//! (serial-number aliases, boxed numerics, legacy flattened fields) belongs to
//! the consumer, not to this crate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vansh_storage::{InMemoryMemberSource, MemberSource};
//!
//! async fn example(source: impl MemberSource) -> vansh_storage::Result<()> {
//!     let batch = source.fetch_vansh("12").await?;
//!     println!("{} records fetched at {}", batch.len(), batch.fetched_at);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, StorageError};

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// One bulk read of raw member documents
///
/// `vansh` is `None` for an unscoped read (`fetch_all`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberBatch {
    /// Requested partition (None = all partitions)
    pub vansh: Option<String>,
    /// Read timestamp
    pub fetched_at: DateTime<Utc>,
    /// Raw documents, in store order
    pub records: Vec<Value>,
}

impl MemberBatch {
    /// Create a new batch stamped with the current time
    pub fn new(vansh: Option<String>, records: Vec<Value>) -> Self {
        Self {
            vansh,
            fetched_at: Utc::now(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read the vansh of a raw document
///
/// Looks at top-level `vansh` first, then `personalDetails.vansh`. Strings
/// are trimmed; numbers are rendered in decimal. Empty values yield `None`.
pub fn record_vansh(record: &Value) -> Option<String> {
    let top = record.get("vansh");
    let nested = record.get("personalDetails").and_then(|d| d.get("vansh"));

    [top, nested]
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Case-insensitive vansh comparison (trimmed)
pub fn vansh_matches(record: &Value, vansh: &str) -> bool {
    record_vansh(record)
        .map(|v| v.to_lowercase() == vansh.trim().to_lowercase())
        .unwrap_or(false)
}

/// Distinct vansh values in first-seen order
pub fn distinct_vanshes(records: &[Value]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for vansh in records.iter().filter_map(record_vansh) {
        if seen.insert(vansh.to_lowercase()) {
            out.push(vansh);
        }
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait: MemberSource
// ═══════════════════════════════════════════════════════════════════════════

/// Bulk member read abstraction
///
/// # Core Operations
///
/// - `fetch_vansh`: all documents of one partition, in store order
/// - `fetch_all`: every document
/// - `list_vanshes`: distinct partitions present
///
/// No filtering beyond the vansh partition, no pagination: the consumer
/// receives the whole partition in one batch.
///
/// # Implementations
///
/// - `InMemoryMemberSource`: fixed document list
/// - `JsonExportSource`: document-store export file (JSON array or JSON lines)
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Fetch every document whose vansh matches (case-insensitive)
    ///
    /// An unknown vansh yields an empty batch, not an error.
    async fn fetch_vansh(&self, vansh: &str) -> Result<MemberBatch>;

    /// Fetch every document
    async fn fetch_all(&self) -> Result<MemberBatch>;

    /// List distinct vansh values, first-seen order
    async fn list_vanshes(&self) -> Result<Vec<String>>;

    /// Like `fetch_vansh`, but an empty partition is an error
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::VanshNotFound` when no document matches
    async fn fetch_vansh_required(&self, vansh: &str) -> Result<MemberBatch> {
        let batch = self.fetch_vansh(vansh).await?;
        if batch.is_empty() {
            return Err(StorageError::vansh_not_found(vansh));
        }
        Ok(batch)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
