//! vansh-storage - Member source port
//!
//! > The genealogy core never queries a database itself: it receives one
//! > partition of raw member documents per request.
//!
//! ## Core Principles
//!
//! 1. **Bulk read**: one call returns the whole vansh partition
//! 2. **Raw documents**: records are `serde_json::Value`, reconciliation happens downstream
//! 3. **Read-only**: no adapter mutates the store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vansh_storage::{JsonExportSource, MemberSource};
//!
//! let source = JsonExportSource::new("members.json");
//! let batch = source.fetch_vansh("12").await?;
//! for record in &batch.records {
//!     println!("{}", record);
//! }
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{record_vansh, vansh_matches, MemberBatch, MemberSource};

pub use infrastructure::InMemoryMemberSource;

#[cfg(feature = "json-export")]
pub use infrastructure::JsonExportSource;
