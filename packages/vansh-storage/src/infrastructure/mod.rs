//! Infrastructure layer - Member source adapters
//!
//! - `memory`: fixed in-process document list
//! - `json_export`: document-store export file

pub mod memory;

#[cfg(feature = "json-export")]
pub mod json_export;

pub use memory::InMemoryMemberSource;

#[cfg(feature = "json-export")]
pub use json_export::JsonExportSource;
