//! Configuration System
//!
//! One versioned YAML file covers the two knobs the core exposes:
//! - `branch`: which members count as an external branch
//! - `layout`: spacing used by the placement pass
//!
//! # Examples
//!
//! ```rust,ignore
//! use vansh_graph::config::FamilyTreeConfig;
//!
//! // Built-in behaviour
//! let config = FamilyTreeConfig::default();
//!
//! // Per-clan surnames and custom spacing
//! let config = FamilyTreeConfig::from_yaml("clan.yaml")?;
//! ```
//!
//! ```yaml
//! version: 1
//! branch:
//!   family_surnames: [Gogte, Gogate]
//!   female_genders: [female, f]
//! layout:
//!   unit_width: 200
//!   level_height: 150
//!   node_height: 80
//!   bus_gap: 30
//! ```

pub mod error;
pub mod family_tree_config;
pub mod io;

pub use error::{ConfigError, ConfigResult};
pub use family_tree_config::{BranchConfig, FamilyTreeConfig};
pub use io::{ConfigExportV1, SUPPORTED_VERSIONS};
