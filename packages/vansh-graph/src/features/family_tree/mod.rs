//! Family Tree Feature
//!
//! Builds one single-rooted tree per vansh from father backlinks and
//! computes a tidy layout for it.
//!
//! # Architecture
//! ```text
//! family_tree/
//! ├── domain/           - Tree models, branch policy, partitioning, layout models
//! └── infrastructure/   - FamilyTreeBuilder, layout_tree
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{
    normalize_vansh, partition_by_vansh, scope_to_vansh, BranchPolicy, FamilyTree, FamilyTreeNode,
    LayoutSettings, LineSegment, NoExternalBranches, PositionedNode, RootCandidate,
    SurnameBranchPolicy, TreeDiagnostics, TreeLayout, DEFAULT_FAMILY_SURNAMES,
};
pub use infrastructure::{layout_tree, FamilyTreeBuilder};
