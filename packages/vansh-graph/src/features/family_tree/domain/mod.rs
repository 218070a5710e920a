//! Domain Models for the family tree
//!
//! Pure data and rules, no tracing.

pub mod layout;
pub mod models;
pub mod partition;
pub mod policy;

pub use layout::{LayoutSettings, LineSegment, PositionedNode, TreeLayout};
pub use models::{FamilyTree, FamilyTreeNode, RootCandidate, TreeDiagnostics};
pub use partition::{normalize_vansh, partition_by_vansh, scope_to_vansh};
pub use policy::{BranchPolicy, NoExternalBranches, SurnameBranchPolicy, DEFAULT_FAMILY_SURNAMES};

#[cfg(test)]
mod tests;
