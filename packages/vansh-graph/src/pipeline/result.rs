//! Pipeline result types

use serde::{Deserialize, Serialize};

use crate::features::family_tree::{FamilyTree, TreeLayout};
use crate::features::normalization::DedupStats;
use crate::shared::models::Member;

/// Counters for one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Raw documents received
    pub raw_records: usize,
    /// Canonical members after deduplication (all vanshes)
    pub members: usize,
    /// Members inside the requested vansh
    pub scoped_members: usize,
    /// Nodes rendered in the tree
    pub tree_nodes: usize,
}

impl PipelineStats {
    pub(crate) fn new(dedup: &DedupStats, scoped_members: usize, tree_nodes: usize) -> Self {
        Self {
            raw_records: dedup.input,
            members: dedup.output,
            scoped_members,
            tree_nodes,
        }
    }
}

/// Everything a renderer needs for one vansh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyView {
    pub vansh: String,
    /// Deduplicated members of the vansh, list order
    pub members: Vec<Member>,
    pub tree: FamilyTree,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<TreeLayout>,
    pub stats: PipelineStats,
}

impl FamilyView {
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
