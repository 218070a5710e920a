//! Core Domain Models

use serde::{Deserialize, Serialize};

use crate::shared::models::{Member, SerialKey};

/// Node in the family tree hierarchy
///
/// # Invariants
///
/// 1. `primary.ser_no` is always `Some`
/// 2. `spouse` is decoration only; it contributes no children
/// 3. No serial appears as `primary` twice in one tree
///
/// Traversal, building, layout and drop are iterative. The derived `Clone`,
/// `PartialEq` and serde impls still recurse once per generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyTreeNode {
    pub primary: Member,
    pub spouse: Option<Member>,
    pub children: Vec<FamilyTreeNode>,
}

impl FamilyTreeNode {
    pub fn new(primary: Member) -> Self {
        Self {
            primary,
            spouse: None,
            children: Vec::new(),
        }
    }

    pub fn ser_no(&self) -> Option<&SerialKey> {
        self.primary.ser_no.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes in this subtree, self included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_, _| count += 1);
        count
    }

    /// Depth of the deepest node below (leaf = 0)
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        self.walk(&mut |_, depth| deepest = deepest.max(depth));
        deepest
    }

    /// Pre-order walk
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a FamilyTreeNode, usize)) {
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
        }
    }

    pub fn find(&self, ser_no: &SerialKey) -> Option<&FamilyTreeNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.ser_no() == Some(ser_no) {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

impl Drop for FamilyTreeNode {
    // Drains descendants into a work list; drop depth stays constant
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Root candidate considered during root selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootCandidate {
    pub ser_no: SerialKey,
    /// Members reachable below the candidate
    pub descendant_count: usize,
    pub level: Option<i64>,
}

/// What the single-root render policy left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDiagnostics {
    /// Every candidate, list order
    pub root_candidates: Vec<RootCandidate>,
    pub chosen_root: Option<SerialKey>,
    /// Candidates not rendered anywhere (neither primary nor spouse)
    pub dropped_roots: Vec<SerialKey>,
    /// Other members with a serial that were not rendered
    pub unreachable: Vec<SerialKey>,
    /// Members without a serial (never part of the hierarchy)
    pub without_serial: usize,
}

impl TreeDiagnostics {
    /// True when every member with a serial made it into the tree
    pub fn is_lossless(&self) -> bool {
        self.dropped_roots.is_empty() && self.unreachable.is_empty()
    }
}

/// Single-rooted tree for one vansh partition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyTree {
    pub vansh: Option<String>,
    /// None for an empty partition or when no root candidate exists
    pub root: Option<FamilyTreeNode>,
    pub diagnostics: TreeDiagnostics,
}

impl FamilyTree {
    pub fn empty(vansh: Option<String>) -> Self {
        Self {
            vansh,
            root: None,
            diagnostics: TreeDiagnostics::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map(|r| r.node_count()).unwrap_or(0)
    }

    /// Number of generations rendered (0 for an empty tree)
    pub fn max_depth(&self) -> usize {
        self.root.as_ref().map(|r| r.height() + 1).unwrap_or(0)
    }

    pub fn contains(&self, ser_no: &SerialKey) -> bool {
        self.find(ser_no).is_some()
    }

    pub fn find(&self, ser_no: &SerialKey) -> Option<&FamilyTreeNode> {
        self.root.as_ref().and_then(|r| r.find(ser_no))
    }

    /// Primary serials in pre-order
    pub fn serials(&self) -> Vec<SerialKey> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.walk(&mut |node, _| {
                if let Some(s) = node.ser_no() {
                    out.push(s.clone());
                }
            });
        }
        out
    }
}
