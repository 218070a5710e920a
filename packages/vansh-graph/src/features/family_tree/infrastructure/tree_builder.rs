//! Tree Builder - child-driven construction of a single-rooted family tree
//!
//! Father backlinks (`father_ser_no`) are the only hierarchy signal; explicit
//! children lists are ignored here because they go stale.
//!
//! # Algorithm
//! 1. Index members by serial and group them by father serial (O(N))
//! 2. Root candidates: members whose father is absent or unresolvable (O(N))
//! 3. More than one candidate: keep the one with the most descendants
//!    (ties: lower `level`, then list order) (O(N) per candidate)
//! 4. DFS from the chosen root with an explicit `visited` set; spouses are
//!    attached as payload, external branches are not descended into (O(N))
//! 5. Everything not reached is reported in `TreeDiagnostics`
//!
//! The builder holds no state between calls and is safe to share across threads.

use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::features::family_tree::domain::{
    BranchPolicy, FamilyTree, FamilyTreeNode, RootCandidate, SurnameBranchPolicy, TreeDiagnostics,
};
use crate::shared::models::{Member, SerialKey};

/// Tree builder for one vansh partition
///
/// # Example
/// ```ignore
/// let builder = FamilyTreeBuilder::new();
/// let tree = builder.build(&members);
/// if let Some(root) = &tree.root {
///     println!("{} generations", tree.max_depth());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FamilyTreeBuilder<P = SurnameBranchPolicy> {
    policy: P,
}

impl FamilyTreeBuilder<SurnameBranchPolicy> {
    /// Builder with the default family-surname policy
    pub fn new() -> Self {
        Self {
            policy: SurnameBranchPolicy::default(),
        }
    }
}

impl<P: BranchPolicy> FamilyTreeBuilder<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Build the tree for an already deduplicated, single-vansh member set
    pub fn build(&self, members: &[Member]) -> FamilyTree {
        self.build_for(None, members)
    }

    /// Same as `build`, tagging the result with its vansh
    pub fn build_for(&self, vansh: Option<String>, members: &[Member]) -> FamilyTree {
        if members.is_empty() {
            debug!("build: empty partition");
            return FamilyTree::empty(vansh);
        }

        info!("build: building tree from {} members", members.len());

        let graph = MemberGraph::new(members);
        let candidates = self.root_candidates(&graph);
        debug!("build: {} root candidates", candidates.len());

        let Some(chosen) = select_root(&candidates) else {
            warn!("build: no root candidate among {} members", members.len());
            let mut tree = FamilyTree::empty(vansh);
            tree.diagnostics = graph.diagnostics(
                candidates.iter().map(|c| c.candidate.clone()).collect(),
                None,
                &HashSet::new(),
                &HashSet::new(),
            );
            return tree;
        };

        let mut visited: HashSet<SerialKey> = HashSet::new();
        let mut spouses: HashSet<SerialKey> = HashSet::new();
        let root = self.build_subtree(&graph, chosen.index, &mut visited, &mut spouses);

        let diagnostics = graph.diagnostics(
            candidates.iter().map(|c| c.candidate.clone()).collect(),
            Some(chosen.candidate.ser_no.clone()),
            &visited,
            &spouses,
        );
        if !diagnostics.dropped_roots.is_empty() || !diagnostics.unreachable.is_empty() {
            warn!(
                "build: single-root policy dropped {} roots and {} unreachable members",
                diagnostics.dropped_roots.len(),
                diagnostics.unreachable.len()
            );
        }

        let tree = FamilyTree {
            vansh,
            root,
            diagnostics,
        };
        info!(
            "build: completed tree with {} nodes rooted at {}",
            tree.node_count(),
            chosen.candidate.ser_no
        );
        tree
    }

    fn root_candidates(&self, graph: &MemberGraph<'_>) -> Vec<IndexedCandidate> {
        let mut seen: HashSet<&SerialKey> = HashSet::new();
        let mut out = Vec::new();

        for (idx, member) in graph.members.iter().enumerate() {
            let Some(ser_no) = member.ser_no.as_ref() else {
                continue;
            };
            let father_resolves = member
                .father_ser_no
                .as_ref()
                .map(|f| graph.by_serial.contains_key(f))
                .unwrap_or(false);
            if father_resolves || !seen.insert(ser_no) {
                continue;
            }
            out.push(IndexedCandidate {
                index: idx,
                candidate: RootCandidate {
                    ser_no: ser_no.clone(),
                    descendant_count: self.count_descendants(graph, idx),
                    level: member.level,
                },
            });
        }
        out
    }

    /// Members reachable below `idx` under the same discovery rule as `build_subtree`
    fn count_descendants(&self, graph: &MemberGraph<'_>, idx: usize) -> usize {
        let mut visited: HashSet<&SerialKey> = HashSet::new();
        let mut stack = vec![idx];
        let mut count = 0;

        while let Some(current) = stack.pop() {
            let member = &graph.members[current];
            let Some(ser_no) = member.ser_no.as_ref() else {
                continue;
            };
            if !visited.insert(ser_no) {
                continue;
            }
            if current != idx {
                count += 1;
            }
            if self.policy.is_external_branch(member) {
                continue;
            }
            stack.extend(graph.children_of(ser_no).iter().rev());
        }
        count
    }

    /// Pre-order DFS with an explicit frame stack; a node is attached to its
    /// parent once all of its children are done
    fn build_subtree(
        &self,
        graph: &MemberGraph<'_>,
        root: usize,
        visited: &mut HashSet<SerialKey>,
        spouses: &mut HashSet<SerialKey>,
    ) -> Option<FamilyTreeNode> {
        let mut stack = vec![self.enter(graph, root, visited, spouses)?];

        while let Some((_, pending)) = stack.last_mut() {
            if let Some(child) = pending.next().copied() {
                if let Some(frame) = self.enter(graph, child, visited, spouses) {
                    stack.push(frame);
                }
                continue;
            }

            let Some((node, _)) = stack.pop() else {
                break;
            };
            match stack.last_mut() {
                Some((parent, _)) => parent.children.push(node),
                None => return Some(node),
            }
        }
        None
    }

    /// Claim `idx` and return its node plus the children still to visit
    fn enter<'g>(
        &self,
        graph: &'g MemberGraph<'_>,
        idx: usize,
        visited: &mut HashSet<SerialKey>,
        spouses: &mut HashSet<SerialKey>,
    ) -> Option<(FamilyTreeNode, std::slice::Iter<'g, usize>)> {
        let member = &graph.members[idx];
        let ser_no = member.ser_no.as_ref()?;
        if !visited.insert(ser_no.clone()) {
            return None;
        }

        let spouse = member
            .spouse_ser_no
            .as_ref()
            .filter(|s| *s != ser_no)
            .and_then(|s| graph.get(s))
            .cloned();
        if let Some(s) = spouse.as_ref().and_then(|s| s.ser_no.clone()) {
            spouses.insert(s);
        }

        let children: &'g [usize] = if self.policy.is_external_branch(member) {
            debug!("build: {} is an external branch, children not traversed", ser_no);
            &[]
        } else {
            graph.children_of(ser_no)
        };

        let node = FamilyTreeNode {
            primary: member.clone(),
            spouse,
            children: Vec::new(),
        };
        Some((node, children.iter()))
    }
}

/// Candidate plus its position in the member list
#[derive(Debug, Clone)]
struct IndexedCandidate {
    index: usize,
    candidate: RootCandidate,
}

/// Most descendants wins; ties go to the lower level, then to list order
fn select_root(candidates: &[IndexedCandidate]) -> Option<&IndexedCandidate> {
    let mut best: Option<&IndexedCandidate> = None;
    for c in candidates {
        best = match best {
            None => Some(c),
            Some(b) => {
                let more = c.candidate.descendant_count > b.candidate.descendant_count;
                let tie = c.candidate.descendant_count == b.candidate.descendant_count;
                if more || (tie && level_precedes(c.candidate.level, b.candidate.level)) {
                    Some(c)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

/// Known level beats unknown; lower beats higher
fn level_precedes(a: Option<i64>, b: Option<i64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Lookup tables over one member slice
struct MemberGraph<'a> {
    members: &'a [Member],
    /// First occurrence wins
    by_serial: HashMap<&'a SerialKey, usize>,
    /// father serial → child indices, list order
    children_by_father: HashMap<&'a SerialKey, Vec<usize>>,
}

impl<'a> MemberGraph<'a> {
    fn new(members: &'a [Member]) -> Self {
        let mut by_serial = HashMap::new();
        let mut children_by_father: HashMap<&'a SerialKey, Vec<usize>> = HashMap::new();

        for (idx, member) in members.iter().enumerate() {
            if let Some(ser_no) = &member.ser_no {
                by_serial.entry(ser_no).or_insert(idx);
            }
            if let Some(father) = &member.father_ser_no {
                children_by_father.entry(father).or_default().push(idx);
            }
        }

        Self {
            members,
            by_serial,
            children_by_father,
        }
    }

    fn get(&self, ser_no: &SerialKey) -> Option<&'a Member> {
        self.by_serial.get(ser_no).map(|&idx| &self.members[idx])
    }

    fn children_of(&self, ser_no: &SerialKey) -> &[usize] {
        self.children_by_father
            .get(ser_no)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn diagnostics(
        &self,
        root_candidates: Vec<RootCandidate>,
        chosen_root: Option<SerialKey>,
        visited: &HashSet<SerialKey>,
        spouses: &HashSet<SerialKey>,
    ) -> TreeDiagnostics {
        let rendered = |s: &SerialKey| visited.contains(s) || spouses.contains(s);

        let dropped_roots: Vec<SerialKey> = root_candidates
            .iter()
            .map(|c| c.ser_no.clone())
            .filter(|s| !rendered(s))
            .collect();

        let mut seen: HashSet<&SerialKey> = HashSet::new();
        let unreachable = self
            .members
            .iter()
            .filter_map(|m| m.ser_no.as_ref())
            .filter(|s| !rendered(s) && !dropped_roots.contains(s))
            .filter(|s| seen.insert(*s))
            .cloned()
            .collect();

        TreeDiagnostics {
            root_candidates,
            chosen_root,
            dropped_roots,
            unreachable,
            without_serial: self.members.iter().filter(|m| m.ser_no.is_none()).count(),
        }
    }
}
