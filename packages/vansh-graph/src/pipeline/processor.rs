//! FamilyPipeline - raw documents to a renderable family view
//!
//! # Stages
//! 1. Deduplicate every raw document into canonical members
//! 2. Scope to the requested vansh
//! 3. Build the single-rooted tree under the configured branch policy
//! 4. Optionally compute the layout
//!
//! Each call works on its own data; a pipeline can be shared across threads.

use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info};

use super::result::{FamilyView, PipelineStats};
use crate::config::FamilyTreeConfig;
use crate::features::family_tree::{
    layout_tree, scope_to_vansh, FamilyTreeBuilder, SurnameBranchPolicy,
};
use crate::features::normalization::deduplicate_raw_with_stats;
use crate::features::relationship::{RelatedMember, RelationshipResolver};
use crate::shared::models::{Member, SerialKey};

#[derive(Debug, Clone)]
pub struct FamilyPipeline {
    config: FamilyTreeConfig,
    builder: FamilyTreeBuilder<SurnameBranchPolicy>,
    compute_layout: bool,
}

impl Default for FamilyPipeline {
    fn default() -> Self {
        Self::new(FamilyTreeConfig::default())
    }
}

impl FamilyPipeline {
    pub fn new(config: FamilyTreeConfig) -> Self {
        let builder = FamilyTreeBuilder::with_policy(config.policy());
        Self {
            config,
            builder,
            compute_layout: true,
        }
    }

    /// Skip the layout stage (`FamilyView::layout` stays `None`)
    pub fn with_layout(mut self, enabled: bool) -> Self {
        self.compute_layout = enabled;
        self
    }

    pub fn config(&self) -> &FamilyTreeConfig {
        &self.config
    }

    /// Deduplicated members of one vansh
    pub fn scoped_members(&self, records: &[Value], vansh: &str) -> Vec<Member> {
        let (members, _) = deduplicate_raw_with_stats(records);
        scope_to_vansh(&members, vansh)
    }

    pub fn process(&self, records: &[Value], vansh: &str) -> FamilyView {
        let start = Instant::now();

        let (members, dedup) = deduplicate_raw_with_stats(records);
        let scoped = scope_to_vansh(&members, vansh);
        debug!(
            "process: {} raw, {} canonical, {} in vansh {}",
            dedup.input,
            dedup.output,
            scoped.len(),
            vansh
        );

        let tree = self.builder.build_for(Some(vansh.to_string()), &scoped);
        let layout = self
            .compute_layout
            .then(|| layout_tree(tree.root.as_ref(), &self.config.layout));

        let stats = PipelineStats::new(&dedup, scoped.len(), tree.node_count());
        info!(
            "process: vansh {} rendered {} of {} members in {:?}",
            vansh,
            stats.tree_nodes,
            stats.scoped_members,
            start.elapsed()
        );

        FamilyView {
            vansh: vansh.to_string(),
            members: scoped,
            tree,
            layout,
            stats,
        }
    }

    /// Relationship list for `focal`; `None` when it is not in the vansh
    pub fn relationships(
        &self,
        records: &[Value],
        vansh: &str,
        focal: &SerialKey,
    ) -> Option<Vec<RelatedMember>> {
        let scoped = self.scoped_members(records, vansh);
        let resolver = RelationshipResolver::new(&scoped);
        if !resolver.contains(focal) {
            debug!("relationships: {} not found in vansh {}", focal, vansh);
            return None;
        }
        Some(resolver.relationships_for(focal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::relationship::Relation;
    use serde_json::json;

    fn records() -> Vec<Value> {
        vec![
            json!({"serNo": 1, "vansh": "12", "childrenSerNos": [2, 3]}),
            json!({"serNo": "2", "fatherSerNo": 1, "vansh": "12"}),
            json!({"serNo": {"$numberLong": "3"}, "fatherSerNo": "1", "spouseSerNo": 4, "vansh": "12"}),
            json!({"serNo": 4, "spouseSerNo": 3, "vansh": "12"}),
            json!({"serNo": 2, "vansh": "12", "personalDetails": {"firstName": "Ravi"}}),
            json!({"serNo": 9, "vansh": "99"}),
            json!("not a record"),
        ]
    }

    #[test]
    fn test_process_end_to_end() {
        let view = FamilyPipeline::default().process(&records(), "12");

        assert_eq!(view.stats.raw_records, 7);
        assert_eq!(view.stats.members, 5);
        assert_eq!(view.stats.scoped_members, 4);
        assert_eq!(view.stats.tree_nodes, 3);

        let root = view.tree.root.as_ref().unwrap();
        assert_eq!(root.ser_no(), Some(&SerialKey::Numeric(1)));
        assert_eq!(root.children[0].primary.full_name(), "Ravi");

        let layout = view.layout.as_ref().unwrap();
        assert_eq!(layout.nodes.len(), 3);
    }

    #[test]
    fn test_process_without_layout() {
        let view = FamilyPipeline::default()
            .with_layout(false)
            .process(&records(), "12");
        assert!(view.layout.is_none());
    }

    #[test]
    fn test_unknown_vansh_is_empty() {
        let view = FamilyPipeline::default().process(&records(), "nope");
        assert!(view.is_empty());
        assert!(view.members.is_empty());
        assert_eq!(view.layout.map(|l| l.is_empty()), Some(true));
    }

    #[test]
    fn test_relationships() {
        let pipeline = FamilyPipeline::default();
        let related = pipeline
            .relationships(&records(), "12", &SerialKey::Numeric(2))
            .unwrap();
        let relations: Vec<Relation> = related.iter().map(|r| r.relation).collect();
        assert_eq!(relations, vec![Relation::Father, Relation::Sibling]);

        assert!(pipeline
            .relationships(&records(), "12", &SerialKey::Numeric(9))
            .is_none());
    }
}
