/*
 * Vansh Graph - Genealogy Core
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Member, SerialKey)
 * - features/    : Vertical slices (normalization → family_tree → relationship)
 * - pipeline/    : Orchestration (dedup → scope → build → layout)
 * - usecases/    : Async service over the member source port
 *
 * Guarantees:
 * - Pure, in-memory computation; no shared state between calls
 * - Malformed input degrades to a partial result, never an error
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (normalization, family tree, relationships)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system (versioned YAML)
pub mod config;

/// Error types
pub mod errors;

/// Usecase layer (FamilyViewService)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, FamilyTreeConfig};
pub use errors::{Result, VanshError};
pub use features::family_tree::{
    layout_tree, BranchPolicy, FamilyTree, FamilyTreeBuilder, FamilyTreeNode, LayoutSettings,
    SurnameBranchPolicy, TreeDiagnostics, TreeLayout,
};
pub use features::normalization::{deduplicate, deduplicate_raw, merge_records};
pub use features::relationship::{
    resolve_relationship, RelatedMember, Relation, RelationshipResolver,
};
pub use pipeline::{FamilyPipeline, FamilyView, PipelineStats};
pub use shared::models::{normalize_serial_key, Member, SerialKey};
pub use usecases::FamilyViewService;
