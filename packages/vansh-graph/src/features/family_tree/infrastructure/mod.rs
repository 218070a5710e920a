//! Family tree infrastructure

pub mod layout;
pub mod tree_builder;

pub use layout::layout_tree;
pub use tree_builder::FamilyTreeBuilder;
