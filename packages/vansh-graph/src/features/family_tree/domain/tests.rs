//! Domain model tests

use super::*;
use crate::shared::models::{Member, SerialKey};

fn node(ser: i64, children: Vec<FamilyTreeNode>) -> FamilyTreeNode {
    FamilyTreeNode {
        primary: Member::with_ser_no(ser),
        spouse: None,
        children,
    }
}

fn sample_tree() -> FamilyTree {
    // 1 ─┬─ 2 ── 4
    //    └─ 3
    FamilyTree {
        vansh: Some("v".into()),
        root: Some(node(1, vec![node(2, vec![node(4, vec![])]), node(3, vec![])])),
        diagnostics: TreeDiagnostics::default(),
    }
}

#[test]
fn test_node_count_and_depth() {
    let tree = sample_tree();
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.max_depth(), 3);
    assert!(!tree.is_empty());
}

#[test]
fn test_serials_pre_order() {
    let tree = sample_tree();
    let expected: Vec<SerialKey> = vec![1.into(), 2.into(), 4.into(), 3.into()];
    assert_eq!(tree.serials(), expected);
}

#[test]
fn test_find_and_contains() {
    let tree = sample_tree();
    let two = tree.find(&SerialKey::Numeric(2)).unwrap();
    assert_eq!(two.children.len(), 1);
    assert!(tree.contains(&SerialKey::Numeric(4)));
    assert!(!tree.contains(&SerialKey::Numeric(9)));
}

#[test]
fn test_walk_reports_depth() {
    let tree = sample_tree();
    let mut depths = Vec::new();
    tree.root.as_ref().unwrap().walk(&mut |n, d| {
        depths.push((n.ser_no().cloned().unwrap(), d));
    });
    assert_eq!(depths[2], (SerialKey::Numeric(4), 2));
    assert_eq!(depths[3], (SerialKey::Numeric(3), 1));
}

#[test]
fn test_empty_tree() {
    let tree = FamilyTree::empty(None);
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree.max_depth(), 0);
    assert!(tree.serials().is_empty());
    assert!(tree.diagnostics.is_lossless());
}

#[test]
fn test_diagnostics_lossless_flag() {
    let mut diag = TreeDiagnostics::default();
    assert!(diag.is_lossless());
    diag.unreachable.push(SerialKey::Numeric(7));
    assert!(!diag.is_lossless());
}

#[test]
fn test_layout_settings_defaults_from_partial_yaml() {
    let settings: LayoutSettings = serde_yaml::from_str("unit_width: 120.0").unwrap();
    assert_eq!(settings.unit_width, 120.0);
    assert_eq!(settings.level_height, LayoutSettings::default().level_height);
}

#[test]
fn test_line_segment_orientation() {
    assert!(LineSegment::new(1.0, 0.0, 1.0, 5.0).is_vertical());
    assert!(LineSegment::new(0.0, 2.0, 5.0, 2.0).is_horizontal());
}
