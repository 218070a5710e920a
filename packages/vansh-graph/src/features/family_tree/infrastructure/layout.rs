//! Tidy layout for a built family tree
//!
//! The tree is flattened into pre-order first, then two passes run over
//! the flat list:
//! 1. Measure (reverse order): width in units, leaf = 1, internal = sum of
//!    child widths
//! 2. Place (forward order): each node is centered over its span; the
//!    children block is centered inside the parent's span
//!
//! Connectors are straight segments. One child gets a single vertical line;
//! several children share a horizontal bus below the parent.

use tracing::debug;

use crate::features::family_tree::domain::{
    FamilyTreeNode, LayoutSettings, LineSegment, PositionedNode, TreeLayout,
};

/// One node in pre-order, with the flat indices of its children
struct Slot<'t> {
    node: &'t FamilyTreeNode,
    depth: usize,
    children: Vec<usize>,
}

fn flatten(root: &FamilyTreeNode) -> Vec<Slot<'_>> {
    let mut slots: Vec<Slot<'_>> = Vec::new();
    let mut stack: Vec<(Option<usize>, &FamilyTreeNode, usize)> = vec![(None, root, 0)];

    while let Some((parent, node, depth)) = stack.pop() {
        let idx = slots.len();
        slots.push(Slot {
            node,
            depth,
            children: Vec::with_capacity(node.children.len()),
        });
        if let Some(p) = parent {
            slots[p].children.push(idx);
        }
        stack.extend(node.children.iter().rev().map(|c| (Some(idx), c, depth + 1)));
    }
    slots
}

/// Children always sit after their parent, so one reverse sweep suffices
fn measure(slots: &[Slot<'_>]) -> Vec<usize> {
    let mut units = vec![1; slots.len()];
    for idx in (0..slots.len()).rev() {
        let children = &slots[idx].children;
        let sum: usize = children.iter().map(|&c| units[c]).sum();
        units[idx] = sum.max(children.len()).max(1);
    }
    units
}

/// Compute coordinates and connectors for `root`
///
/// An absent root yields an empty layout.
pub fn layout_tree(root: Option<&FamilyTreeNode>, settings: &LayoutSettings) -> TreeLayout {
    let Some(root) = root else {
        return TreeLayout::default();
    };

    let s = settings;
    let slots = flatten(root);
    let units = measure(&slots);

    // left edge of each span, in units
    let mut offsets = vec![0.0; slots.len()];
    let mut xs = vec![0.0; slots.len()];
    let mut nodes = Vec::with_capacity(slots.len());
    let mut max_depth = 0;

    for (idx, slot) in slots.iter().enumerate() {
        let x = (offsets[idx] + units[idx] as f64 / 2.0) * s.unit_width;
        xs[idx] = x;
        max_depth = max_depth.max(slot.depth);

        nodes.push(PositionedNode {
            ser_no: slot.node.ser_no().cloned(),
            label: slot.node.primary.display_name(),
            spouse_label: slot.node.spouse.as_ref().map(|sp| sp.display_name()),
            x,
            y: slot.depth as f64 * s.level_height,
            depth: slot.depth,
            units: units[idx],
        });

        let block: usize = slot.children.iter().map(|&c| units[c]).sum();
        let mut cursor = offsets[idx] + (units[idx] as f64 - block as f64) / 2.0;
        for &c in &slot.children {
            offsets[c] = cursor;
            cursor += units[c] as f64;
        }
    }

    let mut connectors = Vec::new();
    for (idx, slot) in slots.iter().enumerate() {
        let child_xs: Vec<f64> = slot.children.iter().map(|&c| xs[c]).collect();
        let y = slot.depth as f64 * s.level_height;
        connect(&mut connectors, s, xs[idx], y, &child_xs, y + s.level_height);
    }

    let layout = TreeLayout {
        width: units[0] as f64 * s.unit_width,
        height: max_depth as f64 * s.level_height + s.node_height,
        nodes,
        connectors,
    };
    debug!(
        "layout_tree: {} nodes, {} connectors, {}x{}",
        layout.nodes.len(),
        layout.connectors.len(),
        layout.width,
        layout.height
    );
    layout
}

fn connect(
    out: &mut Vec<LineSegment>,
    settings: &LayoutSettings,
    x: f64,
    y: f64,
    child_xs: &[f64],
    child_y: f64,
) {
    let bottom = y + settings.node_height;
    match child_xs {
        [] => {}
        [only] => out.push(LineSegment::new(x, bottom, *only, child_y)),
        [first, .., last] => {
            let bus = bottom + settings.bus_gap;
            out.push(LineSegment::new(x, bottom, x, bus));
            out.push(LineSegment::new(*first, bus, *last, bus));
            for cx in child_xs {
                out.push(LineSegment::new(*cx, bus, *cx, child_y));
            }
        }
    }
}
