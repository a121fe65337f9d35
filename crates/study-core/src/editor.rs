//! Structural mutation of variations: create, promote, delete.

use tracing::debug;

use crate::error::TreeError;
use crate::node::{MoveData, NodeId};
use crate::tree::GameTree;

/// Attach a new variation chain at `at`. Rejected without mutation when
/// `at` is no longer part of the tree.
pub fn create_variation(
    tree: &mut GameTree,
    at: NodeId,
    moves: &[MoveData],
) -> Result<Vec<NodeId>, TreeError> {
    let created = tree.add_variation_at(at, moves)?;
    debug!(at = %at, count = created.len(), "created variation");
    Ok(created)
}

/// Make `variation` the mainline at its branch point, demoting the old
/// mainline continuation to the first variation slot. Returns `false`
/// (and does nothing) when the node is not actually a variation of its
/// parent.
pub fn promote(tree: &mut GameTree, variation: NodeId) -> bool {
    let Some(parent_id) = tree.node(variation).and_then(|n| n.parent) else {
        return false;
    };
    if !tree.is_variation(variation) {
        return false;
    }

    let mut demoted = None;
    if let Some(parent) = tree.node_mut(parent_id) {
        parent.variations.retain(|&v| v != variation);
        demoted = parent.mainline_child.replace(variation);
        if let Some(old) = demoted {
            // The old mainline takes the first variation slot.
            parent.variations.insert(0, old);
        }
    }
    debug!(variation = %variation, demoted = ?demoted, "promoted variation to mainline");
    true
}

/// Remove a variation and release its whole subtree, returning how many
/// nodes were released. The root and mainline continuations are rejected;
/// deleting a mainline requires promoting an alternative first.
pub fn delete(tree: &mut GameTree, node: NodeId) -> Result<usize, TreeError> {
    let parent_id = match tree.node(node) {
        None => return Err(TreeError::UnknownNode),
        Some(n) => match n.parent {
            None => return Err(TreeError::DeleteRoot),
            Some(p) => p,
        },
    };
    if !tree.is_variation(node) {
        return Err(TreeError::DeleteMainline);
    }

    if let Some(parent) = tree.node_mut(parent_id) {
        parent.variations.retain(|&v| v != node);
    }
    let released = tree.release_subtree(node);
    debug!(node = %node, released, "deleted variation");
    Ok(released)
}
