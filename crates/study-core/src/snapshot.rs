//! Structural snapshots for persistence by an external storage layer.
//!
//! A snapshot copies `move`/`comment`/`annotation`/`moveNumber`/
//! `isWhiteMove` and the child shape. Parent links are not encoded (they
//! would cycle); they are re-derived while rebuilding.

use serde::{Deserialize, Serialize};

use crate::node::{MoveNode, Nag, NodeId};
use crate::tree::GameTree;

/// One node of the exported tree shape. JSON keys match the established
/// study-export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    #[serde(rename = "move")]
    pub san: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Nag>,
    pub move_number: u32,
    pub is_white_move: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mainline_child: Option<Box<NodeSnapshot>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<NodeSnapshot>,
}

/// Export the tree. `None` for an empty tree.
pub fn to_snapshot(tree: &GameTree) -> Option<NodeSnapshot> {
    tree.root().and_then(|root| node_to_snapshot(tree, root))
}

fn node_to_snapshot(tree: &GameTree, id: NodeId) -> Option<NodeSnapshot> {
    let node = tree.node(id)?;
    Some(NodeSnapshot {
        san: node.san.clone(),
        comment: node.comment.clone(),
        annotation: node.nag,
        move_number: node.move_number,
        is_white_move: node.is_white,
        mainline_child: node
            .mainline_child
            .and_then(|child| node_to_snapshot(tree, child))
            .map(Box::new),
        variations: node
            .variations
            .iter()
            .filter_map(|&v| node_to_snapshot(tree, v))
            .collect(),
    })
}

/// Rebuild a tree from a snapshot. `None` rebuilds the empty tree.
pub fn from_snapshot(snapshot: Option<&NodeSnapshot>) -> GameTree {
    let mut tree = GameTree::new();
    if let Some(root) = snapshot {
        let id = build_node(&mut tree, root, None);
        tree.set_root(id);
    }
    tree
}

fn build_node(tree: &mut GameTree, snapshot: &NodeSnapshot, parent: Option<NodeId>) -> NodeId {
    let id = tree.alloc(MoveNode {
        san: snapshot.san.clone(),
        comment: snapshot.comment.clone(),
        nag: snapshot.annotation,
        move_number: snapshot.move_number,
        is_white: snapshot.is_white_move,
        parent,
        mainline_child: None,
        variations: Vec::new(),
    });
    for variation in &snapshot.variations {
        let vid = build_node(tree, variation, Some(id));
        if let Some(node) = tree.node_mut(id) {
            node.variations.push(vid);
        }
    }
    if let Some(child) = &snapshot.mainline_child {
        let cid = build_node(tree, child, Some(id));
        if let Some(node) = tree.node_mut(id) {
            node.mainline_child = Some(cid);
        }
    }
    id
}

/// Snapshot as a JSON string.
pub fn to_json(tree: &GameTree) -> Result<String, serde_json::Error> {
    serde_json::to_string(&to_snapshot(tree))
}

/// Tree from a JSON snapshot string.
pub fn from_json(json: &str) -> Result<GameTree, serde_json::Error> {
    let snapshot: Option<NodeSnapshot> = serde_json::from_str(json)?;
    Ok(from_snapshot(snapshot.as_ref()))
}
