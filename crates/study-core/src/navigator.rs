//! Read-only traversal: mainline extraction, depth queries, path lookup.

use crate::node::NodeId;
use crate::tree::GameTree;

/// The primary line: every node reachable from the root via
/// `mainline_child` links, in order. Empty tree yields an empty vec.
pub fn mainline(tree: &GameTree) -> Vec<NodeId> {
    let mut line = Vec::new();
    let mut current = tree.root();
    while let Some(id) = current {
        line.push(id);
        current = tree.node(id).and_then(|n| n.mainline_child);
    }
    line
}

/// All variation nodes at the given nesting depth, in depth-first order
/// (each node's variations are visited before its mainline continuation).
pub fn variations_at_depth(tree: &GameTree, depth: usize) -> Vec<NodeId> {
    let mut found = Vec::new();
    if let Some(root) = tree.root() {
        visit(tree, root, depth, &mut found);
    }
    found
}

fn visit(tree: &GameTree, id: NodeId, depth: usize, found: &mut Vec<NodeId>) {
    if tree.depth(id) == depth && tree.is_variation(id) {
        found.push(id);
    }
    let Some(node) = tree.node(id) else { return };
    for &variation in &node.variations {
        visit(tree, variation, depth, found);
    }
    if let Some(child) = node.mainline_child {
        visit(tree, child, depth, found);
    }
}

/// Follow a sequence of move tokens from the root: a token matching the
/// current node descends its mainline; otherwise a matching variation is
/// entered and followed along its own mainline.
///
/// Returns the continuation *after* the final matched token, so a fully
/// matched path that ends its line yields `None`, indistinguishable from
/// no match. Long-standing contract; callers treat `None` as "fall back
/// to the root".
pub fn find_by_path(tree: &GameTree, tokens: &[&str]) -> Option<NodeId> {
    let mut current = tree.root();
    for token in tokens {
        let id = current?;
        let node = tree.node(id)?;
        if node.san == *token {
            current = node.mainline_child;
            continue;
        }
        let matched = node.variations.iter().copied().find(|&v| {
            tree.node(v).is_some_and(|n| n.san == *token)
        })?;
        current = tree.node(matched)?.mainline_child;
    }
    current
}

/// Move tokens from the root down to (and including) `node`, built by
/// walking parent links. Feeds the active-line highlight and the
/// position reconstructor.
pub fn path_to(tree: &GameTree, node: NodeId) -> Option<Vec<String>> {
    if !tree.contains(node) {
        return None;
    }
    let mut tokens = Vec::new();
    let mut current = Some(node);
    while let Some(id) = current {
        let n = tree.node(id)?;
        tokens.push(n.san.clone());
        current = n.parent;
    }
    tokens.reverse();
    Some(tokens)
}
