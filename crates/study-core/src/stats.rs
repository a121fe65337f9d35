//! Aggregate metrics over a tree, collected in a single depth-first pass.

use serde::Serialize;

use crate::node::NodeId;
use crate::tree::GameTree;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    /// Every node in the tree.
    pub total_moves: usize,
    /// Nodes that head a variation (sit in a parent's variation list).
    pub total_variations: usize,
    /// The complement: nodes that continue a line.
    pub mainline_moves: usize,
    /// Deepest variation nesting reached.
    pub max_depth: usize,
}

/// Walk the whole tree once. An empty tree yields all zeros.
pub fn collect(tree: &GameTree) -> TreeStats {
    let mut stats = TreeStats::default();
    if let Some(root) = tree.root() {
        visit(tree, root, 0, false, &mut stats);
    }
    stats
}

fn visit(tree: &GameTree, id: NodeId, depth: usize, is_head: bool, stats: &mut TreeStats) {
    let Some(node) = tree.node(id) else { return };

    stats.total_moves += 1;
    stats.max_depth = stats.max_depth.max(depth);
    if is_head {
        stats.total_variations += 1;
    } else {
        stats.mainline_moves += 1;
    }

    for &variation in &node.variations {
        visit(tree, variation, depth + 1, true, stats);
    }
    if let Some(child) = node.mainline_child {
        visit(tree, child, depth, false, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::AppendCursor;

    #[test]
    fn test_empty_tree_is_all_zeros() {
        assert_eq!(collect(&GameTree::new()), TreeStats::default());
    }

    #[test]
    fn test_counts_and_depth() {
        let mut tree = GameTree::new();
        let mut cursor = AppendCursor::start();
        tree.add_move(&mut cursor, "e4").unwrap();
        let e5 = tree.add_move(&mut cursor, "e5").unwrap();
        tree.add_move(&mut cursor, "Nf3").unwrap();

        let var = tree
            .add_variation_at(e5, &["Nc3".into(), "Nf6".into()])
            .unwrap();
        tree.add_variation_at(var[0], &["d5".into()]).unwrap();

        let stats = collect(&tree);
        assert_eq!(stats.total_moves, 6);
        assert_eq!(stats.total_variations, 2);
        assert_eq!(stats.mainline_moves, 4);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.total_moves, stats.total_variations + stats.mainline_moves);
    }
}
