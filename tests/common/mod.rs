use study_core::{AppendCursor, GameTree, NodeId};

/// 1.e4 e5 2.Nf3 — the smallest useful mainline.
pub fn open_game() -> (GameTree, Vec<NodeId>) {
    build_line(&["e4", "e5", "Nf3"])
}

/// Build a plain mainline from SAN tokens, returning the nodes in order.
pub fn build_line(sans: &[&str]) -> (GameTree, Vec<NodeId>) {
    let mut tree = GameTree::new();
    let mut cursor = AppendCursor::start();
    let mut ids = Vec::new();
    for san in sans {
        ids.push(tree.add_move(&mut cursor, *san).expect("append failed"));
    }
    (tree, ids)
}

/// SAN text of each node, for readable assertions.
pub fn sans(tree: &GameTree, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| tree.node(id).map(|n| n.san.clone()))
        .collect()
}
