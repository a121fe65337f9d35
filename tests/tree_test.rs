//! End-to-end tests for tree building, navigation, and variation editing.

mod common;

use study_core::{editor, navigator, stats, AppendCursor, GameTree, TreeError};

// ---------------------------------------------------------------------------
// Sequential append
// ---------------------------------------------------------------------------

#[test]
fn mainline_length_tracks_append_calls() {
    let (tree, ids) = common::build_line(&["e4", "e5", "Nf3", "Nc6", "Bb5"]);
    assert_eq!(navigator::mainline(&tree).len(), ids.len());
    assert_eq!(
        common::sans(&tree, &navigator::mainline(&tree)),
        ["e4", "e5", "Nf3", "Nc6", "Bb5"]
    );
}

#[test]
fn append_numbering_alternates() {
    let (tree, ids) = common::open_game();
    let numbers: Vec<(u32, bool)> = ids
        .iter()
        .map(|&id| {
            let n = tree.node(id).unwrap();
            (n.move_number, n.is_white)
        })
        .collect();
    assert_eq!(numbers, [(1, true), (1, false), (2, true)]);
}

#[test]
fn every_non_root_node_has_one_parent() {
    let (mut tree, ids) = common::open_game();
    tree.add_variation_at(ids[1], &["Nc3".into(), "Nf6".into()])
        .unwrap();

    let mut seen = 0;
    for depth in 0..4 {
        for id in navigator::variations_at_depth(&tree, depth) {
            assert!(tree.node(id).unwrap().parent.is_some());
            seen += 1;
        }
    }
    assert_eq!(seen, 1);
    assert!(tree.node(tree.root().unwrap()).unwrap().parent.is_none());
}

// ---------------------------------------------------------------------------
// Variation invariants
// ---------------------------------------------------------------------------

#[test]
fn is_variation_matches_parent_membership() {
    let (mut tree, ids) = common::open_game();
    let var = tree
        .add_variation_at(ids[1], &["Nc3".into(), "Nf6".into()])
        .unwrap();

    for &id in ids.iter().chain(var.iter()) {
        let node = tree.node(id).unwrap();
        let in_parent_list = node
            .parent
            .and_then(|p| tree.node(p))
            .is_some_and(|p| p.variations.contains(&id));
        assert_eq!(tree.is_variation(id), in_parent_list);
    }
}

#[test]
fn depth_follows_variation_edges_only() {
    let (mut tree, ids) = common::open_game();
    let outer = tree
        .add_variation_at(ids[1], &["Nc3".into(), "Nf6".into()])
        .unwrap();
    let inner = tree.add_variation_at(outer[0], &["d5".into()]).unwrap();

    assert_eq!(tree.depth(tree.root().unwrap()), 0);
    assert_eq!(tree.depth(ids[2]), tree.depth(ids[1]));
    assert_eq!(tree.depth(outer[0]), tree.depth(ids[1]) + 1);
    assert_eq!(tree.depth(outer[1]), tree.depth(outer[0]));
    assert_eq!(tree.depth(inner[0]), tree.depth(outer[0]) + 1);
}

// ---------------------------------------------------------------------------
// Editing
// ---------------------------------------------------------------------------

#[test]
fn promote_and_promote_back_restores_assignment() {
    let (mut tree, ids) = common::open_game();
    let e5 = ids[1];
    let nf3 = ids[2];
    let var = editor::create_variation(&mut tree, e5, &["Nc3".into(), "Nf6".into()]).unwrap();

    let mainline_before = navigator::mainline(&tree);
    let variations_before = tree.node(e5).unwrap().variations.clone();

    assert!(editor::promote(&mut tree, var[0]));
    assert_eq!(
        common::sans(&tree, &navigator::mainline(&tree)),
        ["e4", "e5", "Nc3", "Nf6"]
    );

    assert!(editor::promote(&mut tree, nf3));
    assert_eq!(navigator::mainline(&tree), mainline_before);
    assert_eq!(tree.node(e5).unwrap().variations, variations_before);
}

#[test]
fn delete_shrinks_total_moves_by_subtree_size() {
    let (mut tree, ids) = common::open_game();
    let var = tree
        .add_variation_at(ids[1], &["Nc3".into(), "Nf6".into()])
        .unwrap();
    tree.add_variation_at(var[0], &["d5".into()]).unwrap();

    let before = stats::collect(&tree);
    let released = editor::delete(&mut tree, var[0]).unwrap();
    let after = stats::collect(&tree);

    assert_eq!(released, 3);
    assert_eq!(after.total_moves, before.total_moves - released);
    assert_eq!(after.total_variations, 0);
}

#[test]
fn delete_of_root_or_mainline_changes_nothing() {
    let (mut tree, ids) = common::open_game();
    let before = stats::collect(&tree);

    let root = tree.root().unwrap();
    assert_eq!(
        editor::delete(&mut tree, root),
        Err(TreeError::DeleteRoot)
    );
    assert_eq!(editor::delete(&mut tree, ids[1]), Err(TreeError::DeleteMainline));
    assert_eq!(stats::collect(&tree), before);
}

#[test]
fn edits_are_rejected_against_a_stale_position() {
    let (mut tree, ids) = common::open_game();
    let var = tree.add_variation_at(ids[1], &["Nc3".into()]).unwrap();
    editor::delete(&mut tree, var[0]).unwrap();

    assert_eq!(
        editor::create_variation(&mut tree, var[0], &["d4".into()]),
        Err(TreeError::StalePosition)
    );
    assert!(tree.cursor_at(var[0]).is_err());
    assert!(tree.node(var[0]).is_none());
}

// ---------------------------------------------------------------------------
// Path lookup
// ---------------------------------------------------------------------------

#[test]
fn find_by_path_returns_the_continuation() {
    let (tree, ids) = common::open_game();
    // The contract returns the node past the matched tokens.
    assert_eq!(navigator::find_by_path(&tree, &["e4", "e5"]), Some(ids[2]));
    assert_eq!(navigator::find_by_path(&tree, &["e4", "e5", "Nf3"]), None);
    assert_eq!(navigator::find_by_path(&tree, &["d4"]), None);
}

#[test]
fn find_by_path_enters_variations() {
    let (mut tree, ids) = common::open_game();
    let var = tree
        .add_variation_at(ids[1], &["Nc3".into(), "Nf6".into()])
        .unwrap();

    assert_eq!(navigator::find_by_path(&tree, &["e4", "Nc3"]), Some(var[1]));
}

#[test]
fn jumping_into_a_line_resumes_appending() {
    let (mut tree, ids) = common::open_game();
    let mut cursor = tree.cursor_at(ids[2]).unwrap();
    let nc6 = tree.add_move(&mut cursor, "Nc6").unwrap();

    let node = tree.node(nc6).unwrap();
    assert_eq!(node.move_number, 2);
    assert!(!node.is_white);
    assert_eq!(navigator::mainline(&tree).len(), 4);
}

#[test]
fn cursor_survives_only_while_its_position_does() {
    let mut tree = GameTree::new();
    let mut cursor = AppendCursor::start();
    tree.add_move(&mut cursor, "e4").unwrap();
    let e5 = tree.add_move(&mut cursor, "e5").unwrap();
    let var = tree.add_variation_at(e5, &["Nc3".into()]).unwrap();

    let mut parked = tree.cursor_at(var[0]).unwrap();
    editor::delete(&mut tree, var[0]).unwrap();
    assert_eq!(
        tree.add_move(&mut parked, "Nf6"),
        Err(TreeError::StalePosition)
    );
}
