//! End-to-end position reconstruction against shakmaty.

mod common;

use shakmaty::fen::Fen;
use shakmaty::{san::San, Chess, EnPassantMode, Position};
use study_core::{navigator, replay};

fn fen(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

fn play_direct(tokens: &[&str]) -> Chess {
    let mut pos = Chess::default();
    for token in tokens {
        let san: San = token.parse().expect("bad SAN in test");
        let mv = san.to_move(&pos).expect("illegal move in test");
        pos.play_unchecked(mv);
    }
    pos
}

#[test]
fn reconstructing_through_a_variation_matches_direct_play() {
    let (mut tree, ids) = common::open_game();
    let var = tree
        .add_variation_at(ids[1], &["Nc3".into(), "Nf6".into()])
        .unwrap();

    let reconstructed = replay::position_at(&tree, var[1]).unwrap();
    assert_eq!(
        fen(&reconstructed),
        fen(&play_direct(&["e4", "e5", "Nc3", "Nf6"]))
    );
}

#[test]
fn mainline_end_position_matches_direct_play() {
    let (tree, ids) = common::build_line(&["d4", "d5", "c4", "e6", "Nc3"]);
    let last = *ids.last().unwrap();

    let path = navigator::path_to(&tree, last).unwrap();
    assert_eq!(path, ["d4", "d5", "c4", "e6", "Nc3"]);

    let reconstructed = replay::replay(&path).unwrap();
    assert_eq!(
        fen(&reconstructed),
        fen(&play_direct(&["d4", "d5", "c4", "e6", "Nc3"]))
    );
}

#[test]
fn corrupted_import_stops_at_last_valid_position() {
    let tokens: Vec<String> = ["e4", "e5", "Qxe5", "Nf3"]
        .iter()
        .map(|t| t.to_string())
        .collect();

    let err = replay::replay(&tokens).unwrap_err();
    assert_eq!(err.step, 2);
    assert_eq!(err.token, "Qxe5");
    assert_eq!(fen(&err.last_valid), fen(&play_direct(&["e4", "e5"])));
}

#[test]
fn replay_from_custom_start_position() {
    let start = play_direct(&["e4", "e5"]);
    let tokens: Vec<String> = ["Nf3", "Nc6"].iter().map(|t| t.to_string()).collect();

    let continued = replay::replay_from(start, &tokens).unwrap();
    assert_eq!(
        fen(&continued),
        fen(&play_direct(&["e4", "e5", "Nf3", "Nc6"]))
    );
}

#[test]
fn positions_after_each_step_chain_together() {
    let tokens: Vec<String> = ["e4", "c5", "Nf3"].iter().map(|t| t.to_string()).collect();
    let positions = replay::replay_positions(&tokens).unwrap();

    assert_eq!(positions.len(), 3);
    assert_eq!(fen(&positions[0]), fen(&play_direct(&["e4"])));
    assert_eq!(fen(&positions[2]), fen(&play_direct(&["e4", "c5", "Nf3"])));
}
