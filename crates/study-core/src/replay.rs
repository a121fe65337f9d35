//! On-demand position reconstruction through the rules engine.
//!
//! Positions are never cached on nodes; a path of SAN tokens is replayed
//! against a fresh board each time one is needed.

use shakmaty::{san::San, Chess, Position};
use tracing::warn;

use crate::error::{ReconstructError, ReplayError, TreeError};
use crate::navigator;
use crate::node::NodeId;
use crate::tree::GameTree;

/// Replay `tokens` from the standard starting position.
pub fn replay(tokens: &[String]) -> Result<Chess, ReplayError> {
    replay_from(Chess::default(), tokens)
}

/// Replay `tokens` from an arbitrary starting position (studies that begin
/// mid-game). Aborts at the first token the rules engine rejects and hands
/// back the last valid position instead of fabricating one.
pub fn replay_from(start: Chess, tokens: &[String]) -> Result<Chess, ReplayError> {
    let mut pos = start;
    for (step, token) in tokens.iter().enumerate() {
        let Ok(san) = token.parse::<San>() else {
            return Err(abort(step, token, pos));
        };
        let Ok(mv) = san.to_move(&pos) else {
            return Err(abort(step, token, pos));
        };
        pos.play_unchecked(mv);
    }
    Ok(pos)
}

/// Replay `tokens`, collecting the position after each step.
pub fn replay_positions(tokens: &[String]) -> Result<Vec<Chess>, ReplayError> {
    let mut pos = Chess::default();
    let mut positions = Vec::with_capacity(tokens.len());
    for (step, token) in tokens.iter().enumerate() {
        let Ok(san) = token.parse::<San>() else {
            return Err(abort(step, token, pos));
        };
        let Ok(mv) = san.to_move(&pos) else {
            return Err(abort(step, token, pos));
        };
        pos.play_unchecked(mv);
        positions.push(pos.clone());
    }
    Ok(positions)
}

/// The board at `node`: walk parents for the token path, then replay it.
pub fn position_at(tree: &GameTree, node: NodeId) -> Result<Chess, ReconstructError> {
    let tokens = navigator::path_to(tree, node).ok_or(TreeError::UnknownNode)?;
    Ok(replay(&tokens)?)
}

fn abort(step: usize, token: &str, last_valid: Chess) -> ReplayError {
    warn!(step, token, "replay aborted on illegal stored move");
    ReplayError {
        step,
        token: token.to_string(),
        last_valid: Box::new(last_valid),
    }
}
