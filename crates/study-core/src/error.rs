//! Error types for tree edits, notation parsing, and position replay.

use shakmaty::Chess;
use thiserror::Error;

/// Structural-invariant violations raised by tree mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("position is no longer part of the tree")]
    StalePosition,

    #[error("node id does not resolve to a live node")]
    UnknownNode,

    #[error("the root cannot be deleted")]
    DeleteRoot,

    #[error("a mainline continuation cannot be deleted; promote an alternative first")]
    DeleteMainline,
}

/// Failures while parsing notation text into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("unbalanced parenthesis in notation text")]
    UnbalancedParenthesis,

    #[error("unbalanced comment braces in notation text")]
    UnbalancedComment,

    #[error("empty variation in notation text")]
    EmptyVariation,

    #[error("variation opened before any move")]
    VariationWithoutAnchor,
}

/// Replay aborted: a stored move is not legal against the position reached
/// so far. Carries the last valid position instead of fabricating one.
#[derive(Debug, Clone, Error)]
#[error("move '{token}' at step {step} is not legal in the reconstructed position")]
pub struct ReplayError {
    /// Zero-based index of the failing token.
    pub step: usize,
    /// The offending move text.
    pub token: String,
    /// Position reached after the last successful step.
    pub last_valid: Box<Chess>,
}

/// Errors from reconstructing the position at a tree node.
#[derive(Debug, Error)]
pub enum ReconstructError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Replay(#[from] ReplayError),
}
