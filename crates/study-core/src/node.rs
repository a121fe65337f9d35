//! Move nodes and the typed arena index they are addressed by.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NodeId — typed arena index
// ---------------------------------------------------------------------------

/// Index of a node in a [`GameTree`](crate::tree::GameTree) arena.
///
/// Ids are never reused within a tree's lifetime, so an id held across a
/// deletion resolves to nothing instead of aliasing a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Nag — symbolic move-quality annotation
// ---------------------------------------------------------------------------

/// Move-quality mark attached to a single move (`!!`, `!`, `!?`, `?!`, `?`, `??`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nag {
    #[serde(rename = "!!")]
    Brilliant,
    #[serde(rename = "!")]
    Good,
    #[serde(rename = "!?")]
    Interesting,
    #[serde(rename = "?!")]
    Dubious,
    #[serde(rename = "?")]
    Mistake,
    #[serde(rename = "??")]
    Blunder,
}

impl Nag {
    pub fn symbol(self) -> &'static str {
        match self {
            Nag::Brilliant => "!!",
            Nag::Good => "!",
            Nag::Interesting => "!?",
            Nag::Dubious => "?!",
            Nag::Mistake => "?",
            Nag::Blunder => "??",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Nag> {
        match symbol {
            "!!" => Some(Nag::Brilliant),
            "!" => Some(Nag::Good),
            "!?" => Some(Nag::Interesting),
            "?!" => Some(Nag::Dubious),
            "?" => Some(Nag::Mistake),
            "??" => Some(Nag::Blunder),
            _ => None,
        }
    }
}

impl fmt::Display for Nag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// MoveData — caller-facing payload for creating nodes
// ---------------------------------------------------------------------------

/// Input for a single move: SAN text plus optional comment and annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveData {
    pub san: String,
    pub comment: Option<String>,
    pub nag: Option<Nag>,
}

impl MoveData {
    pub fn new(san: impl Into<String>) -> Self {
        Self {
            san: san.into(),
            comment: None,
            nag: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_nag(mut self, nag: Nag) -> Self {
        self.nag = Some(nag);
        self
    }
}

impl From<&str> for MoveData {
    fn from(san: &str) -> Self {
        MoveData::new(san)
    }
}

// ---------------------------------------------------------------------------
// MoveNode
// ---------------------------------------------------------------------------

/// A played move with its annotation metadata and tree links.
///
/// `mainline_child` and `variations` are owning links; `parent` is a plain
/// back-reference used only for traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveNode {
    pub san: String,
    pub comment: Option<String>,
    pub nag: Option<Nag>,
    /// Full-move number (1-based).
    pub move_number: u32,
    /// True if this move was played by white.
    pub is_white: bool,
    pub parent: Option<NodeId>,
    pub mainline_child: Option<NodeId>,
    pub variations: Vec<NodeId>,
}

impl MoveNode {
    pub(crate) fn from_data(data: MoveData, move_number: u32, is_white: bool) -> Self {
        Self {
            san: data.san,
            comment: data.comment,
            nag: data.nag,
            move_number,
            is_white,
            parent: None,
            mainline_child: None,
            variations: Vec::new(),
        }
    }
}
