//! Arena-backed game tree with branching variations.
//!
//! All nodes are owned by the tree through `mainline_child`/`variations`
//! id links; `parent` ids never drive deallocation. Every mutation either
//! completes fully or leaves the tree untouched.

use tracing::debug;

use crate::error::TreeError;
use crate::node::{MoveData, MoveNode, Nag, NodeId};

// ---------------------------------------------------------------------------
// AppendCursor — caller-owned sequential-append state
// ---------------------------------------------------------------------------

/// Bookkeeping for appending sequential moves: the position to attach at,
/// the next full-move number, and the side to move.
///
/// The cursor lives with the caller, not inside the tree; the tree itself
/// stays a pure data structure. Root numbering is whatever the cursor the
/// first `add_move` call receives says it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendCursor {
    position: Option<NodeId>,
    pub move_number: u32,
    pub white_to_move: bool,
}

impl AppendCursor {
    /// Cursor for a fresh game from the usual starting numbering.
    pub fn start() -> Self {
        Self::starting_at(1, true)
    }

    /// Cursor for a fresh game with caller-supplied numbering, e.g. a
    /// study fragment that begins at black's 12th move.
    pub fn starting_at(move_number: u32, white_to_move: bool) -> Self {
        Self {
            position: None,
            move_number,
            white_to_move,
        }
    }

    /// The node the next append will attach to, if any.
    pub fn position(&self) -> Option<NodeId> {
        self.position
    }
}

impl Default for AppendCursor {
    fn default() -> Self {
        Self::start()
    }
}

// ---------------------------------------------------------------------------
// GameTree
// ---------------------------------------------------------------------------

/// Owns the node arena and the root link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameTree {
    nodes: Vec<Option<MoveNode>>,
    root: Option<NodeId>,
}

impl GameTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Look up a live node. Tombstoned or out-of-range ids yield `None`.
    pub fn node(&self, id: NodeId) -> Option<&MoveNode> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut MoveNode> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub(crate) fn alloc(&mut self, node: MoveNode) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(node));
        id
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    // -----------------------------------------------------------------------
    // Sequential append
    // -----------------------------------------------------------------------

    /// Append a move at the cursor. An empty tree gains a root; otherwise
    /// the node becomes the mainline continuation of the cursor position.
    /// A black move bumps the cursor's move number; the side always flips.
    ///
    /// Legality is the rules engine's concern and is assumed to have been
    /// settled before this call.
    pub fn add_move(
        &mut self,
        cursor: &mut AppendCursor,
        data: impl Into<MoveData>,
    ) -> Result<NodeId, TreeError> {
        let data = data.into();
        let id = match cursor.position {
            None => {
                if self.root.is_some() {
                    // A fresh cursor on a non-empty tree would clobber the root.
                    return Err(TreeError::StalePosition);
                }
                let id = self.alloc(MoveNode::from_data(
                    data,
                    cursor.move_number,
                    cursor.white_to_move,
                ));
                self.root = Some(id);
                id
            }
            Some(at) => {
                if !self.contains(at) {
                    return Err(TreeError::StalePosition);
                }
                let id = self.alloc(MoveNode::from_data(
                    data,
                    cursor.move_number,
                    cursor.white_to_move,
                ));
                if let Some(replaced) = self.link_mainline(at, id) {
                    // Appending mid-line discards the old continuation.
                    let released = self.release_subtree(replaced);
                    debug!(at = %at, released, "replaced existing mainline continuation");
                }
                id
            }
        };

        if !cursor.white_to_move {
            cursor.move_number += 1;
        }
        cursor.white_to_move = !cursor.white_to_move;
        cursor.position = Some(id);
        Ok(id)
    }

    /// Cursor that resumes sequential appending as if editing had continued
    /// from `node`.
    pub fn cursor_at(&self, node: NodeId) -> Result<AppendCursor, TreeError> {
        let n = self.node(node).ok_or(TreeError::StalePosition)?;
        Ok(AppendCursor {
            position: Some(node),
            move_number: if n.is_white {
                n.move_number
            } else {
                n.move_number + 1
            },
            white_to_move: !n.is_white,
        })
    }

    // -----------------------------------------------------------------------
    // Variations
    // -----------------------------------------------------------------------

    /// Attach a new chain of moves as a variation of `position`.
    ///
    /// The first node takes the to-move state at the branch point (it is an
    /// alternative to whatever would come next); the rest chain as mainline
    /// continuations with the usual side/number alternation. `position` may
    /// itself be a variation node; nesting depth is unbounded.
    ///
    /// An empty `moves` slice is a no-op returning an empty vec.
    pub fn add_variation_at(
        &mut self,
        position: NodeId,
        moves: &[MoveData],
    ) -> Result<Vec<NodeId>, TreeError> {
        if moves.is_empty() {
            return Ok(Vec::new());
        }
        let (mut move_number, mut white_to_move) = {
            let anchor = self.node(position).ok_or(TreeError::StalePosition)?;
            if anchor.is_white {
                (anchor.move_number, false)
            } else {
                (anchor.move_number + 1, true)
            }
        };

        let mut created = Vec::with_capacity(moves.len());
        for data in moves {
            let id = self.alloc(MoveNode::from_data(data.clone(), move_number, white_to_move));
            match created.last() {
                None => self.link_variation(position, id),
                Some(&prev) => {
                    self.link_mainline(prev, id);
                }
            }
            created.push(id);
            if !white_to_move {
                move_number += 1;
            }
            white_to_move = !white_to_move;
        }
        Ok(created)
    }

    // -----------------------------------------------------------------------
    // In-place annotation edits
    // -----------------------------------------------------------------------

    pub fn set_comment(&mut self, id: NodeId, comment: Option<String>) -> Result<(), TreeError> {
        let node = self.node_mut(id).ok_or(TreeError::UnknownNode)?;
        node.comment = comment;
        Ok(())
    }

    pub fn set_nag(&mut self, id: NodeId, nag: Option<Nag>) -> Result<(), TreeError> {
        let node = self.node_mut(id).ok_or(TreeError::UnknownNode)?;
        node.nag = nag;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Structural queries
    // -----------------------------------------------------------------------

    /// Variation-nesting depth: number of variation edges on the path from
    /// the root. Mainline continuations stay at their parent's depth.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = Some(id);
        while let Some(c) = current {
            if self.is_variation(c) {
                depth += 1;
            }
            current = self.node(c).and_then(|n| n.parent);
        }
        depth
    }

    /// True if `id` sits in its parent's `variations` list (rather than
    /// being the parent's mainline continuation). The root is never a
    /// variation.
    pub fn is_variation(&self, id: NodeId) -> bool {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return false;
        };
        self.node(parent)
            .is_some_and(|p| p.variations.contains(&id))
    }

    /// Notation token for one node: optional number prefix, SAN, NAG
    /// symbol, `{comment}` suffix. White moves carry `"{n}."`; a black move
    /// carries `"{n}..."` only when it starts a line (opens a variation, or
    /// is the root of a study fragment).
    pub fn format_token(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        let mut out = String::new();
        if node.is_white {
            out.push_str(&format!("{}.", node.move_number));
        } else if node.parent.is_none() || self.is_variation(id) {
            out.push_str(&format!("{}...", node.move_number));
        }
        out.push_str(&node.san);
        if let Some(nag) = node.nag {
            out.push_str(nag.symbol());
        }
        if let Some(comment) = &node.comment {
            out.push_str(&format!(" {{{comment}}}"));
        }
        out
    }

    // -----------------------------------------------------------------------
    // Link surgery (crate-internal; invariants are the callers' contract)
    // -----------------------------------------------------------------------

    /// Make `child` the single mainline continuation of `parent`, returning
    /// the link it replaced.
    pub(crate) fn link_mainline(&mut self, parent: NodeId, child: NodeId) -> Option<NodeId> {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        self.node_mut(parent)
            .and_then(|p| p.mainline_child.replace(child))
    }

    /// Append `child` to `parent`'s variation list.
    pub(crate) fn link_variation(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(p) = self.node_mut(parent) {
            p.variations.push(child);
        }
    }

    /// Tombstone `id` and everything it owns. Returns the released count.
    pub(crate) fn release_subtree(&mut self, id: NodeId) -> usize {
        let mut stack = vec![id];
        let mut released = 0;
        while let Some(current) = stack.pop() {
            let Some(node) = self
                .nodes
                .get_mut(current.index())
                .and_then(|slot| slot.take())
            else {
                continue;
            };
            stack.extend(node.variations.iter().copied());
            if let Some(child) = node.mainline_child {
                stack.push(child);
            }
            released += 1;
        }
        released
    }
}
