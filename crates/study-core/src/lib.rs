pub use shakmaty;

pub mod config;
pub mod editor;
pub mod error;
pub mod navigator;
pub mod node;
pub mod notation;
pub mod replay;
pub mod snapshot;
pub mod stats;
pub mod tree;

pub use error::{NotationError, ReconstructError, ReplayError, TreeError};
pub use node::{MoveData, MoveNode, Nag, NodeId};
pub use tree::{AppendCursor, GameTree};
