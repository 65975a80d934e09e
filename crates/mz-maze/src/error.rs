//! Maze-subsystem error type.

use thiserror::Error;

use mz_core::{Direction, NodeId};

/// Errors produced while building or loading a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("{0} not found in maze")]
    NodeNotFound(NodeId),

    #[error("{from} links {dir} to {to}, but {to} does not link back")]
    AsymmetricPassage { from: NodeId, dir: Direction, to: NodeId },

    #[error("{0} is not a cardinal direction")]
    NotCardinal(Direction),

    #[error("maze has {nodes} cells; at most {max} are supported")]
    TooLarge { nodes: usize, max: usize },

    #[error("maze parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MazeResult<T> = Result<T, MazeError>;
