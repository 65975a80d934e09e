//! The distance-oracle trait and its `Maze` implementation.
//!
//! # Pluggability
//!
//! The agent only ever talks to the maze through [`DistanceOracle`], so a
//! host that already owns a distance table (or computes distances lazily)
//! can implement the three required methods and get step selection and the
//! coordinate metrics for free.
//!
//! # Step selection
//!
//! [`next_step`](DistanceOracle::next_step) looks one move ahead: it scores
//! each open exit of `from` by the path distance from that neighbor to the
//! target and keeps the best one.
//!
//! | Mode       | Keeps                               | `None` when                     |
//! |------------|-------------------------------------|---------------------------------|
//! | `Approach` | smallest remaining distance         | target unreachable, `from == to` |
//! | `Evade`    | largest remaining distance          | target unreachable               |
//!
//! Both return `None` for a node with no exits.  Ties go to the first exit
//! in Up, Right, Down, Left order.

use mz_core::{Direction, GridPoint, NodeId, StepMode};

use crate::maze::Maze;

/// Read-only path queries over an immutable maze.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the maze never changes after load,
/// so several agents may read one oracle at the same time.
pub trait DistanceOracle: Send + Sync {
    /// Shortest path length in moves, or `None` if unreachable.
    fn path_distance(&self, from: NodeId, to: NodeId) -> Option<u32>;

    /// The cell one step `dir` from `node`.
    ///
    /// `Direction::Neutral` returns `node` itself; a wall returns `None`.
    fn neighbor(&self, node: NodeId, dir: Direction) -> Option<NodeId>;

    /// Grid position of `node`, or `None` if it does not exist.
    fn position(&self, node: NodeId) -> Option<GridPoint>;

    /// Locally optimal next move from `from` relative to `to`.
    fn next_step(&self, from: NodeId, to: NodeId, mode: StepMode) -> Option<Direction> {
        let here = self.path_distance(from, to)?;
        if mode == StepMode::Approach && here == 0 {
            return None;
        }

        let mut best: Option<(Direction, u32)> = None;
        for dir in Direction::CARDINAL {
            let Some(next) = self.neighbor(from, dir) else { continue };
            let Some(dist) = self.path_distance(next, to) else { continue };
            let better = match (best, mode) {
                (None, _)                          => true,
                (Some((_, b)), StepMode::Approach) => dist < b,
                (Some((_, b)), StepMode::Evade)    => dist > b,
            };
            if better {
                best = Some((dir, dist));
            }
        }
        best.map(|(dir, _)| dir)
    }

    /// Straight-line distance between two cells.
    fn euclidean_distance(&self, a: NodeId, b: NodeId) -> Option<f64> {
        Some(self.position(a)?.euclidean(self.position(b)?))
    }

    /// Taxicab distance between two cells.
    fn manhattan_distance(&self, a: NodeId, b: NodeId) -> Option<u32> {
        Some(self.position(a)?.manhattan(self.position(b)?))
    }
}

impl DistanceOracle for Maze {
    #[inline]
    fn path_distance(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.distances().get(from, to)
    }

    #[inline]
    fn neighbor(&self, node: NodeId, dir: Direction) -> Option<NodeId> {
        let n = self.node(node)?;
        match dir.slot() {
            None       => Some(node),
            Some(slot) => n.neighbors[slot],
        }
    }

    #[inline]
    fn position(&self, node: NodeId) -> Option<GridPoint> {
        self.node(node).map(|n| n.pos)
    }
}
