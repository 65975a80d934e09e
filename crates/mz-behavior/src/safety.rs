//! One-step hostile reachability veto.
//!
//! The oracle projects every active ghost one move toward the attacker and
//! calls a node unsafe if that projected position is within the safety
//! margin of it.  Only the immediate next step of either party is checked:
//! a route that is safe now may still be cut off two moves later.  That
//! horizon is part of the agent's observable behavior, so deeper lookahead
//! would be a different agent rather than a fix.

use mz_core::{Direction, NodeId, StepMode};
use mz_maze::DistanceOracle;

use crate::{GameSnapshot, HostileState};

/// Safety queries bound to one tick's snapshot.
#[derive(Clone, Copy)]
pub struct SafetyOracle<'s, 'a> {
    snap:   &'s GameSnapshot<'a>,
    margin: u32,
}

impl<'s, 'a> SafetyOracle<'s, 'a> {
    pub fn new(snap: &'s GameSnapshot<'a>, margin: u32) -> Self {
        Self { snap, margin }
    }

    /// `true` if no active ghost occupies `node` or can be within the safety
    /// margin of it after its next move.
    pub fn is_node_safe_to_occupy(&self, node: NodeId) -> bool {
        self.snap
            .hostiles
            .iter()
            .filter(|h| h.is_active())
            .all(|h| !self.threatens(h, node))
    }

    /// `true` if the attacker's first step toward `target` lands on a node
    /// that is safe to occupy.  `false` when there is no such step (already
    /// on `target`, or `target` unreachable).
    pub fn is_path_safe(&self, target: NodeId) -> bool {
        match projected_step(self.snap.maze, self.snap.attacker, target) {
            Some(next) => self.is_node_safe_to_occupy(next),
            None       => false,
        }
    }

    fn threatens(&self, hostile: &HostileState, node: NodeId) -> bool {
        if hostile.node == node {
            return true;
        }
        // A ghost with no step toward the attacker cannot close in this tick.
        let Some(next) = projected_step(self.snap.maze, hostile.node, self.snap.attacker) else {
            return false;
        };
        self.snap
            .maze
            .path_distance(node, next)
            .is_some_and(|d| d <= self.margin)
    }
}

/// The node reached by taking the shortest-path step from `from` toward `to`.
pub fn projected_step(maze: &dyn DistanceOracle, from: NodeId, to: NodeId) -> Option<NodeId> {
    let dir: Direction = maze.next_step(from, to, StepMode::Approach)?;
    maze.neighbor(from, dir)
}
