//! Read-only world view handed to a controller once per tick.

use mz_core::{NodeId, Tick};
use mz_maze::DistanceOracle;

/// One ghost as seen by the attacker this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HostileState {
    pub node: NodeId,

    /// `true` while a power pill's effect lasts: the ghost can be eaten.
    pub vulnerable: bool,

    /// Ticks until the ghost leaves the lair.  `0` once it is out.
    pub ticks_until_active: u32,
}

impl HostileState {
    /// An active ghost is one that is not vulnerable, whether or not it has
    /// left the lair yet.
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.vulnerable
    }

    /// Out of the lair and not vulnerable.
    #[inline]
    pub fn is_fully_active(&self) -> bool {
        !self.vulnerable && self.ticks_until_active == 0
    }
}

/// A snapshot of the game passed to every
/// [`AttackerController`][crate::AttackerController] call.
///
/// The host builds one per tick; nothing in it changes while the controller
/// runs.  Pill liveness is held as flags parallel to the maze's pill lists
/// because pills disappear mid-game and must be re-checked every tick.
///
/// # Lifetimes
///
/// All borrows live for the duration of one `on_tick` call.
#[derive(Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub tick: Tick,

    /// Path queries over the (immutable) maze.
    pub maze: &'a dyn DistanceOracle,

    /// The attacker's current node.
    pub attacker: NodeId,

    pub hostiles: &'a [HostileState],

    /// Every pill node of the maze, by pill index.
    pub pill_nodes: &'a [NodeId],
    /// `pills_alive[i]` is `true` while the pill at `pill_nodes[i]` remains.
    pub pills_alive: &'a [bool],

    pub power_pill_nodes: &'a [NodeId],
    pub power_pills_alive: &'a [bool],
}

impl<'a> GameSnapshot<'a> {
    /// Build a snapshot with no pills; chain [`with_pills`](Self::with_pills)
    /// and [`with_power_pills`](Self::with_power_pills) to add them.
    pub fn new(
        tick:     Tick,
        maze:     &'a dyn DistanceOracle,
        attacker: NodeId,
        hostiles: &'a [HostileState],
    ) -> Self {
        Self {
            tick,
            maze,
            attacker,
            hostiles,
            pill_nodes:        &[],
            pills_alive:       &[],
            power_pill_nodes:  &[],
            power_pills_alive: &[],
        }
    }

    pub fn with_pills(mut self, nodes: &'a [NodeId], alive: &'a [bool]) -> Self {
        self.pill_nodes = nodes;
        self.pills_alive = alive;
        self
    }

    pub fn with_power_pills(mut self, nodes: &'a [NodeId], alive: &'a [bool]) -> Self {
        self.power_pill_nodes = nodes;
        self.power_pills_alive = alive;
        self
    }

    /// Nodes that still hold a pill, in pill-index order.
    pub fn remaining_pills(&self) -> impl Iterator<Item = NodeId> + 'a {
        remaining(self.pill_nodes, self.pills_alive)
    }

    /// Nodes that still hold a power pill, in power-pill-index order.
    pub fn remaining_power_pills(&self) -> impl Iterator<Item = NodeId> + 'a {
        remaining(self.power_pill_nodes, self.power_pills_alive)
    }

    /// `true` if `node` still holds a pill.
    pub fn check_pill(&self, node: NodeId) -> bool {
        self.remaining_pills().any(|n| n == node)
    }

    /// `true` if `node` still holds a power pill.
    pub fn check_power_pill(&self, node: NodeId) -> bool {
        self.remaining_power_pills().any(|n| n == node)
    }
}

fn remaining<'a>(nodes: &'a [NodeId], alive: &'a [bool]) -> impl Iterator<Item = NodeId> + 'a {
    nodes
        .iter()
        .zip(alive)
        .filter(|(_, alive)| **alive)
        .map(|(node, _)| *node)
}
