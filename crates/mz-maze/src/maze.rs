//! Maze graph representation and builder.
//!
//! # Data layout
//!
//! A maze is a flat `Vec<MazeNode>` indexed by `NodeId`.  Each node carries
//! a fixed four-slot neighbor array in `Direction::CARDINAL` order, so
//! stepping in a direction is a single array read.  Pill and power-pill
//! nodes are additionally listed in `pill_nodes` / `power_pill_nodes`,
//! ordered by their pill index; the game loop tracks which are still
//! present with a parallel `Vec<bool>`.
//!
//! Path distances are precomputed once in [`Maze::build`] and never change:
//! the maze is immutable after load, so a `&Maze` can be shared freely.

use mz_core::{Direction, GridPoint, NodeId};

use crate::distance::{DistanceTable, MAX_NODES};
use crate::{MazeError, MazeResult};

// ── MazeNode ──────────────────────────────────────────────────────────────────

/// One walkable maze cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeNode {
    pub pos: GridPoint,

    /// Index into the maze's pill table, if this cell holds a pill.
    pub pill_index: Option<u32>,

    /// Index into the maze's power-pill table, if this cell holds one.
    pub power_pill_index: Option<u32>,

    /// Adjacent cells in Up, Right, Down, Left order.  `None` is a wall.
    pub neighbors: [Option<NodeId>; 4],
}

impl MazeNode {
    fn new(pos: GridPoint) -> Self {
        Self { pos, pill_index: None, power_pill_index: None, neighbors: [None; 4] }
    }

    /// Number of open exits.
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }

    /// A junction offers a real choice: more than two exits.
    #[inline]
    pub fn is_junction(&self) -> bool {
        self.neighbor_count() > 2
    }
}

// ── Maze ──────────────────────────────────────────────────────────────────────

/// Immutable maze graph with its precomputed distance table.
///
/// Do not construct directly; use [`MazeBuilder`] or one of the loaders.
pub struct Maze {
    nodes:            Vec<MazeNode>,
    pill_nodes:       Vec<NodeId>,
    power_pill_nodes: Vec<NodeId>,
    distances:        DistanceTable,
}

impl Maze {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node data, or `None` if `id` is out of range.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&MazeNode> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[MazeNode] {
        &self.nodes
    }

    /// Every pill node, ordered by pill index.
    pub fn pill_nodes(&self) -> &[NodeId] {
        &self.pill_nodes
    }

    /// Every power-pill node, ordered by power-pill index.
    pub fn power_pill_nodes(&self) -> &[NodeId] {
        &self.power_pill_nodes
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Iterator over the ids of all junction nodes.
    pub fn junctions(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_junction())
            .map(|(i, _)| NodeId(i as u32))
    }

    /// Look up the node at grid position `pos` (linear scan; load-time use).
    pub fn node_at(&self, pos: GridPoint) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.pos == pos)
            .map(|i| NodeId(i as u32))
    }
}

// ── MazeBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Maze`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use mz_core::{Direction, GridPoint};
/// use mz_maze::MazeBuilder;
///
/// let mut b = MazeBuilder::new();
/// let a = b.add_node(GridPoint::new(0, 0));
/// let c = b.add_node(GridPoint::new(1, 0));
/// b.connect(a, Direction::Right, c).unwrap();
/// b.set_pill(c).unwrap();
/// let maze = b.build().unwrap();
/// assert_eq!(maze.node_count(), 2);
/// assert_eq!(maze.pill_nodes(), &[c]);
/// ```
pub struct MazeBuilder {
    nodes:            Vec<MazeNode>,
    pill_nodes:       Vec<NodeId>,
    power_pill_nodes: Vec<NodeId>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), pill_nodes: Vec::new(), power_pill_nodes: Vec::new() }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes:            Vec::with_capacity(nodes),
            pill_nodes:       Vec::new(),
            power_pill_nodes: Vec::new(),
        }
    }

    /// Add a walkable cell and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GridPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MazeNode::new(pos));
        id
    }

    /// Set a **one-way** link: stepping `dir` from `from` lands on `to`.
    ///
    /// [`build`](Self::build) rejects links that are not mirrored, so
    /// callers normally use [`connect`](Self::connect).  Loaders that read
    /// each node's exits independently use this directly.
    pub fn set_neighbor(&mut self, from: NodeId, dir: Direction, to: NodeId) -> MazeResult<()> {
        let slot = dir.slot().ok_or(MazeError::NotCardinal(dir))?;
        if to.index() >= self.nodes.len() {
            return Err(MazeError::NodeNotFound(to));
        }
        let node = self.nodes.get_mut(from.index()).ok_or(MazeError::NodeNotFound(from))?;
        node.neighbors[slot] = Some(to);
        Ok(())
    }

    /// Open a two-way passage: `dir` from `a` reaches `b`, and the opposite
    /// direction from `b` reaches `a`.
    pub fn connect(&mut self, a: NodeId, dir: Direction, b: NodeId) -> MazeResult<()> {
        self.set_neighbor(a, dir, b)?;
        self.set_neighbor(b, dir.opposite(), a)
    }

    /// Place a pill on `node`.  Idempotent.
    pub fn set_pill(&mut self, node: NodeId) -> MazeResult<()> {
        let next = self.pill_nodes.len() as u32;
        let n = self.nodes.get_mut(node.index()).ok_or(MazeError::NodeNotFound(node))?;
        if n.pill_index.is_none() {
            n.pill_index = Some(next);
            self.pill_nodes.push(node);
        }
        Ok(())
    }

    /// Place a power pill on `node`.  Idempotent.
    pub fn set_power_pill(&mut self, node: NodeId) -> MazeResult<()> {
        let next = self.power_pill_nodes.len() as u32;
        let n = self.nodes.get_mut(node.index()).ok_or(MazeError::NodeNotFound(node))?;
        if n.power_pill_index.is_none() {
            n.power_pill_index = Some(next);
            self.power_pill_nodes.push(node);
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Validate passages and precompute the distance table.
    ///
    /// Time complexity: O(N · (N + E)) for the all-pairs BFS, where N is the
    /// node count and E ≤ 4N.
    pub fn build(self) -> MazeResult<Maze> {
        if self.nodes.len() > MAX_NODES {
            return Err(MazeError::TooLarge { nodes: self.nodes.len(), max: MAX_NODES });
        }
        for (i, node) in self.nodes.iter().enumerate() {
            let from = NodeId(i as u32);
            for (slot, to) in node.neighbors.iter().enumerate() {
                let Some(to) = *to else { continue };
                // Opposite slot: Up(0) ↔ Down(2), Right(1) ↔ Left(3).
                let back = self.nodes[to.index()].neighbors[(slot + 2) % 4];
                if back != Some(from) {
                    let dir = Direction::CARDINAL[slot];
                    return Err(MazeError::AsymmetricPassage { from, dir, to });
                }
            }
        }

        let distances = DistanceTable::compute(&self.nodes);

        Ok(Maze {
            nodes:            self.nodes,
            pill_nodes:       self.pill_nodes,
            power_pill_nodes: self.power_pill_nodes,
            distances,
        })
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
