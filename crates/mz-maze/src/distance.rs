//! All-pairs shortest path lengths.
//!
//! Every passage has unit length, so one breadth-first search per source
//! node fills a row.  The table is a dense row-major `N × N` array of `u16`
//! (a 1,300-cell arcade maze needs ~3.4 MB).  `u16::MAX` marks unreachable
//! pairs, so a maze may hold at most [`MAX_NODES`] cells.
//!
//! With the `parallel` feature the rows are filled on Rayon's thread pool.
//! Rows are independent, so the result is identical either way.

use std::collections::VecDeque;

use mz_core::NodeId;

use crate::maze::MazeNode;

/// Sentinel stored for unreachable pairs.
const UNREACHABLE: u16 = u16::MAX;

/// Largest maze the table can hold: its longest path is one edge short of
/// the node count, which stays below `UNREACHABLE`.
pub const MAX_NODES: usize = UNREACHABLE as usize;

/// Dense all-pairs path-length table.
pub struct DistanceTable {
    n:    usize,
    data: Vec<u16>,
}

impl DistanceTable {
    /// Run one BFS per node.
    pub fn compute(nodes: &[MazeNode]) -> Self {
        let n = nodes.len();
        let mut data = vec![UNREACHABLE; n * n];

        if n > 0 {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;
                data.par_chunks_mut(n)
                    .enumerate()
                    .for_each(|(src, row)| bfs_row(nodes, src, row));
            }

            #[cfg(not(feature = "parallel"))]
            for (src, row) in data.chunks_mut(n).enumerate() {
                bfs_row(nodes, src, row);
            }
        }

        Self { n, data }
    }

    /// Path length from `from` to `to`, or `None` if either id is out of
    /// range or no path exists.
    #[inline]
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<u32> {
        let (f, t) = (from.index(), to.index());
        if f >= self.n || t >= self.n {
            return None;
        }
        match self.data[f * self.n + t] {
            UNREACHABLE => None,
            d => Some(u32::from(d)),
        }
    }

    pub fn node_count(&self) -> usize {
        self.n
    }
}

/// Fill `row` with BFS distances from `src`.
fn bfs_row(nodes: &[MazeNode], src: usize, row: &mut [u16]) {
    let mut queue = VecDeque::with_capacity(nodes.len());
    row[src] = 0;
    queue.push_back(src);

    while let Some(cur) = queue.pop_front() {
        let next_dist = row[cur] + 1;
        for next in nodes[cur].neighbors.iter().flatten() {
            let i = next.index();
            if row[i] == UNREACHABLE {
                row[i] = next_dist;
                queue.push_back(i);
            }
        }
    }
}
