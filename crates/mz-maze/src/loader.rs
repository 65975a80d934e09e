//! Maze loaders: ASCII layouts and CSV node tables.
//!
//! # ASCII layout
//!
//! One character per cell, one line per row:
//!
//! | Char  | Meaning                                  |
//! |-------|------------------------------------------|
//! | `#`   | wall                                     |
//! | ` `   | empty corridor                           |
//! | `.`   | corridor with a pill                     |
//! | `o`   | corridor with a power pill               |
//! | `P`   | corridor; attacker start                 |
//! | `G`   | corridor; ghost lair                     |
//!
//! Adjacent walkable cells are connected.  A row whose first and last cells
//! are both walkable becomes a wrap-around tunnel.  Short rows are padded
//! with walls; leading and trailing empty lines are ignored.
//!
//! # CSV node table
//!
//! ```csv
//! node,x,y,up,right,down,left,pill,power_pill
//! 0,0,0,-1,1,-1,-1,0,-1
//! 1,1,0,-1,-1,-1,0,-1,0
//! ```
//!
//! Rows must list nodes `0..N` in order.  Neighbor columns hold a node id or
//! `-1` for a wall.  `pill` / `power_pill` are `-1` for none; any other
//! value places the item (indices are reassigned in node order).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mz_core::{Direction, GridPoint, NodeId};

use crate::maze::{Maze, MazeBuilder};
use crate::{MazeError, MazeResult};

// ── ASCII layout ──────────────────────────────────────────────────────────────

/// A maze parsed from an ASCII layout together with its marked cells.
pub struct Layout {
    pub maze:           Maze,
    pub attacker_start: Option<NodeId>,
    pub lair:           Option<NodeId>,
}

/// Parse an ASCII layout (see the module docs for the character set).
pub fn parse_layout(text: &str) -> MazeResult<Layout> {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let last = lines.iter().rposition(|l| !l.is_empty()).map_or(first, |i| i + 1);
    let rows: Vec<Vec<char>> = lines[first..last].iter().map(|l| l.chars().collect()).collect();

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut ids: Vec<Vec<Option<NodeId>>> = vec![vec![None; width]; rows.len()];
    let mut b = MazeBuilder::with_capacity(width * rows.len());
    let mut attacker_start = None;
    let mut lair = None;

    // ── Pass 1: cells ─────────────────────────────────────────────────────
    for (y, row) in rows.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            if c == '#' {
                continue;
            }
            let id = b.add_node(GridPoint::new(x as i32, y as i32));
            ids[y][x] = Some(id);
            match c {
                ' ' => {}
                '.' => b.set_pill(id)?,
                'o' => b.set_power_pill(id)?,
                'P' => attacker_start = Some(id),
                'G' => lair = Some(id),
                other => {
                    return Err(MazeError::Parse(format!(
                        "unexpected character {other:?} at ({x}, {y})"
                    )));
                }
            }
        }
    }

    // ── Pass 2: passages ──────────────────────────────────────────────────
    for y in 0..ids.len() {
        for x in 0..width {
            let Some(here) = ids[y][x] else { continue };
            if let Some(right) = ids[y].get(x + 1).copied().flatten() {
                b.connect(here, Direction::Right, right)?;
            }
            if let Some(down) = ids.get(y + 1).and_then(|r| r[x]) {
                b.connect(here, Direction::Down, down)?;
            }
        }
        // Tunnel: wrap the row when both edge cells are open.
        if width > 2 {
            if let (Some(left_edge), Some(right_edge)) = (ids[y][0], ids[y][width - 1]) {
                b.connect(right_edge, Direction::Right, left_edge)?;
            }
        }
    }

    Ok(Layout { maze: b.build()?, attacker_start, lair })
}

// ── CSV node table ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    node:       u32,
    x:          i32,
    y:          i32,
    up:         i64,
    right:      i64,
    down:       i64,
    left:       i64,
    pill:       i64,
    power_pill: i64,
}

/// Load a maze from a CSV node table on disk.
pub fn load_nodes_csv(path: &Path) -> MazeResult<Maze> {
    let file = std::fs::File::open(path).map_err(MazeError::Io)?;
    load_nodes_reader(file)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
pub fn load_nodes_reader<R: Read>(reader: R) -> MazeResult<Maze> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records: Vec<NodeRecord> = Vec::new();

    for result in csv_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| MazeError::Parse(e.to_string()))?;
        if row.node as usize != records.len() {
            return Err(MazeError::Parse(format!(
                "node ids must be sequential: expected {}, got {}",
                records.len(),
                row.node
            )));
        }
        records.push(row);
    }

    let mut b = MazeBuilder::with_capacity(records.len());
    for r in &records {
        b.add_node(GridPoint::new(r.x, r.y));
    }

    for r in &records {
        let id = NodeId(r.node);
        let exits = [r.up, r.right, r.down, r.left];
        for (dir, raw) in Direction::CARDINAL.into_iter().zip(exits) {
            if raw >= 0 {
                let to = u32::try_from(raw)
                    .map_err(|_| MazeError::Parse(format!("neighbor id {raw} out of range")))?;
                b.set_neighbor(id, dir, NodeId(to))?;
            }
        }
        if r.pill >= 0 {
            b.set_pill(id)?;
        }
        if r.power_pill >= 0 {
            b.set_power_pill(id)?;
        }
    }

    b.build()
}
