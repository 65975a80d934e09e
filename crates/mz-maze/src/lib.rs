//! `mz-maze` — maze graph, path distances, and the distance oracle.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`maze`]     | `Maze`, `MazeNode`, `MazeBuilder`                             |
//! | [`distance`] | `DistanceTable` — all-pairs shortest path lengths             |
//! | [`oracle`]   | `DistanceOracle` trait (the seam the agent consumes)          |
//! | [`loader`]   | `parse_layout` (ASCII), `load_nodes_csv` / `load_nodes_reader` |
//! | [`error`]    | `MazeError`, `MazeResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds distance-table rows on Rayon's thread pool.        |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `mz-core` types.     |

pub mod distance;
pub mod error;
pub mod loader;
pub mod maze;
pub mod oracle;

#[cfg(test)]
mod tests;

pub use distance::{DistanceTable, MAX_NODES};
pub use error::{MazeError, MazeResult};
pub use loader::{Layout, load_nodes_csv, load_nodes_reader, parse_layout};
pub use maze::{Maze, MazeBuilder, MazeNode};
pub use oracle::DistanceOracle;
