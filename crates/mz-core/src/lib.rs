//! `mz-core` — foundational types shared by every `mz-*` crate.
//!
//! This crate intentionally has no `mz-*` dependencies and minimal external
//! ones (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `NodeId`, `GhostId`                                   |
//! | [`grid`]      | `GridPoint`, Euclidean and Manhattan distance         |
//! | [`direction`] | `Direction`, `StepMode`                               |
//! | [`time`]      | `Tick`, `GameConfig`                                  |
//! | [`rng`]       | `GhostRng` (per-ghost deterministic RNG)              |
//! | [`error`]     | `MzError`, `MzResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, StepMode};
pub use error::{MzError, MzResult};
pub use grid::GridPoint;
pub use ids::{GhostId, NodeId};
pub use rng::GhostRng;
pub use time::{GameConfig, Tick};
