//! `mz-behavior` — the pursued agent's per-tick decision engine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`snapshot`]   | `GameSnapshot<'a>`, `HostileState` — the per-tick world view  |
//! | [`controller`] | `AttackerController` trait (host-facing lifecycle)            |
//! | [`config`]     | `AgentConfig` — tunable radii, margins, cascade cap           |
//! | [`locator`]    | `EntityKind`, `Closest`, `ClosestEntities`, `find_closest`    |
//! | [`safety`]     | `SafetyOracle` — one-step hostile reachability veto           |
//! | [`state`]      | `StateKind`, `BehaviorState` — the six behavior states        |
//! | [`agent`]      | `PursuitAgent` — cascade driver over the state machine        |
//! | [`baseline`]   | `NearestPillAgent`, `NearestPillEscape` — reference policies  |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Tick flow
//!
//! ```text
//! GameSnapshot ──► ClosestEntities::locate   (four nearest-entity lookups)
//!              ──► transition cascade        (next_state until None)
//!              ──► settled state             (next_direction, exactly once)
//!              ──► Direction
//! ```
//!
//! Everything is recomputed from the snapshot each tick.  The only state
//! carried between ticks is the current `BehaviorState` and its payload.

pub mod agent;
pub mod baseline;
pub mod config;
pub mod controller;
pub mod error;
pub mod locator;
pub mod safety;
pub mod snapshot;
pub mod state;


pub use agent::PursuitAgent;
pub use baseline::{NearestPillAgent, NearestPillEscape};
pub use config::AgentConfig;
pub use controller::AttackerController;
pub use error::{BehaviorError, BehaviorResult};
pub use locator::{Closest, ClosestEntities, EntityKind, find_closest};
pub use safety::SafetyOracle;
pub use snapshot::{GameSnapshot, HostileState};
pub use state::{BehaviorState, StateKind};
