//! `mz-sim` — headless reference game loop for maze pursuit controllers.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.max_ticks (until lives == 0 or the board is clear):
//!   ① Snapshot   — GameSnapshot of the attacker, ghosts, and live pills.
//!   ② Decide     — AttackerController::on_tick with a tick_budget_ms deadline.
//!   ③ Attacker   — move one cell (a wall means stay), eat what is there.
//!   ④ Collide    — vulnerable ghost: eaten; active ghost: life lost, reset.
//!   ⑤ Ghosts     — lair countdown, then chase / wander / evade one cell.
//!   ⑥ Collide    — as ④.
//!   ⑦ Timers     — vulnerability counts down.
//! ```
//!
//! All randomness comes from per-ghost [`GhostRng`][mz_core::GhostRng]s
//! seeded from `config.seed`, so a seed replays a game exactly (as long as
//! the controller itself is deterministic).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `serde`    | Serialize/Deserialize on config, events and outcomes. |
//! | `parallel` | Distance table rows computed with Rayon.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mz_behavior::{AgentConfig, PursuitAgent};
//! use mz_core::GameConfig;
//! use mz_maze::parse_layout;
//! use mz_sim::{GameBuilder, NoopObserver};
//!
//! let layout = parse_layout(MAZE)?;
//! let agent = PursuitAgent::new(AgentConfig::default())?;
//! let mut game = GameBuilder::from_layout(GameConfig::default(), layout, agent).build()?;
//! let outcome = game.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod game;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::{SimError, SimResult};
pub use game::{Game, Ghost};
pub use observer::{EndReason, GameEvent, GameObserver, GameOutcome, NoopObserver};
