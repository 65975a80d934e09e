//! Agent tuning parameters.
//!
//! The defaults are heuristic constants, not derived values.  They are kept
//! as data so experiments can vary them without touching the state machine.

use crate::{BehaviorError, BehaviorResult};

/// Tunable thresholds for [`PursuitAgent`][crate::PursuitAgent].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Vulnerable ghosts farther than this (path distance) are not hunted.
    pub edible_seek_radius: u32,

    /// A node is unsafe when an active ghost's next position is within this
    /// path distance of it.
    pub safety_margin: u32,

    /// The holding pattern stops wobbling and commits to the power pill once
    /// the nearest active ghost is this close.
    pub holding_break_distance: u32,

    /// Maximum state transitions in one tick before the agent gives up.
    pub max_cascade: usize,
}

impl AgentConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        if self.max_cascade == 0 {
            return Err(BehaviorError::Config("max_cascade must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            edible_seek_radius:     50,
            safety_margin:          4,
            holding_break_distance: 10,
            max_cascade:            16,
        }
    }
}
