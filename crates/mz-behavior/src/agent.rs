//! `PursuitAgent` — drives the behavior state machine once per tick.

use std::time::Instant;

use mz_core::Direction;

use crate::{
    AgentConfig, AttackerController, BehaviorError, BehaviorResult, BehaviorState,
    ClosestEntities, GameSnapshot,
};

/// The state-machine attacker.
///
/// Each tick:
///
/// 1. rebuild the [`ClosestEntities`] cache from the snapshot;
/// 2. cascade: while the current state names a next state, enter it and
///    ask again (capped at `config.max_cascade` transitions);
/// 3. ask the settled state for exactly one direction.
///
/// State persists across ticks; the cache does not.
pub struct PursuitAgent {
    config:  AgentConfig,
    state:   BehaviorState,
    closest: ClosestEntities,
}

impl PursuitAgent {
    pub fn new(config: AgentConfig) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state:   BehaviorState::Reevaluate,
            closest: ClosestEntities::default(),
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The state the last tick settled in (`Reevaluate` before the first).
    pub fn current_state(&self) -> &BehaviorState {
        &self.state
    }

    /// The closest-entity cache computed by the last tick.
    pub fn closest(&self) -> &ClosestEntities {
        &self.closest
    }

    /// Run one full decision: locate, cascade, emit.
    pub fn decide(&mut self, snap: &GameSnapshot<'_>) -> BehaviorResult<Direction> {
        self.closest = ClosestEntities::locate(snap, &self.config);
        self.settle(snap)?;
        let dir = self.state.next_direction(snap, &self.closest, &self.config)?;
        tracing::debug!(tick = %snap.tick, state = ?self.state.kind(), %dir, "move chosen");
        Ok(dir)
    }

    fn settle(&mut self, snap: &GameSnapshot<'_>) -> BehaviorResult<()> {
        let limit = self.config.max_cascade;
        let mut trail = vec![self.state.kind()];

        while let Some(next) = self.state.next_state(snap, &self.closest, &self.config) {
            if trail.len() > limit {
                trail.push(next);
                tracing::error!(tick = %snap.tick, limit, ?trail, "state cascade did not settle");
                return Err(BehaviorError::CascadeOverrun { limit, trail });
            }
            tracing::debug!(tick = %snap.tick, from = ?self.state.kind(), to = ?next, "state transition");
            self.state = next.enter(&self.closest);
            trail.push(next);
        }
        Ok(())
    }
}

impl Default for PursuitAgent {
    fn default() -> Self {
        Self {
            config:  AgentConfig::default(),
            state:   BehaviorState::Reevaluate,
            closest: ClosestEntities::default(),
        }
    }
}

impl AttackerController for PursuitAgent {
    fn initialize(&mut self) {
        self.state = BehaviorState::Reevaluate;
        self.closest = ClosestEntities::default();
    }

    fn on_tick(&mut self, snap: &GameSnapshot<'_>, deadline: Instant) -> BehaviorResult<Direction> {
        let dir = self.decide(snap)?;
        let now = Instant::now();
        if now > deadline {
            tracing::warn!(
                tick = %snap.tick,
                late_us = u64::try_from(now.duration_since(deadline).as_micros()).unwrap_or(u64::MAX),
                "decision finished after deadline"
            );
        }
        Ok(dir)
    }

    fn name(&self) -> &'static str {
        "pursuit"
    }
}
