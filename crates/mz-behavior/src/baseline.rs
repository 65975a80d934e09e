//! Reference policies without a state machine.
//!
//! Both are stateless and greedy; they exist as yardsticks for
//! [`PursuitAgent`][crate::PursuitAgent] and as simple controllers for
//! exercising a host.

use std::time::Instant;

use mz_core::{Direction, NodeId, StepMode};

use crate::locator::nearest_by_path;
use crate::{AttackerController, BehaviorResult, GameSnapshot};

/// Always heads for the nearest remaining pill or power pill.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestPillAgent;

impl AttackerController for NearestPillAgent {
    fn on_tick(&mut self, snap: &GameSnapshot<'_>, _deadline: Instant) -> BehaviorResult<Direction> {
        let targets = snap.remaining_pills().chain(snap.remaining_power_pills());
        let target = nearest_by_path(snap, snap.attacker, targets).map(|c| c.node);
        Ok(step_from_attacker(snap, target, StepMode::Approach))
    }

    fn name(&self) -> &'static str {
        "nearest-pill"
    }
}

/// Reacts to the nearest ghost when it is close, otherwise eats.
///
/// 1. Nearest ghost (any state) within `radius`: chase it if vulnerable,
///    run from it if not.
/// 2. Else nearest remaining power pill within `radius`: go for it.
/// 3. Else nearest remaining pill.
#[derive(Debug, Clone, Copy)]
pub struct NearestPillEscape {
    pub radius: u32,
}

impl Default for NearestPillEscape {
    fn default() -> Self {
        Self { radius: 25 }
    }
}

impl AttackerController for NearestPillEscape {
    fn on_tick(&mut self, snap: &GameSnapshot<'_>, _deadline: Instant) -> BehaviorResult<Direction> {
        let ghosts = snap.hostiles.iter().map(|h| h.node);
        if let Some(ghost) = nearest_by_path(snap, snap.attacker, ghosts) {
            if ghost.distance < self.radius {
                let vulnerable = snap
                    .hostiles
                    .iter()
                    .find(|h| h.node == ghost.node)
                    .is_some_and(|h| h.vulnerable);
                return Ok(step_from_attacker(snap, Some(ghost.node), StepMode::toward(vulnerable)));
            }
        }

        if let Some(pill) = nearest_by_path(snap, snap.attacker, snap.remaining_power_pills()) {
            if pill.distance < self.radius {
                return Ok(step_from_attacker(snap, Some(pill.node), StepMode::Approach));
            }
        }

        let pill = nearest_by_path(snap, snap.attacker, snap.remaining_pills()).map(|c| c.node);
        Ok(step_from_attacker(snap, pill, StepMode::Approach))
    }

    fn name(&self) -> &'static str {
        "nearest-pill-escape"
    }
}

fn step_from_attacker(snap: &GameSnapshot<'_>, target: Option<NodeId>, mode: StepMode) -> Direction {
    target
        .and_then(|t| snap.maze.next_step(snap.attacker, t, mode))
        .unwrap_or(Direction::Neutral)
}
