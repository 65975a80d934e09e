//! The six behavior states and their transition / direction rules.
//!
//! # States
//!
//! | State              | Leaves when                                        | Moves                              |
//! |--------------------|----------------------------------------------------|------------------------------------|
//! | `Reevaluate`       | always (picks the next goal)                       | never                              |
//! | `SeekPill`         | after one move, or no pill left                    | toward nearest pill                |
//! | `SeekPowerPill`    | next step lands on the pill → `HoldingPattern`;    | toward nearest power pill          |
//! |                    | target gone or changed → `Reevaluate`              |                                    |
//! | `HoldingPattern`   | standing on the pill → `SeekEdibleGhosts`;         | on/off the pill, or straight onto  |
//! |                    | pill no longer nearest → `Reevaluate`              | it once a ghost is close           |
//! | `SeekEdibleGhosts` | no vulnerable ghost within radius                  | toward nearest vulnerable ghost    |
//! | `Flee`             | after one move                                     | away from nearest active ghost     |
//!
//! `Reevaluate` priority: vulnerable ghost in radius > power pill (only when
//! every ghost is out and none is vulnerable) > pill > flee.
//!
//! Each state's payload is private to it and rebuilt by [`StateKind::enter`]
//! on every entry; no state reads another's data.

use mz_core::{Direction, NodeId, StepMode};

use crate::{AgentConfig, BehaviorError, BehaviorResult, ClosestEntities, GameSnapshot};

/// State identity without payload: what transitions name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateKind {
    Reevaluate,
    SeekPill,
    SeekPowerPill,
    HoldingPattern,
    SeekEdibleGhosts,
    Flee,
}

impl StateKind {
    /// Build a freshly entered state.  This is the only place payloads are
    /// initialized; re-entering a state always starts it over.
    pub fn enter(self, closest: &ClosestEntities) -> BehaviorState {
        match self {
            StateKind::Reevaluate       => BehaviorState::Reevaluate,
            StateKind::SeekPill         => BehaviorState::SeekPill { complete: false },
            StateKind::SeekPowerPill    => BehaviorState::SeekPowerPill {
                target: closest.power_pill.map(|c| c.node),
            },
            StateKind::HoldingPattern   => BehaviorState::HoldingPattern {
                power_pill:      closest.power_pill.map(|c| c.node),
                heading_to_pill: false,
                committed:       false,
            },
            StateKind::SeekEdibleGhosts => BehaviorState::SeekEdibleGhosts,
            StateKind::Flee             => BehaviorState::Flee { complete: false },
        }
    }
}

/// The current behavior state with its private payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BehaviorState {
    #[default]
    Reevaluate,

    /// One-shot: `complete` is set by the move it emits.
    SeekPill { complete: bool },

    /// `target` is the power pill that was nearest on entry.
    SeekPowerPill { target: Option<NodeId> },

    HoldingPattern {
        /// The power pill being held for.
        power_pill: Option<NodeId>,
        /// Wobble phase: step onto the pill this tick when `true`.
        heading_to_pill: bool,
        /// Set once an active ghost comes close; never cleared while the
        /// state lasts.
        committed: bool,
    },

    SeekEdibleGhosts,

    /// One-shot: `complete` is set by the move it emits.
    Flee { complete: bool },
}

impl BehaviorState {
    pub fn kind(&self) -> StateKind {
        match self {
            BehaviorState::Reevaluate             => StateKind::Reevaluate,
            BehaviorState::SeekPill { .. }        => StateKind::SeekPill,
            BehaviorState::SeekPowerPill { .. }   => StateKind::SeekPowerPill,
            BehaviorState::HoldingPattern { .. }  => StateKind::HoldingPattern,
            BehaviorState::SeekEdibleGhosts       => StateKind::SeekEdibleGhosts,
            BehaviorState::Flee { .. }            => StateKind::Flee,
        }
    }

    /// The state to switch to, or `None` to stay and emit a move.
    pub fn next_state(
        &self,
        snap:    &GameSnapshot<'_>,
        closest: &ClosestEntities,
        config:  &AgentConfig,
    ) -> Option<StateKind> {
        match self {
            BehaviorState::Reevaluate => Some(reevaluate(snap, closest, config)),
            BehaviorState::SeekPill { complete } => {
                (*complete || closest.pill.is_none()).then_some(StateKind::Reevaluate)
            }
            BehaviorState::SeekPowerPill { target } => seek_power_pill_next(snap, closest, *target),
            BehaviorState::HoldingPattern { power_pill, .. } => {
                holding_pattern_next(snap, closest, *power_pill)
            }
            BehaviorState::SeekEdibleGhosts => {
                (!edible_ghost_in_range(closest, config)).then_some(StateKind::Reevaluate)
            }
            BehaviorState::Flee { complete } => (*complete).then_some(StateKind::Reevaluate),
        }
    }

    /// Emit this tick's move.  Called exactly once per tick, on the settled
    /// state.
    ///
    /// A move with no valid step (target vanished, unreachable, or already
    /// underfoot) is `Direction::Neutral`.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::NoDirection`] on `Reevaluate`, which only ever
    /// decides the next state.  Reaching it means the cascade settled on a
    /// state it must never settle on.
    pub fn next_direction(
        &mut self,
        snap:    &GameSnapshot<'_>,
        closest: &ClosestEntities,
        config:  &AgentConfig,
    ) -> BehaviorResult<Direction> {
        let dir = match self {
            BehaviorState::Reevaluate => {
                return Err(BehaviorError::NoDirection(StateKind::Reevaluate));
            }
            BehaviorState::SeekPill { complete } => {
                *complete = true;
                step(snap, closest.pill.map(|c| c.node), StepMode::Approach)
            }
            BehaviorState::SeekPowerPill { .. } => {
                step(snap, closest.power_pill.map(|c| c.node), StepMode::Approach)
            }
            BehaviorState::HoldingPattern { power_pill, heading_to_pill, committed } => {
                if closest.ghost.is_some_and(|g| g.distance <= config.holding_break_distance) {
                    *committed = true;
                }
                let mode = StepMode::toward(*committed || *heading_to_pill);
                *heading_to_pill = !*heading_to_pill;
                step(snap, *power_pill, mode)
            }
            BehaviorState::SeekEdibleGhosts => {
                step(snap, closest.edible_ghost.map(|c| c.node), StepMode::Approach)
            }
            BehaviorState::Flee { complete } => {
                *complete = true;
                step(snap, closest.ghost.map(|c| c.node), StepMode::Evade)
            }
        };
        Ok(dir)
    }
}

// ── Per-state rules ───────────────────────────────────────────────────────────

fn reevaluate(snap: &GameSnapshot<'_>, closest: &ClosestEntities, config: &AgentConfig) -> StateKind {
    if edible_ghost_in_range(closest, config) {
        StateKind::SeekEdibleGhosts
    } else if closest.power_pill.is_some() && is_time_to_eat_power_pill(snap) {
        StateKind::SeekPowerPill
    } else if closest.pill.is_some() {
        StateKind::SeekPill
    } else {
        StateKind::Flee
    }
}

fn seek_power_pill_next(
    snap:    &GameSnapshot<'_>,
    closest: &ClosestEntities,
    target:  Option<NodeId>,
) -> Option<StateKind> {
    let Some(pill) = closest.power_pill.map(|c| c.node) else {
        return Some(StateKind::Reevaluate);
    };
    if target != Some(pill) {
        return Some(StateKind::Reevaluate);
    }
    let landing = snap
        .maze
        .next_step(snap.attacker, pill, StepMode::Approach)
        .and_then(|dir| snap.maze.neighbor(snap.attacker, dir));
    (landing == Some(pill)).then_some(StateKind::HoldingPattern)
}

fn holding_pattern_next(
    snap:       &GameSnapshot<'_>,
    closest:    &ClosestEntities,
    power_pill: Option<NodeId>,
) -> Option<StateKind> {
    let Some(pill) = power_pill else {
        return Some(StateKind::Reevaluate);
    };
    if snap.attacker == pill {
        return Some(StateKind::SeekEdibleGhosts);
    }
    // Eaten, blocked, or another pill is now nearer.
    if closest.power_pill.map(|c| c.node) != Some(pill) {
        return Some(StateKind::Reevaluate);
    }
    None
}

#[inline]
fn edible_ghost_in_range(closest: &ClosestEntities, config: &AgentConfig) -> bool {
    closest
        .edible_ghost
        .is_some_and(|c| c.distance <= config.edible_seek_radius)
}

/// Every ghost is out of the lair and none is vulnerable.
fn is_time_to_eat_power_pill(snap: &GameSnapshot<'_>) -> bool {
    snap.hostiles.iter().all(|h| h.is_fully_active())
}

fn step(snap: &GameSnapshot<'_>, target: Option<NodeId>, mode: StepMode) -> Direction {
    target
        .and_then(|t| snap.maze.next_step(snap.attacker, t, mode))
        .unwrap_or(Direction::Neutral)
}
