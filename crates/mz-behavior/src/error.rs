use thiserror::Error;

use crate::StateKind;

/// Errors surfaced by a controller.
///
/// Missing or unreachable targets are never errors; they show up as `None`
/// in the locator and send the state machine back to `Reevaluate`.  The
/// variants here are contract violations inside the state machine and are
/// fatal to the host.
#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("{0:?} does not emit a direction")]
    NoDirection(StateKind),

    #[error("state cascade exceeded {limit} transitions: {trail:?}")]
    CascadeOverrun { limit: usize, trail: Vec<StateKind> },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
