//! Game observer trait, events, and the final outcome.

use mz_core::{Direction, GhostId, NodeId, Tick};

/// Something that happened during a tick, reported through
/// [`GameObserver::on_event`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    PillEaten { node: NodeId },
    PowerPillEaten { node: NodeId },
    GhostEaten { ghost: GhostId, node: NodeId },
    /// An active ghost reached the attacker; positions were reset.
    AttackerCaught { ghost: GhostId, lives_left: u32 },
}

/// Why the game stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReason {
    /// Every pill and power pill was eaten.
    Cleared,
    OutOfLives,
    /// `max_ticks` elapsed.
    TimeUp,
}

/// Summary returned by [`Game::run`][crate::Game::run].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    pub end:          EndReason,
    /// Ticks played.
    pub ticks:        u64,
    pub score:        u32,
    pub lives_left:   u32,
    /// Pills and power pills still on the board.
    pub pills_left:   usize,
    pub ghosts_eaten: u32,
}

/// Callbacks invoked by [`Game::run`][crate::Game::run] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event printer
///
/// ```rust,ignore
/// struct EventPrinter;
///
/// impl GameObserver for EventPrinter {
///     fn on_event(&mut self, tick: Tick, event: &GameEvent) {
///         println!("{tick}: {event:?}");
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called at the very start of each tick, before the controller runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the move the controller chose.
    fn on_tick_end(&mut self, _tick: Tick, _dir: Direction) {}

    /// Called for each event, in the order they happened within the tick.
    fn on_event(&mut self, _tick: Tick, _event: &GameEvent) {}

    /// Called once after the last tick.
    fn on_game_end(&mut self, _outcome: &GameOutcome) {}
}

/// A [`GameObserver`] that does nothing.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
