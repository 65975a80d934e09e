//! The `AttackerController` trait — what a host game loop drives.

use std::time::Instant;

use mz_core::Direction;

use crate::{BehaviorResult, GameSnapshot};

/// Pluggable attacker policy.
///
/// The host calls [`initialize`][Self::initialize] once before the first
/// tick, [`on_tick`][Self::on_tick] exactly once per tick, and
/// [`shutdown`][Self::shutdown] once after the last.  Lifecycle hooks have
/// no-op defaults so stateless policies only implement `on_tick`.
///
/// # Errors
///
/// An `Err` from `on_tick` is a defect in the controller, not a game
/// condition; hosts should stop the run rather than retry the tick.
pub trait AttackerController: Send {
    /// Reset all internal state to its starting configuration.
    fn initialize(&mut self) {}

    /// Release anything held for the run.
    fn shutdown(&mut self) {}

    /// Choose this tick's move.
    ///
    /// `deadline` is when the host needs the answer.  Controllers cannot be
    /// interrupted, so it is advisory: overruns are reported, not prevented.
    fn on_tick(&mut self, snap: &GameSnapshot<'_>, deadline: Instant) -> BehaviorResult<Direction>;

    /// Short label for logs and result tables.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: AttackerController + ?Sized> AttackerController for Box<T> {
    fn initialize(&mut self) {
        (**self).initialize();
    }

    fn shutdown(&mut self) {
        (**self).shutdown();
    }

    fn on_tick(&mut self, snap: &GameSnapshot<'_>, deadline: Instant) -> BehaviorResult<Direction> {
        (**self).on_tick(snap, deadline)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
