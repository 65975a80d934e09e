//! Game time and configuration.
//!
//! Time is a monotonically increasing `Tick` counter: the host game loop
//! calls the agent exactly once per tick and applies one move per tick.
//! All timers (lair countdown, vulnerability) are counted in ticks so the
//! arithmetic is exact.

use std::fmt;

use crate::{MzError, MzResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute game tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The tick after this one.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    #[inline]
    pub fn is_even(self) -> bool {
        self.0.is_multiple_of(2)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Configuration for one game run of the reference game loop.
///
/// Typically built with `GameConfig::default()` and adjusted, or loaded
/// from a JSON file by the demo binary (requires the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Hard stop: the game ends after this many ticks.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always replays the same game.
    pub seed: u64,

    /// Lives the attacker starts with.
    pub lives: u32,

    /// How long ghosts stay vulnerable after a power pill is eaten.
    pub power_duration_ticks: u32,

    /// Lair countdown for the first ghost after a (re)spawn.
    pub lair_ticks: u32,

    /// Extra lair ticks added per ghost index, so ghosts leave one by one.
    pub lair_stagger_ticks: u32,

    /// Probability that an active ghost takes its chasing step rather than
    /// a random exit.  `1.0` = perfectly greedy pursuers.
    pub ghost_aggression: f64,

    /// Per-tick time budget handed to the controller as its deadline.
    pub tick_budget_ms: u64,

    pub pill_score: u32,
    pub power_pill_score: u32,
    pub ghost_score: u32,
}

impl GameConfig {
    /// The tick at which the game ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Lair countdown for the ghost at position `index` in the ghost table.
    #[inline]
    /// Saturates at `u32::MAX`.
    pub fn lair_ticks_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.lair_ticks.saturating_add(self.lair_stagger_ticks.saturating_mul(index))
    }

    /// Reject values the game loop cannot run with.
    pub fn validate(&self) -> MzResult<()> {
        if self.max_ticks == 0 {
            return Err(MzError::Config("max_ticks must be > 0".into()));
        }
        if self.lives == 0 {
            return Err(MzError::Config("lives must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.ghost_aggression) {
            return Err(MzError::Config(format!(
                "ghost_aggression must be in [0, 1], got {}",
                self.ghost_aggression
            )));
        }
        if self.tick_budget_ms == 0 {
            return Err(MzError::Config("tick_budget_ms must be > 0".into()));
        }
        // Every ghost id must get an exact countdown.
        let last = self
            .lair_stagger_ticks
            .checked_mul(u32::from(u8::MAX))
            .and_then(|stagger| stagger.checked_add(self.lair_ticks));
        if last.is_none() {
            return Err(MzError::Config(format!(
                "lair_ticks {} + lair_stagger_ticks {} x {} overflows",
                self.lair_ticks,
                self.lair_stagger_ticks,
                u8::MAX
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_ticks:            3_000,
            seed:                 42,
            lives:                3,
            power_duration_ticks: 60,
            lair_ticks:           10,
            lair_stagger_ticks:   15,
            ghost_aggression:     0.9,
            tick_budget_ms:       40,
            pill_score:           10,
            power_pill_score:     50,
            ghost_score:          200,
        }
    }
}
