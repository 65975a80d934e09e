//! The `Game` struct and its tick loop.

use std::time::{Duration, Instant};

use mz_behavior::{AttackerController, GameSnapshot, HostileState};
use mz_core::{Direction, GameConfig, GhostId, GhostRng, NodeId, StepMode, Tick};
use mz_maze::{DistanceOracle, Maze};

use crate::{EndReason, GameEvent, GameObserver, GameOutcome, SimResult};

// ── Ghost ─────────────────────────────────────────────────────────────────────

/// One hostile as the game loop tracks it.
pub struct Ghost {
    pub id:   GhostId,
    pub node: NodeId,

    /// Ticks left in the lair.  The ghost neither moves nor collides
    /// while this is non-zero.
    pub lair_ticks: u32,

    /// Ticks of vulnerability left.  Non-zero means edible.
    pub vulnerable_ticks: u32,

    rng: GhostRng,
}

impl Ghost {
    pub(crate) fn spawn(id: GhostId, lair: NodeId, config: &GameConfig) -> Self {
        Self {
            id,
            node:             lair,
            lair_ticks:       config.lair_ticks_for(usize::from(id.0)),
            vulnerable_ticks: 0,
            rng:              GhostRng::new(config.seed, id),
        }
    }

    #[inline]
    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable_ticks > 0
    }

    #[inline]
    pub fn in_lair(&self) -> bool {
        self.lair_ticks > 0
    }

    /// The controller-facing view of this ghost.
    pub fn hostile_state(&self) -> HostileState {
        HostileState {
            node:               self.node,
            vulnerable:         self.is_vulnerable(),
            ticks_until_active: self.lair_ticks,
        }
    }

    fn send_home(&mut self, lair: NodeId, lair_ticks: u32) {
        self.node = lair;
        self.lair_ticks = lair_ticks;
        self.vulnerable_ticks = 0;
    }

    /// Pick this tick's move.  `Neutral` keeps the ghost where it is.
    fn choose_move(&mut self, maze: &Maze, attacker: NodeId, aggression: f64, now: Tick) -> Direction {
        if self.in_lair() {
            return Direction::Neutral;
        }
        if self.is_vulnerable() {
            // Half speed while edible.
            if !now.is_even() {
                return Direction::Neutral;
            }
            return maze
                .next_step(self.node, attacker, StepMode::Evade)
                .unwrap_or(Direction::Neutral);
        }
        if self.rng.gen_bool(aggression) {
            if let Some(dir) = maze.next_step(self.node, attacker, StepMode::Approach) {
                return dir;
            }
        }
        let exits: Vec<Direction> = Direction::CARDINAL
            .into_iter()
            .filter(|&dir| maze.neighbor(self.node, dir).is_some())
            .collect();
        self.rng.choose(&exits).copied().unwrap_or(Direction::Neutral)
    }
}

// ── Game ──────────────────────────────────────────────────────────────────────

/// One game of a controller against the ghosts.
///
/// `Game<C>` owns the board and drives the tick loop described in the
/// crate docs.  Create via [`GameBuilder`][crate::GameBuilder].
pub struct Game<C: AttackerController> {
    pub config: GameConfig,

    /// The board.  Never changes; pill liveness lives in `pills_alive` and
    /// `power_alive`, indexed like `maze.pill_nodes()` and
    /// `maze.power_pill_nodes()`.
    pub maze: Maze,

    /// The policy under test.  Called exactly once per tick.
    pub controller: C,

    pub attacker:       NodeId,
    pub attacker_start: NodeId,
    pub lair:           NodeId,

    /// Ghosts in `GhostId` order.
    pub ghosts: Vec<Ghost>,

    pub pills_alive: Vec<bool>,
    pub power_alive: Vec<bool>,

    /// The next tick to play.
    pub tick:         Tick,
    pub score:        u32,
    pub lives:        u32,
    pub ghosts_eaten: u32,
}

impl<C: AttackerController> Game<C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Play until the game ends and return the outcome.
    ///
    /// Calls `initialize` on the controller first and `shutdown` last, even
    /// when the controller fails.
    ///
    /// # Errors
    ///
    /// [`SimError::Controller`][crate::SimError::Controller] if the
    /// controller returns an error; the game stops on that tick.
    pub fn run<O: GameObserver>(&mut self, observer: &mut O) -> SimResult<GameOutcome> {
        self.controller.initialize();
        tracing::info!(
            controller = self.controller.name(),
            seed = self.config.seed,
            ghosts = self.ghosts.len(),
            pills = self.pills_left(),
            "game start"
        );

        let played = self.play(observer);
        self.controller.shutdown();
        let end = played?;

        let outcome = self.outcome(end);
        tracing::info!(
            controller = self.controller.name(),
            end = ?outcome.end,
            ticks = outcome.ticks,
            score = outcome.score,
            lives_left = outcome.lives_left,
            "game over"
        );
        observer.on_game_end(&outcome);
        Ok(outcome)
    }

    /// Play up to `n` ticks, stopping early if the game ends.  Does not call
    /// the controller's lifecycle hooks.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: GameObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.end_reason().is_some() {
                break;
            }
            self.step(observer)?;
        }
        Ok(())
    }

    /// Why the game is over, or `None` while it is still running.
    pub fn end_reason(&self) -> Option<EndReason> {
        if self.lives == 0 {
            Some(EndReason::OutOfLives)
        } else if self.pills_left() == 0 {
            Some(EndReason::Cleared)
        } else if self.tick >= self.config.end_tick() {
            Some(EndReason::TimeUp)
        } else {
            None
        }
    }

    /// Pills and power pills still on the board.
    pub fn pills_left(&self) -> usize {
        self.pills_alive.iter().chain(&self.power_alive).filter(|a| **a).count()
    }

    /// The controller-facing view of every ghost, in `GhostId` order.
    pub fn hostile_states(&self) -> Vec<HostileState> {
        self.ghosts.iter().map(Ghost::hostile_state).collect()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn play<O: GameObserver>(&mut self, observer: &mut O) -> SimResult<EndReason> {
        loop {
            if let Some(end) = self.end_reason() {
                return Ok(end);
            }
            self.step(observer)?;
        }
    }

    /// Play one tick and advance the clock.
    fn step<O: GameObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        let mut events = Vec::new();
        let result = self.process_tick(now, &mut events);
        for event in &events {
            observer.on_event(now, event);
        }
        let dir = result?;

        observer.on_tick_end(now, dir);
        self.tick = now.next();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick, events: &mut Vec<GameEvent>) -> SimResult<Direction> {
        // ── Phase 1: decide ───────────────────────────────────────────────
        let hostiles = self.hostile_states();
        let deadline = Instant::now() + Duration::from_millis(self.config.tick_budget_ms);
        let snap = GameSnapshot::new(now, &self.maze, self.attacker, &hostiles)
            .with_pills(self.maze.pill_nodes(), &self.pills_alive)
            .with_power_pills(self.maze.power_pill_nodes(), &self.power_alive);
        let dir = self.controller.on_tick(&snap, deadline)?;

        // ── Phase 2: attacker moves and eats ──────────────────────────────
        if let Some(next) = self.maze.neighbor(self.attacker, dir) {
            self.attacker = next;
        }
        self.eat(events);
        if self.resolve_collisions(now, events) {
            return Ok(dir);
        }

        // ── Phase 3: ghosts move ──────────────────────────────────────────
        for ghost in &mut self.ghosts {
            if ghost.in_lair() {
                ghost.lair_ticks -= 1;
                continue;
            }
            let step = ghost.choose_move(&self.maze, self.attacker, self.config.ghost_aggression, now);
            if let Some(next) = self.maze.neighbor(ghost.node, step) {
                ghost.node = next;
            }
        }
        if self.resolve_collisions(now, events) {
            return Ok(dir);
        }

        // ── Phase 4: timers ───────────────────────────────────────────────
        for ghost in &mut self.ghosts {
            ghost.vulnerable_ticks = ghost.vulnerable_ticks.saturating_sub(1);
        }

        Ok(dir)
    }

    fn eat(&mut self, events: &mut Vec<GameEvent>) {
        let node = self.attacker;
        let Some(cell) = self.maze.node(node) else { return };

        if let Some(i) = cell.pill_index {
            let alive = &mut self.pills_alive[i as usize];
            if *alive {
                *alive = false;
                self.score = self.score.saturating_add(self.config.pill_score);
                events.push(GameEvent::PillEaten { node });
            }
        }

        if let Some(i) = cell.power_pill_index {
            let alive = &mut self.power_alive[i as usize];
            if *alive {
                *alive = false;
                self.score = self.score.saturating_add(self.config.power_pill_score);
                for ghost in self.ghosts.iter_mut().filter(|g| !g.in_lair()) {
                    ghost.vulnerable_ticks = self.config.power_duration_ticks;
                }
                events.push(GameEvent::PowerPillEaten { node });
            }
        }
    }

    /// Settle every ghost standing on the attacker.  Returns `true` if the
    /// attacker was caught, which ends the tick.
    fn resolve_collisions(&mut self, now: Tick, events: &mut Vec<GameEvent>) -> bool {
        for i in 0..self.ghosts.len() {
            let ghost = &self.ghosts[i];
            if ghost.in_lair() || ghost.node != self.attacker {
                continue;
            }
            let id = ghost.id;

            if ghost.is_vulnerable() {
                let node = ghost.node;
                self.ghosts[i].send_home(self.lair, self.config.lair_ticks);
                self.score = self.score.saturating_add(self.config.ghost_score);
                self.ghosts_eaten = self.ghosts_eaten.saturating_add(1);
                tracing::debug!(tick = %now, ghost = %id, %node, "ghost eaten");
                events.push(GameEvent::GhostEaten { ghost: id, node });
            } else {
                self.lives -= 1;
                tracing::debug!(tick = %now, ghost = %id, lives_left = self.lives, "attacker caught");
                events.push(GameEvent::AttackerCaught { ghost: id, lives_left: self.lives });
                self.reset_positions();
                return true;
            }
        }
        false
    }

    fn reset_positions(&mut self) {
        self.attacker = self.attacker_start;
        for (i, ghost) in self.ghosts.iter_mut().enumerate() {
            ghost.send_home(self.lair, self.config.lair_ticks_for(i));
        }
    }

    fn outcome(&self, end: EndReason) -> GameOutcome {
        GameOutcome {
            end,
            ticks:        self.tick.0,
            score:        self.score,
            lives_left:   self.lives,
            pills_left:   self.pills_left(),
            ghosts_eaten: self.ghosts_eaten,
        }
    }
}
