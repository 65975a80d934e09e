//! Fluent builder for constructing a [`Game`].

use mz_behavior::AttackerController;
use mz_core::{GameConfig, GhostId, NodeId, Tick};
use mz_maze::{Layout, Maze, MazeError};

use crate::{Game, Ghost, SimError, SimResult};

/// Fluent builder for [`Game<C>`].
///
/// # Required inputs
///
/// - [`GameConfig`] — tick limit, seed, lives, timers, scores
/// - [`Maze`] — the board
/// - `C: AttackerController` — the policy under test
///
/// # Optional inputs
///
/// | Method                | Default                                 |
/// |-----------------------|-----------------------------------------|
/// | `.attacker_start(n)`  | none; required                          |
/// | `.lair(n)`            | none; required when `ghost_count > 0`   |
/// | `.ghost_count(n)`     | `4`                                     |
///
/// [`from_layout`](Self::from_layout) fills the first two from a parsed
/// ASCII layout.
pub struct GameBuilder<C: AttackerController> {
    config:         GameConfig,
    maze:           Maze,
    controller:     C,
    attacker_start: Option<NodeId>,
    lair:           Option<NodeId>,
    ghost_count:    usize,
}

impl<C: AttackerController> GameBuilder<C> {
    pub fn new(config: GameConfig, maze: Maze, controller: C) -> Self {
        Self {
            config,
            maze,
            controller,
            attacker_start: None,
            lair:           None,
            ghost_count:    4,
        }
    }

    /// Start from a layout, taking its `P` and `G` cells as the attacker
    /// start and the lair.
    pub fn from_layout(config: GameConfig, layout: Layout, controller: C) -> Self {
        let Layout { maze, attacker_start, lair } = layout;
        Self { attacker_start, lair, ..Self::new(config, maze, controller) }
    }

    pub fn attacker_start(mut self, node: NodeId) -> Self {
        self.attacker_start = Some(node);
        self
    }

    /// The cell ghosts start in and return to when eaten.
    pub fn lair(mut self, node: NodeId) -> Self {
        self.lair = Some(node);
        self
    }

    pub fn ghost_count(mut self, n: usize) -> Self {
        self.ghost_count = n;
        self
    }

    /// Validate inputs, spawn the ghosts, and return a ready-to-run [`Game`].
    pub fn build(self) -> SimResult<Game<C>> {
        self.config.validate()?;

        let start = self
            .attacker_start
            .ok_or_else(|| SimError::Config("attacker start not set".into()))?;
        self.check_node(start)?;

        let lair = match (self.lair, self.ghost_count) {
            (Some(lair), _) => {
                self.check_node(lair)?;
                lair
            }
            (None, 0) => start,
            (None, _) => return Err(SimError::Config("ghosts need a lair".into())),
        };

        if self.ghost_count > usize::from(u8::MAX) {
            return Err(SimError::Config(format!(
                "at most {} ghosts supported, got {}",
                u8::MAX,
                self.ghost_count
            )));
        }

        let ghosts = (0..self.ghost_count)
            .map(|i| Ghost::spawn(GhostId(i as u8), lair, &self.config))
            .collect();

        Ok(Game {
            pills_alive:    vec![true; self.maze.pill_nodes().len()],
            power_alive:    vec![true; self.maze.power_pill_nodes().len()],
            lives:          self.config.lives,
            config:         self.config,
            maze:           self.maze,
            controller:     self.controller,
            attacker:       start,
            attacker_start: start,
            lair,
            ghosts,
            tick:           Tick::ZERO,
            score:          0,
            ghosts_eaten:   0,
        })
    }

    fn check_node(&self, node: NodeId) -> SimResult<()> {
        if self.maze.node(node).is_none() {
            return Err(MazeError::NodeNotFound(node).into());
        }
        Ok(())
    }
}
