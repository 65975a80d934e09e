//! Integration tests for mz-sim.

use std::time::Instant;

use mz_behavior::{AttackerController, BehaviorError, BehaviorResult, GameSnapshot, StateKind};
use mz_core::{Direction, GameConfig, Tick};
use mz_maze::{Layout, parse_layout};

use crate::{GameEvent, GameObserver, GameOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ghosts leave the lair at once and always chase.
fn test_config() -> GameConfig {
    GameConfig {
        lair_ticks:         0,
        lair_stagger_ticks: 0,
        ghost_aggression:   1.0,
        ..GameConfig::default()
    }
}

fn layout(text: &str) -> Layout {
    parse_layout(text).unwrap()
}

/// ```text
/// #########
/// #o.....o#
/// #.##.##.#
/// #...P...#
/// #.##.##.#
/// #o..G..o#
/// #########
/// ```
const ARENA: &str = "\
#########
#o.....o#
#.##.##.#
#...P...#
#.##.##.#
#o..G..o#
#########
";

/// Plays a fixed list of moves, then stands still.
#[derive(Default)]
struct Scripted {
    moves:       Vec<Direction>,
    next:        usize,
    initialized: bool,
    shut_down:   bool,
    seen:        Vec<Vec<mz_behavior::HostileState>>,
}

impl Scripted {
    fn new(moves: &[Direction]) -> Self {
        Self { moves: moves.to_vec(), ..Self::default() }
    }
}

impl AttackerController for Scripted {
    fn initialize(&mut self) {
        self.initialized = true;
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn on_tick(&mut self, snap: &GameSnapshot<'_>, _deadline: Instant) -> BehaviorResult<Direction> {
        self.seen.push(snap.hostiles.to_vec());
        let dir = self.moves.get(self.next).copied().unwrap_or(Direction::Neutral);
        self.next += 1;
        Ok(dir)
    }
}

/// Fails on its first tick.
#[derive(Default)]
struct Broken {
    shut_down: bool,
}

impl AttackerController for Broken {
    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn on_tick(&mut self, _snap: &GameSnapshot<'_>, _deadline: Instant) -> BehaviorResult<Direction> {
        Err(BehaviorError::NoDirection(StateKind::Reevaluate))
    }
}

#[derive(Default)]
struct Recorder {
    events:  Vec<(Tick, GameEvent)>,
    moves:   Vec<Direction>,
    outcome: Option<GameOutcome>,
}

impl GameObserver for Recorder {
    fn on_tick_end(&mut self, _tick: Tick, dir: Direction) {
        self.moves.push(dir);
    }

    fn on_event(&mut self, tick: Tick, event: &GameEvent) {
        self.events.push((tick, event.clone()));
    }

    fn on_game_end(&mut self, outcome: &GameOutcome) {
        self.outcome = Some(outcome.clone());
    }
}

// ── GameBuilder validation ────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use mz_core::{GameConfig, MzError, NodeId};
    use mz_maze::MazeError;

    use super::*;
    use crate::{GameBuilder, SimError};

    #[test]
    fn from_layout_uses_marked_cells() {
        let game = GameBuilder::from_layout(test_config(), layout(ARENA), Scripted::default())
            .build()
            .unwrap();
        let maze = &game.maze;
        assert_eq!(maze.node(game.attacker).unwrap().pos, mz_core::GridPoint::new(4, 3));
        assert_eq!(maze.node(game.lair).unwrap().pos, mz_core::GridPoint::new(4, 5));
        assert_eq!(game.ghosts.len(), 4);
        assert!(game.ghosts.iter().all(|g| g.node == game.lair));
    }

    #[test]
    fn ghosts_leave_lair_staggered() {
        let config = GameConfig { lair_ticks: 5, lair_stagger_ticks: 3, ..GameConfig::default() };
        let game = GameBuilder::from_layout(config, layout(ARENA), Scripted::default())
            .build()
            .unwrap();
        let lair: Vec<u32> = game.ghosts.iter().map(|g| g.lair_ticks).collect();
        assert_eq!(lair, vec![5, 8, 11, 14]);
    }

    #[test]
    fn missing_start_errors() {
        let l = layout("#..#");
        let result = GameBuilder::new(test_config(), l.maze, Scripted::default())
            .ghost_count(0)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn ghosts_without_lair_error() {
        let result = GameBuilder::from_layout(test_config(), layout("#P..#"), Scripted::default())
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn unknown_node_errors() {
        let result = GameBuilder::from_layout(test_config(), layout("#P..#"), Scripted::default())
            .ghost_count(0)
            .attacker_start(NodeId(40))
            .build();
        assert!(matches!(result, Err(SimError::Maze(MazeError::NodeNotFound(NodeId(40))))));
    }

    #[test]
    fn invalid_config_errors() {
        let config = GameConfig { lives: 0, ..test_config() };
        let result = GameBuilder::from_layout(config, layout(ARENA), Scripted::default()).build();
        assert!(matches!(result, Err(SimError::Core(MzError::Config(_)))));
    }

    #[test]
    fn overflowing_lair_stagger_errors() {
        let config = GameConfig { lair_stagger_ticks: u32::MAX / 2, ..test_config() };
        let result = GameBuilder::from_layout(config, layout(ARENA), Scripted::default()).build();
        assert!(matches!(result, Err(SimError::Core(MzError::Config(_)))));
    }
}

// ── Attacker movement and scoring ─────────────────────────────────────────────

#[cfg(test)]
mod scoring {
    use mz_core::{Direction, GameConfig, NodeId};

    use super::*;
    use crate::{EndReason, GameBuilder, NoopObserver};

    #[test]
    fn eating_every_pill_clears_the_board() {
        let script = Scripted::new(&[Direction::Right, Direction::Right]);
        let mut game = GameBuilder::from_layout(test_config(), layout("#P..#"), script)
            .ghost_count(0)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let outcome = game.run(&mut rec).unwrap();

        assert_eq!(outcome.end, EndReason::Cleared);
        assert_eq!(outcome.ticks, 2);
        assert_eq!(outcome.score, 20);
        assert_eq!(outcome.pills_left, 0);
        assert_eq!(rec.outcome, Some(outcome));
        assert_eq!(
            rec.events,
            vec![
                (Tick(0), GameEvent::PillEaten { node: NodeId(1) }),
                (Tick(1), GameEvent::PillEaten { node: NodeId(2) }),
            ]
        );
        assert!(game.controller.initialized);
        assert!(game.controller.shut_down);
    }

    #[test]
    fn walking_into_a_wall_stays_put() {
        let script = Scripted::new(&[Direction::Up, Direction::Left]);
        let mut game = GameBuilder::from_layout(test_config(), layout("#P..#"), script)
            .ghost_count(0)
            .build()
            .unwrap();
        game.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(game.attacker, NodeId(0));
        assert_eq!(game.tick, Tick(2));
    }

    #[test]
    fn time_runs_out() {
        let config = GameConfig { max_ticks: 5, ..test_config() };
        let mut game = GameBuilder::from_layout(config, layout("#P..#"), Scripted::default())
            .ghost_count(0)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let outcome = game.run(&mut rec).unwrap();
        assert_eq!(outcome.end, EndReason::TimeUp);
        assert_eq!(outcome.ticks, 5);
        assert_eq!(rec.moves, vec![Direction::Neutral; 5]);
    }

    #[test]
    fn power_pill_turns_ghosts_and_one_is_eaten() {
        // P0 o1 .2 G3: the ghost evades onto 2, where the attacker catches it.
        // Once eaten it sits out its lair time instead of chasing straight back.
        let config = GameConfig { lair_ticks: 5, ..test_config() };
        let script = Scripted::new(&[Direction::Right, Direction::Right]);
        let mut game = GameBuilder::from_layout(config, layout("#Po.G#"), script)
            .ghost_count(1)
            .build()
            .unwrap();
        game.ghosts[0].lair_ticks = 0;
        let mut rec = Recorder::default();
        let outcome = game.run(&mut rec).unwrap();

        assert_eq!(outcome.end, EndReason::Cleared);
        assert_eq!(outcome.score, 50 + 10 + 200);
        assert_eq!(outcome.ghosts_eaten, 1);
        let kinds: Vec<_> = rec.events.iter().map(|(_, e)| e.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                GameEvent::PowerPillEaten { node: NodeId(1) },
                GameEvent::PillEaten { node: NodeId(2) },
                GameEvent::GhostEaten { ghost: mz_core::GhostId(0), node: NodeId(2) },
            ]
        );
    }
}

// ── Ghost movement and collisions ─────────────────────────────────────────────

#[cfg(test)]
mod ghosts {
    use mz_core::{Direction, GameConfig, NodeId};

    use super::*;
    use crate::{EndReason, GameBuilder, NoopObserver};

    #[test]
    fn chasing_ghost_catches_idle_attacker() {
        let config = GameConfig { lives: 1, ..test_config() };
        let mut game = GameBuilder::from_layout(config, layout("#P..G#"), Scripted::default())
            .ghost_count(1)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let outcome = game.run(&mut rec).unwrap();

        assert_eq!(outcome.end, EndReason::OutOfLives);
        assert_eq!(outcome.ticks, 3);
        assert_eq!(
            rec.events,
            vec![(Tick(2), GameEvent::AttackerCaught { ghost: mz_core::GhostId(0), lives_left: 0 })]
        );
    }

    #[test]
    fn losing_a_life_resets_positions() {
        let mut game = GameBuilder::from_layout(test_config(), layout("#P..G#"), Scripted::default())
            .ghost_count(1)
            .build()
            .unwrap();
        game.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(game.lives, 2);
        assert_eq!(game.attacker, game.attacker_start);
        assert_eq!(game.ghosts[0].node, game.lair);
    }

    #[test]
    fn lair_holds_ghost_and_is_visible_to_controller() {
        let config = GameConfig { lair_ticks: 2, ..test_config() };
        let mut game = GameBuilder::from_layout(config, layout("#P....G#"), Scripted::default())
            .ghost_count(1)
            .build()
            .unwrap();
        game.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(game.ghosts[0].node, game.lair);
        assert!(!game.ghosts[0].in_lair());

        game.run_ticks(1, &mut NoopObserver).unwrap();
        assert_ne!(game.ghosts[0].node, game.lair);

        let countdown: Vec<u32> =
            game.controller.seen.iter().map(|h| h[0].ticks_until_active).collect();
        assert_eq!(countdown, vec![2, 1, 0]);
    }

    #[test]
    fn vulnerable_ghost_moves_on_even_ticks_only() {
        // P0 o1 .2 .3 .4 .5 G6
        let script = Scripted::new(&[Direction::Right]);
        let mut game = GameBuilder::from_layout(test_config(), layout("#Po....G#"), script)
            .ghost_count(1)
            .build()
            .unwrap();

        let mut trail = Vec::new();
        for _ in 0..3 {
            game.run_ticks(1, &mut NoopObserver).unwrap();
            trail.push(game.ghosts[0].node);
        }
        assert_eq!(trail, vec![NodeId(5), NodeId(5), NodeId(6)]);
        assert!(game.ghosts[0].is_vulnerable());
        assert!(game.controller.seen[1][0].vulnerable);
    }

    #[test]
    fn vulnerability_wears_off() {
        let config = GameConfig { power_duration_ticks: 2, ..test_config() };
        let script = Scripted::new(&[Direction::Right]);
        let mut game = GameBuilder::from_layout(config, layout("#Po......G#"), script)
            .ghost_count(1)
            .build()
            .unwrap();
        game.run_ticks(1, &mut NoopObserver).unwrap();
        assert!(game.ghosts[0].is_vulnerable());
        game.run_ticks(1, &mut NoopObserver).unwrap();
        assert!(!game.ghosts[0].is_vulnerable());
    }
}

// ── Controllers end to end ────────────────────────────────────────────────────

#[cfg(test)]
mod controllers {
    use mz_behavior::{AgentConfig, NearestPillAgent, NearestPillEscape, PursuitAgent};
    use mz_core::GameConfig;

    use super::*;
    use crate::{GameBuilder, NoopObserver, SimError};

    fn arena_config() -> GameConfig {
        GameConfig { max_ticks: 400, ghost_aggression: 0.7, ..GameConfig::default() }
    }

    #[test]
    fn controller_error_aborts_the_run() {
        let mut game = GameBuilder::from_layout(test_config(), layout(ARENA), Broken::default())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let result = game.run(&mut rec);
        assert!(matches!(result, Err(SimError::Controller(BehaviorError::NoDirection(_)))));
        assert!(game.controller.shut_down);
        assert!(rec.outcome.is_none());
        assert_eq!(game.tick, Tick(0));
    }

    #[test]
    fn pursuit_agent_plays_a_full_game() {
        let agent = PursuitAgent::new(AgentConfig::default()).unwrap();
        let mut game = GameBuilder::from_layout(arena_config(), layout(ARENA), agent)
            .build()
            .unwrap();
        let outcome = game.run(&mut NoopObserver).unwrap();
        assert!(outcome.ticks <= 400);
        assert!(outcome.score > 0);
    }

    #[test]
    fn same_seed_same_game() {
        let play = || {
            let agent = PursuitAgent::default();
            let mut game = GameBuilder::from_layout(arena_config(), layout(ARENA), agent)
                .build()
                .unwrap();
            let mut rec = Recorder::default();
            let outcome = game.run(&mut rec).unwrap();
            (outcome, rec.events, rec.moves)
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn boxed_controllers_run() {
        let controllers: Vec<Box<dyn AttackerController>> = vec![
            Box::new(PursuitAgent::default()),
            Box::new(NearestPillAgent),
            Box::new(NearestPillEscape::default()),
        ];
        for controller in controllers {
            let mut game = GameBuilder::from_layout(arena_config(), layout(ARENA), controller)
                .build()
                .unwrap();
            let outcome = game.run(&mut NoopObserver).unwrap();
            assert!(outcome.ticks > 0, "{}", game.controller.name());
        }
    }
}
