//! arena — pits every attacker controller against the same ghosts.
//!
//! ```text
//! arena [CONFIG.json] [LAYOUT.txt]
//! ```
//!
//! Without arguments the built-in 27 × 20 arena and `GameConfig::default()`
//! are used.  `CONFIG.json` may set any subset of the `GameConfig` fields
//! (see `demos/arena/config.json`).  Set `RUST_LOG=mz_behavior=debug` to
//! watch the state machine's transitions.

mod layout;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use mz_behavior::{AgentConfig, AttackerController, NearestPillAgent, NearestPillEscape, PursuitAgent};
use mz_core::{GameConfig, Tick};
use mz_maze::parse_layout;
use mz_sim::{GameBuilder, GameEvent, GameObserver};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies events over one game.
#[derive(Default)]
struct Tally {
    pills:        u32,
    power_pills:  u32,
    ghosts_eaten: u32,
    first_death:  Option<Tick>,
}

impl GameObserver for Tally {
    fn on_event(&mut self, tick: Tick, event: &GameEvent) {
        match event {
            GameEvent::PillEaten { .. }      => self.pills += 1,
            GameEvent::PowerPillEaten { .. } => self.power_pills += 1,
            GameEvent::GhostEaten { .. }     => self.ghosts_eaten += 1,
            GameEvent::AttackerCaught { .. } => {
                self.first_death.get_or_insert(tick);
            }
        }
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<GameConfig> {
    let config = match path {
        None => GameConfig::default(),
        Some(p) => {
            let text = std::fs::read_to_string(Path::new(p))
                .with_context(|| format!("reading config {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {p}"))?
        }
    };
    config.validate()?;
    Ok(config)
}

fn load_layout_text(path: Option<&str>) -> Result<String> {
    match path {
        None => Ok(layout::ARENA.to_owned()),
        Some(p) => std::fs::read_to_string(Path::new(p)).with_context(|| format!("reading layout {p}")),
    }
}

fn controllers() -> Result<Vec<Box<dyn AttackerController>>> {
    let all: Vec<Box<dyn AttackerController>> = vec![
        Box::new(PursuitAgent::new(AgentConfig::default())?),
        Box::new(NearestPillAgent),
        Box::new(NearestPillEscape::default()),
    ];
    Ok(all)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let text = load_layout_text(args.get(1).map(String::as_str))?;

    let preview = parse_layout(&text)?;

    println!("=== arena — maze pursuit controllers ===");
    println!(
        "Maze: {} cells, {} pills, {} power pills  |  Seed: {}  |  Max ticks: {}",
        preview.maze.node_count(),
        preview.maze.pill_nodes().len(),
        preview.maze.power_pill_nodes().len(),
        config.seed,
        config.max_ticks,
    );
    println!("Agent config: {}", serde_json::to_string(&AgentConfig::default())?);
    println!();

    println!(
        "{:<20} {:<11} {:>6} {:>6} {:>6} {:>5} {:>6} {:>7} {:>8}",
        "Controller", "End", "Ticks", "Score", "Pills", "Eats", "Lives", "Death@", "ms"
    );
    println!("{}", "-".repeat(82));

    for controller in controllers()? {
        let board = parse_layout(&text)?;
        let mut game = GameBuilder::from_layout(config.clone(), board, controller).build()?;
        let mut tally = Tally::default();

        let t0 = Instant::now();
        let outcome = game.run(&mut tally)?;
        let elapsed = t0.elapsed();

        println!(
            "{:<20} {:<11} {:>6} {:>6} {:>6} {:>5} {:>6} {:>7} {:>8.1}",
            game.controller.name(),
            format!("{:?}", outcome.end),
            outcome.ticks,
            outcome.score,
            tally.pills + tally.power_pills,
            tally.ghosts_eaten,
            outcome.lives_left,
            tally.first_death.map_or_else(|| "-".to_owned(), |t| t.0.to_string()),
            elapsed.as_secs_f64() * 1e3,
        );
    }

    Ok(())
}
