//! corridor — a crowd evacuating a rectangular room through one door.
//!
//! Agents are scattered over a `corridor_length × corridor_width` room whose
//! left wall (x = 0) holds the exit.  Each tick they play the patient /
//! impatient egress game and walk towards the door; impatient agents walk
//! faster and push sideways.  Progress is logged through `tracing`
//! (`RUST_LOG=info` or `RUST_LOG=debug`).
//!
//! Usage: `corridor [config.json]`.  Without an argument the built-in
//! defaults are used.

mod walk;

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use tracing::info;

use eg_agent::{AgentStore, AgentStoreBuilder};
use eg_core::{ExitDoor, SimConfig, SimRng, Vec2};
use eg_game::{EgressConfig, EgressGame, RevisionSummary, Strategy};
use eg_sim::{RunStats, SimBuilder, SimObserver};

use walk::{ExitWalk, WalkParams};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    agents:          usize,
    corridor_length: f64,
    corridor_width:  f64,
    sim:             SimConfig,
    game:            EgressConfig,
    exit:            ExitDoor,
    walk:            WalkParams,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            agents:          120,
            corridor_length: 12.0,
            corridor_width:  6.0,
            sim:             SimConfig { dt: 0.01, max_iterations: 20_000, seed: 7, output_interval_ticks: 250 },
            game:            EgressConfig { t_aset_0: 30.0, ..EgressConfig::default() },
            exit:            ExitDoor { start: Vec2::new(0.0, 2.4), end: Vec2::new(0.0, 3.6), capacity: 1.25 },
            walk:            WalkParams::default(),
        }
    }
}

fn load_config() -> Result<DemoConfig> {
    let config: DemoConfig = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing {path}"))?
        }
        None => DemoConfig::default(),
    };
    check_room(&config)?;
    Ok(config)
}

/// The scatter area must be non-empty: one metre clear of the exit wall and
/// a body radius clear of the others.
fn check_room(config: &DemoConfig) -> Result<()> {
    let margin = config.walk.body_radius;
    ensure!(margin.is_finite() && margin >= 0.0, "body_radius must be non-negative, got {margin}");
    ensure!(
        config.corridor_length - margin > 1.0,
        "corridor_length {} leaves no room to place agents",
        config.corridor_length
    );
    ensure!(
        config.corridor_width - margin > margin,
        "corridor_width {} leaves no room to place agents",
        config.corridor_width
    );
    Ok(())
}

// ── Progress observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Progress {
    switches: usize,
}

impl SimObserver<Strategy> for Progress {
    fn on_tick_end(&mut self, _stats: &RunStats, revisions: &RevisionSummary) {
        self.switches += revisions.switched;
    }

    fn on_snapshot(&mut self, stats: &RunStats, _agents: &AgentStore, strategies: &[Strategy]) {
        let impatient = strategies.iter().filter(|&&s| s == Strategy::Impatient).count();
        info!(
            iteration = stats.iterations.0,
            time = stats.elapsed,
            out = stats.agents_at_goal,
            remaining = stats.active,
            impatient,
            "progress"
        );
    }

    fn on_sim_end(&mut self, stats: &RunStats) {
        info!(
            iterations = stats.iterations.0,
            time = stats.elapsed,
            out = stats.agents_at_goal,
            switches = self.switches,
            "evacuation finished"
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let config = load_config()?;

    let exit = ExitDoor::new(config.exit.start, config.exit.end, config.exit.capacity)?;
    let positions = scatter(&config);
    let mut agents = AgentStoreBuilder::new(config.agents).positions(positions).build()?;
    let game = EgressGame::new(&mut agents, exit, config.game.clone())?;
    let walk = ExitWalk { exit, params: config.walk.clone() };

    let mut sim = SimBuilder::new(config.sim.clone(), agents, game, walk).build()?;

    let t0 = Instant::now();
    let stats = sim.run(&mut Progress::default())?;
    info!(
        wall_ms = t0.elapsed().as_millis() as u64,
        evacuated = stats.agents_at_goal,
        agents = config.agents,
        "done"
    );
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Uniform random positions inside the room, kept one metre clear of the
/// exit wall.  Uses its own stream so placement does not shift the game's
/// random draws.
fn scatter(config: &DemoConfig) -> Vec<Vec2> {
    let mut rng = SimRng::new(config.sim.seed ^ 0x5eed);
    let margin = config.walk.body_radius;
    (0..config.agents)
        .map(|_| {
            Vec2::new(
                rng.gen_range(1.0..config.corridor_length - margin),
                rng.gen_range(margin..config.corridor_width - margin),
            )
        })
        .collect()
}
