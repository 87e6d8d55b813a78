//! Drives the real [`GameLoop`] without a screen or a clock.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::device::{NoDelay, NullDisplay, RandomInput};
use crate::error::Result;
use crate::game::{Avatar, GameLoop, GamePhase, ObstacleField, Peripherals};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every configured game and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = base_seed.wrapping_add(run_idx as u64);
        let stats = simulate_single_run(config, seed)?;
        log::debug!(
            "run {}/{} seed {} - {} ticks, score {}{}",
            run_idx + 1,
            config.num_runs,
            stats.seed,
            stats.ticks,
            stats.score,
            if stats.halted { "" } else { " (survived)" }
        );
        runs.push(stats);
    }

    Ok(SimReport::from_runs(runs, config))
}

/// Play one game from `seed`.
///
/// The same seed builds the same field and, for random policies, the same
/// press sequence, so a run is fully reproducible.
pub fn simulate_single_run(config: &SimConfig, seed: u64) -> Result<RunStats> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let field = ObstacleField::new(&mut rng);
    // The button draws from the same stream, after the field has taken its share.
    let button = RandomInput::new(config.policy.press_chance(), rng);
    let io = Peripherals::new(NullDisplay, button, NoDelay);
    let mut game = GameLoop::from_parts(io, field, Avatar::new())?;

    let mut spawned = 1;
    let mut retired = 0;
    while game.is_running() && game.ticks() < config.max_ticks_per_run {
        let events = game.run_tick()?;
        if events.spawned {
            spawned += 1;
        }
        retired += events.retired;
    }

    let halted = matches!(game.phase(), GamePhase::Halted { .. });
    Ok(RunStats {
        seed,
        ticks: game.ticks(),
        score: game.score(),
        halted,
        obstacles_spawned: spawned,
        obstacles_retired: retired,
    })
}
