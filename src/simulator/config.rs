//! Simulation configuration.

use crate::error::{Error, Result};
use serde::Serialize;

/// How the simulated player works the button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputPolicy {
    /// Never presses; the avatar sinks to the lower bound and stays there.
    Idle,
    /// Always presses; the avatar rises to the upper bound and stays there.
    Hold,
    /// Presses on each sample with the given probability.
    Random { press_chance: f64 },
}

impl InputPolicy {
    pub fn press_chance(&self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Hold => 1.0,
            Self::Random { press_chance } => *press_chance,
        }
    }

    /// Parses `idle`, `hold`, `random` or `random:<chance>`.
    pub fn parse(text: &str) -> Result<Self> {
        match text.split_once(':') {
            None => match text {
                "idle" => Ok(Self::Idle),
                "hold" => Ok(Self::Hold),
                "random" => Ok(Self::default()),
                other => Err(Error::InvalidArgument(format!("unknown policy '{other}'"))),
            },
            Some(("random", chance)) => {
                let press_chance: f64 = chance.parse().map_err(|_| {
                    Error::InvalidArgument(format!("bad press chance '{chance}'"))
                })?;
                if !(0.0..=1.0).contains(&press_chance) {
                    return Err(Error::InvalidArgument(format!(
                        "press chance {press_chance} outside 0..=1"
                    )));
                }
                Ok(Self::Random { press_chance })
            }
            Some(_) => Err(Error::InvalidArgument(format!("unknown policy '{text}'"))),
        }
    }
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self::Random { press_chance: 0.3 }
    }
}

impl std::fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Hold => write!(f, "hold"),
            Self::Random { press_chance } => write!(f, "random:{press_chance}"),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = random)
    pub seed: Option<u64>,

    /// Tick cap per game. The field runs dry after a little over 4000 ticks,
    /// so anything alive past that survives forever.
    pub max_ticks_per_run: u64,

    pub policy: InputPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_ticks_per_run: 10_000,
            policy: InputPolicy::default(),
        }
    }
}
