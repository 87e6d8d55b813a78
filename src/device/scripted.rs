//! Non-interactive buttons for tests, replays and the simulator.

use super::InputSource;
use crate::error::Result;
use rand::Rng;
use std::collections::VecDeque;

/// Plays back a fixed sequence of levels, then reports `fallback` forever.
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    levels: VecDeque<bool>,
    fallback: bool,
    samples: u64,
}

impl ScriptedInput {
    pub fn new(levels: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            levels: levels.into_iter().collect(),
            fallback,
            samples: 0,
        }
    }

    /// Never pressed.
    pub fn released() -> Self {
        Self::new(std::iter::empty(), false)
    }

    /// Always pressed.
    pub fn held() -> Self {
        Self::new(std::iter::empty(), true)
    }

    /// How many times the level has been sampled.
    pub fn samples(&self) -> u64 {
        self.samples
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&mut self) -> Result<bool> {
        self.samples += 1;
        Ok(self.levels.pop_front().unwrap_or(self.fallback))
    }
}

/// Presses with a fixed probability on every sample.
#[derive(Debug, Clone)]
pub struct RandomInput<R> {
    press_chance: f64,
    rng: R,
}

impl<R: Rng> RandomInput<R> {
    pub fn new(press_chance: f64, rng: R) -> Self {
        Self {
            press_chance: press_chance.clamp(0.0, 1.0),
            rng,
        }
    }
}

impl<R: Rng> InputSource for RandomInput<R> {
    fn is_pressed(&mut self) -> Result<bool> {
        Ok(self.rng.gen_bool(self.press_chance))
    }
}
