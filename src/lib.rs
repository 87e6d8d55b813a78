//! Flappy LCD - pipe-dodging game for a 320x240 panel and one button.
//!
//! The engine in [`game`] only talks to the traits in [`device`]; the
//! binaries plug in a terminal display and keyboard, or headless stand-ins
//! for the [`simulator`].

pub mod build_info;
pub mod constants;
pub mod device;
pub mod error;
pub mod game;
pub mod logging;
pub mod simulator;

pub use constants::*;
pub use error::{Error, Result};
pub use game::{Avatar, GameLoop, GamePhase, Obstacle, ObstacleField, Peripherals, TickEvents};
