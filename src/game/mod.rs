//! The simulation: obstacles, the field that spawns them, the avatar, and
//! the loop tying them together.

pub mod avatar;
pub mod field;
pub mod game_loop;
pub mod obstacle;

pub use avatar::Avatar;
pub use field::{FieldTick, ObstacleField};
pub use game_loop::{GameLoop, GamePhase, Peripherals, TickEvents};
pub use obstacle::Obstacle;
