//! Fixed tunables of the game. Nothing here is configurable at runtime.

use std::time::Duration;

// Display surface (landscape)
pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 240;
/// Distance the avatar's edge must keep from either side of the screen.
pub const SCREEN_MARGIN: i32 = 5;

// Obstacles
pub const OBSTACLE_SPAWN_POSITION: i32 = 220;
pub const OBSTACLE_SPEED: i32 = 1;
/// Thickness of an obstacle band along the scroll axis.
pub const OBSTACLE_THICKNESS: i32 = 10;
/// Gap offsets are drawn from `0..GAP_SIZE_RANGE`.
pub const GAP_SIZE_RANGE: i32 = 300;
/// Width of the passable opening, independent of the gap offset.
pub const GAP_WIDTH: i32 = 80;

// Obstacle field
pub const FIELD_CAPACITY: usize = 50;
pub const SPAWN_INTERVAL_TICKS: u32 = 80;

// Avatar
pub const AVATAR_SPAWN_LANE: i32 = 150;
pub const AVATAR_SCROLL_POSITION: i32 = 60;
pub const AVATAR_RADIUS: i32 = 10;
pub const AVATAR_LIFT: i32 = 10;
pub const AVATAR_SINK: i32 = 4;
pub const LANE_MIN: i32 = SCREEN_MARGIN;
pub const LANE_MAX: i32 = SCREEN_WIDTH - AVATAR_RADIUS;

// Timing
pub const AVATAR_PAUSE: Duration = Duration::from_millis(5);
pub const FRAME_PAUSE: Duration = Duration::from_millis(2);

// Terminal screen (portrait coordinates)
pub const SCORE_ROW: i32 = 150;
pub const GAME_OVER_MESSAGE: &str = "GAME OVER";
