//! A single scrolling barrier with an opening.

use crate::constants::{
    GAP_SIZE_RANGE, GAP_WIDTH, OBSTACLE_SPAWN_POSITION, OBSTACLE_SPEED, OBSTACLE_THICKNESS,
    SCREEN_WIDTH,
};
use crate::device::{Color, Renderer};
use crate::error::Result;
use rand::Rng;

/// One barrier band.
///
/// `position` runs along the scroll axis and decreases every advance. The
/// opening is [`GAP_WIDTH`] wide and sits `gap_size` pixels in from the far
/// edge of the control axis, so everything outside
/// `(SCREEN_WIDTH - gap_size - GAP_WIDTH, SCREEN_WIDTH - gap_size)` is solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    position: i32,
    speed: i32,
    gap_size: i32,
    active: bool,
    passed: bool,
}

impl Obstacle {
    /// New obstacle at the spawn position with a random gap offset.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_gap_size(rng.gen_range(0..GAP_SIZE_RANGE))
    }

    /// New obstacle at the spawn position with a chosen gap offset.
    /// Offsets outside `0..GAP_SIZE_RANGE` are clamped into it.
    pub fn with_gap_size(gap_size: i32) -> Self {
        Self {
            position: OBSTACLE_SPAWN_POSITION,
            speed: OBSTACLE_SPEED,
            gap_size: gap_size.clamp(0, GAP_SIZE_RANGE - 1),
            active: true,
            passed: false,
        }
    }

    /// Moves the obstacle to `position` without touching any other state.
    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn gap_size(&self) -> i32 {
        self.gap_size
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    /// Control-axis edge where the opening ends (exclusive).
    pub fn gap_high(&self) -> i32 {
        SCREEN_WIDTH - self.gap_size
    }

    /// Control-axis edge where the opening starts (exclusive).
    pub fn gap_low(&self) -> i32 {
        self.gap_high() - GAP_WIDTH
    }

    /// Far edge of the band along the scroll axis.
    pub fn trailing_edge(&self) -> i32 {
        self.position + OBSTACLE_THICKNESS
    }

    /// Two green rectangles either side of the opening.
    pub fn draw<D: Renderer + ?Sized>(&self, display: &mut D) -> Result<()> {
        let top = self.position;
        let bottom = self.trailing_edge();
        display.fill_rect(SCREEN_WIDTH - 1, top, self.gap_high(), bottom, Color::Green)?;
        display.fill_rect(self.gap_low(), top, 0, bottom, Color::Green)?;
        Ok(())
    }

    /// Scrolls one step. Returns `true` on the step that retires the obstacle.
    pub fn advance(&mut self) -> bool {
        self.position -= self.speed;
        if self.active && self.position < 0 {
            self.active = false;
            return true;
        }
        false
    }

    pub(crate) fn mark_passed(&mut self) {
        self.passed = true;
    }
}
