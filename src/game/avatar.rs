//! The player-controlled disc.

use super::field::ObstacleField;
use super::obstacle::Obstacle;
use crate::constants::{
    AVATAR_LIFT, AVATAR_PAUSE, AVATAR_RADIUS, AVATAR_SCROLL_POSITION, AVATAR_SINK,
    AVATAR_SPAWN_LANE, LANE_MAX, LANE_MIN, SCREEN_MARGIN, SCREEN_WIDTH,
};
use crate::device::{Color, Delay, InputSource, Renderer};
use crate::error::Result;

/// The avatar moves only along its lane (the control axis). Its scroll-axis
/// coordinate is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    lane: i32,
    scroll_position: i32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl Avatar {
    pub fn new() -> Self {
        Self {
            lane: AVATAR_SPAWN_LANE,
            scroll_position: AVATAR_SCROLL_POSITION,
        }
    }

    /// Avatar at an explicit spot. `lane` is clamped into `LANE_MIN..=LANE_MAX`.
    pub fn at(lane: i32, scroll_position: i32) -> Self {
        Self {
            lane: lane.clamp(LANE_MIN, LANE_MAX),
            scroll_position,
        }
    }

    pub fn lane(&self) -> i32 {
        self.lane
    }

    pub fn scroll_position(&self) -> i32 {
        self.scroll_position
    }

    pub fn draw<D: Renderer + ?Sized>(&self, display: &mut D) -> Result<()> {
        display.fill_circle(self.lane, self.scroll_position, AVATAR_RADIUS, Color::White)
    }

    /// Moves one step for the given button level.
    ///
    /// Pressed lifts by [`AVATAR_LIFT`], released sinks by [`AVATAR_SINK`].
    /// When the disc's edge would cross the screen margin the lane snaps to
    /// the bound outright.
    pub fn steer(&mut self, pressed: bool) {
        if pressed {
            self.lane += AVATAR_LIFT;
            if self.lane + AVATAR_RADIUS > SCREEN_WIDTH - SCREEN_MARGIN {
                self.lane = LANE_MAX;
            }
        } else {
            self.lane -= AVATAR_SINK;
            if self.lane - AVATAR_RADIUS < SCREEN_MARGIN {
                self.lane = LANE_MIN;
            }
        }
    }

    /// Samples the button once, steers, then pauses.
    pub fn advance<I, P>(&mut self, button: &mut I, delay: &mut P) -> Result<()>
    where
        I: InputSource + ?Sized,
        P: Delay + ?Sized,
    {
        let pressed = button.is_pressed()?;
        self.steer(pressed);
        delay.pause(AVATAR_PAUSE);
        Ok(())
    }

    /// The disc is outside the opening while the band overlaps it along the
    /// scroll axis. Touching an edge exactly does not count.
    pub fn collides_with(&self, obstacle: &Obstacle) -> bool {
        let outside_gap = obstacle.gap_high() < self.lane + AVATAR_RADIUS
            || obstacle.gap_low() > self.lane - AVATAR_RADIUS;
        let band_overlaps = obstacle.position() < self.scroll_position + AVATAR_RADIUS
            && obstacle.trailing_edge() > self.scroll_position - AVATAR_RADIUS;
        outside_gap && band_overlaps
    }

    /// Index of the first active live obstacle the avatar is hitting.
    pub fn first_collision(&self, field: &ObstacleField) -> Option<usize> {
        field
            .active()
            .find(|(_, obstacle)| self.collides_with(obstacle))
            .map(|(index, _)| index)
    }

    /// Marks active live obstacles whose band is fully behind the avatar as
    /// passed. Returns how many were newly marked.
    pub fn check_passed(&self, field: &mut ObstacleField) -> u32 {
        let mut newly_passed = 0;
        for (index, obstacle) in field.live_mut().iter_mut().enumerate() {
            if !obstacle.is_active() || obstacle.is_passed() {
                continue;
            }
            if obstacle.trailing_edge() < self.scroll_position - AVATAR_RADIUS {
                obstacle.mark_passed();
                log::trace!("obstacle {index} passed");
                newly_passed += 1;
            }
        }
        newly_passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{NoDelay, ScriptedInput};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingDelay {
        total: Duration,
        calls: u32,
    }

    impl Delay for CountingDelay {
        fn pause(&mut self, duration: Duration) {
            self.total += duration;
            self.calls += 1;
        }
    }

    #[test]
    fn test_spawn_position() {
        let avatar = Avatar::new();
        assert_eq!(avatar.lane(), 150);
        assert_eq!(avatar.scroll_position(), 60);
    }

    #[test]
    fn test_steer_lift_and_sink() {
        let mut avatar = Avatar::new();
        avatar.steer(true);
        assert_eq!(avatar.lane(), 160);
        avatar.steer(false);
        assert_eq!(avatar.lane(), 156);
    }

    #[test]
    fn test_lift_snaps_to_upper_bound() {
        let mut avatar = Avatar::at(300, 60);
        avatar.steer(true);
        assert_eq!(avatar.lane(), 310);
        avatar.steer(true);
        assert_eq!(avatar.lane(), 310);

        // Edge would cross the margin (306 + 10 > 315)
        let mut avatar = Avatar::at(296, 60);
        avatar.steer(true);
        assert_eq!(avatar.lane(), 310);

        let mut avatar = Avatar::at(295, 60);
        avatar.steer(true);
        assert_eq!(avatar.lane(), 305);
    }

    #[test]
    fn test_sink_snaps_to_lower_bound() {
        let mut avatar = Avatar::at(18, 60);
        avatar.steer(false);
        assert_eq!(avatar.lane(), 5);
        avatar.steer(false);
        assert_eq!(avatar.lane(), 5);

        let mut avatar = Avatar::at(19, 60);
        avatar.steer(false);
        assert_eq!(avatar.lane(), 15);
    }

    #[test]
    fn test_lane_stays_in_bounds_for_any_sequence() {
        let mut avatar = Avatar::new();
        for i in 0..2000u32 {
            // Irregular press pattern
            avatar.steer((i * 7 + i / 13) % 5 < 2 || (400..700).contains(&i));
            assert!((5..=310).contains(&avatar.lane()));
        }
    }

    #[test]
    fn test_advance_samples_once_and_pauses() {
        let mut avatar = Avatar::new();
        let mut button = ScriptedInput::new([true], false);
        let mut delay = CountingDelay::default();
        avatar.advance(&mut button, &mut delay).unwrap();
        assert_eq!(avatar.lane(), 160);
        assert_eq!(button.samples(), 1);
        assert_eq!(delay.calls, 1);
        assert_eq!(delay.total, Duration::from_millis(5));
    }

    #[test]
    fn test_advance_never_moves_scroll_axis() {
        let mut avatar = Avatar::new();
        let mut button = ScriptedInput::new([true, true, false, true], false);
        for _ in 0..10 {
            avatar.advance(&mut button, &mut NoDelay).unwrap();
            assert_eq!(avatar.scroll_position(), 60);
        }
    }

    #[test]
    fn test_collision_inside_gap_is_safe() {
        // Opening is (140, 220)
        let obstacle = Obstacle::with_gap_size(100).at_position(60);
        assert!(!Avatar::at(180, 60).collides_with(&obstacle));
        assert!(!Avatar::at(150, 60).collides_with(&obstacle));
        assert!(!Avatar::at(210, 60).collides_with(&obstacle));
    }

    #[test]
    fn test_collision_outside_gap() {
        let obstacle = Obstacle::with_gap_size(100).at_position(60);
        assert!(Avatar::at(149, 60).collides_with(&obstacle));
        assert!(Avatar::at(211, 60).collides_with(&obstacle));
        assert!(Avatar::at(5, 60).collides_with(&obstacle));
        assert!(Avatar::at(310, 60).collides_with(&obstacle));
    }

    #[test]
    fn test_upper_bound_only_clears_zero_offset() {
        let avatar = Avatar::at(310, 60);
        assert_eq!(avatar.lane(), 310);
        assert!(!avatar.collides_with(&Obstacle::with_gap_size(0).at_position(60)));
        for gap in 1..300 {
            let obstacle = Obstacle::with_gap_size(gap).at_position(60);
            assert!(avatar.collides_with(&obstacle), "gap {gap}");
        }
    }

    #[test]
    fn test_collision_needs_band_overlap() {
        let avatar = Avatar::at(5, 60);
        // Band [70, 80] just touches the disc's far edge
        assert!(!avatar.collides_with(&Obstacle::with_gap_size(100).at_position(70)));
        assert!(avatar.collides_with(&Obstacle::with_gap_size(100).at_position(69)));
        // Band [40, 50] just touches the near edge
        assert!(!avatar.collides_with(&Obstacle::with_gap_size(100).at_position(40)));
        assert!(avatar.collides_with(&Obstacle::with_gap_size(100).at_position(41)));
    }

    #[test]
    fn test_first_collision_ignores_inert_slots() {
        let avatar = Avatar::at(5, 60);
        // Slot 0's opening (-10, 70) contains lane 5; slot 1 would hit but is not live yet
        let mut slots = [Obstacle::with_gap_size(0); crate::constants::FIELD_CAPACITY];
        slots[0] = Obstacle::with_gap_size(250).at_position(60);
        slots[1] = Obstacle::with_gap_size(100).at_position(60);
        let field = ObstacleField::from_slots(slots);

        assert_eq!(field.live_count(), 1);
        assert_eq!(avatar.first_collision(&field), None);
        assert!(avatar.collides_with(&field.slots()[1]));
    }

    #[test]
    fn test_first_collision_reports_index() {
        let avatar = Avatar::at(5, 60);
        let mut field = ObstacleField::from_gap_sizes([250, 100]);
        for _ in 0..80 {
            field.tick(&mut crate::device::NullDisplay).unwrap();
        }
        // Slot 1 is live now; bring it level with the avatar
        for _ in 0..160 {
            field.tick(&mut crate::device::NullDisplay).unwrap();
        }
        assert_eq!(field.live()[1].position(), 60);
        assert_eq!(avatar.first_collision(&field), Some(1));
    }

    #[test]
    fn test_check_passed_marks_once() {
        let avatar = Avatar::new();
        let mut field = ObstacleField::from_gap_sizes([100]);
        // Band trailing edge must drop below 50: position 39
        for _ in 0..180 {
            field.tick(&mut crate::device::NullDisplay).unwrap();
        }
        assert_eq!(field.live()[0].position(), 40);
        assert_eq!(avatar.check_passed(&mut field), 0);

        field.tick(&mut crate::device::NullDisplay).unwrap();
        assert_eq!(avatar.check_passed(&mut field), 1);
        assert!(field.live()[0].is_passed());
        assert_eq!(avatar.check_passed(&mut field), 0);
        assert_eq!(field.passed_count(), 1);
    }
}
