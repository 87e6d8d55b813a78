//! Fixed-capacity obstacle arena and the spawn cadence.
//!
//! All [`FIELD_CAPACITY`] slots are built up front. Only the first
//! `live_count` slots take part in the game; the count grows by one every
//! [`SPAWN_INTERVAL_TICKS`] ticks until the arena is full. Retired slots are
//! never reused, so once the last obstacle has scrolled away the field stays
//! empty for the rest of the run.

use super::obstacle::Obstacle;
use crate::constants::{FIELD_CAPACITY, SPAWN_INTERVAL_TICKS};
use crate::device::Renderer;
use crate::error::Result;
use rand::Rng;

/// What one field tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTick {
    /// `live_count` grew this tick.
    pub spawned: bool,
    /// Obstacles that scrolled off this tick.
    pub retired: u32,
}

#[derive(Debug, Clone)]
pub struct ObstacleField {
    slots: [Obstacle; FIELD_CAPACITY],
    live_count: usize,
    spawn_counter: u32,
}

impl ObstacleField {
    /// Builds every slot with an independent random gap offset.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_slots(std::array::from_fn(|_| Obstacle::new(&mut *rng)))
    }

    /// Builds a field from prepared obstacles, one live.
    pub fn from_slots(slots: [Obstacle; FIELD_CAPACITY]) -> Self {
        Self {
            slots,
            live_count: 1,
            spawn_counter: 0,
        }
    }

    /// Builds a field whose slots take the given gap offsets in order; slots
    /// past the end of `gap_sizes` get an offset of zero.
    pub fn from_gap_sizes(gap_sizes: impl IntoIterator<Item = i32>) -> Self {
        let mut gaps = gap_sizes.into_iter();
        Self::from_slots(std::array::from_fn(|_| {
            Obstacle::with_gap_size(gaps.next().unwrap_or(0))
        }))
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn spawn_counter(&self) -> u32 {
        self.spawn_counter
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots currently in play, active or retired.
    pub fn live(&self) -> &[Obstacle] {
        &self.slots[..self.live_count]
    }

    pub(crate) fn live_mut(&mut self) -> &mut [Obstacle] {
        &mut self.slots[..self.live_count]
    }

    /// Every slot, including ones not yet in play.
    pub fn slots(&self) -> &[Obstacle] {
        &self.slots
    }

    /// Live slots still on screen.
    pub fn active(&self) -> impl Iterator<Item = (usize, &Obstacle)> {
        self.live()
            .iter()
            .enumerate()
            .filter(|(_, obstacle)| obstacle.is_active())
    }

    /// Live obstacles the avatar has got past.
    pub fn passed_count(&self) -> u32 {
        self.live().iter().filter(|o| o.is_passed()).count() as u32
    }

    /// Draws then advances every active live obstacle, then runs the spawn
    /// cadence.
    ///
    /// Drawing happens before the move, so the frame shows where each
    /// obstacle was at the start of the tick.
    pub fn tick<D: Renderer + ?Sized>(&mut self, display: &mut D) -> Result<FieldTick> {
        let mut result = FieldTick::default();

        for (index, obstacle) in self.live_mut().iter_mut().enumerate() {
            if !obstacle.is_active() {
                continue;
            }
            obstacle.draw(display)?;
            if obstacle.advance() {
                log::debug!("obstacle {index} retired");
                result.retired += 1;
            }
        }

        result.spawned = self.count_spawn_tick();
        Ok(result)
    }

    fn count_spawn_tick(&mut self) -> bool {
        self.spawn_counter += 1;
        if self.spawn_counter < SPAWN_INTERVAL_TICKS {
            return false;
        }
        self.spawn_counter = 0;

        if self.live_count >= FIELD_CAPACITY {
            return false;
        }
        self.live_count += 1;
        log::debug!("obstacle {} spawned", self.live_count - 1);
        true
    }
}
