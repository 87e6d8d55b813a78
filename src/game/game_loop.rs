//! Per-tick orchestration and the running/halted state machine.
//!
//! One tick: the field draws and advances its obstacles and runs the spawn
//! cadence, the avatar is drawn and steered from the button, collisions are
//! tested, passes are recorded, the frame is shown for a short pause and then
//! cleared. The first collision halts the game for good: the final score is
//! counted from the `passed` flags, the game-over screen is drawn, and no
//! further ticks run.

use super::avatar::Avatar;
use super::field::ObstacleField;
use crate::constants::{FRAME_PAUSE, GAME_OVER_MESSAGE, SCORE_ROW};
use crate::device::{Color, Delay, Font, InputSource, Orientation, Placement, Renderer};
use crate::error::Result;
use rand::Rng;

/// The devices a game runs on.
#[derive(Debug, Default)]
pub struct Peripherals<R, I, D> {
    pub display: R,
    pub button: I,
    pub delay: D,
}

impl<R, I, D> Peripherals<R, I, D> {
    pub fn new(display: R, button: I, delay: D) -> Self {
        Self {
            display,
            button,
            delay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    /// Terminal. Only a process restart starts a new game.
    Halted { score: u32 },
}

/// Everything one tick did. Used for logging and by the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// The number of live obstacle slots grew.
    pub spawned: bool,
    /// Live slot count after the tick.
    pub live_count: usize,
    /// Obstacles that scrolled off.
    pub retired: u32,
    /// Obstacles newly marked as passed.
    pub newly_passed: u32,
    /// Index of the obstacle that was hit, if any.
    pub collided_with: Option<usize>,
    /// Final score, set on the tick that halts the game.
    pub halted: Option<u32>,
}

pub struct GameLoop<R, I, D> {
    io: Peripherals<R, I, D>,
    field: ObstacleField,
    avatar: Avatar,
    phase: GamePhase,
    ticks: u64,
}

impl<R, I, D> GameLoop<R, I, D>
where
    R: Renderer,
    I: InputSource,
    D: Delay,
{
    /// Sets up the devices, builds the obstacle field from `rng` and places
    /// the avatar.
    pub fn initialize<G: Rng + ?Sized>(io: Peripherals<R, I, D>, rng: &mut G) -> Result<Self> {
        let field = ObstacleField::new(rng);
        Self::from_parts(io, field, Avatar::new())
    }

    /// Same as [`GameLoop::initialize`] with a prepared field and avatar.
    pub fn from_parts(
        mut io: Peripherals<R, I, D>,
        field: ObstacleField,
        avatar: Avatar,
    ) -> Result<Self> {
        io.button.configure()?;
        io.display.clear()?;
        io.display.set_orientation(Orientation::Landscape)?;

        Ok(Self {
            io,
            field,
            avatar,
            phase: GamePhase::Running,
            ticks: 0,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Ticks run so far, including the one that halted the game.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Obstacles passed so far, counted from the field.
    pub fn score(&self) -> u32 {
        match self.phase {
            GamePhase::Running => self.field.passed_count(),
            GamePhase::Halted { score } => score,
        }
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn peripherals(&self) -> &Peripherals<R, I, D> {
        &self.io
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<R, I, D> {
        &mut self.io
    }

    pub fn into_peripherals(self) -> Peripherals<R, I, D> {
        self.io
    }

    /// Runs one tick. Does nothing once the game has halted.
    pub fn run_tick(&mut self) -> Result<TickEvents> {
        if !self.is_running() {
            return Ok(TickEvents {
                live_count: self.field.live_count(),
                ..TickEvents::default()
            });
        }
        self.ticks += 1;

        let field_tick = self.field.tick(&mut self.io.display)?;
        let mut events = TickEvents {
            spawned: field_tick.spawned,
            live_count: self.field.live_count(),
            retired: field_tick.retired,
            ..TickEvents::default()
        };

        self.avatar.draw(&mut self.io.display)?;
        self.avatar.advance(&mut self.io.button, &mut self.io.delay)?;

        if let Some(index) = self.avatar.first_collision(&self.field) {
            let score = self.halt()?;
            log::info!(
                "collision with obstacle {index} on tick {}; final score {score}",
                self.ticks
            );
            events.collided_with = Some(index);
            events.halted = Some(score);
            return Ok(events);
        }

        events.newly_passed = self.avatar.check_passed(&mut self.field);

        self.io.display.present()?;
        self.io.delay.pause(FRAME_PAUSE);
        self.io.display.clear()?;

        Ok(events)
    }

    /// Runs ticks until the game halts, or until `max_ticks` more ticks have
    /// run when a cap is given.
    pub fn run(&mut self, max_ticks: Option<u64>) -> Result<GamePhase> {
        let mut remaining = max_ticks;
        while self.is_running() {
            if let Some(left) = remaining.as_mut() {
                if *left == 0 {
                    break;
                }
                *left -= 1;
            }
            self.run_tick()?;
        }
        Ok(self.phase)
    }

    fn halt(&mut self) -> Result<u32> {
        // Counted once from the flags rather than carried along tick by tick.
        let score = self.field.passed_count();
        self.phase = GamePhase::Halted { score };
        self.draw_game_over(score)?;
        Ok(score)
    }

    fn draw_game_over(&mut self, score: u32) -> Result<()> {
        let display = &mut self.io.display;
        display.set_orientation(Orientation::Portrait)?;
        display.clear()?;
        display.draw_text(
            &score.to_string(),
            Placement::Center,
            Placement::At(SCORE_ROW),
            Color::White,
            Font::Big,
        )?;
        display.draw_text(
            GAME_OVER_MESSAGE,
            Placement::Center,
            Placement::Center,
            Color::Red,
            Font::Big,
        )?;
        display.present()
    }
}
