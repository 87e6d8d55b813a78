//! Hardware capabilities the game talks to: a display, a single button and a
//! blocking delay.
//!
//! The engine only sees the traits below. Concrete devices live in the
//! submodules: an in-memory [`Framebuffer`], a terminal presenter built on
//! ratatui, a crossterm keyboard button, and scripted/random sources for
//! tests and the simulator.

pub mod framebuffer;
pub mod keyboard;
pub mod recording;
pub mod scripted;
pub mod terminal;
pub mod timing;

pub use framebuffer::{Framebuffer, TextLabel};
pub use keyboard::KeyboardInput;
pub use recording::{DrawCommand, NullDisplay, RecordingRenderer};
pub use scripted::{RandomInput, ScriptedInput};
pub use terminal::TerminalDisplay;
pub use timing::{NoDelay, ThreadSleep};

use crate::error::Result;
use std::time::Duration;

/// Palette used by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Background,
    Green,
    White,
    Red,
}

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Background => (0, 0, 0),
            Self::Green => (0, 255, 0),
            Self::White => (255, 255, 255),
            Self::Red => (255, 0, 0),
        }
    }
}

/// Panel orientation. Gameplay is landscape, the game-over screen portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// Logical `(width, height)` of the surface in this orientation.
    pub fn dimensions(self) -> (i32, i32) {
        use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
        match self {
            Self::Landscape => (SCREEN_WIDTH, SCREEN_HEIGHT),
            Self::Portrait => (SCREEN_HEIGHT, SCREEN_WIDTH),
        }
    }
}

/// Fixed-cell fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Small,
    Big,
}

impl Font {
    /// Glyph cell `(width, height)` in pixels.
    pub fn cell_size(self) -> (i32, i32) {
        match self {
            Self::Small => (8, 12),
            Self::Big => (16, 16),
        }
    }
}

/// Where text goes along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    At(i32),
    Center,
}

impl Placement {
    /// Resolves to a pixel coordinate given the surface extent and the text
    /// extent along the same axis.
    pub fn resolve(self, surface: i32, content: i32) -> i32 {
        match self {
            Self::At(v) => v,
            Self::Center => (surface - content) / 2,
        }
    }
}

/// Drawing surface.
///
/// Coordinates are screen pixels; rectangles take two opposite corners in any
/// order, both inclusive. Every call may touch a real device, so all of them
/// are fallible.
pub trait Renderer {
    fn clear(&mut self) -> Result<()>;

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<()>;

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) -> Result<()>;

    fn draw_text(
        &mut self,
        text: &str,
        x: Placement,
        y: Placement,
        color: Color,
        font: Font,
    ) -> Result<()>;

    fn set_orientation(&mut self, orientation: Orientation) -> Result<()>;

    /// Makes everything drawn so far visible. Panels that draw straight to
    /// their own memory have nothing to do here.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The single digital input. Level-triggered: no debouncing, no edges.
pub trait InputSource {
    /// One-time setup (pull-ups, raw mode, ...).
    fn configure(&mut self) -> Result<()> {
        Ok(())
    }

    fn is_pressed(&mut self) -> Result<bool>;
}

/// Blocking pause primitive.
pub trait Delay {
    fn pause(&mut self, duration: Duration);
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<()> {
        (**self).fill_rect(x0, y0, x1, y1, color)
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) -> Result<()> {
        (**self).fill_circle(x, y, radius, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Placement,
        y: Placement,
        color: Color,
        font: Font,
    ) -> Result<()> {
        (**self).draw_text(text, x, y, color, font)
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        (**self).set_orientation(orientation)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }
}
