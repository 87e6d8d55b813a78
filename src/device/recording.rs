//! Renderers that do not show anything.

use super::{Color, Font, Orientation, Placement, Renderer};
use crate::error::Result;

/// One renderer request, as issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    FillCircle {
        x: i32,
        y: i32,
        radius: i32,
        color: Color,
    },
    Text {
        text: String,
        x: Placement,
        y: Placement,
        color: Color,
        font: Font,
    },
    SetOrientation(Orientation),
    Present,
}

/// Keeps every request in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the last `Clear`.
    pub fn current_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::FillRect {
            x0,
            y0,
            x1,
            y1,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Placement,
        y: Placement,
        color: Color,
        font: Font,
    ) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
            font,
        });
        Ok(())
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        self.commands.push(DrawCommand::SetOrientation(orientation));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}

/// Accepts and drops everything. Used for headless simulation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl Renderer for NullDisplay {
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    fn fill_rect(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32, _color: Color) -> Result<()> {
        Ok(())
    }

    fn fill_circle(&mut self, _x: i32, _y: i32, _radius: i32, _color: Color) -> Result<()> {
        Ok(())
    }

    fn draw_text(
        &mut self,
        _text: &str,
        _x: Placement,
        _y: Placement,
        _color: Color,
        _font: Font,
    ) -> Result<()> {
        Ok(())
    }

    fn set_orientation(&mut self, _orientation: Orientation) -> Result<()> {
        Ok(())
    }
}
