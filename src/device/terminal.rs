//! Shows a [`Framebuffer`] in a terminal.
//!
//! Drawing calls land in the framebuffer; `present` scales it to the terminal
//! with half-block cells (two pixel rows per cell) and overlays text labels.

use super::{Color, Font, Framebuffer, Orientation, Placement, Renderer};
use crate::error::Result;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{self, Modifier, Style};
use ratatui::widgets::Widget;
use ratatui::Terminal;

fn term_color(color: Color) -> style::Color {
    let (r, g, b) = color.rgb();
    style::Color::Rgb(r, g, b)
}

/// Widget drawing a framebuffer into whatever area it is given.
pub struct FramebufferView<'a> {
    frame: &'a Framebuffer,
}

impl<'a> FramebufferView<'a> {
    pub fn new(frame: &'a Framebuffer) -> Self {
        Self { frame }
    }

    fn sample(&self, col: u16, pixel_row: u16, area: Rect) -> Color {
        let x = col as i32 * self.frame.width() / area.width as i32;
        let y = pixel_row as i32 * self.frame.height() / (area.height as i32 * 2);
        self.frame.pixel(x, y).unwrap_or(Color::Background)
    }
}

impl Widget for FramebufferView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for row in 0..area.height {
            for col in 0..area.width {
                let top = self.sample(col, row * 2, area);
                let bottom = self.sample(col, row * 2 + 1, area);
                buf.get_mut(area.x + col, area.y + row)
                    .set_symbol("\u{2580}")
                    .set_fg(term_color(top))
                    .set_bg(term_color(bottom));
            }
        }

        for label in self.frame.labels() {
            let len = label.text.chars().count() as i32;
            let cols = area.width as i32;
            let rows = area.height as i32;
            let col = match label.placement.0 {
                Placement::Center => (cols - len) / 2,
                Placement::At(_) => label.x * cols / self.frame.width(),
            };
            let row = match label.placement.1 {
                Placement::Center => (rows - 1) / 2,
                Placement::At(_) => label.y * rows / self.frame.height(),
            };
            if row < 0 || row >= rows {
                continue;
            }

            let mut style = Style::default()
                .fg(term_color(label.color))
                .bg(term_color(Color::Background));
            if label.font == Font::Big {
                style = style.add_modifier(Modifier::BOLD);
            }
            let col = col.clamp(0, cols - 1);
            buf.set_stringn(
                area.x + col as u16,
                area.y + row as u16,
                &label.text,
                (cols - col) as usize,
                style,
            );
        }
    }
}

pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    frame: Framebuffer,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(backend: B) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            frame: Framebuffer::default(),
        })
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.frame
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalDisplay<B> {
    fn clear(&mut self) -> Result<()> {
        self.frame.clear()
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<()> {
        self.frame.fill_rect(x0, y0, x1, y1, color)
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) -> Result<()> {
        self.frame.fill_circle(x, y, radius, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: Placement,
        y: Placement,
        color: Color,
        font: Font,
    ) -> Result<()> {
        self.frame.draw_text(text, x, y, color, font)
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        self.frame.set_orientation(orientation)?;
        // Cell contents from the old orientation would otherwise survive the diff.
        self.terminal.clear()?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let frame = &self.frame;
        self.terminal.draw(|f| {
            let area = f.size();
            f.render_widget(FramebufferView::new(frame), area);
        })?;
        Ok(())
    }
}
