//! In-memory drawing surface.
//!
//! Pixels are stored per logical orientation; switching orientation swaps the
//! dimensions and wipes the surface, the same as re-initialising a panel.
//! Text is not rasterised: each `draw_text` call becomes a [`TextLabel`] with
//! its resolved pixel anchor, and presenters decide how to show it.

use super::{Color, Font, Orientation, Placement, Renderer};
use crate::error::Result;

/// A piece of text placed on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLabel {
    pub text: String,
    /// Resolved top-left pixel.
    pub x: i32,
    pub y: i32,
    /// Requested placement, kept so presenters can re-centre in their own units.
    pub placement: (Placement, Placement),
    pub color: Color,
    pub font: Font,
}

#[derive(Debug, Clone)]
pub struct Framebuffer {
    orientation: Orientation,
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    labels: Vec<TextLabel>,
}

impl Framebuffer {
    pub fn new(orientation: Orientation) -> Self {
        let (width, height) = orientation.dimensions();
        Self {
            orientation,
            width,
            height,
            pixels: vec![Color::Background; (width * height) as usize],
            labels: Vec::new(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pixel color, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Number of pixels currently painted `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(Orientation::Landscape)
    }
}

impl Renderer for Framebuffer {
    fn clear(&mut self) -> Result<()> {
        self.pixels.fill(Color::Background);
        self.labels.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<()> {
        // Clip before iterating; obstacle rectangles routinely start off-screen.
        let left = x0.min(x1).max(0);
        let right = x0.max(x1).min(self.width - 1);
        let top = y0.min(y1).max(0);
        let bottom = y0.max(y1).min(self.height - 1);

        for y in top..=bottom {
            for x in left..=right {
                self.set(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Color) -> Result<()> {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.set(x + dx, y + dy, color);
                }
            }
        }
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
        let (cell_w, cell_h) = font.cell_size();
        let text_width = text.chars().count() as i32 * cell_w;
        self.labels.push(TextLabel {
            text: text.to_string(),
            x: x.resolve(self.width, text_width),
            y: y.resolve(self.height, cell_h),
            placement: (x, y),
            color,
            font,
        });
        Ok(())
    }

    fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        *self = Self::new(orientation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank_landscape() {
        let fb = Framebuffer::default();
        assert_eq!((fb.width(), fb.height()), (320, 240));
        assert_eq!(fb.count(Color::Background), 320 * 240);
        assert!(fb.labels().is_empty());
    }

    #[test]
    fn test_fill_rect_normalizes_corners_inclusive() {
        let mut fb = Framebuffer::default();
        fb.fill_rect(12, 25, 10, 20, Color::Green).unwrap();
        assert_eq!(fb.count(Color::Green), 3 * 6);
        assert_eq!(fb.pixel(10, 20), Some(Color::Green));
        assert_eq!(fb.pixel(12, 25), Some(Color::Green));
        assert_eq!(fb.pixel(13, 25), Some(Color::Background));
    }

    #[test]
    fn test_fill_rect_clips_off_screen() {
        let mut fb = Framebuffer::default();
        // Lower half of an obstacle whose opening starts left of the screen
        fb.fill_rect(-59, 100, 0, 110, Color::Green).unwrap();
        assert_eq!(fb.count(Color::Green), 11);
        assert_eq!(fb.pixel(0, 105), Some(Color::Green));
    }

    #[test]
    fn test_fill_circle_area() {
        let mut fb = Framebuffer::default();
        fb.fill_circle(150, 60, 10, Color::White).unwrap();
        assert_eq!(fb.pixel(150, 60), Some(Color::White));
        assert_eq!(fb.pixel(160, 60), Some(Color::White));
        assert_eq!(fb.pixel(158, 68), Some(Color::Background));
        // Lattice points inside a radius-10 disc
        assert_eq!(fb.count(Color::White), 317);
    }

    #[test]
    fn test_circle_at_edge_is_clipped() {
        let mut fb = Framebuffer::default();
        fb.fill_circle(0, 0, 3, Color::White).unwrap();
        assert!(fb.count(Color::White) < 29);
        assert_eq!(fb.pixel(-1, 0), None);
    }

    #[test]
    fn test_text_center_resolves_both_axes() {
        let mut fb = Framebuffer::new(Orientation::Portrait);
        fb.draw_text(
            "GAME OVER",
            Placement::Center,
            Placement::Center,
            Color::Red,
            Font::Big,
        )
        .unwrap();
        let label = &fb.labels()[0];
        assert_eq!((label.x, label.y), (48, 152));
        assert_eq!(label.placement, (Placement::Center, Placement::Center));
    }

    #[test]
    fn test_set_orientation_wipes_surface() {
        let mut fb = Framebuffer::default();
        fb.fill_rect(0, 0, 5, 5, Color::Green).unwrap();
        fb.draw_text("7", Placement::At(0), Placement::At(0), Color::White, Font::Small)
            .unwrap();
        fb.set_orientation(Orientation::Portrait).unwrap();
        assert_eq!((fb.width(), fb.height()), (240, 320));
        assert_eq!(fb.count(Color::Green), 0);
        assert!(fb.labels().is_empty());
    }

    #[test]
    fn test_clear_resets_pixels_and_labels() {
        let mut fb = Framebuffer::default();
        fb.fill_circle(20, 20, 4, Color::White).unwrap();
        fb.draw_text("1", Placement::Center, Placement::At(3), Color::White, Font::Big)
            .unwrap();
        fb.clear().unwrap();
        assert_eq!(fb.count(Color::White), 0);
        assert!(fb.labels().is_empty());
    }
}
