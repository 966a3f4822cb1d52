/// Pixel buffer with a depth buffer
use crate::lighting::Color;

/// Pixels and depths in row-major order. Model coordinates map straight to
/// pixels with the origin at the bottom left; a larger z is closer.
#[derive(Debug, Clone)]
pub struct Screen {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    depth_buffer: Vec<f64>,
}

impl Screen {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            pixels: vec![background; size],
            depth_buffer: vec![f64::NEG_INFINITY; size],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let row = self.height - 1 - y as usize;
        Some(row * self.width + x as usize)
    }

    /// Write `color` at (x, y) if `z` is at least as close as what is there.
    /// Returns whether the pixel was written.
    pub fn plot(&mut self, x: i64, y: i64, z: f64, color: Color) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        if z < self.depth_buffer[idx] {
            return false;
        }
        self.depth_buffer[idx] = z;
        self.pixels[idx] = color;
        true
    }

    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    pub fn depth(&self, x: i64, y: i64) -> Option<f64> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// RGB bytes, top row first
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_respects_depth() {
        let mut screen = Screen::new(4, 4, Color::BLACK);
        assert!(screen.plot(1, 1, 0.0, Color::WHITE));
        assert!(!screen.plot(1, 1, -1.0, Color::new(1, 2, 3)));
        assert_eq!(screen.pixel(1, 1), Some(Color::WHITE));
        assert!(screen.plot(1, 1, 2.0, Color::new(1, 2, 3)));
        assert_eq!(screen.pixel(1, 1), Some(Color::new(1, 2, 3)));
        assert_eq!(screen.depth(1, 1), Some(2.0));
    }

    #[test]
    fn test_plot_clips_offscreen() {
        let mut screen = Screen::new(4, 4, Color::BLACK);
        assert!(!screen.plot(-1, 0, 0.0, Color::WHITE));
        assert!(!screen.plot(0, 4, 0.0, Color::WHITE));
        assert_eq!(screen.pixel(4, 0), None);
    }

    #[test]
    fn test_origin_is_bottom_left() {
        let mut screen = Screen::new(3, 2, Color::BLACK);
        screen.plot(0, 0, 0.0, Color::WHITE);
        let rows: Vec<_> = screen.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Color::WHITE);
        assert_eq!(rows[0][0], Color::BLACK);
        assert_eq!(screen.to_rgb_bytes().len(), 3 * 2 * 3);
    }
}
