/// Terminal presenter for rendered screens
use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use mdl_core::Screen;
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '▀';

/// Shrinks a screen to fit a terminal, two pixel rows per character cell
pub struct TerminalDisplay {
    width: usize,
    height: usize,
    cells: Vec<(mdl_core::Color, mdl_core::Color)>,
}

impl TerminalDisplay {
    /// `width` and `height` are in character cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
        }
    }

    /// Sample `screen` with nearest neighbour filtering, keeping its aspect ratio
    pub fn sample(&mut self, screen: &Screen) {
        self.cells.clear();
        if self.width == 0 || self.height == 0 || screen.width() == 0 || screen.height() == 0 {
            return;
        }

        let rows = self.height * 2;
        let scale = (screen.width() as f64 / self.width as f64)
            .max(screen.height() as f64 / rows as f64);
        let pixel = |col: usize, row: usize| {
            let x = (col as f64 * scale) as i64;
            // Screen rows run bottom to top
            let y = screen.height() as i64 - 1 - (row as f64 * scale) as i64;
            screen.pixel(x, y).unwrap_or_default()
        };

        for cell_row in 0..self.height {
            for col in 0..self.width {
                self.cells
                    .push((pixel(col, cell_row * 2), pixel(col, cell_row * 2 + 1)));
            }
        }
    }

    pub fn cells(&self) -> &[(mdl_core::Color, mdl_core::Color)] {
        &self.cells
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in self.cells.chunks(self.width.max(1)) {
            for (top, bottom) in row {
                writer.queue(SetForegroundColor(to_terminal(top)))?;
                writer.queue(SetBackgroundColor(to_terminal(bottom)))?;
                writer.queue(Print(HALF_BLOCK))?;
            }
            writer.queue(ResetColor)?;
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_terminal(color: &mdl_core::Color) -> Color {
    Color::Rgb {
        r: color.red,
        g: color.green,
        b: color.blue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdl_core::Color as Rgb;

    #[test]
    fn test_sample_pairs_rows() {
        let mut screen = Screen::new(2, 2, Rgb::BLACK);
        // Bottom left pixel
        screen.plot(0, 0, 0.0, Rgb::WHITE);

        let mut display = TerminalDisplay::new(2, 1);
        display.sample(&screen);

        assert_eq!(
            display.cells(),
            &[(Rgb::BLACK, Rgb::WHITE), (Rgb::BLACK, Rgb::BLACK)]
        );
    }

    #[test]
    fn test_sample_shrinks_large_screens() {
        let screen = Screen::new(500, 500, Rgb::new(9, 9, 9));
        let mut display = TerminalDisplay::new(80, 24);
        display.sample(&screen);
        assert_eq!(display.cells().len(), 80 * 24);
        assert_eq!(display.cells()[0], (Rgb::new(9, 9, 9), Rgb::new(9, 9, 9)));
        // The terminal is wider than the square screen; the rest is padding
        assert_eq!(display.cells()[79], (Rgb::BLACK, Rgb::BLACK));
    }

    #[test]
    fn test_draw_emits_one_line_per_row() {
        let screen = Screen::new(4, 4, Rgb::BLACK);
        let mut display = TerminalDisplay::new(4, 2);
        display.sample(&screen);

        let mut out = Vec::new();
        display.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(HALF_BLOCK).count(), 8);
        assert_eq!(text.matches("\r\n").count(), 2);
    }
}
