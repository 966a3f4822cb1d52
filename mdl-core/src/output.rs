/// Saving and presenting finished screens
use crate::error::RenderError;
use crate::screen::Screen;
use std::path::Path;

/// Destination for a finished screen
pub trait Output {
    fn save(&mut self, screen: &Screen, filename: &str) -> Result<(), RenderError>;

    fn display(&mut self, screen: &Screen) -> Result<(), RenderError>;
}

/// Writes screens to image files. The format follows the file extension.
/// There is nowhere to display to, so `display` only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageOutput;

impl ImageOutput {
    pub fn write(screen: &Screen, path: &Path) -> Result<(), RenderError> {
        let invalid = || RenderError::InvalidDimensions {
            width: screen.width(),
            height: screen.height(),
        };
        let width = u32::try_from(screen.width()).map_err(|_| invalid())?;
        let height = u32::try_from(screen.height()).map_err(|_| invalid())?;

        let image = image::RgbImage::from_raw(width, height, screen.to_rgb_bytes())
            .ok_or_else(invalid)?;
        image.save(path)?;
        Ok(())
    }
}

impl Output for ImageOutput {
    fn save(&mut self, screen: &Screen, filename: &str) -> Result<(), RenderError> {
        if filename.is_empty() {
            return Err(RenderError::EmptyFilename);
        }
        Self::write(screen, Path::new(filename))?;
        log::info!("Saved {}x{} image to {}", screen.width(), screen.height(), filename);
        Ok(())
    }

    fn display(&mut self, _screen: &Screen) -> Result<(), RenderError> {
        log::info!("No display attached, skipping");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::Color;

    #[test]
    fn test_save_writes_file() {
        let mut screen = Screen::new(3, 2, Color::BLACK);
        screen.plot(0, 0, 0.0, Color::WHITE);

        let path = std::env::temp_dir().join(format!("mdl-core-output-{}.png", std::process::id()));
        let filename = path.to_string_lossy().into_owned();
        ImageOutput.save(&screen, &filename).unwrap();

        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (3, 2));
        assert_eq!(saved.get_pixel(0, 1).0, [255, 255, 255]);
        assert_eq!(saved.get_pixel(0, 0).0, [0, 0, 0]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_rejects_empty_filename() {
        let screen = Screen::new(1, 1, Color::BLACK);
        assert!(matches!(
            ImageOutput.save(&screen, ""),
            Err(RenderError::EmptyFilename)
        ));
    }

    #[test]
    fn test_unknown_extension_fails() {
        let screen = Screen::new(1, 1, Color::BLACK);
        let path = std::env::temp_dir().join("mdl-core-output.notanimage");
        assert!(ImageOutput.save(&screen, &path.to_string_lossy()).is_err());
    }
}
