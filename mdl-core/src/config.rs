/// Render settings fixed for the length of a run
use crate::lighting::{Color, Constants, Lighting};

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Tessellation resolution for spheres and tori
    pub step: usize,
    /// Points the geometry buffer is allocated with up front
    pub buffer_capacity: usize,
    pub lighting: Lighting,
    /// Used by solids that name no constants
    pub default_constants: Constants,
    pub line_color: Color,
    pub clear_color: Color,
}

impl RenderConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            step: 100,
            buffer_capacity: 1000,
            lighting: Lighting::default(),
            default_constants: Constants::white(),
            line_color: Color::WHITE,
            clear_color: Color::BLACK,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (500, 500));
        assert_eq!(config.step, 100);
        assert_eq!(config.default_constants, Constants::white());
        assert_eq!(config.lighting.ambient, Color::new(50, 50, 50));
    }
}
