/// Colors, reflective constants and scene lighting
use nalgebra::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from floating point channels, clamped to 0..=255
    pub fn from_channels(channels: Vector3<f64>) -> Self {
        let clamp = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        Self::new(clamp(channels.x), clamp(channels.y), clamp(channels.z))
    }

    pub fn channels(&self) -> Vector3<f64> {
        Vector3::new(self.red as f64, self.green as f64, self.blue as f64)
    }
}

/// Reflection coefficients for one term of the lighting equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflection {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Reflection {
    pub const fn uniform(k: f64) -> Self {
        Self {
            red: k,
            green: k,
            blue: k,
        }
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.red, self.green, self.blue)
    }
}

/// Reflective constants of a surface plus the solid color cached with them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub ambient: Reflection,
    pub diffuse: Reflection,
    pub specular: Reflection,
    pub color: Color,
}

impl Constants {
    pub fn new(ambient: Reflection, diffuse: Reflection, specular: Reflection, color: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            color,
        }
    }

    /// Fallback used by solids that name no constants
    pub const fn white() -> Self {
        Self {
            ambient: Reflection::uniform(0.1),
            diffuse: Reflection::uniform(0.5),
            specular: Reflection::uniform(0.5),
            color: Color::BLACK,
        }
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::white()
    }
}

/// Either the named constants or the default, never a blend of the two
pub fn resolve_constants<'a>(named: Option<&'a Constants>, default: &'a Constants) -> &'a Constants {
    named.unwrap_or(default)
}

/// Point light: a location the light shines from and its color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub location: Vector3<f64>,
    pub color: Color,
}

/// Light, ambient color and view vector shared by every draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub light: Light,
    /// Scene ambient light. Surfaces take their ambient term from the flat
    /// color passed to [`shade`], so this is carried for hosts but not read
    /// when drawing.
    pub ambient: Color,
    pub view: Vector3<f64>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            light: Light {
                location: Vector3::new(0.5, 0.75, 1.0),
                color: Color::WHITE,
            },
            ambient: Color::new(50, 50, 50),
            view: Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

const SPECULAR_EXPONENT: i32 = 8;

/// Flat lighting for a surface with the given normal.
///
/// `ambient` is the ambient color the surface reflects through its ambient
/// coefficients; diffuse and specular terms come from the point light.
pub fn shade(normal: &Vector3<f64>, lighting: &Lighting, ambient: Color, constants: &Constants) -> Color {
    let n = normal.normalize();
    let l = lighting.light.location.normalize();
    let v = lighting.view.normalize();
    let light = lighting.light.color.channels();

    let ambient_term = ambient.channels().component_mul(&constants.ambient.as_vector());

    let n_dot_l = n.dot(&l);
    let diffuse_term = light.component_mul(&constants.diffuse.as_vector()) * n_dot_l.max(0.0);

    let reflected = n * (2.0 * n_dot_l) - l;
    let specular_term = if n_dot_l > 0.0 {
        let r_dot_v = reflected.dot(&v).max(0.0);
        light.component_mul(&constants.specular.as_vector()) * r_dot_v.powi(SPECULAR_EXPONENT)
    } else {
        Vector3::zeros()
    };

    Color::from_channels(ambient_term + diffuse_term + specular_term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Constants {
        Constants::new(
            Reflection::uniform(0.2),
            Reflection { red: 0.8, green: 0.0, blue: 0.0 },
            Reflection::uniform(0.0),
            Color::new(255, 0, 0),
        )
    }

    #[test]
    fn test_default_constants() {
        let white = Constants::default();
        assert_eq!(white.ambient, Reflection::uniform(0.1));
        assert_eq!(white.diffuse, Reflection::uniform(0.5));
        assert_eq!(white.specular, Reflection::uniform(0.5));
    }

    #[test]
    fn test_resolve_is_either_or() {
        let default = Constants::white();
        let named = red();
        assert_eq!(*resolve_constants(Some(&named), &default), named);
        assert_eq!(*resolve_constants(None, &default), default);
    }

    #[test]
    fn test_color_clamps() {
        let c = Color::from_channels(Vector3::new(-3.0, 127.6, 900.0));
        assert_eq!(c, Color::new(0, 128, 255));
    }

    #[test]
    fn test_shade_ambient_only_when_facing_away() {
        let lighting = Lighting::default();
        let constants = Constants::white();
        let away = -lighting.light.location;
        let c = shade(&away, &lighting, Color::new(100, 200, 50), &constants);
        assert_eq!(c, Color::new(10, 20, 5));
    }

    #[test]
    fn test_shade_diffuse_uses_channel_coefficients() {
        let lighting = Lighting::default();
        let facing = lighting.light.location;
        let c = shade(&facing, &lighting, Color::BLACK, &red());
        assert_eq!(c, Color::new(204, 0, 0));
    }
}
