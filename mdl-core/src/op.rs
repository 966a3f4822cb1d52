use std::fmt;

/// Parsed script operations
///
/// Symbol references are names into the [`SymbolTable`](crate::SymbolTable);
/// `None` means the script left the optional reference out.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Push,
    Pop,
    Move {
        offset: [f64; 3],
        knob: Option<String>,
    },
    Scale {
        factors: [f64; 3],
        knob: Option<String>,
    },
    Rotate {
        /// 0 for X, 1 for Y, anything else for Z
        axis: f64,
        degrees: f64,
        knob: Option<String>,
    },
    Box {
        corner: [f64; 3],
        size: [f64; 3],
        constants: Option<String>,
        coords: Option<String>,
    },
    Sphere {
        center: [f64; 3],
        radius: f64,
        constants: Option<String>,
        coords: Option<String>,
    },
    Torus {
        center: [f64; 3],
        r0: f64,
        r1: f64,
        constants: Option<String>,
        coords: Option<String>,
    },
    Line {
        p0: [f64; 3],
        p1: [f64; 3],
        constants: Option<String>,
        cs0: Option<String>,
        cs1: Option<String>,
    },
    Mesh {
        filename: String,
        constants: Option<String>,
        coords: Option<String>,
    },
    Save {
        filename: String,
    },
    Display,
    Light {
        name: String,
        color: [f64; 3],
    },
    Ambient {
        color: [f64; 3],
    },
    Camera {
        eye: [f64; 3],
        aim: [f64; 3],
    },
    Constants {
        name: String,
    },
    SaveCoords {
        name: String,
    },
    SaveKnobs {
        name: String,
    },
    Basename {
        name: String,
    },
    Tween {
        start_frame: f64,
        end_frame: f64,
        knob_list0: String,
        knob_list1: String,
    },
    Frames {
        count: f64,
    },
    Vary {
        knob: String,
        start_frame: f64,
        end_frame: f64,
        start_value: f64,
        end_value: f64,
    },
    Set {
        knob: String,
        value: f64,
    },
    Shading {
        mode: String,
    },
    SetKnobs {
        value: f64,
    },
    Focal {
        value: f64,
    },
    GenerateRayfiles,
}

fn fmt_point(p: &[f64; 3]) -> String {
    format!("{:.2} {:.2} {:.2}", p[0], p[1], p[2])
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Push => write!(f, "Push"),
            Operation::Pop => write!(f, "Pop"),
            Operation::Move { offset, .. } => write!(f, "Move: {}", fmt_point(offset)),
            Operation::Scale { factors, .. } => write!(f, "Scale: {}", fmt_point(factors)),
            Operation::Rotate { axis, degrees, .. } => {
                write!(f, "Rotate: axis: {axis:.2} degrees: {degrees:.2}")
            }
            Operation::Box { corner, size, .. } => {
                write!(f, "Box: d0: {} d1: {}", fmt_point(corner), fmt_point(size))
            }
            Operation::Sphere { center, radius, .. } => {
                write!(f, "Sphere: {} r={radius:.2}", fmt_point(center))
            }
            Operation::Torus { center, r0, r1, .. } => {
                write!(f, "Torus: {} r0={r0:.2} r1={r1:.2}", fmt_point(center))
            }
            Operation::Line { p0, p1, .. } => {
                write!(f, "Line: from: {} to: {}", fmt_point(p0), fmt_point(p1))
            }
            Operation::Mesh { filename, .. } => write!(f, "Mesh: filename: {filename}"),
            Operation::Save { filename } => write!(f, "Save: {filename}"),
            Operation::Display => write!(f, "Display"),
            Operation::Light { name, color } => write!(f, "Light: {name} at: {}", fmt_point(color)),
            Operation::Ambient { color } => write!(f, "Ambient: {}", fmt_point(color)),
            Operation::Camera { eye, aim } => {
                write!(f, "Camera: eye: {} aim: {}", fmt_point(eye), fmt_point(aim))
            }
            Operation::Constants { name } => write!(f, "Constants: {name}"),
            Operation::SaveCoords { name } => write!(f, "Save Coords: {name}"),
            Operation::SaveKnobs { name } => write!(f, "Save knobs: {name}"),
            Operation::Basename { name } => write!(f, "Basename: {name}"),
            Operation::Tween {
                start_frame,
                end_frame,
                knob_list0,
                knob_list1,
            } => write!(
                f,
                "Tween: {start_frame:.0} {end_frame:.0}, {knob_list0} {knob_list1}"
            ),
            Operation::Frames { count } => write!(f, "Num frames: {count:.0}"),
            Operation::Vary {
                knob,
                start_frame,
                end_frame,
                start_value,
                end_value,
            } => write!(
                f,
                "Vary: {knob} {start_frame:.0} {end_frame:.0}, {start_value:.2} {end_value:.2}"
            ),
            Operation::Set { knob, value } => write!(f, "Set: {knob} {value:.2}"),
            Operation::Shading { mode } => write!(f, "Shading: {mode}"),
            Operation::SetKnobs { value } => write!(f, "Setknobs: {value:.2}"),
            Operation::Focal { value } => write!(f, "Focal: {value:.2}"),
            Operation::GenerateRayfiles => write!(f, "Generate Ray Files"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        let op = Operation::Sphere {
            center: [0.0, 1.0, 2.0],
            radius: 1.5,
            constants: None,
            coords: None,
        };
        assert_eq!(op.to_string(), "Sphere: 0.00 1.00 2.00 r=1.50");
        assert_eq!(Operation::Frames { count: 24.0 }.to_string(), "Num frames: 24");
    }
}
