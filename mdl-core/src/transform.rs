/// Transformation matrices and the coordinate system stack
use nalgebra::{Matrix4, Vector3};

/// Axis a rotation is taken about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Map a script axis selector: 0 is X, 1 is Y, anything else is Z.
    pub fn from_selector(selector: f64) -> Self {
        if selector == 0.0 {
            Axis::X
        } else if selector == 1.0 {
            Axis::Y
        } else {
            Axis::Z
        }
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a translation matrix
    pub fn translation(x: f64, y: f64, z: f64) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a scale matrix
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    /// Create a rotation matrix about a single axis (angle in radians)
    pub fn rotation(axis: Axis, theta: f64) -> Matrix4<f64> {
        let axisangle = match axis {
            Axis::X => Vector3::new(theta, 0.0, 0.0),
            Axis::Y => Vector3::new(0.0, theta, 0.0),
            Axis::Z => Vector3::new(0.0, 0.0, theta),
        };
        Matrix4::new_rotation(axisangle)
    }

    pub fn degrees_to_radians(degrees: f64) -> f64 {
        degrees * std::f64::consts::PI / 180.0
    }
}

/// Stack of nested coordinate systems.
///
/// The bottom entry is the identity and can never be popped, so `peek`
/// always has a frame to return. Each entry is the composition of every
/// transform applied since the base, in application order.
#[derive(Debug, Clone)]
pub struct TransformStack {
    frames: Vec<Matrix4<f64>>,
}

impl TransformStack {
    /// A stack holding only the identity base frame
    pub fn new() -> Self {
        Self {
            frames: vec![Matrix4::identity()],
        }
    }

    /// Duplicate the current top and make the copy the new top
    pub fn push(&mut self) {
        let top = *self.peek();
        self.frames.push(top);
    }

    /// Remove the current top. Returns `None` without touching the stack
    /// when only the base frame is left.
    pub fn pop(&mut self) -> Option<Matrix4<f64>> {
        if self.frames.len() <= 1 {
            return None;
        }
        self.frames.pop()
    }

    /// The current coordinate system
    pub fn peek(&self) -> &Matrix4<f64> {
        // The base frame is never removed.
        &self.frames[self.frames.len() - 1]
    }

    /// Overwrite the top frame in place
    pub fn replace_top(&mut self, matrix: Matrix4<f64>) {
        let last = self.frames.len() - 1;
        self.frames[last] = matrix;
    }

    /// Compose `transform` onto the top frame, giving `top * transform`
    pub fn compose(&mut self, transform: &Matrix4<f64>) {
        let composed = self.peek() * transform;
        self.replace_top(composed);
    }

    /// Number of frames, including the base
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
