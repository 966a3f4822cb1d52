/// Z-buffered software rasterizer
use crate::error::RenderError;
use crate::geometry::GeometryBuffer;
use crate::lighting::{shade, Color, Constants, Lighting};
use crate::screen::Screen;
use nalgebra::Point3;

/// Draws committed geometry onto a screen
pub trait Rasterizer {
    /// Fill every triangle in `polygons`. `flat` is the ambient color the
    /// surface reflects through the ambient coefficients of `constants`.
    fn draw_polygons(
        &mut self,
        polygons: &GeometryBuffer,
        screen: &mut Screen,
        lighting: &Lighting,
        flat: Color,
        constants: &Constants,
    ) -> Result<(), RenderError>;

    /// Draw every point pair in `edges` in a single color
    fn draw_lines(
        &mut self,
        edges: &GeometryBuffer,
        screen: &mut Screen,
        color: Color,
    ) -> Result<(), RenderError>;
}

/// Flat shaded scanline rasterizer with back face culling
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineRasterizer;

impl Rasterizer for ScanlineRasterizer {
    fn draw_polygons(
        &mut self,
        polygons: &GeometryBuffer,
        screen: &mut Screen,
        lighting: &Lighting,
        flat: Color,
        constants: &Constants,
    ) -> Result<(), RenderError> {
        for triangle in polygons.triangles() {
            let normal = (triangle[1] - triangle[0]).cross(&(triangle[2] - triangle[0]));
            // Degenerate triangles have a zero normal and are skipped here too
            if normal.dot(&lighting.view) <= 0.0 {
                continue;
            }
            let color = shade(&normal, lighting, flat, constants);
            fill_triangle(screen, &triangle, color);
        }
        Ok(())
    }

    fn draw_lines(
        &mut self,
        edges: &GeometryBuffer,
        screen: &mut Screen,
        color: Color,
    ) -> Result<(), RenderError> {
        for (p0, p1) in edges.edges() {
            draw_line(screen, &p0, &p1, color);
        }
        Ok(())
    }
}

fn fill_triangle(screen: &mut Screen, triangle: &[Point3<f64>; 3], color: Color) {
    let [v0, v1, v2] = triangle;

    // Bounding box, clipped to screen bounds
    let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as i64;
    let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(screen.width() as f64 - 1.0) as i64;
    let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as i64;
    let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(screen.height() as f64 - 1.0) as i64;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = (x as f64, y as f64);
            if let Some((w0, w1, w2)) = barycentric((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y), p) {
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    let depth = w0 * v0.z + w1 * v1.z + w2 * v2.z;
                    screen.plot(x, y, depth, color);
                }
            }
        }
    }
}

/// Walk the longer axis one pixel at a time, interpolating depth. Only the
/// part of the segment inside the screen is walked.
fn draw_line(screen: &mut Screen, p0: &Point3<f64>, p1: &Point3<f64>, color: Color) {
    let Some((a, b)) = clip_to_screen(screen, p0, p1) else {
        return;
    };
    let (x0, y0) = (a.x.round() as i64, a.y.round() as i64);
    let (x1, y1) = (b.x.round() as i64, b.y.round() as i64);
    let steps = x0.abs_diff(x1).max(y0.abs_diff(y1));

    if steps == 0 {
        screen.plot(x0, y0, a.z.max(b.z), color);
        return;
    }

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = x0 as f64 + (x1 as f64 - x0 as f64) * t;
        let y = y0 as f64 + (y1 as f64 - y0 as f64) * t;
        let z = a.z + (b.z - a.z) * t;
        screen.plot(x.round() as i64, y.round() as i64, z, color);
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Cohen-Sutherland clip of a segment against the pixel rectangle, half a
/// pixel out on every side. `None` when nothing of it is visible.
fn clip_to_screen(
    screen: &Screen,
    p0: &Point3<f64>,
    p1: &Point3<f64>,
) -> Option<(Point3<f64>, Point3<f64>)> {
    if !p0.iter().chain(p1.iter()).all(|c| c.is_finite()) {
        return None;
    }

    let (min_x, min_y) = (-0.5, -0.5);
    let max_x = screen.width() as f64 - 0.5;
    let max_y = screen.height() as f64 - 0.5;
    let outcode = |p: &Point3<f64>| {
        let mut code = 0;
        if p.x < min_x {
            code |= LEFT;
        } else if p.x > max_x {
            code |= RIGHT;
        }
        if p.y < min_y {
            code |= BOTTOM;
        } else if p.y > max_y {
            code |= TOP;
        }
        code
    };

    let (mut a, mut b) = (*p0, *p1);
    // Each pass pins one end to an edge; four per end is enough
    for _ in 0..8 {
        let (code_a, code_b) = (outcode(&a), outcode(&b));
        if code_a | code_b == 0 {
            return Some((a, b));
        }
        if code_a & code_b != 0 {
            return None;
        }

        let code = if code_a != 0 { code_a } else { code_b };
        let d = b - a;
        let clipped = if code & TOP != 0 {
            let t = (max_y - a.y) / d.y;
            Point3::new(a.x + d.x * t, max_y, a.z + d.z * t)
        } else if code & BOTTOM != 0 {
            let t = (min_y - a.y) / d.y;
            Point3::new(a.x + d.x * t, min_y, a.z + d.z * t)
        } else if code & RIGHT != 0 {
            let t = (max_x - a.x) / d.x;
            Point3::new(max_x, a.y + d.y * t, a.z + d.z * t)
        } else {
            let t = (min_x - a.x) / d.x;
            Point3::new(min_x, a.y + d.y * t, a.z + d.z * t)
        };

        if code == code_a {
            a = clipped;
        } else {
            b = clipped;
        }
    }
    None
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f64, f64),
    v1: (f64, f64),
    v2: (f64, f64),
    p: (f64, f64),
) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-12 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
