/// Geometry buffer and primitive tessellation
use nalgebra::{Matrix4, Point3};
use std::f64::consts::PI;

/// Growable list of points reused across drawing operations.
///
/// Polygon data is stored as consecutive triangles (three points each),
/// edge data as consecutive point pairs. `len` is the committed count;
/// `clear` resets it without giving back the allocation.
#[derive(Debug, Clone, Default)]
pub struct GeometryBuffer {
    points: Vec<Point3<f64>>,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn add_edge(&mut self, p0: Point3<f64>, p1: Point3<f64>) {
        self.points.push(p0);
        self.points.push(p1);
    }

    pub fn add_polygon(&mut self, p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) {
        self.points.push(p0);
        self.points.push(p1);
        self.points.push(p2);
    }

    /// Apply `matrix` to every committed point in place
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        for point in &mut self.points {
            *point = matrix.transform_point(point);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Committed points grouped as triangles
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f64>; 3]> + '_ {
        self.points.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Committed points grouped as line segments
    pub fn edges(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> + '_ {
        self.points.chunks_exact(2).map(|e| (e[0], e[1]))
    }
}

/// Generators that append primitive geometry to a buffer, starting after
/// whatever the buffer already holds.
pub trait Primitives {
    /// Box with its front top left corner at `corner`, extending `size.x`
    /// to the right, `size.y` down and `size.z` back.
    fn add_box(&mut self, buffer: &mut GeometryBuffer, corner: [f64; 3], size: [f64; 3]);

    fn add_sphere(&mut self, buffer: &mut GeometryBuffer, center: [f64; 3], radius: f64, step: usize);

    /// Torus around the Y axis: `r0` is the tube radius, `r1` the distance
    /// from `center` to the middle of the tube.
    fn add_torus(&mut self, buffer: &mut GeometryBuffer, center: [f64; 3], r0: f64, r1: f64, step: usize);

    fn add_edge(&mut self, buffer: &mut GeometryBuffer, p0: [f64; 3], p1: [f64; 3]);
}

/// Default triangle tessellator. Every triangle it emits is wound
/// counter-clockwise when seen from outside the solid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tessellator;

impl Primitives for Tessellator {
    fn add_box(&mut self, buffer: &mut GeometryBuffer, corner: [f64; 3], size: [f64; 3]) {
        let [x0, y0, z0] = corner;
        let (x1, y1, z1) = (x0 + size[0], y0 - size[1], z0 - size[2]);

        // l/r, b/t, f/b: left or right, bottom or top, front or back
        let lbf = Point3::new(x0, y1, z0);
        let rbf = Point3::new(x1, y1, z0);
        let rtf = Point3::new(x1, y0, z0);
        let ltf = Point3::new(x0, y0, z0);
        let lbb = Point3::new(x0, y1, z1);
        let rbb = Point3::new(x1, y1, z1);
        let rtb = Point3::new(x1, y0, z1);
        let ltb = Point3::new(x0, y0, z1);

        let mut quad = |a, b, c, d| {
            buffer.add_polygon(a, b, c);
            buffer.add_polygon(a, c, d);
        };
        quad(lbf, rbf, rtf, ltf); // front
        quad(rbb, lbb, ltb, rtb); // back
        quad(rbf, rbb, rtb, rtf); // right
        quad(lbb, lbf, ltf, ltb); // left
        quad(ltf, rtf, rtb, ltb); // top
        quad(lbb, rbb, rbf, lbf); // bottom
    }

    fn add_sphere(&mut self, buffer: &mut GeometryBuffer, center: [f64; 3], radius: f64, step: usize) {
        if step == 0 {
            return;
        }
        let points = sphere_points(center, radius, step);
        let ring = step + 1;
        let total = points.len();

        for lat in 0..step {
            for longt in 0..step {
                let p0 = lat * ring + longt;
                let p1 = p0 + 1;
                let p2 = (p1 + ring) % total;
                let p3 = (p0 + ring) % total;

                // The first and last slices touch a pole, so one of their
                // triangles would be degenerate.
                if longt != step - 1 {
                    buffer.add_polygon(points[p0], points[p1], points[p2]);
                }
                if longt != 0 {
                    buffer.add_polygon(points[p0], points[p2], points[p3]);
                }
            }
        }
    }

    fn add_torus(&mut self, buffer: &mut GeometryBuffer, center: [f64; 3], r0: f64, r1: f64, step: usize) {
        if step == 0 {
            return;
        }
        let points = torus_points(center, r0, r1, step);
        let total = points.len();

        for lat in 0..step {
            for longt in 0..step {
                let p0 = lat * step + longt;
                let p1 = if longt == step - 1 { p0 - longt } else { p0 + 1 };
                let p2 = (p1 + step) % total;
                let p3 = (p0 + step) % total;

                buffer.add_polygon(points[p0], points[p3], points[p2]);
                buffer.add_polygon(points[p0], points[p2], points[p1]);
            }
        }
    }

    fn add_edge(&mut self, buffer: &mut GeometryBuffer, p0: [f64; 3], p1: [f64; 3]) {
        buffer.add_edge(
            Point3::new(p0[0], p0[1], p0[2]),
            Point3::new(p1[0], p1[1], p1[2]),
        );
    }
}

/// Semicircle in the XY plane rotated a full turn about the X axis.
/// Yields `step` rotations of `step + 1` points each.
fn sphere_points(center: [f64; 3], radius: f64, step: usize) -> Vec<Point3<f64>> {
    let [cx, cy, cz] = center;
    let mut points = Vec::with_capacity(step * (step + 1));

    for rotation in 0..step {
        let phi = 2.0 * PI * rotation as f64 / step as f64;
        for circle in 0..=step {
            let theta = PI * circle as f64 / step as f64;
            points.push(Point3::new(
                radius * theta.cos() + cx,
                radius * theta.sin() * phi.cos() + cy,
                radius * theta.sin() * phi.sin() + cz,
            ));
        }
    }
    points
}

/// Circle of radius `r0` offset by `r1` from the center, rotated a full
/// turn about the Y axis. Yields `step * step` points.
fn torus_points(center: [f64; 3], r0: f64, r1: f64, step: usize) -> Vec<Point3<f64>> {
    let [cx, cy, cz] = center;
    let mut points = Vec::with_capacity(step * step);

    for rotation in 0..step {
        let phi = 2.0 * PI * rotation as f64 / step as f64;
        for circle in 0..step {
            let theta = 2.0 * PI * circle as f64 / step as f64;
            let ring = r0 * theta.cos() + r1;
            points.push(Point3::new(
                phi.cos() * ring + cx,
                r0 * theta.sin() + cy,
                -phi.sin() * ring + cz,
            ));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn outward(tri: &[Point3<f64>; 3], inside: Point3<f64>) -> bool {
        let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
        let centroid = Point3::from((tri[0].coords + tri[1].coords + tri[2].coords) / 3.0);
        normal.dot(&(centroid - inside)) > 0.0
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = GeometryBuffer::with_capacity(8);
        Tessellator.add_sphere(&mut buffer, [0.0, 0.0, 0.0], 1.0, 20);
        let grown = buffer.capacity();
        assert!(buffer.len() > 8);

        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), grown);
    }

    #[test]
    fn test_generators_append() {
        let mut buffer = GeometryBuffer::new();
        Tessellator.add_edge(&mut buffer, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        Tessellator.add_box(&mut buffer, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(buffer.len(), 2 + 36);
        assert_eq!(buffer.points()[1], Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_box_extent_and_winding() {
        let mut buffer = GeometryBuffer::new();
        Tessellator.add_box(&mut buffer, [1.0, 2.0, 3.0], [2.0, 4.0, 6.0]);
        assert_eq!(buffer.triangles().count(), 12);

        for p in buffer.points() {
            assert!(p.x >= 1.0 && p.x <= 3.0);
            assert!(p.y >= -2.0 && p.y <= 2.0);
            assert!(p.z >= -3.0 && p.z <= 3.0);
        }

        let inside = Point3::new(2.0, 0.0, 0.0);
        assert!(buffer.triangles().all(|t| outward(&t, inside)));
    }

    #[test]
    fn test_sphere_points_lie_on_surface() {
        let mut buffer = GeometryBuffer::new();
        let center = [1.0, -2.0, 0.5];
        Tessellator.add_sphere(&mut buffer, center, 3.0, 16);

        let c = Point3::new(center[0], center[1], center[2]);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.len() % 3, 0);
        for p in buffer.points() {
            assert!(((p - c).norm() - 3.0).abs() < 1e-9);
        }
        assert!(buffer.triangles().all(|t| outward(&t, c)));
    }

    #[test]
    fn test_torus_winding_faces_out_of_tube() {
        let mut buffer = GeometryBuffer::new();
        Tessellator.add_torus(&mut buffer, [0.0, 0.0, 0.0], 1.0, 4.0, 12);
        assert_eq!(buffer.triangles().count(), 2 * 12 * 12);

        for tri in buffer.triangles() {
            // Nearest point on the tube's center circle
            let c = Point3::from((tri[0].coords + tri[1].coords + tri[2].coords) / 3.0);
            let radial = Vector3::new(c.x, 0.0, c.z).normalize() * 4.0;
            assert!(outward(&tri, Point3::from(radial)));
        }
    }

    #[test]
    fn test_transform_moves_committed_points() {
        let mut buffer = GeometryBuffer::new();
        buffer.add_edge(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        buffer.transform(&Matrix4::new_translation(&Vector3::new(0.0, 5.0, 0.0)));

        let edges: Vec<_> = buffer.edges().collect();
        assert_eq!(edges.len(), 1);
        assert!((edges[0].0 - Point3::new(0.0, 5.0, 0.0)).norm() < 1e-12);
        assert!((edges[0].1 - Point3::new(1.0, 5.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_zero_step_adds_nothing() {
        let mut buffer = GeometryBuffer::new();
        Tessellator.add_sphere(&mut buffer, [0.0, 0.0, 0.0], 1.0, 0);
        Tessellator.add_torus(&mut buffer, [0.0, 0.0, 0.0], 1.0, 2.0, 0);
        assert!(buffer.is_empty());
    }
}
