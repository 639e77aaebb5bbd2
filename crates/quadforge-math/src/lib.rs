#![warn(missing_docs)]

//! Math types for the quadforge mesh editing kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types
//! for interactive 3D geometry: points, vectors, directions,
//! transforms, and tolerance constants.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 4x4 matrix, also used for opaque view/projection matrices.
pub type Mat4 = Matrix4<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Mat4,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Uses Rodrigues' rotation formula.
    pub fn rotation_about_axis(axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = t * x * x + c;
        m[(0, 1)] = t * x * y - s * z;
        m[(0, 2)] = t * x * z + s * y;
        m[(1, 0)] = t * x * y + s * z;
        m[(1, 1)] = t * y * y + c;
        m[(1, 2)] = t * y * z - s * x;
        m[(2, 0)] = t * x * z - s * y;
        m[(2, 1)] = t * y * z + s * x;
        m[(2, 2)] = t * z * z + c;
        Self { matrix: m }
    }

    /// Local-to-world frame from three axes and an origin.
    ///
    /// The axes become the first three columns and `origin` the fourth,
    /// so local `(0,0,0)` maps to `origin` and local unit X maps to `x`.
    /// The axes are stored as given; callers choose handedness.
    pub fn from_frame(x: &Vec3, y: &Vec3, z: &Vec3, origin: &Point3) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = x.x;
        m[(1, 0)] = x.y;
        m[(2, 0)] = x.z;
        m[(0, 1)] = y.x;
        m[(1, 1)] = y.y;
        m[(2, 1)] = y.z;
        m[(0, 2)] = z.x;
        m[(1, 2)] = z.y;
        m[(2, 2)] = z.z;
        m[(0, 3)] = origin.x;
        m[(1, 3)] = origin.y;
        m[(2, 3)] = origin.z;
        Self { matrix: m }
    }

    /// The Z axis of this frame (third column).
    pub fn axis_z(&self) -> Vec3 {
        Vec3::new(
            self.matrix[(0, 2)],
            self.matrix[(1, 2)],
            self.matrix[(2, 2)],
        )
    }

    /// The origin of this frame (fourth column).
    pub fn origin(&self) -> Point3 {
        Point3::new(
            self.matrix[(0, 3)],
            self.matrix[(1, 3)],
            self.matrix[(2, 3)],
        )
    }

    /// Compose: `self` then `other` (self * other).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation, applies rotation/scale).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in world units.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default editing tolerances (1e-9 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_x_90() {
        let t = Transform::rotation_x(PI / 2.0);
        let p = Point3::new(0.0, 1.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!(result.y.abs() < 1e-12);
        assert!((result.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_y_90() {
        let t = Transform::rotation_y(PI / 2.0);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!(result.y.abs() < 1e-12);
        assert!((result.z - -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_about_axis() {
        // Rotate (1,0,0) by 90° about Z axis → (0,1,0)
        let axis = Dir3::new_normalize(Vec3::z());
        let t = Transform::rotation_about_axis(&axis, PI / 2.0);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
        assert!(result.z.abs() < 1e-12);

        // a half turn about normalized (1,1,0) swaps x and y
        let axis2 = Dir3::new_normalize(Vec3::new(1.0, 1.0, 0.0));
        let t2 = Transform::rotation_about_axis(&axis2, PI);
        let p2 = Point3::new(1.0, 0.0, 0.0);
        let r2 = t2.apply_point(&p2);
        assert!(r2.x.abs() < 1e-12);
        assert!((r2.y - 1.0).abs() < 1e-12);
        assert!(r2.z.abs() < 1e-12);
    }

    #[test]
    fn test_compose() {
        // then() is self * other: apply other first, then self.
        let rot = Transform::rotation_z(PI / 2.0);
        let shift = Transform::translation(1.0, 0.0, 0.0);
        let composed = rot.then(&shift);
        let p = Point3::origin();
        let result = composed.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_frame() {
        let x = Vec3::new(0.0, 1.0, 0.0);
        let y = Vec3::new(-1.0, 0.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        let origin = Point3::new(5.0, 6.0, 7.0);
        let t = Transform::from_frame(&x, &y, &z, &origin);

        // Local origin lands on the frame origin
        let o = t.apply_point(&Point3::origin());
        assert!((o - origin).norm() < 1e-12);
        // Local unit X maps to the frame X axis (direction only)
        let vx = t.apply_vec(&Vec3::new(1.0, 0.0, 0.0));
        assert!((vx - x).norm() < 1e-12);
        assert!((t.axis_z() - z).norm() < 1e-12);
        assert!((t.origin() - origin).norm() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let x = Vec3::new(0.0, 1.0, 0.0);
        let y = Vec3::new(-1.0, 0.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        let origin = Point3::new(5.0, 6.0, 7.0);
        let t = Transform::from_frame(&x, &y, &z, &origin);
        let inv = match t.inverse() {
            Some(inv) => inv,
            None => panic!("frame should be invertible"),
        };
        // World frame-origin maps back to local (0,0,0)
        let back = inv.apply_point(&origin);
        assert!(back.coords.norm() < 1e-12);
        let round = t.then(&inv);
        let p = Point3::new(5.0, 6.0, 7.0);
        assert!((round.apply_point(&p) - p).norm() < 1e-12);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-10, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
        assert!(tol.is_zero(1e-12));
        assert!(!tol.is_zero(0.5));
    }
}
