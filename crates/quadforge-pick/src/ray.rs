//! Ray representation.

use quadforge_math::{Dir3, Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.as_ref().norm() - 1.0).abs() < 1e-12);
        let p = ray.at(5.0);
        assert!((p - Point3::new(1.0, 5.0, 7.0)).norm() < 1e-12);
    }
}
