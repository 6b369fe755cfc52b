//! Bilinear patch over four corners.

use dynsurf_math::{dvec3, Point3};
use serde::{Deserialize, Serialize};

use super::Surface;

/// Bilinear interpolation of four corner points.
///
/// ```text
/// p0 --------------- p1
/// |                   |
/// |                   |
/// p2 --------------- p3
/// ```
///
/// `v` runs from the left edge to the right edge, `u` from the top edge to
/// the bottom edge. Both are clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl Grid {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Default for Grid {
    /// Unit square centered at the origin in the XY plane.
    fn default() -> Self {
        Self::new(
            dvec3(-0.5, 0.5, 0.0),
            dvec3(0.5, 0.5, 0.0),
            dvec3(-0.5, -0.5, 0.0),
            dvec3(0.5, -0.5, 0.0),
        )
    }
}

impl Surface for Grid {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let top = self.p0.lerp(self.p1, v);
        let bottom = self.p2.lerp(self.p3, v);
        top.lerp(bottom, u)
    }
}
