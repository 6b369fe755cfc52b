//! Bilinearly blended Coons patch.

use dynsurf_math::Point3;

use super::Surface;
use crate::curve::CurveRef;

/// Coons patch bounded by four curves.
///
/// `c0` and `c1` are the boundaries at `v = 0` and `v = 1`, parametrized by
/// `u`; `d0` and `d1` are the boundaries at `u = 0` and `u = 1`,
/// parametrized by `v`. The corners of the four curves are expected to meet.
#[derive(Debug, Clone)]
pub struct CoonsPatch {
    c0: CurveRef,
    c1: CurveRef,
    d0: CurveRef,
    d1: CurveRef,
}

impl CoonsPatch {
    pub fn new(c0: CurveRef, c1: CurveRef, d0: CurveRef, d1: CurveRef) -> Self {
        Self { c0, c1, d0, d1 }
    }

    /// Boundary curves in `[c0, c1, d0, d1]` order.
    pub fn boundaries(&self) -> [&CurveRef; 4] {
        [&self.c0, &self.c1, &self.d0, &self.d1]
    }
}

impl Surface for CoonsPatch {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let lc = self.c0.point_at(u).lerp(self.c1.point_at(u), v);
        let ld = self.d0.point_at(v).lerp(self.d1.point_at(v), u);

        let b0 = self.c0.point_at(0.0).lerp(self.c0.point_at(1.0), u);
        let b1 = self.c1.point_at(0.0).lerp(self.c1.point_at(1.0), u);
        let b = b0.lerp(b1, v);

        lc + ld - b
    }
}
