//! Surface spanned by an ordered set of key strokes.

use dynsurf_math::Point3;
use serde::{Deserialize, Serialize};

use super::Surface;
use crate::curve::{Curve, CurveRef, HermiteSpline, LinearSpline};

/// How samples taken across the strokes are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInterpolation {
    /// Polyline through the stroke samples.
    #[default]
    Linear,
    /// Catmull-Rom spline through the stroke samples.
    HermiteFromControlPoints,
}

/// Surface whose `s` direction runs along each stroke and whose `t`
/// direction runs across the strokes, in order.
#[derive(Debug, Clone)]
pub struct StrokeSurface {
    strokes: Vec<CurveRef>,
    mode: TimeInterpolation,
}

impl StrokeSurface {
    pub fn new(strokes: Vec<CurveRef>, mode: TimeInterpolation) -> Self {
        Self { strokes, mode }
    }

    pub fn strokes(&self) -> &[CurveRef] {
        &self.strokes
    }

    pub fn mode(&self) -> TimeInterpolation {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TimeInterpolation) {
        self.mode = mode;
    }

    /// Curve through every stroke at arc-length parameter `s`.
    pub fn cross_section(&self, s: f64) -> Box<dyn Curve> {
        let samples: Vec<Point3> = self.strokes.iter().map(|c| c.point_at(s)).collect();
        match self.mode {
            TimeInterpolation::Linear => Box::new(LinearSpline::new(samples)),
            TimeInterpolation::HermiteFromControlPoints => Box::new(HermiteSpline::new(samples)),
        }
    }
}

impl Surface for StrokeSurface {
    fn point_at(&self, s: f64, t: f64) -> Point3 {
        self.cross_section(s).point_at(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use dynsurf_math::dvec3;
    use std::sync::Arc;

    fn vertical(x: f64) -> CurveRef {
        Arc::new(HermiteSpline::new(vec![
            dvec3(x, 0.2, 0.0),
            dvec3(x, 0.4, 0.0),
            dvec3(x, 0.6, 0.0),
            dvec3(x, 0.8, 0.0),
        ]))
    }

    fn parallel_strokes(mode: TimeInterpolation) -> StrokeSurface {
        StrokeSurface::new(
            vec![vertical(-0.4), vertical(-0.2), vertical(0.2), vertical(0.4)],
            mode,
        )
    }

    #[test]
    fn test_linear_corners() {
        let surface = parallel_strokes(TimeInterpolation::Linear);
        assert_abs_diff_eq!(surface.point_at(0.0, 0.0), dvec3(-0.4, 0.2, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(surface.point_at(1.0, 1.0), dvec3(0.4, 0.8, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_linear_across_strokes() {
        let surface = parallel_strokes(TimeInterpolation::Linear);
        // Samples are 0.2, 0.4, 0.2 apart along x; t = 0.5 is the middle.
        let p = surface.point_at(0.5, 0.5);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_hermite_mode_passes_through_strokes() {
        let surface = parallel_strokes(TimeInterpolation::HermiteFromControlPoints);
        let section = surface.cross_section(0.3);
        let params = section.params().to_vec();
        for (stroke, &t) in surface.strokes().iter().zip(&params) {
            assert_abs_diff_eq!(surface.point_at(0.3, t), stroke.point_at(0.3), epsilon = 1e-9);
        }
    }
}
