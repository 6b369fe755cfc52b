//! Polyline with exact chord-length parametrization.

use dynsurf_core::traits::{BoundingBox, Validate};
use dynsurf_core::{DynsurfError, Result, Tolerance};
use dynsurf_math::{Aabb3, Point3, Vector3};

use super::params::{locate, normalized_params};
use super::Curve;

/// A piecewise-linear curve through its control points.
#[derive(Debug, Clone, Default)]
pub struct LinearSpline {
    points: Vec<Point3>,
    params: Vec<f64>,
    length: f64,
}

impl LinearSpline {
    pub fn new(points: Vec<Point3>) -> Self {
        let mut spline = Self::default();
        spline.set_points(points);
        spline
    }

    fn update_params(&mut self) {
        let lengths: Vec<f64> = self
            .points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .collect();
        let (params, length) = normalized_params(&lengths);
        self.params = params;
        self.length = length;
    }
}

impl FromIterator<Point3> for LinearSpline {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Curve for LinearSpline {
    fn control_points(&self) -> &[Point3] {
        &self.points
    }

    fn params(&self) -> &[f64] {
        &self.params
    }

    fn set_points(&mut self, points: Vec<Point3>) {
        self.points = points;
        self.update_params();
    }

    fn point_at(&self, param: f64) -> Point3 {
        let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) else {
            return Point3::ZERO;
        };
        if param <= 0.0 {
            return first;
        }
        if param >= 1.0 {
            return last;
        }
        match locate(&self.params, param) {
            Some((i, t)) => self.points[i - 1].lerp(self.points[i], t),
            None => last,
        }
    }

    fn tangent_at(&self, param: f64) -> Vector3 {
        if self.points.len() < 2 {
            return Vector3::ZERO;
        }
        let i = locate(&self.params, param.clamp(0.0, 1.0))
            .map_or(self.points.len() - 1, |(i, _)| i);
        (self.points[i] - self.points[i - 1]).normalize_or_zero()
    }

    fn length(&self) -> f64 {
        self.length
    }
}

impl Validate for LinearSpline {
    fn validate(&self) -> Result<()> {
        if self.points.len() < 2 {
            return Err(DynsurfError::Geometry(format!(
                "linear spline needs at least 2 points, has {}",
                self.points.len()
            )));
        }
        if let Some(i) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(DynsurfError::Geometry(format!(
                "linear spline point {i} is not finite"
            )));
        }
        if Tolerance::default().is_negligible(self.length, 0.0) {
            return Err(DynsurfError::DegenerateGeometry(
                "linear spline has zero arc length".to_string(),
            ));
        }
        Ok(())
    }
}

impl BoundingBox for LinearSpline {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        Aabb3::from_points(&self.points).map_or((Point3::ZERO, Point3::ZERO), |b| (b.min, b.max))
    }
}
