//! Cubic Hermite spline with approximated arc-length parametrization.

use dynsurf_core::traits::{BoundingBox, Validate};
use dynsurf_core::{DynsurfError, Result, Tolerance};
use dynsurf_math::{hermite, hermite_derivative, Aabb3, Point3, Vector3};

use super::params::{locate, normalized_params};
use super::Curve;

/// Catmull-Rom tension used when tangents are derived from the points.
pub const DEFAULT_TENSION: f64 = 0.5;

/// Number of chords used to approximate the length of one Hermite segment.
///
/// Fixed so that the parametrization is reproducible.
pub const ARC_LENGTH_SAMPLES: usize = 20;

/// A C¹ cubic Hermite spline through its control points.
///
/// Tangents are either supplied explicitly or derived with the Catmull-Rom
/// rule. The arc-length table is approximated by summing
/// [`ARC_LENGTH_SAMPLES`] chords per segment.
#[derive(Debug, Clone)]
pub struct HermiteSpline {
    points: Vec<Point3>,
    tangents: Vec<Vector3>,
    params: Vec<f64>,
    length: f64,
    tension: f64,
}

impl HermiteSpline {
    /// Spline with Catmull-Rom tangents at [`DEFAULT_TENSION`].
    pub fn new(points: Vec<Point3>) -> Self {
        Self::with_tension(points, DEFAULT_TENSION)
    }

    /// Spline with Catmull-Rom tangents scaled by `tension`.
    pub fn with_tension(points: Vec<Point3>, tension: f64) -> Self {
        let mut spline = Self {
            points: Vec::new(),
            tangents: Vec::new(),
            params: Vec::new(),
            length: 0.0,
            tension,
        };
        spline.set_points(points);
        spline
    }

    /// Spline with one explicit tangent per control point.
    pub fn with_tangents(points: Vec<Point3>, tangents: Vec<Vector3>) -> Result<Self> {
        let mut spline = Self::with_tension(Vec::new(), DEFAULT_TENSION);
        spline.set_points_tangents(points, tangents)?;
        Ok(spline)
    }

    /// Replace points and tangents together.
    pub fn set_points_tangents(&mut self, points: Vec<Point3>, tangents: Vec<Vector3>) -> Result<()> {
        if points.len() != tangents.len() {
            return Err(DynsurfError::Geometry(format!(
                "hermite spline has {} points but {} tangents",
                points.len(),
                tangents.len()
            )));
        }
        self.points = points;
        self.tangents = tangents;
        self.update_params();
        Ok(())
    }

    pub fn tangents(&self) -> &[Vector3] {
        &self.tangents
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    fn segment_length(&self, i: usize) -> f64 {
        let (p0, p1) = (self.points[i - 1], self.points[i]);
        if p0 == p1 {
            return 0.0;
        }
        let (t0, t1) = (self.tangents[i - 1], self.tangents[i]);
        let step = 1.0 / ARC_LENGTH_SAMPLES as f64;

        let mut length = 0.0;
        let mut last = p0;
        for k in 1..=ARC_LENGTH_SAMPLES {
            let p = hermite(p0, p1, t0, t1, k as f64 * step);
            length += p.distance(last);
            last = p;
        }
        length
    }

    fn update_params(&mut self) {
        let lengths: Vec<f64> = (1..self.points.len())
            .map(|i| self.segment_length(i))
            .collect();
        let (params, length) = normalized_params(&lengths);
        self.params = params;
        self.length = length;
    }
}

/// Catmull-Rom tangents: `c * (P[i+1] - P[i-1])` inside, one-sided
/// differences at both ends.
pub fn catmull_rom_tangents(points: &[Point3], c: f64) -> Vec<Vector3> {
    let n = points.len();
    if n < 2 {
        return vec![Vector3::ZERO; n];
    }

    let mut tangents = Vec::with_capacity(n);
    tangents.push(c * (points[1] - points[0]));
    tangents.extend(points.windows(3).map(|w| c * (w[2] - w[0])));
    tangents.push(c * (points[n - 1] - points[n - 2]));
    tangents
}

impl Curve for HermiteSpline {
    fn control_points(&self) -> &[Point3] {
        &self.points
    }

    fn params(&self) -> &[f64] {
        &self.params
    }

    fn set_points(&mut self, points: Vec<Point3>) {
        self.tangents = catmull_rom_tangents(&points, self.tension);
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
            Some((i, t)) => hermite(
                self.points[i - 1],
                self.points[i],
                self.tangents[i - 1],
                self.tangents[i],
                t,
            ),
            None => last,
        }
    }

    fn tangent_at(&self, param: f64) -> Vector3 {
        if self.points.len() < 2 {
            return Vector3::ZERO;
        }
        let param = param.clamp(0.0, 1.0);
        let (i, t) = locate(&self.params, param).unwrap_or((self.points.len() - 1, 1.0));
        hermite_derivative(
            self.points[i - 1],
            self.points[i],
            self.tangents[i - 1],
            self.tangents[i],
            t,
        )
        .normalize_or_zero()
    }

    fn length(&self) -> f64 {
        self.length
    }
}

impl Validate for HermiteSpline {
    fn validate(&self) -> Result<()> {
        if self.points.len() < 2 {
            return Err(DynsurfError::Geometry(format!(
                "hermite spline needs at least 2 points, has {}",
                self.points.len()
            )));
        }
        if self.points.len() != self.tangents.len() {
            return Err(DynsurfError::Geometry(format!(
                "hermite spline has {} points but {} tangents",
                self.points.len(),
                self.tangents.len()
            )));
        }
        let finite = self.points.iter().chain(&self.tangents).all(|v| v.is_finite());
        if !finite {
            return Err(DynsurfError::Geometry(
                "hermite spline has non-finite points or tangents".to_string(),
            ));
        }
        if Tolerance::default().is_negligible(self.length, 0.0) {
            return Err(DynsurfError::DegenerateGeometry(
                "hermite spline has zero arc length".to_string(),
            ));
        }
        Ok(())
    }
}

impl BoundingBox for HermiteSpline {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        Aabb3::from_points(&self.points).map_or((Point3::ZERO, Point3::ZERO), |b| (b.min, b.max))
    }
}
