//! Arc-length parametrized curves.
//!
//! Every curve maps a normalized parameter in `[0, 1]` to a point such that
//! the parameter of each control point is proportional to the curve length
//! accumulated up to it.

mod hermite;
mod linear;
mod params;

use std::fmt::Debug;
use std::sync::Arc;

use dynsurf_math::{Point3, Vector3};

pub use hermite::{catmull_rom_tangents, HermiteSpline, ARC_LENGTH_SAMPLES, DEFAULT_TENSION};
pub use linear::LinearSpline;

/// Shared handle to a curve. Keyframe stores and renderers hold the same
/// curve read-only.
pub type CurveRef = Arc<dyn Curve>;

/// Trait for curves parametrized by normalized arc length.
pub trait Curve: Send + Sync + Debug {
    /// Control points, in order.
    fn control_points(&self) -> &[Point3];

    /// Normalized arc-length parameter of each control point.
    fn params(&self) -> &[f64];

    /// Replace the control points and recompute the parametrization.
    fn set_points(&mut self, points: Vec<Point3>);

    /// Evaluate the curve at arc-length parameter `param`, clamped to `[0, 1]`.
    fn point_at(&self, param: f64) -> Point3;

    /// Unit tangent at `param`, or zero where the curve is degenerate.
    fn tangent_at(&self, param: f64) -> Vector3;

    /// Total (possibly approximated) arc length.
    fn length(&self) -> f64;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        match self.control_points() {
            [first, .., last] => first == last,
            _ => false,
        }
    }
}
