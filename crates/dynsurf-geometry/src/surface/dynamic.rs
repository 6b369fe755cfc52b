//! Keyframe interpolation of strokes over time.
//!
//! Key strokes are registered at distinct times. A stroke at an intermediate
//! time is rebuilt from its two bracketing keyframes by sampling both at the
//! same arc-length positions, describing each chord by its heading angle and
//! its length, blending those intrinsic quantities with a cubic Hermite in
//! time, and integrating the blended chords from a blended root point.
//!
//! Blending headings and lengths instead of positions keeps intermediate
//! strokes from crossing themselves or shrinking when the keyframes differ
//! in length or curvature.

use std::sync::Arc;

use dynsurf_core::{DynsurfError, Result};
use dynsurf_math::{hermite, HeadingFrame, Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use super::Surface;
use crate::curve::{Curve, CurveRef, LinearSpline};

/// Default number of chords in a reconstructed stroke.
pub const DEFAULT_SAMPLING: usize = 50;

/// Reconstruction settings of a [`DynamicSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Number of chords per reconstructed stroke.
    pub sampling: usize,
    /// Axis about which headings are measured and rotated.
    pub frame: HeadingFrame,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            sampling: DEFAULT_SAMPLING,
            frame: HeadingFrame::xy(),
        }
    }
}

#[derive(Debug, Clone)]
struct KeyStroke {
    time: f64,
    curve: CurveRef,
}

/// The keyframes around an interpolation time.
struct Bracket<'a> {
    c0: &'a dyn Curve,
    c1: &'a dyn Curve,
    prev: Option<&'a dyn Curve>,
    next: Option<&'a dyn Curve>,
    /// Time normalized over `[time(c0), time(c1)]`.
    u: f64,
}

/// One chord of a keyframe stroke.
#[derive(Debug, Clone, Copy)]
struct Chord {
    heading: Option<f64>,
    length: f64,
}

/// A time-varying stroke defined by keyframe strokes.
///
/// Keyframe curves are shared, never mutated. Interpolation only reads the
/// keyframe list, so concurrent `interpolate` calls are fine; inserting
/// while interpolating needs external synchronization.
#[derive(Debug, Clone, Default)]
pub struct DynamicSurface {
    keys: Vec<KeyStroke>,
    settings: SurfaceSettings,
}

impl DynamicSurface {
    pub fn new(sampling: usize) -> Self {
        Self {
            keys: Vec::new(),
            settings: SurfaceSettings {
                sampling: sampling.max(1),
                ..SurfaceSettings::default()
            },
        }
    }

    /// Surface using `settings`; the heading frame is re-orthonormalized.
    pub fn with_settings(settings: SurfaceSettings) -> Result<Self> {
        Ok(Self {
            keys: Vec::new(),
            settings: SurfaceSettings {
                sampling: settings.sampling.max(1),
                frame: settings.frame.normalized()?,
            },
        })
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    pub fn sampling(&self) -> usize {
        self.settings.sampling
    }

    /// Change the chord count of future reconstructions. Zero is raised to one.
    pub fn set_sampling(&mut self, sampling: usize) {
        if sampling == 0 {
            debug!("sampling of 0 raised to 1");
        }
        self.settings.sampling = sampling.max(1);
    }

    /// Register `curve` as the key stroke at `time`, replacing any stroke
    /// already registered at exactly that time.
    pub fn add_key_stroke(&mut self, time: f64, curve: CurveRef) -> Result<()> {
        if !time.is_finite() {
            return Err(invalid_time(time, "key stroke time is not finite"));
        }
        let idx = self.keys.partition_point(|k| k.time < time);
        match self.keys.get_mut(idx) {
            Some(key) if key.time == time => key.curve = curve,
            _ => self.keys.insert(idx, KeyStroke { time, curve }),
        }
        Ok(())
    }

    /// Remove and return the key stroke registered at exactly `time`.
    pub fn remove_key_stroke(&mut self, time: f64) -> Option<CurveRef> {
        let idx = self.find(time)?;
        Some(self.keys.remove(idx).curve)
    }

    /// The key stroke registered at exactly `time`.
    pub fn key_stroke(&self, time: f64) -> Option<&CurveRef> {
        self.find(time).map(|idx| &self.keys[idx].curve)
    }

    /// Keyframe times in increasing order.
    pub fn keyframe_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.keys.iter().map(|k| k.time)
    }

    /// Keyframes as `(time, curve)` in increasing time order.
    pub fn keyframes(&self) -> impl Iterator<Item = (f64, &CurveRef)> + '_ {
        self.keys.iter().map(|k| (k.time, &k.curve))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// First and last keyframe times.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((self.keys.first()?.time, self.keys.last()?.time))
    }

    /// Time at normalized surface coordinate `v`, clamped to the keyframe
    /// range. `None` when there are no key strokes.
    pub fn time_at(&self, v: f64) -> Option<f64> {
        let (first, last) = self.time_range()?;
        Some(if v <= 0.0 {
            first
        } else if v >= 1.0 {
            last
        } else {
            first + v * (last - first)
        })
    }

    /// The stroke at `time`.
    ///
    /// A keyframe time returns that keyframe's curve itself. Any other time
    /// strictly inside the keyframe range returns a freshly reconstructed
    /// [`LinearSpline`] of `sampling + 1` points. Times outside the range,
    /// or fewer than two keyframes, are a [`DynsurfError::InvalidTime`].
    pub fn interpolate(&self, time: f64) -> Result<CurveRef> {
        if let Some(curve) = self.key_stroke(time) {
            return Ok(Arc::clone(curve));
        }
        if !time.is_finite() {
            return Err(invalid_time(time, "time is not finite"));
        }
        if self.keys.len() < 2 {
            return Err(invalid_time(
                time,
                format!("at least 2 key strokes required, found {}", self.keys.len()),
            ));
        }

        let upper = self.keys.partition_point(|k| k.time < time);
        if upper == 0 || upper == self.keys.len() {
            let (first, last) = (self.keys[0].time, self.keys[self.keys.len() - 1].time);
            return Err(invalid_time(
                time,
                format!("outside key stroke range [{first}, {last}]"),
            ));
        }
        let lower = upper - 1;
        let (k0, k1) = (&self.keys[lower], &self.keys[upper]);

        let bracket = Bracket {
            c0: k0.curve.as_ref(),
            c1: k1.curve.as_ref(),
            prev: lower.checked_sub(1).map(|i| self.keys[i].curve.as_ref()),
            next: self.keys.get(upper + 1).map(|k| k.curve.as_ref()),
            u: (time - k0.time) / (k1.time - k0.time),
        };

        let points = self.reconstruct(&bracket);
        trace!(time, u = bracket.u, points = points.len(), "reconstructed stroke");
        Ok(Arc::new(LinearSpline::new(points)))
    }

    /// Strokes at `count` evenly spaced times over `[t0, t1]`.
    ///
    /// Times that fail to interpolate are skipped (and logged).
    pub fn sweep(&self, t0: f64, t1: f64, count: usize) -> Vec<(f64, CurveRef)> {
        let step = if count > 1 {
            (t1 - t0) / (count - 1) as f64
        } else {
            0.0
        };
        (0..count)
            .into_par_iter()
            .filter_map(|i| {
                let time = if i + 1 == count && count > 1 {
                    t1
                } else {
                    t0 + i as f64 * step
                };
                self.interpolate(time).ok().map(|curve| (time, curve))
            })
            .collect()
    }

    fn find(&self, time: f64) -> Option<usize> {
        let idx = self.keys.partition_point(|k| k.time < time);
        self.keys
            .get(idx)
            .filter(|k| k.time == time)
            .map(|_| idx)
    }

    fn chord(&self, curve: &dyn Curve, s0: f64, s1: f64) -> Chord {
        let v = curve.point_at(s1) - curve.point_at(s0);
        let heading = self.settings.frame.heading(v);
        if heading.is_none() {
            trace!(s0, s1, "degenerate chord, heading skipped");
        }
        Chord {
            heading,
            length: v.length(),
        }
    }

    fn reconstruct(&self, b: &Bracket<'_>) -> Vec<Point3> {
        let m = self.settings.sampling;
        let frame = &self.settings.frame;

        let r0 = b.c0.point_at(0.0);
        let r1 = b.c1.point_at(0.0);
        let dr0 = b
            .prev
            .map_or(Vector3::ZERO, |p| 0.5 * (r1 - p.point_at(0.0)));
        let dr1 = b
            .next
            .map_or(Vector3::ZERO, |n| 0.5 * (n.point_at(0.0) - r0));
        let root = hermite(r0, r1, dr0, dr1, b.u);

        let mut points = Vec::with_capacity(m + 1);
        let mut cursor = Point3::ZERO;
        points.push(cursor);

        for i in 0..m {
            let s0 = i as f64 / m as f64;
            let s1 = (i + 1) as f64 / m as f64;

            let k0 = self.chord(b.c0, s0, s1);
            let k1 = self.chord(b.c1, s0, s1);
            let prev = b.prev.map(|c| self.chord(c, s0, s1));
            let next = b.next.map(|c| self.chord(c, s0, s1));

            // A zero chord has no heading; borrow the other keyframe's so
            // only its length blends.
            let (a0, a1) = match (k0.heading, k1.heading) {
                (Some(a0), Some(a1)) => (a0, a1),
                (Some(a), None) | (None, Some(a)) => (a, a),
                (None, None) => (0.0, 0.0),
            };
            let da0 = central_difference(prev.and_then(|c| c.heading), k1.heading);
            let da1 = central_difference(k0.heading, next.and_then(|c| c.heading));
            let angle = hermite(a0, a1, da0, da1, b.u);

            let dl0 = central_difference(prev.map(|c| c.length), Some(k1.length));
            let dl1 = central_difference(Some(k0.length), next.map(|c| c.length));
            let length = hermite(k0.length, k1.length, dl0, dl1, b.u);

            cursor += frame.direction(angle) * length;
            points.push(cursor);
        }

        for p in &mut points {
            *p += root;
        }
        points
    }
}

/// `0.5 * (after - before)`, or zero when either neighbor is missing.
fn central_difference(before: Option<f64>, after: Option<f64>) -> f64 {
    match (before, after) {
        (Some(b), Some(a)) => 0.5 * (a - b),
        _ => 0.0,
    }
}

fn invalid_time(time: f64, reason: impl Into<String>) -> DynsurfError {
    let err = DynsurfError::invalid_time(time, reason);
    error!("{err}");
    err
}

impl Surface for DynamicSurface {
    /// `u` is the arc-length parameter along the stroke and `v` the time
    /// normalized over the keyframe range.
    ///
    /// Every call reconstructs the whole stroke at `v`. Evaluate many `u`
    /// on one stroke through [`DynamicSurface::interpolate`], or use
    /// [`crate::tessellate::dynamic_surface_to_triangles`] for meshes.
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let Some(time) = self.time_at(v) else {
            debug!(u, v, "dynamic surface has no key strokes, evaluating to origin");
            return Point3::ZERO;
        };
        self.interpolate(time)
            .map_or(Point3::ZERO, |curve| curve.point_at(u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::HermiteSpline;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use dynsurf_math::dvec3;

    fn vertical(x: f64, height: f64) -> CurveRef {
        Arc::new(LinearSpline::new(vec![dvec3(x, 0.0, 0.0), dvec3(x, height, 0.0)]))
    }

    fn two_strokes(sampling: usize) -> DynamicSurface {
        let mut surface = DynamicSurface::new(sampling);
        surface.add_key_stroke(0.0, vertical(0.0, 1.0)).unwrap();
        surface.add_key_stroke(1.0, vertical(2.0, 1.0)).unwrap();
        surface
    }

    #[test]
    fn test_default_sampling() {
        assert_eq!(DynamicSurface::default().sampling(), DEFAULT_SAMPLING);
        assert_eq!(SurfaceSettings::default().sampling, 50);
    }

    #[test]
    fn test_keyframe_identity() {
        let surface = two_strokes(10);
        let key = Arc::clone(surface.key_stroke(1.0).unwrap());
        let result = surface.interpolate(1.0).unwrap();
        assert!(Arc::ptr_eq(&key, &result));
    }

    #[test]
    fn test_midpoint_root_and_shape() {
        let surface = two_strokes(10);
        let curve = surface.interpolate(0.5).unwrap();
        let points = curve.control_points();
        assert_eq!(points.len(), 11);
        assert_abs_diff_eq!(points[0], dvec3(1.0, 0.0, 0.0), epsilon = 1e-12);
        for (i, p) in points.iter().enumerate() {
            assert_abs_diff_eq!(*p, dvec3(1.0, i as f64 / 10.0, 0.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_root_follows_zero_tangent_hermite() {
        let surface = two_strokes(10);
        for &t in &[0.1, 0.3, 0.8] {
            let curve = surface.interpolate(t).unwrap();
            let expected = hermite(Point3::ZERO, dvec3(2.0, 0.0, 0.0), Vector3::ZERO, Vector3::ZERO, t);
            assert_abs_diff_eq!(curve.point_at(0.0), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_length_blends() {
        let mut surface = DynamicSurface::new(8);
        surface.add_key_stroke(0.0, vertical(0.0, 1.0)).unwrap();
        surface.add_key_stroke(1.0, vertical(0.0, 3.0)).unwrap();
        let curve = surface.interpolate(0.5).unwrap();
        assert_abs_diff_eq!(curve.length(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_heading_blends_without_collapse() {
        // A horizontal and a vertical stroke of equal length: the blended
        // stroke keeps its length instead of shortening along the diagonal.
        let mut surface = DynamicSurface::new(20);
        surface
            .add_key_stroke(0.0, Arc::new(LinearSpline::new(vec![Point3::ZERO, dvec3(1.0, 0.0, 0.0)])))
            .unwrap();
        surface
            .add_key_stroke(1.0, Arc::new(LinearSpline::new(vec![Point3::ZERO, dvec3(0.0, 1.0, 0.0)])))
            .unwrap();
        let curve = surface.interpolate(0.5).unwrap();
        assert_abs_diff_eq!(curve.length(), 1.0, epsilon = 1e-9);
        let end = curve.point_at(1.0);
        let half = std::f64::consts::FRAC_PI_4;
        assert_abs_diff_eq!(end, dvec3(half.cos(), half.sin(), 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_errors_are_reported() {
        let mut surface = DynamicSurface::new(10);
        assert!(matches!(surface.interpolate(0.5), Err(DynsurfError::InvalidTime { .. })));

        surface.add_key_stroke(0.0, vertical(0.0, 1.0)).unwrap();
        assert!(matches!(surface.interpolate(0.5), Err(DynsurfError::InvalidTime { .. })));
        assert!(surface.interpolate(0.0).is_ok());

        surface.add_key_stroke(1.0, vertical(1.0, 1.0)).unwrap();
        assert!(matches!(surface.interpolate(-0.1), Err(DynsurfError::InvalidTime { .. })));
        assert!(matches!(surface.interpolate(1.5), Err(DynsurfError::InvalidTime { .. })));
        assert!(matches!(surface.interpolate(f64::NAN), Err(DynsurfError::InvalidTime { .. })));
        assert!(surface.add_key_stroke(f64::INFINITY, vertical(0.0, 1.0)).is_err());
    }

    #[test]
    fn test_overwrite_and_order() {
        let mut surface = DynamicSurface::new(10);
        surface.add_key_stroke(2.0, vertical(2.0, 1.0)).unwrap();
        surface.add_key_stroke(0.0, vertical(0.0, 1.0)).unwrap();
        surface.add_key_stroke(1.0, vertical(1.0, 1.0)).unwrap();
        let replacement = vertical(5.0, 1.0);
        surface.add_key_stroke(1.0, Arc::clone(&replacement)).unwrap();

        assert_eq!(surface.len(), 3);
        assert_eq!(surface.keyframe_times().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert!(Arc::ptr_eq(surface.key_stroke(1.0).unwrap(), &replacement));
        assert_eq!(surface.time_range(), Some((0.0, 2.0)));

        assert!(surface.remove_key_stroke(1.0).is_some());
        assert!(surface.remove_key_stroke(1.0).is_none());
        assert_eq!(surface.len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let mut surface = DynamicSurface::new(30);
        let keys = [
            HermiteSpline::new(vec![dvec3(-2.0, 2.0, 0.0), dvec3(-1.5, 0.0, 0.0), dvec3(-2.0, -2.0, 0.0)]),
            HermiteSpline::new(vec![dvec3(-0.8, 0.8, 0.0), dvec3(0.0, 0.0, 0.0), dvec3(-0.8, -0.8, 0.0)]),
            HermiteSpline::new(vec![dvec3(0.8, 0.8, 0.0), dvec3(1.2, 0.1, 0.0), dvec3(0.8, -0.8, 0.0)]),
            HermiteSpline::new(vec![dvec3(2.0, 1.2, 0.0), dvec3(2.2, 0.0, 0.0), dvec3(2.0, -1.2, 0.0)]),
        ];
        for (i, key) in keys.into_iter().enumerate() {
            surface.add_key_stroke(i as f64, Arc::new(key)).unwrap();
        }
        let a = surface.interpolate(1.37).unwrap();
        let b = surface.interpolate(1.37).unwrap();
        assert_eq!(a.control_points(), b.control_points());
        assert!(a.control_points().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_neighbors_bend_root_path() {
        // With a neighbor after C1 the root tangent is non-zero, so the root
        // at u = 0.5 moves off the straight midpoint.
        let mut surface = two_strokes(4);
        surface.add_key_stroke(2.0, Arc::new(LinearSpline::new(vec![
            dvec3(2.0, 4.0, 0.0),
            dvec3(2.0, 5.0, 0.0),
        ])))
        .unwrap();
        let root = surface.interpolate(0.5).unwrap().point_at(0.0);
        // dr0 = 0, dr1 = 0.5 * ((2, 4) - (0, 0)) = (1, 2); h3(0.5) = -0.125
        assert_abs_diff_eq!(root, dvec3(1.0 - 0.125, -0.25, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_keyframe_stays_finite() {
        let mut surface = DynamicSurface::new(10);
        surface
            .add_key_stroke(0.0, Arc::new(LinearSpline::new(vec![Point3::ZERO, Point3::ZERO])))
            .unwrap();
        surface.add_key_stroke(1.0, vertical(1.0, 1.0)).unwrap();
        let curve = surface.interpolate(0.5).unwrap();
        assert!(curve.control_points().iter().all(|p| p.is_finite()));
        assert_abs_diff_eq!(curve.length(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_sampling_change_affects_future_only() {
        let mut surface = two_strokes(10);
        let before = surface.interpolate(0.5).unwrap();
        surface.set_sampling(4);
        let after = surface.interpolate(0.5).unwrap();
        assert_eq!(before.control_points().len(), 11);
        assert_eq!(after.control_points().len(), 5);
        surface.set_sampling(0);
        assert_eq!(surface.sampling(), 1);
    }

    #[test]
    fn test_sweep_in_order() {
        let surface = two_strokes(5);
        let curves = surface.sweep(0.0, 1.0, 5);
        let times: Vec<f64> = curves.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(surface.sweep(0.0, 2.0, 3).len(), 2);
    }

    #[test]
    fn test_tiny_strokes_keep_heading() {
        let mut surface = DynamicSurface::new(50);
        surface.add_key_stroke(0.0, vertical(0.0, 2e-8)).unwrap();
        surface.add_key_stroke(1.0, vertical(1.0, 2e-8)).unwrap();
        let points = surface.interpolate(0.5).unwrap().control_points().to_vec();
        let span = points[points.len() - 1] - points[0];
        assert_relative_eq!(span.y, 2e-8, max_relative = 1e-9);
        assert!(span.x.abs() < 1e-20);
        assert_eq!(span.z, 0.0);
    }

    #[test]
    fn test_chord_uses_neighbor_derivatives() {
        let headings: [f64; 4] = [0.0, 0.3, 0.9, 1.2];
        let lengths = [1.0, 2.0, 1.5, 3.0];
        let sampling = 4;
        let mut surface = DynamicSurface::new(sampling);
        for (i, (&a, &len)) in headings.iter().zip(&lengths).enumerate() {
            let tip = dvec3(a.cos(), a.sin(), 0.0) * len;
            let stroke: CurveRef = Arc::new(LinearSpline::new(vec![Point3::ZERO, tip]));
            surface.add_key_stroke(i as f64, stroke).unwrap();
        }

        let u = (1.4 - 1.0) / (2.0 - 1.0);
        let [a0, a1, a2, a3] = headings;
        let [l0, l1, l2, l3] = lengths.map(|l| l / sampling as f64);
        let angle = hermite(a1, a2, 0.5 * (a2 - a0), 0.5 * (a3 - a1), u);
        let length = hermite(l1, l2, 0.5 * (l2 - l0), 0.5 * (l3 - l1), u);
        let frame = HeadingFrame::xy();
        let expected = frame.direction(angle) * length;

        let curve = surface.interpolate(1.4).unwrap();
        let points = curve.control_points();
        assert_eq!(points.len(), sampling + 1);
        for pair in points.windows(2) {
            assert_abs_diff_eq!(pair[1] - pair[0], expected, epsilon = 1e-9);
        }

        // Without neighbors the blend would miss the derivative terms.
        let flat = frame.direction(hermite(a1, a2, 0.0, 0.0, u)) * hermite(l1, l2, 0.0, 0.0, u);
        assert!((flat - expected).length() > 1e-3);
    }

    #[test]
    fn test_time_at_maps_unit_range() {
        let mut surface = DynamicSurface::default();
        assert!(surface.time_at(0.5).is_none());
        surface.add_key_stroke(2.0, vertical(0.0, 1.0)).unwrap();
        surface.add_key_stroke(6.0, vertical(1.0, 1.0)).unwrap();
        assert_eq!(surface.time_at(-1.0), Some(2.0));
        assert_eq!(surface.time_at(0.25), Some(3.0));
        assert_eq!(surface.time_at(2.0), Some(6.0));
    }

    #[test]
    fn test_surface_evaluation() {
        let surface = two_strokes(10);
        assert_abs_diff_eq!(Surface::point_at(&surface, 0.0, 0.5), dvec3(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(Surface::point_at(&surface, 1.0, 1.0), dvec3(2.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(Surface::point_at(&DynamicSurface::default(), 0.5, 0.5), Point3::ZERO);
    }

    #[test]
    fn test_custom_frame() {
        // Strokes in the XZ plane, headings measured about +Y from +X.
        let settings = SurfaceSettings {
            sampling: 6,
            frame: HeadingFrame::try_new(Vector3::Y, Vector3::X).unwrap(),
        };
        let mut surface = DynamicSurface::with_settings(settings).unwrap();
        let stroke = |x: f64| -> CurveRef {
            Arc::new(LinearSpline::new(vec![dvec3(x, 0.0, 0.0), dvec3(x, 0.0, 1.0)]))
        };
        surface.add_key_stroke(0.0, stroke(0.0)).unwrap();
        surface.add_key_stroke(1.0, stroke(1.0)).unwrap();
        let curve = surface.interpolate(0.5).unwrap();
        assert_abs_diff_eq!(curve.point_at(1.0), dvec3(0.5, 0.0, 1.0), epsilon = 1e-9);

        let bad = SurfaceSettings {
            sampling: 6,
            frame: HeadingFrame { normal: Vector3::Y, reference: Vector3::Y },
        };
        assert!(DynamicSurface::with_settings(bad).is_err());
    }
}
