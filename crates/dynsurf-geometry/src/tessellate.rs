//! Tessellation utilities for converting curves and surfaces to discrete representations.

use dynsurf_math::Point3;
use rayon::prelude::*;
use tracing::debug;

use crate::curve::{Curve, CurveRef};
use crate::surface::{DynamicSurface, Surface};

/// Sample a curve at `samples` evenly spaced arc-length parameters.
///
/// The first and last samples are the curve endpoints. Fewer than two
/// samples are raised to two.
pub fn curve_to_polyline(curve: &dyn Curve, samples: usize) -> Vec<Point3> {
    let samples = samples.max(2);
    let last = (samples - 1) as f64;
    (0..samples)
        .map(|i| curve.point_at(i as f64 / last))
        .collect()
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// The algorithm recursively subdivides segments where the midpoint deviation
/// from the chord exceeds the given `tolerance`.
pub fn curve_to_polyline_adaptive(curve: &dyn Curve, tolerance: f64) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];
    subdivide_curve(curve, t_min, t_max, tolerance, &mut points, 0);
    points
}

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    let p1 = curve.point_at(t1);
    if depth >= MAX_DEPTH {
        points.push(p1);
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let p_mid = curve.point_at(t_mid);

    // Chord midpoint
    let deviation = p_mid.distance((p0 + p1) * 0.5);

    // Splits at depth 0 are forced: a polyline's kinks can sit exactly on the
    // chord midpoint of the whole curve.
    if deviation > tolerance || depth == 0 {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

/// Convert a surface to a triangle mesh using uniform parameter subdivision.
///
/// # Returns
/// A tuple of `(vertices, triangles)` where each triangle is an array of 3 vertex indices.
pub fn surface_to_triangles(
    surface: &dyn Surface,
    u_divs: usize,
    v_divs: usize,
) -> (Vec<Point3>, Vec<[u32; 3]>) {
    let u_divs = u_divs.max(1);
    let v_divs = v_divs.max(1);
    let (u_min, u_max) = surface.domain_u();
    let (v_min, v_max) = surface.domain_v();

    let v_count = v_divs + 1;

    let mut vertices = Vec::with_capacity((u_divs + 1) * v_count);
    for i in 0..=u_divs {
        let u = u_min + (u_max - u_min) * i as f64 / u_divs as f64;
        for j in 0..=v_divs {
            let v = v_min + (v_max - v_min) * j as f64 / v_divs as f64;
            vertices.push(surface.point_at(u, v));
        }
    }

    (vertices, grid_triangles(u_divs, v_divs))
}

/// Triangulate a dynamic surface, reconstructing one stroke per `v` column
/// instead of one per vertex.
///
/// Produces the same mesh as [`surface_to_triangles`]. Columns whose stroke
/// cannot be built evaluate to the origin.
pub fn dynamic_surface_to_triangles(
    surface: &DynamicSurface,
    u_divs: usize,
    v_divs: usize,
) -> (Vec<Point3>, Vec<[u32; 3]>) {
    let u_divs = u_divs.max(1);
    let v_divs = v_divs.max(1);
    let (u_min, u_max) = surface.domain_u();
    let (v_min, v_max) = surface.domain_v();

    if surface.is_empty() {
        debug!("dynamic surface has no key strokes, mesh collapses to origin");
    }
    let columns: Vec<Option<CurveRef>> = (0..=v_divs)
        .into_par_iter()
        .map(|j| {
            let v = v_min + (v_max - v_min) * j as f64 / v_divs as f64;
            surface.time_at(v).and_then(|t| surface.interpolate(t).ok())
        })
        .collect();

    let mut vertices = Vec::with_capacity((u_divs + 1) * columns.len());
    for i in 0..=u_divs {
        let u = u_min + (u_max - u_min) * i as f64 / u_divs as f64;
        vertices.extend(
            columns
                .iter()
                .map(|c| c.as_ref().map_or(Point3::ZERO, |c| c.point_at(u))),
        );
    }

    (vertices, grid_triangles(u_divs, v_divs))
}

/// Two triangles per cell of a `(u_divs + 1) x (v_divs + 1)` vertex grid laid
/// out `u`-major.
fn grid_triangles(u_divs: usize, v_divs: usize) -> Vec<[u32; 3]> {
    let v_count = v_divs + 1;
    let idx = |i: usize, j: usize| (i * v_count + j) as u32;
    let mut triangles = Vec::with_capacity(u_divs * v_divs * 2);
    for i in 0..u_divs {
        for j in 0..v_divs {
            triangles.push([idx(i, j), idx(i + 1, j), idx(i + 1, j + 1)]);
            triangles.push([idx(i, j), idx(i + 1, j + 1), idx(i, j + 1)]);
        }
    }
    triangles
}
