//! Surface traits and implementations.

mod coons;
mod dynamic;
mod grid;
mod stroke;

use dynsurf_math::{Point3, Vector3};

pub use coons::CoonsPatch;
pub use dynamic::{DynamicSurface, SurfaceSettings, DEFAULT_SAMPLING};
pub use grid::Grid;
pub use stroke::{StrokeSurface, TimeInterpolation};

/// Step used by the finite-difference normal.
const NORMAL_STEP: f64 = 1e-4;

/// Trait for parametric surfaces in 3D space.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Return the v-parameter domain `(v_min, v_max)`.
    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Unit normal at `(u, v)` from central differences, zero where the
    /// partial derivatives are parallel.
    fn normal_at(&self, u: f64, v: f64) -> Vector3 {
        let (u_min, u_max) = self.domain_u();
        let (v_min, v_max) = self.domain_v();
        let (u0, u1) = ((u - NORMAL_STEP).max(u_min), (u + NORMAL_STEP).min(u_max));
        let (v0, v1) = ((v - NORMAL_STEP).max(v_min), (v + NORMAL_STEP).min(v_max));

        let du = self.point_at(u1, v) - self.point_at(u0, v);
        let dv = self.point_at(u, v1) - self.point_at(u, v0);
        du.cross(dv).normalize_or_zero()
    }
}
