//! Dynamic surface geometry: arc-length splines, surfaces, and keyframe
//! interpolation.

pub mod curve;
pub mod surface;
pub mod tessellate;

pub use curve::{Curve, CurveRef, HermiteSpline, LinearSpline};
pub use surface::{
    CoonsPatch, DynamicSurface, Grid, StrokeSurface, Surface, SurfaceSettings,
    TimeInterpolation,
};
