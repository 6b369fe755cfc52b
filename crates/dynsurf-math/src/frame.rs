use crate::{DQuat, Vector3};
use dynsurf_core::{DynsurfError, Result, Tolerance};
use serde::{Deserialize, Serialize};

/// Reference axis and rotation normal used to measure stroke headings.
///
/// A heading is the signed angle, about `normal`, from `reference` to the
/// component of a direction lying in the plane orthogonal to `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingFrame {
    pub normal: Vector3,
    pub reference: Vector3,
}

impl HeadingFrame {
    /// Build an orthonormal frame. `reference` is projected onto the plane
    /// orthogonal to `normal` before normalization.
    pub fn try_new(normal: Vector3, reference: Vector3) -> Result<Self> {
        let tol = Tolerance::default();
        let n_len = normal.length();
        if tol.is_negligible(n_len, 0.0) {
            return Err(DynsurfError::Geometry(format!(
                "heading frame normal {normal} has zero length"
            )));
        }
        let normal = normal / n_len;
        let in_plane = reference - normal * reference.dot(normal);
        let r_len = in_plane.length();
        if tol.is_negligible(r_len, reference.length()) {
            return Err(DynsurfError::Geometry(format!(
                "heading frame reference {reference} is parallel to normal {normal}"
            )));
        }
        Ok(Self {
            normal,
            reference: in_plane / r_len,
        })
    }

    /// Headings measured in the XY plane from +X, counter-clockwise about +Z.
    pub fn xy() -> Self {
        Self {
            normal: Vector3::Z,
            reference: Vector3::X,
        }
    }

    /// Re-orthonormalize a frame that may have come from user input.
    pub fn normalized(self) -> Result<Self> {
        Self::try_new(self.normal, self.reference)
    }

    /// Signed heading of `direction`, in `(-pi, pi]`.
    ///
    /// Returns `None` when the in-plane part of `direction` is negligible
    /// relative to `direction` itself. The absolute size does not matter.
    pub fn heading(&self, direction: Vector3) -> Option<f64> {
        let in_plane = direction - self.normal * direction.dot(self.normal);
        let len = in_plane.length();
        if Tolerance::default().is_negligible(len, direction.length()) {
            return None;
        }
        let unit = in_plane / len;
        let sin = self.normal.dot(self.reference.cross(unit));
        let cos = self.reference.dot(unit);
        Some(sin.atan2(cos))
    }

    /// Unit vector obtained by rotating `reference` by `angle` about `normal`.
    pub fn direction(&self, angle: f64) -> Vector3 {
        DQuat::from_axis_angle(self.normal, angle) * self.reference
    }
}

impl Default for HeadingFrame {
    fn default() -> Self {
        Self::xy()
    }
}
