/// Relative tolerance deciding when a length is negligible next to the
/// length it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Fraction of the reference scale at or below which a value counts as zero
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_RELATIVE: f64 = 1e-12;

    /// Whether `value` is non-finite or at most `relative * |scale|`.
    ///
    /// A zero `scale` makes this an exact zero test.
    pub fn is_negligible(self, value: f64, scale: f64) -> bool {
        !value.is_finite() || value.abs() <= self.relative * scale.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: Self::DEFAULT_RELATIVE,
        }
    }
}
