//! JSON settings for the dynamic surface.

use std::path::Path;

use dynsurf_core::{DynsurfError, Result};
use dynsurf_geometry::SurfaceSettings;

/// Parse settings from JSON. Missing fields take their defaults and the
/// heading frame is re-orthonormalized.
pub fn parse_settings(json: &str) -> Result<SurfaceSettings> {
    let settings: SurfaceSettings =
        serde_json::from_str(json).map_err(|e| DynsurfError::Config(e.to_string()))?;
    Ok(SurfaceSettings {
        frame: settings.frame.normalized()?,
        ..settings
    })
}

/// Load settings from a JSON file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<SurfaceSettings> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(&text)
}
