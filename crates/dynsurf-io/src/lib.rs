//! Stroke point files and surface settings.

pub mod settings;
pub mod stroke_file;

pub use settings::{load_settings, parse_settings};
pub use stroke_file::{parse_points, parse_stroke, read_stroke, write_polyline};
