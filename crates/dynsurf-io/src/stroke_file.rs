//! Plain-text stroke files.
//!
//! One point per line as three whitespace-separated numbers `x y z`. Blank
//! lines and lines starting with `#` are ignored.

use std::io::Write;
use std::path::Path;

use dynsurf_core::{DynsurfError, Result};
use dynsurf_geometry::LinearSpline;
use dynsurf_math::{dvec3, Point3};
use tracing::debug;

/// Parse the points of a stroke file.
pub fn parse_points(input: &str) -> Result<Vec<Point3>> {
    let mut points = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        points.push(parse_point(line, idx + 1)?);
    }
    Ok(points)
}

fn parse_point(line: &str, line_no: usize) -> Result<Point3> {
    let mut coords = [0.0; 3];
    let mut fields = line.split_whitespace();
    for (axis, slot) in coords.iter_mut().enumerate() {
        let field = fields.next().ok_or_else(|| {
            DynsurfError::malformed(line_no, format!("expected 3 coordinates, found {axis}"))
        })?;
        *slot = field.parse::<f64>().map_err(|e| {
            DynsurfError::malformed(line_no, format!("invalid coordinate '{field}': {e}"))
        })?;
    }
    if fields.next().is_some() {
        return Err(DynsurfError::malformed(
            line_no,
            "expected 3 coordinates, found more",
        ));
    }
    Ok(dvec3(coords[0], coords[1], coords[2]))
}

/// Parse a stroke file into a polyline. At least two points are required.
pub fn parse_stroke(input: &str) -> Result<LinearSpline> {
    let points = parse_points(input)?;
    if points.len() < 2 {
        return Err(DynsurfError::Geometry(format!(
            "stroke needs at least 2 points, found {}",
            points.len()
        )));
    }
    Ok(LinearSpline::new(points))
}

/// Read a stroke file from disk.
pub fn read_stroke(path: impl AsRef<Path>) -> Result<LinearSpline> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let stroke = parse_stroke(&text)?;
    debug!(path = %path.display(), "loaded stroke");
    Ok(stroke)
}

/// Write points in stroke file format, one `x y z` line per point.
pub fn write_polyline<W: Write>(mut writer: W, points: &[Point3]) -> Result<()> {
    for p in points {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }
    Ok(())
}
