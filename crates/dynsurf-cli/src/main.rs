//! Dynamic surface sweeper CLI
//!
//! Loads stroke files as keyframes and writes the strokes of the dynamic
//! surface at evenly spaced times.
//!
//! # Usage
//!
//! ```bash
//! # Four keyframes at t = 0, 1, 2, 3, 100 strokes to stdout
//! dynsurf a.txt b.txt c.txt d.txt
//!
//! # Custom sampling, 40 strokes into a file
//! dynsurf --config settings.json --steps 40 -o sweep.txt a.txt b.txt
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use dynsurf_core::Result;
use dynsurf_geometry::tessellate::curve_to_polyline;
use dynsurf_geometry::{Curve, DynamicSurface, SurfaceSettings};
use dynsurf_io::{load_settings, read_stroke, write_polyline};
use dynsurf_math::Point3;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_STEPS: usize = 100;

fn print_usage() {
    eprintln!(
        r#"Dynamic surface sweeper

USAGE:
    dynsurf [OPTIONS] <stroke-file> <stroke-file>...

ARGS:
    <stroke-file>   Point file, one "x y z" per line. The i-th file is the
                    key stroke at time i.

Every output stroke has sampling + 1 points; key strokes are resampled
evenly along their arc length.

OPTIONS:
    --config <file>   JSON surface settings (sampling, frame)
    --steps <n>       Number of strokes to output (default {DEFAULT_STEPS})
    -o <file>         Output file (default stdout)
    -v, --verbose     Debug logging (otherwise RUST_LOG, default warn)
    -h, --help        Print this help"#
    );
}

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    steps: usize,
    output: Option<PathBuf>,
    verbose: bool,
    strokes: Vec<PathBuf>,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut args = Args {
        config: None,
        steps: DEFAULT_STEPS,
        output: None,
        verbose: false,
        strokes: Vec::new(),
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-v" | "--verbose" => args.verbose = true,
            "--config" => {
                let path = iter.next().ok_or("--config requires a file")?;
                args.config = Some(PathBuf::from(path));
            }
            "--steps" => {
                let n = iter.next().ok_or("--steps requires a number")?;
                args.steps = n
                    .parse()
                    .map_err(|_| format!("invalid --steps value '{n}'"))?;
            }
            "-o" => {
                let path = iter.next().ok_or("-o requires a file")?;
                args.output = Some(PathBuf::from(path));
            }
            s if s.starts_with('-') => return Err(format!("unknown option '{s}'")),
            _ => args.strokes.push(PathBuf::from(arg)),
        }
    }

    if args.strokes.len() < 2 {
        return Err(format!(
            "at least 2 stroke files required, got {}",
            args.strokes.len()
        ));
    }
    Ok(args)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Sweep the surface into point blocks of `sampling + 1` points each.
///
/// Reconstructed strokes already have that many points. Key strokes keep
/// their own control points, so they are resampled by arc length.
fn stroke_blocks(surface: &DynamicSurface, t0: f64, t1: f64, steps: usize) -> Vec<(f64, Vec<Point3>)> {
    let samples = surface.sampling() + 1;
    surface
        .sweep(t0, t1, steps)
        .into_iter()
        .map(|(time, curve)| {
            let points = if surface.key_stroke(time).is_some() {
                curve_to_polyline(curve.as_ref(), samples)
            } else {
                curve.control_points().to_vec()
            };
            (time, points)
        })
        .collect()
}

fn run(args: &Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => SurfaceSettings::default(),
    };
    let mut surface = DynamicSurface::with_settings(settings)?;

    for (i, path) in args.strokes.iter().enumerate() {
        let stroke = read_stroke(path)?;
        surface.add_key_stroke(i as f64, Arc::new(stroke))?;
    }
    let last = (args.strokes.len() - 1) as f64;
    let blocks = stroke_blocks(&surface, 0.0, last, args.steps);
    info!(
        keyframes = surface.len(),
        sampling = surface.sampling(),
        strokes = blocks.len(),
        "swept dynamic surface"
    );

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);
    for (time, points) in &blocks {
        writeln!(out, "# t = {time}")?;
        write_polyline(&mut out, points)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {msg}\n");
            print_usage();
            process::exit(1);
        }
    };
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
