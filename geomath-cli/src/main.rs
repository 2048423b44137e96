//! Geodetic conversion tool
//!
//! # Commands
//!
//! - `geomath to-ecef --lat <deg> --lon <deg> --alt <m>`
//! - `geomath to-geodetic --x <m> --y <m> --z <m>`
//! - `geomath to-local --lat <deg> --lon <deg> --alt <m>` (needs an origin)
//! - `geomath from-local --east <m> --up <m> --north <m>` (needs an origin)
//! - `geomath frame` (needs an origin)
//!
//! The origin comes from `--origin-lat/--origin-lon/--origin-alt` or from the
//! `origin` entry of a JSON file passed with `--config`.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use geomath_core::{
    GeoCoordinate, LocalTangentFrame, Transform4x4, ecef_to_geodetic, geodetic_to_ecef,
};
use nalgebra::Vector3;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// WGS84 / ECEF / local tangent frame conversions
#[derive(Parser, Debug)]
#[command(name = "geomath")]
#[command(about = "Geodetic coordinate conversions", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file providing the frame origin and output precision
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct OriginArgs {
    /// Origin latitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "origin_lon")]
    origin_lat: Option<f64>,

    /// Origin longitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "origin_lat")]
    origin_lon: Option<f64>,

    /// Origin altitude in meters above the ellipsoid
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    origin_alt: f64,
}

#[derive(Args, Debug, Clone, Copy)]
struct GeodeticArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Altitude in meters above the ellipsoid
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    alt: f64,
}

impl From<GeodeticArgs> for GeoCoordinate {
    fn from(args: GeodeticArgs) -> Self {
        GeoCoordinate::new(args.lat, args.lon, args.alt)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a geodetic position to ECEF
    ToEcef(GeodeticArgs),

    /// Convert an ECEF position to geodetic
    ToGeodetic {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, allow_negative_numbers = true)]
        z: f64,
    },

    /// Express a geodetic position in the tangent frame at the origin
    ToLocal {
        #[command(flatten)]
        point: GeodeticArgs,
        #[command(flatten)]
        origin: OriginArgs,
    },

    /// Convert a tangent-frame position back to geodetic
    FromLocal {
        #[arg(long, allow_negative_numbers = true)]
        east: f64,
        #[arg(long, allow_negative_numbers = true)]
        up: f64,
        #[arg(long, allow_negative_numbers = true)]
        north: f64,
        #[command(flatten)]
        origin: OriginArgs,
    },

    /// Print the ECEF->local and local->ECEF matrices for the origin
    Frame {
        #[command(flatten)]
        origin: OriginArgs,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Flags win over the config file
fn resolve_origin(args: &OriginArgs, config: &Config) -> Result<GeoCoordinate> {
    let origin = match (args.origin_lat, args.origin_lon) {
        (Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon, args.origin_alt),
        _ => match config.origin {
            Some(origin) => origin,
            None => bail!("no origin given; pass --origin-lat/--origin-lon or a --config file"),
        },
    };
    origin.validate().context("invalid origin")?;
    Ok(origin)
}

fn format_triple(v: [f64; 3], precision: usize) -> String {
    format!("{:.p$} {:.p$} {:.p$}", v[0], v[1], v[2], p = precision)
}

fn format_geodetic(coord: &GeoCoordinate, precision: usize) -> String {
    format_triple([coord.latitude, coord.longitude, coord.altitude], precision)
}

fn format_vector(v: &Vector3<f64>, precision: usize) -> String {
    format_triple([v.x, v.y, v.z], precision)
}

fn format_matrix(m: &Transform4x4, precision: usize) -> String {
    m.row_iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:.p$}", v, p = precision))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn run(cli: &Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let precision = config.precision;

    let output = match &cli.command {
        Commands::ToEcef(point) => {
            let ecef = geodetic_to_ecef(&GeoCoordinate::from(*point));
            format_vector(&ecef, precision)
        }
        Commands::ToGeodetic { x, y, z } => {
            let coord = ecef_to_geodetic(&Vector3::new(*x, *y, *z));
            format_geodetic(&coord, precision)
        }
        Commands::ToLocal { point, origin } => {
            let frame = LocalTangentFrame::new(resolve_origin(origin, &config)?);
            let local = frame.geodetic_to_local(&GeoCoordinate::from(*point));
            format_vector(&local, precision)
        }
        Commands::FromLocal {
            east,
            up,
            north,
            origin,
        } => {
            let frame = LocalTangentFrame::new(resolve_origin(origin, &config)?);
            let coord = frame.local_to_geodetic(&Vector3::new(*east, *up, *north));
            format_geodetic(&coord, precision)
        }
        Commands::Frame { origin } => {
            let frame = LocalTangentFrame::new(resolve_origin(origin, &config)?);
            format!(
                "ecef_to_local:\n{}\nlocal_to_ecef:\n{}",
                format_matrix(&frame.ecef_to_local(), precision),
                format_matrix(&frame.local_to_ecef(), precision)
            )
        }
    };

    debug!(command = ?cli.command, "Conversion complete");
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("{}", run(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geomath_core::coordinate::WGS84_A;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("geomath").chain(args.iter().copied())).unwrap()
    }

    fn numbers(output: &str) -> Vec<f64> {
        output.split_whitespace().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_to_ecef_equator() {
        let out = run(&parse(&["to-ecef", "--lat", "0", "--lon", "0"])).unwrap();
        let v = numbers(&out);

        assert_abs_diff_eq!(v[0], WGS84_A, epsilon = 1e-6);
        assert_abs_diff_eq!(v[1], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v[2], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_to_geodetic_accepts_negative_values() {
        let out = run(&parse(&["to-geodetic", "--x", "0", "--y", "0", "--z", "-6356752.314245179"]))
            .unwrap();
        let v = numbers(&out);

        assert_eq!(v[0], -90.0);
        assert_abs_diff_eq!(v[2], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_to_local_with_origin_flags() {
        let out = run(&parse(&[
            "to-local",
            "--lat", "37.422098",
            "--lon", "-122.08286",
            "--alt", "111.5",
            "--origin-lat", "37.422098",
            "--origin-lon", "-122.08286",
            "--origin-alt", "11.5",
        ]))
        .unwrap();
        let v = numbers(&out);

        assert_abs_diff_eq!(v[0], 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(v[1], 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(v[2], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_from_local_origin() {
        let out = run(&parse(&[
            "from-local",
            "--east", "0",
            "--up", "0",
            "--north", "0",
            "--origin-lat", "-33.8688",
            "--origin-lon", "151.2093",
        ]))
        .unwrap();
        let v = numbers(&out);

        assert_abs_diff_eq!(v[0], -33.8688, epsilon = 1e-8);
        assert_abs_diff_eq!(v[1], 151.2093, epsilon = 1e-8);
        assert_abs_diff_eq!(v[2], 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_frame_prints_two_matrices() {
        let out = run(&parse(&["frame", "--origin-lat", "10", "--origin-lon", "20"])).unwrap();

        assert!(out.starts_with("ecef_to_local:\n"));
        assert!(out.contains("\nlocal_to_ecef:\n"));
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn test_missing_origin_is_error() {
        let err = run(&parse(&["frame"])).unwrap_err();
        assert!(err.to_string().contains("no origin given"));
    }

    #[test]
    fn test_invalid_origin_is_error() {
        let err = run(&parse(&["frame", "--origin-lat", "91", "--origin-lon", "0"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid origin");
    }

    #[test]
    fn test_origin_from_config() {
        let config = Config {
            origin: Some(GeoCoordinate::new(1.0, 2.0, 3.0)),
            precision: 3,
        };
        let args = OriginArgs {
            origin_lat: None,
            origin_lon: None,
            origin_alt: 0.0,
        };

        assert_eq!(resolve_origin(&args, &config).unwrap(), GeoCoordinate::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_origin_flags_override_config() {
        let config = Config {
            origin: Some(GeoCoordinate::new(1.0, 2.0, 3.0)),
            precision: 3,
        };
        let args = OriginArgs {
            origin_lat: Some(-5.0),
            origin_lon: Some(6.0),
            origin_alt: 7.0,
        };

        assert_eq!(resolve_origin(&args, &config).unwrap(), GeoCoordinate::new(-5.0, 6.0, 7.0));
    }

    #[test]
    fn test_origin_lat_requires_lon() {
        let result = Cli::try_parse_from(["geomath", "frame", "--origin-lat", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_precision() {
        assert_eq!(format_triple([1.0, -2.5, 3.14159], 2), "1.00 -2.50 3.14");
    }
}
