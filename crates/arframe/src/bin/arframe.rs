use std::path::PathBuf;
use std::str::FromStr;

use arframe::core::{get_radians, CaptureFormat, FitConfig, FitReport, FrameDescriptor, Orientation};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use nalgebra::Point2;
use serde::Serialize;

#[cfg(feature = "tracing")]
use arframe::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use arframe::core::init_with_level;

/// Inspect the UV transforms used to fit camera frames onto displays.
#[derive(Parser, Debug)]
#[command(name = "arframe", author, version, about, long_about = None)]
struct Cli {
    /// Log level written to stderr (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the aspect-fit transform from target UVs to source UVs.
    Fit(FitArgs),
    /// Print the rotation between two orientations.
    Radians {
        #[arg(long)]
        from: Orientation,
        #[arg(long)]
        to: Orientation,
    },
    /// Print the fixed capture formats.
    Formats,
}

#[derive(clap::Args, Debug)]
struct FitArgs {
    /// JSON fit config; frame flags are ignored when given.
    #[arg(long, value_name = "JSON", conflicts_with_all = ["source", "target"])]
    config: Option<PathBuf>,

    /// Source frame as `WIDTHxHEIGHT:orientation`.
    #[arg(long, value_name = "FRAME", required_unless_present = "config")]
    source: Option<FrameDescriptor>,

    /// Target frame as `WIDTHxHEIGHT:orientation`.
    #[arg(long, value_name = "FRAME", required_unless_present = "config")]
    target: Option<FrameDescriptor>,

    /// Rotate from target to source orientation instead.
    #[arg(long)]
    reverse_rotation: bool,

    #[arg(long)]
    flip_vertical: bool,

    #[arg(long)]
    flip_horizontal: bool,

    /// Target UV to map, as `u,v` (repeatable).
    #[arg(long = "uv", value_name = "U,V", value_parser = parse_uv)]
    uvs: Vec<[f32; 2]>,

    /// Also write the report to this file.
    #[arg(long, value_name = "JSON")]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MappedUv {
    target: [f32; 2],
    source: [f32; 2],
}

#[derive(Debug, Serialize)]
struct FitOutput {
    #[serde(flatten)]
    report: FitReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    mapped: Vec<MappedUv>,
}

#[derive(Debug, Serialize)]
struct RadiansOutput {
    from: Orientation,
    to: Orientation,
    radians: f64,
    degrees: f64,
}

#[derive(Debug, Serialize)]
struct FormatOutput {
    format: CaptureFormat,
    width: usize,
    height: usize,
    byte_length: usize,
    quality: Option<u8>,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("unknown log level `{s}`"))
}

fn parse_uv(s: &str) -> Result<[f32; 2], String> {
    let (u, v) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `u,v`, got `{s}`"))?;
    let parse = |x: &str| {
        x.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate `{x}`: {e}"))
    };
    Ok([parse(u)?, parse(v)?])
}

fn main() {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    if let Err(err) = init_with_level(cli.log_level) {
        eprintln!("warning: logger not installed: {err}");
    }
    #[cfg(feature = "tracing")]
    init_tracing(false);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Fit(args) => run_fit(args),
        Command::Radians { from, to } => {
            let radians = get_radians(from, to);
            print_json(&RadiansOutput {
                from,
                to,
                radians,
                degrees: radians.to_degrees(),
            })
        }
        Command::Formats => {
            let formats: Vec<FormatOutput> = CaptureFormat::ALL
                .into_iter()
                .map(|format| FormatOutput {
                    format,
                    width: format.width(),
                    height: format.height(),
                    byte_length: format.byte_length(),
                    quality: format.quality(),
                })
                .collect();
            print_json(&formats)
        }
    }
}

fn run_fit(args: FitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = match (&args.config, args.source, args.target) {
        (Some(path), _, _) => {
            info!("loading fit config from {}", path.display());
            FitConfig::load_json(path)?
        }
        (None, Some(source), Some(target)) => FitConfig::new(source, target),
        _ => return Err("either --config or both --source and --target are required".into()),
    };
    cfg.reverse_rotation |= args.reverse_rotation;
    cfg.flip_vertical |= args.flip_vertical;
    cfg.flip_horizontal |= args.flip_horizontal;

    let report = cfg.report()?;
    let transform = cfg.build_transform()?;
    let mapped = args
        .uvs
        .iter()
        .map(|&[u, v]| {
            let p = transform.apply(Point2::new(u, v));
            MappedUv {
                target: [u, v],
                source: [p.x, p.y],
            }
        })
        .collect();

    let output_path = args
        .output
        .or_else(|| cfg.output_path.as_ref().map(PathBuf::from));
    if let Some(path) = output_path {
        report.write_json(&path)?;
        info!("report written to {}", path.display());
    }

    print_json(&FitOutput { report, mapped })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
