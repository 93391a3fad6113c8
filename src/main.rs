use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use incline_plane::core::form::{FieldParseError, parse_numeric_field};
use incline_plane::core::kinematics::{KinematicParameters, KinematicsError, solve};
use incline_plane::core::logging;
use incline_plane::core::plot::{PlotError, default_chart_path, render_motion_chart};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid {label}: {source}. Expected a number.")]
    InvalidNumber {
        label: &'static str,
        source: FieldParseError,
    },
    #[error("Expected exactly 3 arguments: <velocity_mps> <angle_deg> <gravity_mps2>.")]
    ArgumentCount,
    #[error("Input ended unexpectedly (EOF).")]
    UnexpectedEof,
    #[error("Could not access the terminal: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Kinematics(#[from] KinematicsError),
    #[error(transparent)]
    Plot(#[from] PlotError),
}

#[derive(Debug, PartialEq)]
enum PlotRequest {
    None,
    Timestamped,
    At(PathBuf),
}

fn parse_number(value: &str, label: &'static str) -> Result<f64, CliError> {
    parse_numeric_field(value).map_err(|source| CliError::InvalidNumber { label, source })
}

fn read_number(prompt: &str) -> Result<f64, CliError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof);
        }

        match parse_numeric_field(&line) {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 32 or 9.8)."),
        }
    }
}

fn params_from_user() -> Result<KinematicParameters, CliError> {
    Ok(KinematicParameters {
        initial_velocity: read_number("Initial velocity (m/s): ")?,
        incline_angle_deg: read_number("Incline angle (degrees): ")?,
        gravity: read_number("Gravity (m/s^2): ")?,
    })
}

fn params_from_args(values: &[String]) -> Result<KinematicParameters, CliError> {
    let [v0, angle, g] = values else {
        return Err(CliError::ArgumentCount);
    };

    Ok(KinematicParameters {
        initial_velocity: parse_number(v0, "velocity")?,
        incline_angle_deg: parse_number(angle, "angle")?,
        gravity: parse_number(g, "gravity")?,
    })
}

/// Splits `--plot` / `--plot=<path>` from the positional values.
fn split_plot_flag(args: &[String]) -> (PlotRequest, Vec<String>) {
    let mut plot = PlotRequest::None;
    let mut values = Vec::new();
    for arg in args {
        if arg == "--plot" {
            plot = PlotRequest::Timestamped;
        } else if let Some(path) = arg.strip_prefix("--plot=") {
            plot = PlotRequest::At(PathBuf::from(path));
        } else {
            values.push(arg.clone());
        }
    }
    (plot, values)
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [--plot | --plot=<file.png>]");
    println!("  {program} [--plot | --plot=<file.png>] <velocity_mps> <angle_deg> <gravity_mps2>");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 3.5 32 9.8");
    println!("  {program} --plot=charts/incline.png 3.5 32 9.8");
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(args.first().map_or("incline_plane", String::as_str));
        return Ok(());
    }

    let (plot, values) = split_plot_flag(args.get(1..).unwrap_or(&[]));
    debug!(?plot, "parsed arguments");

    let params = if values.is_empty() {
        params_from_user()?
    } else {
        params_from_args(&values)?
    };

    let result = solve(params)?;

    println!();
    println!("Deceleration: {:.3} m/s^2", result.deceleration);
    println!("(a) Distance: {:.3} m", result.max_distance);
    println!("(b) Time: {:.3} s", result.time_to_max);
    println!("(c) Return Velocity: {:.3} m/s", result.return_velocity);

    let chart_path = match plot {
        PlotRequest::None => None,
        PlotRequest::Timestamped => Some(default_chart_path(Local::now().naive_local())),
        PlotRequest::At(path) => Some(path),
    };
    if let Some(path) = chart_path {
        render_motion_chart(&path, &params, &result)?;
        println!("Chart: {}", path.display());
    }

    Ok(())
}

fn main() {
    logging::init("warn");

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --bin incline_plane --");
        std::process::exit(1);
    }
}
