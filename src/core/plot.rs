use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use plotters::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::core::kinematics::{KinematicParameters, KinematicResult, sample_cycle};
use crate::core::layout::motion_axis_window;

pub const CHART_SIZE: (u32, u32) = (1024, 640);
pub const CHART_SAMPLES: usize = 240;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("could not prepare chart directory: {0}")]
    Io(#[from] io::Error),
    #[error("failed to render motion chart: {0}")]
    Render(String),
}

fn render_err<E: Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

pub fn default_chart_path(now: NaiveDateTime) -> PathBuf {
    PathBuf::from(format!(
        "incline_motion_{}.png",
        now.format("%Y%m%d_%H%M%S")
    ))
}

/// Writes position and speed over one up-and-down cycle as a PNG.
pub fn render_motion_chart(
    path: &Path,
    params: &KinematicParameters,
    result: &KinematicResult,
) -> Result<(), PlotError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let samples = sample_cycle(params, result, CHART_SAMPLES);
    let (max_t, max_value) = motion_axis_window(
        result.cycle_time(),
        result.max_distance.max(params.initial_velocity),
    );

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Incline motion: v0 = {:.2} m/s, angle = {:.1} deg, g = {:.2} m/s^2",
                params.initial_velocity, params.incline_angle_deg, params.gravity
            ),
            ("sans-serif", 24),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..max_t, 0f64..max_value)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Position (m) / Speed (m/s)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.elapsed_s, s.displacement_m)),
            &BLUE,
        ))
        .map_err(render_err)?
        .label("Position (m)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.elapsed_s, s.speed_mps)),
            &RED,
        ))
        .map_err(render_err)?
        .label("Speed (m/s)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(std::iter::once(Circle::new(
            (result.time_to_max, result.max_distance),
            4,
            BLUE.filled(),
        )))
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "motion chart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kinematics::solve;
    use chrono::NaiveDate;

    #[test]
    fn default_path_is_timestamped() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(15, 4, 5))
            .expect("valid timestamp");
        assert_eq!(
            default_chart_path(now),
            PathBuf::from("incline_motion_20261019_150405.png")
        );
    }

    #[test]
    fn writes_chart_for_default_and_resting_inputs() {
        let dir = tempfile::tempdir().expect("temp dir");
        for (name, v0) in [("default.png", 3.5), ("resting.png", 0.0)] {
            let params = KinematicParameters {
                initial_velocity: v0,
                incline_angle_deg: 32.0,
                gravity: 9.8,
            };
            let result = solve(params).expect("inputs should solve");
            let path = dir.path().join("charts").join(name);

            render_motion_chart(&path, &params, &result).expect("chart should render");
            let written = fs::metadata(&path).expect("chart file exists");
            assert!(written.len() > 0);
        }
    }

    #[test]
    fn render_errors_keep_the_message() {
        let err = render_err("backend gone");
        assert_eq!(
            err.to_string(),
            "failed to render motion chart: backend gone"
        );
    }
}
