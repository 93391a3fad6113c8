use thiserror::Error;

use crate::core::layout::{INCLINE_MARGIN_PX, PIXELS_PER_METER};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

/// Below this, `sin(theta)` is treated as a flat (or downward) incline.
pub const MIN_INCLINE_SIN: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicParameters {
    pub initial_velocity: f64,
    pub incline_angle_deg: f64,
    pub gravity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicResult {
    /// Signed; negative while the mass moves up the incline.
    pub deceleration: f64,
    pub max_distance: f64,
    pub time_to_max: f64,
    pub return_velocity: f64,
}

impl KinematicResult {
    /// Duration of one up-then-down traversal.
    pub fn cycle_time(&self) -> f64 {
        2.0 * self.time_to_max
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    #[error("Inputs must be finite numbers.")]
    NonFinite,
    #[error("Velocity cannot be negative ({0} m/s).")]
    NegativeVelocity(f64),
    #[error("Gravity must be positive ({0} m/s^2).")]
    NonPositiveGravity(f64),
    #[error("Incline angle {0} deg gives no slope; use an angle between 0 and 180.")]
    DegenerateIncline(f64),
    #[error("Velocity {0} m/s sends the mass farther than the incline can be drawn.")]
    OutOfRange(f64),
}

pub fn solve(params: KinematicParameters) -> Result<KinematicResult, KinematicsError> {
    let KinematicParameters {
        initial_velocity: v0,
        incline_angle_deg,
        gravity,
    } = params;

    if !v0.is_finite() || !incline_angle_deg.is_finite() || !gravity.is_finite() {
        return Err(KinematicsError::NonFinite);
    }
    if v0 < 0.0 {
        return Err(KinematicsError::NegativeVelocity(v0));
    }
    if gravity <= 0.0 {
        return Err(KinematicsError::NonPositiveGravity(gravity));
    }

    let sin_theta = incline_angle_deg.to_radians().sin();
    if sin_theta <= MIN_INCLINE_SIN {
        return Err(KinematicsError::DegenerateIncline(incline_angle_deg));
    }

    let a = -gravity * sin_theta;
    let result = KinematicResult {
        deceleration: a,
        max_distance: -(v0 * v0) / (2.0 * a),
        time_to_max: -v0 / a,
        return_velocity: v0,
    };
    if !fits_on_screen(&result) {
        return Err(KinematicsError::OutOfRange(v0));
    }
    Ok(result)
}

/// The incline length in pixels must stay a finite `f32`.
fn fits_on_screen(result: &KinematicResult) -> bool {
    let length_px =
        result.max_distance * f64::from(PIXELS_PER_METER) + f64::from(INCLINE_MARGIN_PX);
    result.max_distance.is_finite()
        && result.time_to_max.is_finite()
        && length_px < f64::from(f32::MAX)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub elapsed_s: f64,
    pub displacement_m: f64,
    pub speed_mps: f64,
    pub direction: Direction,
}

pub fn sample_at(params: &KinematicParameters, result: &KinematicResult, t: f64) -> MotionSample {
    let v0 = params.initial_velocity;
    let a = result.deceleration;

    if t <= result.time_to_max {
        MotionSample {
            elapsed_s: t,
            displacement_m: v0 * t + 0.5 * a * t * t,
            speed_mps: (v0 + a * t).abs(),
            direction: Direction::Up,
        }
    } else {
        let t_return = t - result.time_to_max;
        let s = result.max_distance - 0.5 * a.abs() * t_return * t_return;
        MotionSample {
            elapsed_s: t,
            displacement_m: s.max(0.0),
            speed_mps: a.abs() * t_return,
            direction: Direction::Down,
        }
    }
}

pub fn sample_cycle(
    params: &KinematicParameters,
    result: &KinematicResult,
    samples: usize,
) -> Vec<MotionSample> {
    let sample_count = samples.max(2);
    let cycle = result.cycle_time();
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * cycle) / sample_count as f64;
            sample_at(params, result, t)
        })
        .collect()
}
