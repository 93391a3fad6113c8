use macroquad::math::{Vec2, vec2};

pub const PIXELS_PER_METER: f32 = 100.0;
pub const INCLINE_ORIGIN: Vec2 = Vec2::new(100.0, 500.0);
pub const INCLINE_MARGIN_PX: f32 = 100.0;
pub const GROUND_OVERHANG_PX: f32 = 50.0;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_TIME_SPAN_S: f64 = 0.1;

/// Screen-space geometry of the incline for one submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InclineLayout {
    pub origin: Vec2,
    pub top: Vec2,
    pub length_px: f32,
    pub ground_start: Vec2,
    pub ground_end: Vec2,
    /// Unit vector up the incline; screen y grows downward.
    direction: Vec2,
}

impl InclineLayout {
    pub fn new(max_distance_m: f64, angle_deg: f64) -> Self {
        let theta = angle_deg.to_radians() as f32;
        let direction = vec2(theta.cos(), -theta.sin());
        let length_px = max_distance_m as f32 * PIXELS_PER_METER + INCLINE_MARGIN_PX;
        let origin = INCLINE_ORIGIN;

        Self {
            origin,
            top: origin + direction * length_px,
            length_px,
            ground_start: vec2(origin.x - GROUND_OVERHANG_PX, origin.y),
            ground_end: vec2(origin.x + length_px, origin.y),
            direction,
        }
    }

    pub fn point_at(&self, displacement_m: f64) -> Vec2 {
        self.origin + self.direction * (displacement_m as f32 * PIXELS_PER_METER)
    }
}

/// Padded (time, value) extents for the motion chart.
pub fn motion_axis_window(cycle_time_s: f64, peak_value: f64) -> (f64, f64) {
    let time_span = cycle_time_s.max(MIN_TIME_SPAN_S);
    let value_span = peak_value.max(1.0);
    (
        time_span * (1.0 + X_PADDING_RATIO),
        value_span * (1.0 + Y_PADDING_RATIO),
    )
}
