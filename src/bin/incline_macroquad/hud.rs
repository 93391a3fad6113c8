use incline_plane::core::kinematics::MotionSample;
use incline_plane::core::scene::Submission;
use macroquad::prelude::*;

use crate::constants::{BODY_FONT_SIZE, TITLE_COLOR, TITLE_FONT_SIZE, WINDOW_WIDTH};
use crate::render::draw_ui_text;

pub(crate) fn readout_lines(submission: &Submission, sample: &MotionSample) -> [String; 4] {
    let result = submission.result;
    [
        format!(
            "Time: {:.2}s / {:.2}s",
            sample.elapsed_s,
            result.cycle_time()
        ),
        format!(
            "Position: {:.3}m / {:.3}m",
            sample.displacement_m, result.max_distance
        ),
        format!(
            "Velocity: {:.2}m/s {}",
            sample.speed_mps,
            sample.direction.label()
        ),
        format!("Angle: {:.1}°", submission.params.incline_angle_deg),
    ]
}

pub(crate) fn draw_readouts(submission: &Submission, sample: &MotionSample, font: Option<&Font>) {
    for (i, line) in readout_lines(submission, sample).iter().enumerate() {
        draw_ui_text(line, 10.0, 40.0 + i as f32 * 30.0, BODY_FONT_SIZE, BLACK, font);
    }

    draw_ui_text(
        "Inclined Plane Motion",
        WINDOW_WIDTH as f32 - 350.0,
        45.0,
        TITLE_FONT_SIZE,
        TITLE_COLOR,
        font,
    );
    draw_ui_text(
        "Esc: new values",
        WINDOW_WIDTH as f32 - 170.0,
        580.0,
        18,
        GRAY,
        font,
    );
}
