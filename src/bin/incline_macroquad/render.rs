use incline_plane::core::form::FormField;
use incline_plane::core::kinematics::MotionSample;
use incline_plane::core::layout::InclineLayout;
use incline_plane::core::scene::{SceneController, Submission};
use macroquad::prelude::*;

use crate::constants::{
    BODY_FONT_SIZE, BUTTON_BORDER, BUTTON_HOVER, BUTTON_IDLE, ERROR_COLOR, FIELD_FOCUSED,
    FIELD_IDLE, GROUND_COLOR, HINT_COLOR, INCLINE_COLOR, LABEL_OFFSET_Y, OBJECT_FILL,
    OBJECT_OUTLINE, OBJECT_RADIUS, RESULT_COLOR, START_BUTTON_TEXT, TITLE_COLOR, TITLE_FONT_SIZE,
    WINDOW_WIDTH,
};
use crate::hud::draw_readouts;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

fn draw_centered_text(text: &str, y: f32, font_size: u16, color: Color, font: Option<&Font>) {
    let size = measure_text(text, font, font_size, 1.0);
    draw_ui_text(
        text,
        (WINDOW_WIDTH as f32 - size.width) * 0.5,
        y,
        font_size,
        color,
        font,
    );
}

fn draw_field(field: &FormField, font: Option<&Font>) {
    let b = field.bounds;
    draw_ui_text(
        field.label,
        b.x,
        b.y - LABEL_OFFSET_Y,
        BODY_FONT_SIZE,
        BLACK,
        font,
    );
    let border = if field.focused {
        FIELD_FOCUSED
    } else {
        FIELD_IDLE
    };
    draw_rectangle_lines(b.x, b.y, b.w, b.h, 2.0, border);
    draw_ui_text(
        &field.text,
        b.x + 6.0,
        b.y + b.h * 0.5 + BODY_FONT_SIZE as f32 * 0.3,
        BODY_FONT_SIZE,
        BLACK,
        font,
    );
}

pub(crate) fn draw_input_scene(controller: &SceneController, mouse: Vec2, font: Option<&Font>) {
    draw_centered_text("Inclined Plane Simulation", 80.0, TITLE_FONT_SIZE, TITLE_COLOR, font);

    for field in controller.form().fields() {
        draw_field(field, font);
    }

    let button = controller.submit_bounds();
    let fill = if button.contains(mouse) {
        BUTTON_HOVER
    } else {
        BUTTON_IDLE
    };
    draw_rectangle(button.x, button.y, button.w, button.h, fill);
    draw_rectangle_lines(button.x, button.y, button.w, button.h, 3.0, BUTTON_BORDER);

    let label = measure_text(START_BUTTON_TEXT, font, BODY_FONT_SIZE, 1.0);
    draw_ui_text(
        START_BUTTON_TEXT,
        button.x + (button.w - label.width) * 0.5,
        button.y + (button.h + label.height) * 0.5,
        BODY_FONT_SIZE,
        WHITE,
        font,
    );

    if let Some(status) = controller.status_line() {
        draw_centered_text(status, button.y + button.h + 40.0, 20, ERROR_COLOR, font);
    }
}

pub(crate) fn draw_results_scene(submission: &Submission, font: Option<&Font>) {
    draw_centered_text("Results", 130.0, TITLE_FONT_SIZE, TITLE_COLOR, font);

    let result = submission.result;
    let lines = [
        format!("(a) Distance: {:.3} m", result.max_distance),
        format!("(b) Time: {:.3} s", result.time_to_max),
        format!("(c) Return Velocity: {:.3} m/s", result.return_velocity),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_centered_text(line, 225.0 + i as f32 * 50.0, BODY_FONT_SIZE, RESULT_COLOR, font);
    }

    draw_centered_text(
        "Click or wait to see animation...",
        475.0,
        BODY_FONT_SIZE,
        HINT_COLOR,
        font,
    );
}

pub(crate) fn draw_animation_scene(
    submission: &Submission,
    sample: &MotionSample,
    font: Option<&Font>,
) {
    let layout = InclineLayout::new(
        submission.result.max_distance,
        submission.params.incline_angle_deg,
    );

    draw_line(
        layout.origin.x,
        layout.origin.y,
        layout.top.x,
        layout.top.y,
        3.0,
        INCLINE_COLOR,
    );
    draw_line(
        layout.ground_start.x,
        layout.ground_start.y,
        layout.ground_end.x,
        layout.ground_end.y,
        1.0,
        GROUND_COLOR,
    );

    let p = layout.point_at(sample.displacement_m);
    draw_circle(p.x, p.y, OBJECT_RADIUS, OBJECT_FILL);
    draw_circle_lines(p.x, p.y, OBJECT_RADIUS, 2.0, OBJECT_OUTLINE);

    draw_readouts(submission, sample, font);
}
