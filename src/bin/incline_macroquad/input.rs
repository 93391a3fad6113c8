use incline_plane::core::form::{FormField, InputEvent, InputForm};
use macroquad::prelude::*;

use crate::constants::{
    ANGLE_FIELD_Y, DEFAULT_ANGLE, DEFAULT_GRAVITY, DEFAULT_VELOCITY, FIELD_HEIGHT, FIELD_WIDTH,
    FIELD_X, GRAVITY_FIELD_Y, VELOCITY_FIELD_Y,
};

pub(crate) fn build_form() -> InputForm {
    let field = |y: f32, label: &'static str, default: &str| {
        FormField::new(Rect::new(FIELD_X, y, FIELD_WIDTH, FIELD_HEIGHT), label, default)
    };
    InputForm::new(
        field(VELOCITY_FIELD_Y, "Initial Velocity (m/s):", DEFAULT_VELOCITY),
        field(ANGLE_FIELD_Y, "Incline Angle (degrees):", DEFAULT_ANGLE),
        field(GRAVITY_FIELD_Y, "Gravity (m/s²):", DEFAULT_GRAVITY),
    )
}

/// Drains this frame's pointer and keyboard input into `InputEvent`s.
pub(crate) fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(InputEvent::PointerPressed(vec2(x, y)));
    }

    while let Some(c) = get_char_pressed() {
        // Backspace and Enter also arrive as control characters.
        if !c.is_control() {
            events.push(InputEvent::Character(c));
        }
    }

    if is_key_pressed(KeyCode::Backspace) {
        events.push(InputEvent::Erase);
    }
    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        events.push(InputEvent::Confirm);
    }
    if is_key_pressed(KeyCode::Escape) {
        events.push(InputEvent::Back);
    }

    events
}
