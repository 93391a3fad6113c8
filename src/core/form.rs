use macroquad::math::{Rect, Vec2};
use thiserror::Error;

use crate::core::kinematics::KinematicParameters;

/// Input vocabulary shared by the form and the scene controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerPressed(Vec2),
    Character(char),
    Erase,
    Confirm,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{text}' is not a number")]
pub struct FieldParseError {
    pub text: String,
}

pub fn parse_numeric_field(text: &str) -> Result<f64, FieldParseError> {
    text.trim().parse::<f64>().map_err(|_| FieldParseError {
        text: text.to_string(),
    })
}

/// Malformed field text degrades to 0.0 instead of reaching the user as an error.
pub fn value_or_default(parsed: Result<f64, FieldParseError>) -> f64 {
    parsed.unwrap_or(0.0)
}

fn accepts_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

#[derive(Clone, Debug)]
pub struct FormField {
    pub bounds: Rect,
    pub label: &'static str,
    pub text: String,
    pub focused: bool,
}

impl FormField {
    pub fn new(bounds: Rect, label: &'static str, default: &str) -> Self {
        Self {
            bounds,
            label,
            text: default.to_string(),
            focused: false,
        }
    }

    pub fn value(&self) -> f64 {
        value_or_default(parse_numeric_field(&self.text))
    }
}

/// Velocity, angle and gravity fields, in that order.
#[derive(Clone, Debug)]
pub struct InputForm {
    fields: [FormField; 3],
}

impl InputForm {
    pub fn new(velocity: FormField, angle: FormField, gravity: FormField) -> Self {
        Self {
            fields: [velocity, angle, gravity],
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.iter().find(|field| field.focused)
    }

    /// Returns true when the user confirms from a focused field.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerPressed(position) => {
                for field in &mut self.fields {
                    field.focused = field.bounds.contains(position);
                }
                false
            }
            InputEvent::Character(c) => {
                if accepts_char(c) {
                    if let Some(field) = self.focused_mut() {
                        field.text.push(c);
                    }
                }
                false
            }
            InputEvent::Erase => {
                if let Some(field) = self.focused_mut() {
                    field.text.pop();
                }
                false
            }
            InputEvent::Confirm => self.focused_field().is_some(),
            InputEvent::Back => false,
        }
    }

    pub fn current_values(&self) -> KinematicParameters {
        let [velocity, angle, gravity] = &self.fields;
        KinematicParameters {
            initial_velocity: velocity.value(),
            incline_angle_deg: angle.value(),
            gravity: gravity.value(),
        }
    }

    fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn form_with(velocity: &str, angle: &str, gravity: &str) -> InputForm {
        InputForm::new(
            FormField::new(Rect::new(250.0, 150.0, 300.0, 40.0), "v0", velocity),
            FormField::new(Rect::new(250.0, 230.0, 300.0, 40.0), "theta", angle),
            FormField::new(Rect::new(250.0, 310.0, 300.0, 40.0), "g", gravity),
        )
    }

    fn type_text(form: &mut InputForm, text: &str) {
        for c in text.chars() {
            form.handle_event(InputEvent::Character(c));
        }
    }

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(parse_numeric_field(" 9.81 "), Ok(9.81));
        assert_eq!(parse_numeric_field("-2"), Ok(-2.0));
    }

    #[test]
    fn malformed_text_defaults_to_zero() {
        let err = parse_numeric_field("abc").expect_err("letters are not a number");
        assert_eq!(err.to_string(), "'abc' is not a number");

        let form = form_with("abc", "1.2.3", "");
        let values = form.current_values();
        assert_eq!(values.initial_velocity, 0.0);
        assert_eq!(values.incline_angle_deg, 0.0);
        assert_eq!(values.gravity, 0.0);
    }

    #[test]
    fn reads_defaults_in_field_order() {
        let form = form_with("3.5", "32", "9.8");
        assert_eq!(
            form.current_values(),
            KinematicParameters {
                initial_velocity: 3.5,
                incline_angle_deg: 32.0,
                gravity: 9.8,
            }
        );
    }

    #[test]
    fn pointer_press_moves_focus() {
        let mut form = form_with("3.5", "32", "9.8");
        assert!(form.focused_field().is_none());

        form.handle_event(InputEvent::PointerPressed(vec2(300.0, 240.0)));
        assert_eq!(form.focused_field().map(|f| f.label), Some("theta"));

        form.handle_event(InputEvent::PointerPressed(vec2(10.0, 10.0)));
        assert!(form.focused_field().is_none());
    }

    #[test]
    fn typing_only_reaches_the_focused_field() {
        let mut form = form_with("", "32", "9.8");
        type_text(&mut form, "12");
        assert_eq!(form.fields()[0].text, "");

        form.handle_event(InputEvent::PointerPressed(vec2(260.0, 160.0)));
        type_text(&mut form, "-4.5");
        assert_eq!(form.fields()[0].text, "-4.5");
        assert_eq!(form.fields()[1].text, "32");
    }

    #[test]
    fn rejects_characters_outside_numeric_set() {
        let mut form = form_with("1", "32", "9.8");
        form.handle_event(InputEvent::PointerPressed(vec2(260.0, 160.0)));
        type_text(&mut form, "a e+2");
        assert_eq!(form.fields()[0].text, "12");
    }

    #[test]
    fn erase_removes_last_character() {
        let mut form = form_with("9.8", "32", "9.8");
        form.handle_event(InputEvent::PointerPressed(vec2(260.0, 160.0)));
        form.handle_event(InputEvent::Erase);
        assert_eq!(form.fields()[0].text, "9.");
        form.handle_event(InputEvent::Erase);
        form.handle_event(InputEvent::Erase);
        form.handle_event(InputEvent::Erase);
        assert_eq!(form.fields()[0].text, "");
    }

    #[test]
    fn confirm_requires_focus() {
        let mut form = form_with("3.5", "32", "9.8");
        assert!(!form.handle_event(InputEvent::Confirm));

        form.handle_event(InputEvent::PointerPressed(vec2(260.0, 320.0)));
        assert!(form.handle_event(InputEvent::Confirm));
        assert!(!form.handle_event(InputEvent::Back));
    }
}
