use macroquad::prelude::{Color, Rect};

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const WINDOW_TITLE: &str = "Inclined Plane Simulation";
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const TARGET_FPS: f64 = 60.0;

pub const TITLE_FONT_SIZE: u16 = 36;
pub const BODY_FONT_SIZE: u16 = 26;

pub const FIELD_X: f32 = 250.0;
pub const FIELD_WIDTH: f32 = 300.0;
pub const FIELD_HEIGHT: f32 = 40.0;
pub const VELOCITY_FIELD_Y: f32 = 150.0;
pub const ANGLE_FIELD_Y: f32 = 230.0;
pub const GRAVITY_FIELD_Y: f32 = 310.0;
pub const LABEL_OFFSET_Y: f32 = 10.0;

pub const DEFAULT_VELOCITY: &str = "3.5";
pub const DEFAULT_ANGLE: &str = "32";
pub const DEFAULT_GRAVITY: &str = "9.8";

pub const START_BUTTON: Rect = Rect {
    x: 300.0,
    y: 400.0,
    w: 200.0,
    h: 50.0,
};
pub const START_BUTTON_TEXT: &str = "START";

pub const OBJECT_RADIUS: f32 = 15.0;

pub const FIELD_IDLE: Color = Color::new(0.78, 0.78, 0.78, 1.0);
pub const FIELD_FOCUSED: Color = Color::new(0.39, 0.59, 1.0, 1.0);
pub const TITLE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const BUTTON_IDLE: Color = Color::new(0.20, 0.59, 0.20, 1.0);
pub const BUTTON_HOVER: Color = Color::new(0.39, 0.78, 0.39, 1.0);
pub const BUTTON_BORDER: Color = Color::new(0.0, 0.39, 0.0, 1.0);
pub const RESULT_COLOR: Color = Color::new(0.0, 0.59, 0.0, 1.0);
pub const HINT_COLOR: Color = Color::new(0.59, 0.59, 0.59, 1.0);
pub const ERROR_COLOR: Color = Color::new(0.78, 0.12, 0.12, 1.0);
pub const INCLINE_COLOR: Color = Color::new(0.39, 0.39, 0.39, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);
pub const OBJECT_FILL: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const OBJECT_OUTLINE: Color = Color::new(0.39, 0.0, 0.0, 1.0);
