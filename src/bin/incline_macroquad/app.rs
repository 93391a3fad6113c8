use std::thread;
use std::time::Duration;

use incline_plane::core::logging;
use incline_plane::core::scene::{SceneController, SceneState};
use macroquad::prelude::*;
use tracing::{info, warn};

use crate::constants::{
    START_BUTTON, TARGET_FPS, UI_FONT_PATH, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use crate::input::{build_form, poll_events};
use crate::render::{draw_animation_scene, draw_input_scene, draw_results_scene};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Sleep is coarse on some platforms; leave this much of the budget to vsync.
const PACING_SLACK_S: f64 = 0.004;

/// How long to sleep so frames do not outrun the target rate. `None` when
/// the frame already used most of its budget (e.g. vsync is pacing).
fn pacing_delay(frame_elapsed_s: f64) -> Option<Duration> {
    let spare = (1.0 / TARGET_FPS) - frame_elapsed_s - PACING_SLACK_S;
    (spare > 0.0).then(|| Duration::from_secs_f64(spare))
}

fn pace_frame(last_frame_start: f64) {
    if let Some(delay) = pacing_delay(get_time() - last_frame_start) {
        thread::sleep(delay);
    }
}

pub(crate) async fn run() {
    logging::init("info");
    info!("starting {WINDOW_TITLE}");

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!(%err, path = UI_FONT_PATH, "could not load UI font, using default");
            None
        }
    };

    prevent_quit();
    let mut controller = SceneController::new(build_form(), START_BUTTON);
    let mut last_frame_start = get_time();

    loop {
        if is_quit_requested() {
            info!("quit requested, closing window");
            break;
        }

        pace_frame(last_frame_start);
        let now = get_time();
        last_frame_start = now;

        for event in poll_events() {
            controller.handle_event(event, now);
        }
        controller.update(now);

        clear_background(WHITE);
        match controller.state() {
            SceneState::Input => {
                let (x, y) = mouse_position();
                draw_input_scene(&controller, vec2(x, y), ui_font.as_ref());
            }
            SceneState::Results => {
                if let Some(submission) = controller.submission() {
                    draw_results_scene(submission, ui_font.as_ref());
                }
            }
            SceneState::Animation => {
                let sample = controller.advance_frame();
                if let (Some(sample), Some(submission)) = (sample, controller.submission()) {
                    draw_animation_scene(submission, &sample, ui_font.as_ref());
                }
            }
        }

        next_frame().await;
    }
}
