use macroquad::math::Rect;
use tracing::{debug, info, warn};

use crate::core::form::{InputEvent, InputForm};
use crate::core::kinematics::{
    KinematicParameters, KinematicResult, MotionSample, sample_at, solve,
};

pub const FRAME_DURATION_S: f64 = 1.0 / 60.0;
pub const RESULTS_AUTO_ADVANCE_S: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneState {
    Input,
    Results,
    Animation,
}

/// Fixed-step animation time; advances by `frame_duration_s` per frame
/// regardless of how long the frame actually took.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    pub elapsed_s: f64,
    pub frame_duration_s: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self {
            elapsed_s: 0.0,
            frame_duration_s: FRAME_DURATION_S,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_s = 0.0;
    }

    /// Returns true when the step completed a cycle and the clock wrapped.
    pub fn tick(&mut self, cycle_time_s: f64) -> bool {
        self.elapsed_s += self.frame_duration_s;
        if self.elapsed_s >= cycle_time_s {
            self.reset();
            return true;
        }
        false
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Submission {
    pub params: KinematicParameters,
    pub result: KinematicResult,
}

pub struct SceneController {
    state: SceneState,
    form: InputForm,
    submit_bounds: Rect,
    submission: Option<Submission>,
    results_entered_at_s: f64,
    clock: AnimationClock,
    status_line: Option<String>,
}

impl SceneController {
    pub fn new(form: InputForm, submit_bounds: Rect) -> Self {
        Self {
            state: SceneState::Input,
            form,
            submit_bounds,
            submission: None,
            results_entered_at_s: 0.0,
            clock: AnimationClock::new(),
            status_line: None,
        }
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn submit_bounds(&self) -> Rect {
        self.submit_bounds
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Message for the last rejected submission, shown on the input screen.
    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    pub fn handle_event(&mut self, event: InputEvent, now_s: f64) {
        match self.state {
            SceneState::Input => {
                let confirmed = self.form.handle_event(event);
                let clicked_submit = matches!(
                    event,
                    InputEvent::PointerPressed(position) if self.submit_bounds.contains(position)
                );
                if confirmed || clicked_submit {
                    self.submit(now_s);
                }
            }
            SceneState::Results => match event {
                InputEvent::PointerPressed(_) => self.enter_animation(),
                InputEvent::Back => self.return_to_input(),
                _ => {}
            },
            SceneState::Animation => {
                if event == InputEvent::Back {
                    self.return_to_input();
                }
            }
        }
    }

    /// Time-driven transitions; call once per frame after input.
    pub fn update(&mut self, now_s: f64) {
        if self.state == SceneState::Results
            && now_s - self.results_entered_at_s >= RESULTS_AUTO_ADVANCE_S
        {
            debug!("results timer elapsed");
            self.enter_animation();
        }
    }

    /// Samples the motion at the current clock time, then steps the clock.
    /// Returns `None` outside the animation scene.
    pub fn advance_frame(&mut self) -> Option<MotionSample> {
        if self.state != SceneState::Animation {
            return None;
        }
        let submission = self.submission?;
        let sample = sample_at(&submission.params, &submission.result, self.clock.elapsed_s);
        if self.clock.tick(submission.result.cycle_time()) {
            debug!("animation cycle complete");
        }
        Some(sample)
    }

    fn submit(&mut self, now_s: f64) {
        let params = self.form.current_values();
        match solve(params) {
            Ok(result) => {
                info!(
                    v0 = params.initial_velocity,
                    angle_deg = params.incline_angle_deg,
                    gravity = params.gravity,
                    max_distance = result.max_distance,
                    time_to_max = result.time_to_max,
                    "submission solved"
                );
                self.submission = Some(Submission { params, result });
                self.results_entered_at_s = now_s;
                self.status_line = None;
                self.state = SceneState::Results;
            }
            Err(err) => {
                warn!(%err, "submission rejected");
                self.status_line = Some(err.to_string());
            }
        }
    }

    fn enter_animation(&mut self) {
        self.clock.reset();
        self.state = SceneState::Animation;
        info!("animation started");
    }

    fn return_to_input(&mut self) {
        self.state = SceneState::Input;
        info!("returned to input");
    }
}
