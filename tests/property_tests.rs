//! Property tests for the incline solver, motion sampling and form parsing.

use incline_plane::core::form::{parse_numeric_field, value_or_default};
use incline_plane::core::kinematics::{KinematicParameters, sample_at, solve};
use incline_plane::core::scene::AnimationClock;
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = KinematicParameters> {
    (0.0f64..200.0, 0.5f64..179.5, 0.1f64..50.0).prop_map(|(v0, angle, g)| KinematicParameters {
        initial_velocity: v0,
        incline_angle_deg: angle,
        gravity: g,
    })
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

proptest! {
    /// Distance and time match the closed forms and are never negative.
    #[test]
    fn results_match_closed_forms(params in valid_params()) {
        let result = solve(params).expect("valid input should solve");
        let g_sin = params.gravity * params.incline_angle_deg.to_radians().sin();
        let v0 = params.initial_velocity;

        prop_assert!(close(result.max_distance, v0 * v0 / (2.0 * g_sin)));
        prop_assert!(close(result.time_to_max, v0 / g_sin));
        prop_assert!(result.max_distance >= 0.0);
        prop_assert!(result.time_to_max >= 0.0);
    }

    /// Frictionless motion returns at the launch speed.
    #[test]
    fn return_velocity_equals_initial_velocity(params in valid_params()) {
        let result = solve(params).expect("valid input should solve");
        prop_assert_eq!(result.return_velocity, params.initial_velocity);
    }

    /// Bottom at the start and end of a cycle, peak at time_to_max.
    #[test]
    fn position_hits_bottom_peak_bottom(params in valid_params()) {
        let result = solve(params).expect("valid input should solve");
        let tolerance = 1e-9 * result.max_distance.max(1.0);

        let start = sample_at(&params, &result, 0.0);
        let peak = sample_at(&params, &result, result.time_to_max);
        let end = sample_at(&params, &result, result.cycle_time());

        prop_assert!(start.displacement_m.abs() <= tolerance);
        prop_assert!((peak.displacement_m - result.max_distance).abs() <= tolerance);
        prop_assert!(end.displacement_m.abs() <= tolerance);
    }

    /// Position stays within [0, max_distance] for any time in the cycle.
    #[test]
    fn position_stays_on_incline(params in valid_params(), fraction in 0.0f64..=1.0) {
        let result = solve(params).expect("valid input should solve");
        let sample = sample_at(&params, &result, fraction * result.cycle_time());
        prop_assert!(sample.displacement_m >= 0.0);
        prop_assert!(sample.displacement_m <= result.max_distance * (1.0 + 1e-9) + 1e-12);
        prop_assert!(sample.speed_mps.is_finite());
    }

    /// Solving is a pure function of its inputs.
    #[test]
    fn solving_twice_is_identical(params in valid_params()) {
        prop_assert_eq!(solve(params), solve(params));
    }

    /// Text containing a letter never parses and always degrades to zero.
    #[test]
    fn lettered_text_defaults_to_zero(text in "[0-9.]{0,4}[a-dA-D][0-9a-z.]{0,4}") {
        prop_assert!(parse_numeric_field(&text).is_err());
        prop_assert_eq!(value_or_default(parse_numeric_field(&text)), 0.0);
    }

    /// The clock never reports a time at or beyond the cycle length.
    #[test]
    fn clock_stays_inside_cycle(cycle in 0.0f64..5.0, frames in 0usize..1000) {
        let mut clock = AnimationClock::new();
        for _ in 0..frames {
            clock.tick(cycle);
            prop_assert!(clock.elapsed_s < cycle || clock.elapsed_s == 0.0);
        }
    }
}
