//! Property tests for the workout formulas
//!
//! The formulas hold no state, so repeated evaluation must agree bit for bit
//! and distance must grow with the step count.

use fitstats::formulas::{calories_kcal, distance_km, mean_speed_kmh, summarize};
use fitstats::{Session, Workout};
use proptest::prelude::*;

fn session_strategy() -> impl Strategy<Value = Session> {
    (0u32..100_000, 0.1f64..5.0, 30.0f64..150.0).prop_map(|(action, duration_hours, weight_kg)| {
        Session {
            action,
            duration_hours,
            weight_kg,
        }
    })
}

fn workout_strategy() -> impl Strategy<Value = Workout> {
    prop_oneof![
        session_strategy().prop_map(|session| Workout::Running { session }),
        (session_strategy(), 120.0f64..220.0)
            .prop_map(|(session, height_cm)| Workout::Walking { session, height_cm }),
        (session_strategy(), 10.0f64..60.0, 0u32..400).prop_map(
            |(session, pool_length_m, pool_laps)| Workout::Swimming {
                session,
                pool_length_m,
                pool_laps,
            }
        ),
    ]
}

proptest! {
    #[test]
    fn formulas_are_idempotent(workout in workout_strategy()) {
        let first = summarize(&workout);
        let second = summarize(&workout);

        prop_assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
        prop_assert_eq!(first.mean_speed_kmh.to_bits(), second.mean_speed_kmh.to_bits());
        prop_assert_eq!(first.calories_kcal.to_bits(), second.calories_kcal.to_bits());
    }

    #[test]
    fn results_are_finite_for_positive_duration(workout in workout_strategy()) {
        prop_assert!(distance_km(&workout).is_finite());
        prop_assert!(mean_speed_kmh(&workout).is_finite());
        prop_assert!(calories_kcal(&workout).is_finite());
        prop_assert!(calories_kcal(&workout) >= 0.0);
    }

    #[test]
    fn running_distance_grows_with_steps(session in session_strategy(), extra in 1u32..10_000) {
        let shorter = Workout::Running { session };
        let longer = Workout::Running {
            session: Session { action: session.action + extra, ..session },
        };

        prop_assert!(distance_km(&longer) > distance_km(&shorter));
        prop_assert!(calories_kcal(&longer) > calories_kcal(&shorter));
    }
}
