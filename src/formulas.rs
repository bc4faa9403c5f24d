//! Distance, speed and energy formulas for each workout kind
//!
//! Every function here is pure: the same workout always produces
//! bit-identical results. Values are kept at full `f64` precision and only
//! rounded when a report is rendered.

use crate::models::{Workout, WorkoutSummary};

/// Step length for running and walking, in meters
pub const STEP_LENGTH_M: f64 = 0.65;
/// Distance covered by one swimming stroke, in meters
pub const STROKE_LENGTH_M: f64 = 1.38;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 1.79;

pub const WALK_WEIGHT_COEFF: f64 = 0.035;
pub const WALK_SPEED_HEIGHT_COEFF: f64 = 0.029;
/// Conversion factor from km/h to m/s
pub const KMH_IN_MS: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance covered in kilometers, derived from the step or stroke count
pub fn distance_km(workout: &Workout) -> f64 {
    let step_length = match workout {
        Workout::Running { .. } | Workout::Walking { .. } => STEP_LENGTH_M,
        Workout::Swimming { .. } => STROKE_LENGTH_M,
    };

    f64::from(workout.session().action) * step_length / M_IN_KM
}

/// Mean speed over the whole session in km/h
///
/// Swimming speed comes from the pool laps rather than the stroke count.
pub fn mean_speed_kmh(workout: &Workout) -> f64 {
    match workout {
        Workout::Running { session } | Workout::Walking { session, .. } => {
            distance_km(workout) / session.duration_hours
        }
        Workout::Swimming {
            session,
            pool_length_m,
            pool_laps,
        } => pool_length_m * f64::from(*pool_laps) / M_IN_KM / session.duration_hours,
    }
}

/// Energy spent during the session in kilocalories
pub fn calories_kcal(workout: &Workout) -> f64 {
    let mean_speed = mean_speed_kmh(workout);

    match workout {
        Workout::Running { session } => {
            (RUN_SPEED_MULTIPLIER * mean_speed + RUN_SPEED_SHIFT) * session.weight_kg / M_IN_KM
                * session.duration_hours
                * MIN_IN_H
        }
        Workout::Walking { session, height_cm } => {
            let speed_ms = mean_speed * KMH_IN_MS;
            let height_m = height_cm / CM_IN_M;
            let duration_min = session.duration_hours * MIN_IN_H;

            (WALK_WEIGHT_COEFF * session.weight_kg
                + (speed_ms.powi(2) / height_m) * WALK_SPEED_HEIGHT_COEFF * session.weight_kg)
                * duration_min
        }
        Workout::Swimming { session, .. } => {
            (mean_speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * session.weight_kg
                * session.duration_hours
        }
    }
}

/// Compute every statistic for a workout
pub fn summarize(workout: &Workout) -> WorkoutSummary {
    WorkoutSummary {
        kind: workout.kind(),
        duration_hours: workout.session().duration_hours,
        distance_km: distance_km(workout),
        mean_speed_kmh: mean_speed_kmh(workout),
        calories_kcal: calories_kcal(workout),
    }
}
