//! Turn raw sensor packages into workouts
//!
//! A sensor package is a workout code plus positional readings. The code
//! selects a constructor, which checks the field count and field types before
//! building the matching `Workout` variant.

use crate::error::PackageError;
use crate::formulas;
use crate::models::{Session, Workout, WorkoutKind, WorkoutSummary};

type Constructor = fn(&[f64]) -> Result<Workout, PackageError>;

/// Sensor package as reported by the tracker
#[derive(Debug, Clone, PartialEq)]
pub struct SensorPackage {
    pub code: String,
    pub fields: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, fields: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            fields: fields.into(),
        }
    }
}

impl WorkoutKind {
    fn constructor(self) -> Constructor {
        match self {
            WorkoutKind::Running => build_running,
            WorkoutKind::Walking => build_walking,
            WorkoutKind::Swimming => build_swimming,
        }
    }
}

/// Build a workout from a sensor code and its positional readings
pub fn read_package(code: &str, fields: &[f64]) -> Result<Workout, PackageError> {
    let kind = WorkoutKind::from_code(code).ok_or_else(|| PackageError::UnknownWorkoutType {
        code: code.to_string(),
    })?;

    (kind.constructor())(fields)
}

/// Build a workout and compute its statistics in one step
pub fn summarize_package(code: &str, fields: &[f64]) -> Result<WorkoutSummary, PackageError> {
    let workout = read_package(code, fields).inspect_err(|err| {
        tracing::warn!(code, fields = ?fields, error = %err, "Rejected sensor package");
    })?;

    let summary = formulas::summarize(&workout);
    tracing::debug!(
        kind = %summary.kind,
        distance_km = summary.distance_km,
        mean_speed_kmh = summary.mean_speed_kmh,
        calories_kcal = summary.calories_kcal,
        "Computed workout summary"
    );

    Ok(summary)
}

fn build_running(fields: &[f64]) -> Result<Workout, PackageError> {
    let fields = expect_fields::<3>(WorkoutKind::Running, fields)?;
    Ok(Workout::Running {
        session: session(WorkoutKind::Running, &fields)?,
    })
}

fn build_walking(fields: &[f64]) -> Result<Workout, PackageError> {
    let kind = WorkoutKind::Walking;
    let fields = expect_fields::<4>(kind, fields)?;
    Ok(Workout::Walking {
        session: session(kind, &fields)?,
        height_cm: measurement(kind, "height", fields[3])?,
    })
}

fn build_swimming(fields: &[f64]) -> Result<Workout, PackageError> {
    let kind = WorkoutKind::Swimming;
    let fields = expect_fields::<5>(kind, fields)?;
    Ok(Workout::Swimming {
        session: session(kind, &fields)?,
        pool_length_m: measurement(kind, "pool length", fields[3])?,
        pool_laps: count(kind, "pool laps", fields[4])?,
    })
}

fn expect_fields<const N: usize>(
    kind: WorkoutKind,
    fields: &[f64],
) -> Result<[f64; N], PackageError> {
    debug_assert_eq!(kind.field_count(), N);

    <[f64; N]>::try_from(fields).map_err(|_| {
        PackageError::malformed(kind, format!("expected {} fields, got {}", N, fields.len()))
    })
}

fn session(kind: WorkoutKind, fields: &[f64]) -> Result<Session, PackageError> {
    Ok(Session {
        action: count(kind, "action", fields[0])?,
        duration_hours: measurement(kind, "duration", fields[1])?,
        weight_kg: measurement(kind, "weight", fields[2])?,
    })
}

/// Readings such as step or lap counts must be whole, non-negative numbers
fn count(kind: WorkoutKind, field: &str, value: f64) -> Result<u32, PackageError> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(PackageError::malformed(
            kind,
            format!("{} must be a whole non-negative number, got {}", field, value),
        ));
    }

    Ok(value as u32)
}

fn measurement(kind: WorkoutKind, field: &str, value: f64) -> Result<f64, PackageError> {
    if !value.is_finite() {
        return Err(PackageError::malformed(
            kind,
            format!("{} must be a finite number, got {}", field, value),
        ));
    }

    Ok(value)
}
