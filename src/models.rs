use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout types reported by the fitness tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    /// Every supported workout kind, in sensor-code order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::Walking,
        WorkoutKind::Swimming,
    ];

    /// Sensor code the tracker sends for this workout kind
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Resolve a sensor code. Codes are fixed literals, so matching is case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Name shown in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "Walking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional readings in a sensor package of this kind
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Readings shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Steps taken, or strokes for swimming
    pub action: u32,

    /// Duration in hours
    pub duration_hours: f64,

    /// Athlete body weight in kilograms
    pub weight_kg: f64,
}

/// Raw sensor readings for a single workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running {
        session: Session,
    },
    Walking {
        session: Session,
        /// Athlete height in centimeters
        height_cm: f64,
    },
    Swimming {
        session: Session,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths swum
        pool_laps: u32,
    },
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running { .. } => WorkoutKind::Running,
            Workout::Walking { .. } => WorkoutKind::Walking,
            Workout::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn session(&self) -> &Session {
        match self {
            Workout::Running { session }
            | Workout::Walking { session, .. }
            | Workout::Swimming { session, .. } => session,
        }
    }
}

/// Computed statistics for one workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    #[serde(rename = "type")]
    pub kind: WorkoutKind,

    /// Duration in hours
    pub duration_hours: f64,

    /// Distance covered in kilometers
    pub distance_km: f64,

    /// Average speed over the whole session in km/h
    pub mean_speed_kmh: f64,

    /// Estimated energy expenditure in kilocalories
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_codes_resolve() {
        assert_eq!(WorkoutKind::from_code("RUN"), Some(WorkoutKind::Running));
        assert_eq!(WorkoutKind::from_code("WLK"), Some(WorkoutKind::Walking));
        assert_eq!(WorkoutKind::from_code("SWM"), Some(WorkoutKind::Swimming));
        assert_eq!(WorkoutKind::from_code("run"), None);
        assert_eq!(WorkoutKind::from_code("XYZ"), None);
    }

    #[test]
    fn test_codes_round_trip() {
        for kind in WorkoutKind::ALL {
            assert_eq!(WorkoutKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_workout_accessors() {
        let session = Session {
            action: 720,
            duration_hours: 1.0,
            weight_kg: 80.0,
        };
        let workout = Workout::Swimming {
            session,
            pool_length_m: 25.0,
            pool_laps: 40,
        };

        assert_eq!(workout.kind(), WorkoutKind::Swimming);
        assert_eq!(workout.session().action, 720);
        assert_eq!(workout.kind().to_string(), "Swimming");
    }
}
