use serde::{Deserialize, Serialize};

/// One row of the workout history export.
///
/// Field order and JSON names follow the export's column order. Integer
/// columns that fail to parse stay at 0.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WorkoutRecord {
    pub(crate) workout_timestamp: String,
    /// "true"/"false" as exported; kept as text.
    pub(crate) live: String,
    pub(crate) instructor_name: String,
    /// Class length in seconds
    pub(crate) length: i64,
    pub(crate) fitness_discipline: String,
    #[serde(rename = "type")]
    pub(crate) workout_type: String,
    pub(crate) title: String,
    pub(crate) class_timestamp: String,
    pub(crate) total_output: i64,
    pub(crate) avg_watts: i64,
    pub(crate) avg_resistance: String,
    pub(crate) avg_cadence: i64,
    pub(crate) avg_speed: String,
    pub(crate) distance: String,
    pub(crate) calories_burned: String,
    pub(crate) avg_heartrate: String,
    pub(crate) avg_incline: String,
    pub(crate) avg_pace: String,
}
