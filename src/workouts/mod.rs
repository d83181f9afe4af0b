//! Workout history records
//!
//! Converts the upstream CSV export into typed `WorkoutRecord`s.

mod normalize;
mod record;

pub(crate) use normalize::{normalize, normalize_with_report};
pub(crate) use record::WorkoutRecord;
