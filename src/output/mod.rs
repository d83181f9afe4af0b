mod format;
mod json;
mod table;

pub(crate) use json::to_pretty_json;
pub(crate) use table::render_workout_table;
