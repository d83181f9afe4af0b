use comfy_table::Cell;

use crate::output::format::{
    create_styled_table, format_duration, format_number, header_cell, right_cell,
};
use crate::workouts::WorkoutRecord;

const HEADERS: [&str; 9] = [
    "Date", "Discipline", "Title", "Instructor", "Length", "Output", "Watts", "Cadence",
    "Calories",
];

/// Render workouts as a table with a totals row
pub(crate) fn render_workout_table(records: &[WorkoutRecord], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(HEADERS.iter().map(|h| header_cell(h, use_color)));

    for r in records {
        table.add_row(vec![
            Cell::new(&r.workout_timestamp),
            Cell::new(&r.fitness_discipline),
            Cell::new(&r.title),
            Cell::new(&r.instructor_name),
            right_cell(&format_duration(r.length), false),
            right_cell(&format_number(r.total_output), false),
            right_cell(&format_number(r.avg_watts), false),
            right_cell(&format_number(r.avg_cadence), false),
            right_cell(&r.calories_burned, false),
        ]);
    }

    let total_length = records.iter().map(|r| r.length).fold(0, i64::saturating_add);
    let total_output = records
        .iter()
        .map(|r| r.total_output)
        .fold(0, i64::saturating_add);
    table.add_row(vec![
        Cell::new(format!("Total ({})", records.len())),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        right_cell(&format_duration(total_length), true),
        right_cell(&format_number(total_output), true),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
    ]);

    table.to_string()
}
