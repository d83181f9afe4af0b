//! Workout history CSV normalizer
//!
//! The export is comma separated with a header on line 0. Fields are split on
//! raw commas; quoted fields are not unescaped.

use tracing::{debug, warn};

use super::record::WorkoutRecord;

type Setter = fn(&mut WorkoutRecord, &str);

/// Export columns in file order. Columns past the end of this table are
/// ignored; rows shorter than it leave the remaining fields at their defaults.
const COLUMNS: [(&str, Setter); 18] = [
    ("workout_timestamp", |r, v| r.workout_timestamp = v.to_string()),
    ("live", |r, v| r.live = v.to_string()),
    ("instructor_name", |r, v| r.instructor_name = v.to_string()),
    ("length", |r, v| set_int(&mut r.length, v)),
    ("fitness_discipline", |r, v| r.fitness_discipline = v.to_string()),
    ("type", |r, v| r.workout_type = v.to_string()),
    ("title", |r, v| r.title = v.to_string()),
    ("class_timestamp", |r, v| r.class_timestamp = v.to_string()),
    ("total_output", |r, v| set_int(&mut r.total_output, v)),
    ("avg_watts", |r, v| set_int(&mut r.avg_watts, v)),
    ("avg_resistance", |r, v| r.avg_resistance = v.to_string()),
    ("avg_cadence", |r, v| set_int(&mut r.avg_cadence, v)),
    ("avg_speed", |r, v| r.avg_speed = v.to_string()),
    ("distance", |r, v| r.distance = v.to_string()),
    ("calories_burned", |r, v| r.calories_burned = v.to_string()),
    ("avg_heartrate", |r, v| r.avg_heartrate = v.to_string()),
    ("avg_incline", |r, v| r.avg_incline = v.to_string()),
    ("avg_pace", |r, v| r.avg_pace = v.to_string()),
];

fn set_int(field: &mut i64, value: &str) {
    if let Ok(n) = value.parse() {
        *field = n;
    }
}

/// Counters collected while normalizing, for diagnostics
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NormalizeReport {
    /// Non-header lines looked at
    pub(crate) rows_seen: usize,
    /// Lines dropped because the first field was empty
    pub(crate) blank_rows: usize,
    /// Emitted rows that contained a quote character
    pub(crate) quoted_rows: usize,
}

pub(crate) fn normalize(raw: &[u8]) -> Vec<WorkoutRecord> {
    normalize_with_report(raw).0
}

pub(crate) fn normalize_with_report(raw: &[u8]) -> (Vec<WorkoutRecord>, NormalizeReport) {
    let text = String::from_utf8_lossy(raw);
    let mut report = NormalizeReport::default();
    let mut records = Vec::new();

    for (line_no, line) in text.lines().enumerate().skip(1) {
        report.rows_seen += 1;

        if line.is_empty() || line.starts_with(',') {
            report.blank_rows += 1;
            continue;
        }

        if line.contains('"') {
            report.quoted_rows += 1;
            warn!(
                line = line_no + 1,
                "row contains quotes, fields may be misaligned"
            );
        }

        let mut record = WorkoutRecord::default();
        for ((_, set), value) in COLUMNS.iter().zip(line.split(',')) {
            set(&mut record, value);
        }
        records.push(record);
    }

    debug!(
        rows = report.rows_seen,
        blank = report.blank_rows,
        emitted = records.len(),
        "normalized workout history"
    );

    (records, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Workout Timestamp,Live/On-Demand,Instructor Name,Length (minutes),Fitness Discipline,Type,Title,Class Timestamp,Total Output,Avg. Watts,Avg. Resistance,Avg. Cadence (RPM),Avg. Speed (mph),Distance (mi),Calories Burned,Avg. Heartrate,Avg. Incline,Avg. Pace (min/mi)";

    fn sample() -> String {
        format!(
            "{HEADER}\n\
             2020-01-01,true,Jane Doe,1800,Cycling,Class,Title,2020-01-01,150,200,50%,90,20mph,5mi,300,140,,\n\
             ,,,,,,,,,,,,,,,,,\n"
        )
    }

    #[test]
    fn end_to_end_example() {
        let records = normalize(sample().as_bytes());
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.workout_timestamp, "2020-01-01");
        assert_eq!(r.live, "true");
        assert_eq!(r.instructor_name, "Jane Doe");
        assert_eq!(r.length, 1800);
        assert_eq!(r.fitness_discipline, "Cycling");
        assert_eq!(r.workout_type, "Class");
        assert_eq!(r.title, "Title");
        assert_eq!(r.class_timestamp, "2020-01-01");
        assert_eq!(r.total_output, 150);
        assert_eq!(r.avg_watts, 200);
        assert_eq!(r.avg_resistance, "50%");
        assert_eq!(r.avg_cadence, 90);
        assert_eq!(r.avg_speed, "20mph");
        assert_eq!(r.distance, "5mi");
        assert_eq!(r.calories_burned, "300");
        assert_eq!(r.avg_heartrate, "140");
        assert_eq!(r.avg_incline, "");
        assert_eq!(r.avg_pace, "");
    }

    #[test]
    fn header_row_is_never_emitted() {
        // A header that looks like data must still be skipped
        let raw = "2019-12-31,false,Header Row,60,Cycling,Class,T,2019-12-31,1,1,1%,1,1,1,1,1,1,1\n\
                   2020-01-01,true,Jane Doe,1800,Cycling,Class,Title,2020-01-01,150,200,50%,90,20mph,5mi,300,140,,";
        let records = normalize(raw.as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].instructor_name, "Jane Doe");
    }

    #[test]
    fn header_only_and_empty_input_yield_nothing() {
        assert!(normalize(HEADER.as_bytes()).is_empty());
        assert!(normalize(b"").is_empty());
    }

    #[test]
    fn emitted_count_excludes_blank_first_field_rows() {
        let raw = format!(
            "{HEADER}\n\
             a,1\n\
             ,x,y\n\
             b,2\n\
             \n\
             ,,,\n\
             c,3\n"
        );
        let (records, report) = normalize_with_report(raw.as_bytes());
        assert_eq!(report.rows_seen, 6);
        assert_eq!(report.blank_rows, 3);
        assert_eq!(records.len(), report.rows_seen - report.blank_rows);

        let stamps: Vec<_> = records.iter().map(|r| r.workout_timestamp.as_str()).collect();
        assert_eq!(stamps, ["a", "b", "c"]);
    }

    #[test]
    fn bad_integer_leaves_field_zero_and_keeps_row() {
        let raw = format!(
            "{HEADER}\n2020-01-01,true,Jane Doe,thirty,Cycling,Class,Title,2020-01-01,--,200,50%,,20mph,5mi,300,140,1.5%,8:30\n"
        );
        let records = normalize(raw.as_bytes());
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.length, 0);
        assert_eq!(r.total_output, 0);
        assert_eq!(r.avg_cadence, 0);
        assert_eq!(r.avg_watts, 200);
        assert_eq!(r.fitness_discipline, "Cycling");
        assert_eq!(r.avg_resistance, "50%");
        assert_eq!(r.avg_incline, "1.5%");
        assert_eq!(r.avg_pace, "8:30");
    }

    #[test]
    fn short_rows_leave_trailing_fields_default() {
        let raw = format!("{HEADER}\n2020-01-01,false,Alex,1200\n");
        let records = normalize(raw.as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].length, 1200);
        assert_eq!(records[0].fitness_discipline, "");
        assert_eq!(records[0].total_output, 0);
        assert_eq!(records[0].avg_pace, "");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let raw = format!(
            "{HEADER}\n2020-01-01,true,Jane Doe,1800,Cycling,Class,Title,2020-01-01,150,200,50%,90,20mph,5mi,300,140,2%,9:00,extra,more\n"
        );
        let records = normalize(raw.as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].avg_pace, "9:00");
    }

    #[test]
    fn crlf_line_endings_do_not_leak_into_last_column() {
        let raw = format!(
            "{HEADER}\r\n2020-01-01,true,Jane Doe,1800,Cycling,Class,Title,2020-01-01,150,200,50%,90,20mph,5mi,300,140,2%,9:00\r\n\r\n"
        );
        let records = normalize(raw.as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].avg_pace, "9:00");
    }

    #[test]
    fn quoted_rows_are_counted_but_still_emitted() {
        let raw = format!("{HEADER}\n2020-01-01,true,\"Doe, Jane\",1800\n");
        let (records, report) = normalize_with_report(raw.as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(report.quoted_rows, 1);
        // Raw comma split: the quoted name spills into the next column
        assert_eq!(records[0].instructor_name, "\"Doe");
        assert_eq!(records[0].length, 0);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let mut raw = format!("{HEADER}\n").into_bytes();
        raw.extend_from_slice(b"2020-01-01,true,Jos\xe9,60\n");
        let records = normalize(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].instructor_name, "Jos\u{fffd}");
        assert_eq!(records[0].length, 60);
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = sample();
        assert_eq!(normalize(raw.as_bytes()), normalize(raw.as_bytes()));
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let records = normalize(sample().as_bytes());
        let json = serde_json::to_string_pretty(&records).unwrap();
        let decoded: Vec<WorkoutRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn column_table_matches_record_field_names() {
        let json = serde_json::to_value(WorkoutRecord::default()).unwrap();
        let object = json.as_object().unwrap();
        let names: Vec<_> = COLUMNS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), object.len());
        for name in names {
            assert!(object.contains_key(name), "missing field {name}");
        }
    }
}
