//! Read-side pipeline: decode extracted CSV trees for consumers.
//!
//! Walks an extracted directory tree and rewrites each known record file
//! into a mirrored output tree. Duration-string columns gain a
//! `<Name>Seconds` numeric column (the original string is kept for audit);
//! numeric-seconds and ISO-instant columns are validated and
//! canonicalized in place. The visualization layer only ever reads the
//! numeric-seconds columns; it never needs to know which of the string
//! shapes a value came from.
//!
//! All cells are read as raw strings; nothing here sniffs types. Row order
//! is preserved exactly and every cell transformation is independent, so a
//! corrupt field blanks its own cell and nothing else.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::codec::{decode_duration, decode_instant, decode_numeric_seconds};
use crate::routing::{ColumnRoute, ReadRule, RecordFile, route_for};
use crate::{Result, TimingError};

/// Outcome for one file of a transform pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// File rewritten with `columns` routed columns applied.
    Transformed { columns: usize, rows: usize },
    /// Known or unknown file without any registered columns; nothing to
    /// do, no output written. Distinguishable from an empty input.
    NoRoutedColumns,
    /// File skipped due to a file-level problem; the pass continued.
    Skipped { reason: String },
}

/// Report for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: FileOutcome,
}

/// Report for a whole transform pass.
#[derive(Debug, Clone, Default)]
pub struct TransformSummary {
    pub files: Vec<FileReport>,
}

impl TransformSummary {
    /// Number of files rewritten.
    pub fn transformed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Transformed { .. }))
            .count()
    }

    /// Number of files skipped on file-level errors.
    pub fn skipped(&self) -> usize {
        self.files.iter().filter(|f| matches!(f.outcome, FileOutcome::Skipped { .. })).count()
    }
}

/// Transform every CSV under `input_root` into a mirrored tree under
/// `output_root`.
pub fn transform_tree(input_root: &Path, output_root: &Path) -> Result<TransformSummary> {
    if !input_root.is_dir() {
        return Err(TimingError::file_error(
            input_root.to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "input directory does not exist"),
        ));
    }

    info!(
        input = %input_root.display(),
        output = %output_root.display(),
        "starting transform pass"
    );

    let mut summary = TransformSummary::default();

    for entry in WalkDir::new(input_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "unreadable directory entry; continuing");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some("csv")
        {
            continue;
        }

        let Some(file) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(RecordFile::from_file_name)
        else {
            debug!(path = %path.display(), "not a known record file; left untransformed");
            summary.files.push(FileReport {
                input: path.to_path_buf(),
                outcome: FileOutcome::NoRoutedColumns,
            });
            continue;
        };

        // strip_prefix cannot fail for entries walked from input_root.
        let relative = path.strip_prefix(input_root).unwrap_or(path);
        let output = output_root.join(relative);

        let outcome = match transform_file(path, &output, file) {
            Ok(outcome) => outcome,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                warn!(path = %path.display(), %err, "file skipped");
                FileOutcome::Skipped { reason: err.to_string() }
            }
        };

        match &outcome {
            FileOutcome::Transformed { columns, rows } => {
                info!(path = %output.display(), columns, rows, "file transformed");
            }
            FileOutcome::NoRoutedColumns => {
                info!(path = %path.display(), "no registered columns; skipping save");
            }
            FileOutcome::Skipped { .. } => {}
        }

        summary.files.push(FileReport { input: path.to_path_buf(), outcome });
    }

    info!(
        transformed = summary.transformed(),
        skipped = summary.skipped(),
        total = summary.files.len(),
        "transform pass finished"
    );

    Ok(summary)
}

/// Transform a single record file.
pub fn transform_file(input: &Path, output: &Path, file: RecordFile) -> Result<FileOutcome> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(input)
        .map_err(|e| TimingError::csv_error(input.to_path_buf(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| TimingError::csv_error(input.to_path_buf(), e))?
        .clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(TimingError::parse_error(
            format!("transform of {}", input.display()),
            "file is empty",
        ));
    }

    // Columns present in this file that the routing table registers.
    let routed: Vec<(usize, &'static ColumnRoute)> = headers
        .iter()
        .enumerate()
        .filter_map(|(index, name)| route_for(file, name).map(|route| (index, route)))
        .collect();

    if routed.is_empty() {
        return Ok(FileOutcome::NoRoutedColumns);
    }

    // Duration-string columns get an appended `<Name>Seconds` column; the
    // numeric and ISO rules rewrite their own cell.
    let appended: Vec<(usize, &'static ColumnRoute)> = routed
        .iter()
        .copied()
        .filter(|(_, route)| route.read == ReadRule::DurationString)
        .collect();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| TimingError::output_setup(parent.to_path_buf(), e))?;
    }
    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| TimingError::csv_error(output.to_path_buf(), e))?;

    let mut out_headers: Vec<String> = headers.iter().map(str::to_string).collect();
    for (_, route) in &appended {
        out_headers.push(format!("{}Seconds", route.column));
    }
    writer
        .write_record(&out_headers)
        .map_err(|e| TimingError::csv_error(output.to_path_buf(), e))?;

    let mut rows = 0_usize;
    for record in reader.records() {
        let record = record.map_err(|e| TimingError::csv_error(input.to_path_buf(), e))?;
        let mut cells: Vec<String> =
            (0..headers.len()).map(|i| record.get(i).unwrap_or("").to_string()).collect();

        for (index, route) in &routed {
            match route.read {
                ReadRule::DurationString => {}
                ReadRule::NumericSeconds => {
                    cells[*index] = decode_numeric_seconds(&cells[*index])
                        .map(|span| span.as_secs_f64().to_string())
                        .unwrap_or_default();
                }
                ReadRule::IsoInstant => {
                    cells[*index] = decode_instant(&cells[*index])
                        .map(|instant| instant.canonical())
                        .unwrap_or_default();
                }
            }
        }
        for (index, _) in &appended {
            let seconds = decode_duration(&cells[*index])
                .map(|span| span.as_secs_f64().to_string())
                .unwrap_or_default();
            cells.push(seconds);
        }

        writer.write_record(&cells).map_err(|e| TimingError::csv_error(output.to_path_buf(), e))?;
        rows += 1;
    }

    writer.flush().map_err(|e| TimingError::file_error(output.to_path_buf(), e))?;

    Ok(FileOutcome::Transformed { columns: routed.len(), rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn appends_seconds_columns_for_duration_strings() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in/2024/E/Q/laps_data.csv");
        let output = dir.path().join("out/laps_data.csv");
        write(
            &input,
            "Driver,LapTime,Sector1Time\nVER,01:18:241,00:26:103\nLEC,,00:27:000\n",
        );

        let outcome = transform_file(&input, &output, RecordFile::LapsData).unwrap();
        assert_eq!(outcome, FileOutcome::Transformed { columns: 2, rows: 2 });

        let contents = std::fs::read_to_string(&output).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Driver,LapTime,Sector1Time,LapTimeSeconds,Sector1TimeSeconds"
        );
        assert_eq!(lines.next().unwrap(), "VER,01:18:241,00:26:103,78.241,26.103");
        // Missing stays missing; the original cell is preserved for audit.
        assert_eq!(lines.next().unwrap(), "LEC,,00:27:000,,27");
    }

    #[test]
    fn corrupt_cells_blank_only_themselves() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("laps_data.csv");
        let output = dir.path().join("out.csv");
        write(&input, "LapTime\n01:18:241\nnot-a-time\n01:20:000\n");

        transform_file(&input, &output, RecordFile::LapsData).unwrap();
        let contents = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[1], "01:18:241,78.241");
        assert_eq!(lines[2], "not-a-time,");
        assert_eq!(lines[3], "01:20:000,80");
    }

    #[test]
    fn numeric_and_iso_columns_rewrite_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let results = dir.path().join("session_results.csv");
        let results_out = dir.path().join("out_results.csv");
        write(&results, "Abbreviation,Interval\nVER,\nLEC,1.234\nSAI,junk\n");

        transform_file(&results, &results_out, RecordFile::SessionResults).unwrap();
        let contents = std::fs::read_to_string(&results_out).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "Abbreviation,Interval");
        assert_eq!(lines[1], "VER,");
        assert_eq!(lines[2], "LEC,1.234");
        assert_eq!(lines[3], "SAI,");

        let event = dir.path().join("event_info.csv");
        let event_out = dir.path().join("out_event.csv");
        write(
            &event,
            "Year,SessionStartDateLocalISO\n2024,2024-05-26T14:00:00+02:00\n2024,garbage\n",
        );
        transform_file(&event, &event_out, RecordFile::EventInfo).unwrap();
        let contents = std::fs::read_to_string(&event_out).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[1], "2024,2024-05-26T14:00:00+02:00");
        assert_eq!(lines[2], "2024,");
    }

    #[test]
    fn file_without_registered_columns_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tyre_stints_summary.csv");
        let output = dir.path().join("out.csv");
        write(&input, "Driver,Compound\nVER,SOFT\n");

        let outcome = transform_file(&input, &output, RecordFile::TyreStints).unwrap();
        assert_eq!(outcome, FileOutcome::NoRoutedColumns);
        assert!(!output.exists());
    }

    #[test]
    fn tree_walk_reports_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let input_root = dir.path().join("in");
        let output_root = dir.path().join("out");

        write(
            &input_root.join("2024/Monaco_Grand_Prix/Race/laps_data.csv"),
            "LapTime\n01:18:241\n",
        );
        // Empty file: skipped with a warning, pass continues.
        write(&input_root.join("2024/Monaco_Grand_Prix/Race/weather_data.csv"), "");
        write(&input_root.join("2024/Monaco_Grand_Prix/Race/notes.csv"), "a,b\n1,2\n");

        let summary = transform_tree(&input_root, &output_root).unwrap();
        assert_eq!(summary.files.len(), 3);
        assert_eq!(summary.transformed(), 1);
        assert_eq!(summary.skipped(), 1);
        assert!(output_root.join("2024/Monaco_Grand_Prix/Race/laps_data.csv").exists());
        assert!(!output_root.join("2024/Monaco_Grand_Prix/Race/notes.csv").exists());
    }

    #[test]
    fn missing_input_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = transform_tree(&dir.path().join("nope"), &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, TimingError::File { .. }));
    }
}
