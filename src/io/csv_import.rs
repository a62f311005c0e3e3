use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::{TaskRecord, TaskStatus};

use super::COLUMNS;

/// Tasks read from a CSV file, plus how many rows were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub tasks: Vec<TaskRecord>,
    pub skipped: usize,
}

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // Spreadsheet exports often carry a midnight timestamp.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Detect delimiter by checking the header line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if commas >= semicolons && commas >= tabs {
        b','
    } else if semicolons >= tabs {
        b';'
    } else {
        b'\t'
    }
}

fn failure(e: impl std::fmt::Display) -> Error {
    Error::ImportFailure(e.to_string())
}

/// Import tasks from a CSV file.
///
/// The file is read completely before anything is returned, so a failed
/// import never leaves a half-filled task list behind.
pub fn import_csv(path: &Path) -> Result<ImportOutcome> {
    let file = std::fs::File::open(path).map_err(failure)?;
    let outcome = import_from_reader(file)?;
    info!(
        path = %path.display(),
        tasks = outcome.tasks.len(),
        skipped = outcome.skipped,
        "imported tasks from CSV"
    );
    Ok(outcome)
}

/// Import tasks from any reader producing CSV text.
///
/// Requires the columns `Task`, `Start_Date`, `End_Date`, `Status` and
/// `Remark` (in any order; extra columns are ignored). Header names are
/// trimmed; task names and remarks are kept exactly as written. Rows with an
/// empty task, date or status are skipped. A date that is present but cannot be
/// parsed aborts the whole import.
pub fn import_from_reader<R: Read>(mut reader: R) -> Result<ImportOutcome> {
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(failure)?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(failure)?.clone();

    // Position of each required column in the file, in COLUMNS order.
    let mut positions = [0usize; 5];
    for (slot, column) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))?;
    }
    let [task_col, start_col, end_col, status_col, remark_col] = positions;

    let mut tasks = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let line = i + 2;
        let record = result.map_err(failure)?;
        // Name and remark are kept as written; the other fields are trimmed.
        let field = |col: usize| record.get(col).unwrap_or("");

        let name = field(task_col);
        let start = field(start_col).trim();
        let end = field(end_col).trim();
        let status = TaskStatus::parse(field(status_col));

        let status = match status {
            Some(s) if !name.trim().is_empty() && !start.is_empty() && !end.is_empty() => s,
            _ => {
                warn!(line, "skipping CSV row with an empty task, date or status");
                skipped += 1;
                continue;
            }
        };

        let start = parse_date(start).ok_or_else(|| {
            Error::ImportFailure(format!("row {}: invalid start date '{}'", line, start))
        })?;
        let end = parse_date(end).ok_or_else(|| {
            Error::ImportFailure(format!("row {}: invalid end date '{}'", line, end))
        })?;

        tasks.push(TaskRecord {
            name: name.to_string(),
            start,
            end,
            status,
            remark: field(remark_col).to_string(),
        });
    }

    Ok(ImportOutcome { tasks, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn import(text: &str) -> Result<ImportOutcome> {
        import_from_reader(text.as_bytes())
    }

    #[test]
    fn reads_all_five_columns() {
        let outcome = import(
            "Task,Start_Date,End_Date,Status,Remark\n\
             Kickoff,2024-01-01,2024-01-01,Completed,\n\
             Backend,2024-01-02,2024-01-20,In Progress,\"blocked on API, see ticket\"\n",
        )
        .unwrap();
        assert_eq!(outcome.skipped, 0);
        assert_eq!(
            outcome.tasks,
            vec![
                TaskRecord::new("Kickoff", date(2024, 1, 1), date(2024, 1, 1))
                    .with_status(TaskStatus::Completed),
                TaskRecord::new("Backend", date(2024, 1, 2), date(2024, 1, 20))
                    .with_status(TaskStatus::InProgress)
                    .with_remark("blocked on API, see ticket"),
            ]
        );
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let outcome = import(
            "Owner,Remark,Status,End_Date,Start_Date,Task\n\
             ana,,To Do,2024-02-10,2024-02-01,Design\n",
        )
        .unwrap();
        assert_eq!(outcome.tasks[0].name, "Design");
        assert_eq!(outcome.tasks[0].start, date(2024, 2, 1));
        assert_eq!(outcome.tasks[0].status, TaskStatus::ToDo);
    }

    #[test]
    fn first_missing_column_is_named() {
        let err = import("Task,Start_Date,Status,Remark\nA,2024-01-01,To Do,\n").unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "End_Date"));

        let err = import("Task,Start_Date,End_Date,Status\n").unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "Remark"));
    }

    #[test]
    fn rows_with_empty_required_fields_are_skipped() {
        let outcome = import(
            "Task,Start_Date,End_Date,Status,Remark\n\
             ,2024-01-01,2024-01-02,To Do,\n\
             A,,2024-01-02,To Do,\n\
             B,2024-01-01,,To Do,\n\
             C,2024-01-01,2024-01-02,,\n\
             D,2024-01-01,2024-01-02,To Do\n",
        )
        .unwrap();
        assert_eq!(outcome.skipped, 4);
        assert_eq!(outcome.tasks.len(), 1);
        assert_eq!(outcome.tasks[0].name, "D");
        assert_eq!(outcome.tasks[0].remark, "");
    }

    #[test]
    fn unparseable_date_aborts_import() {
        let err = import(
            "Task,Start_Date,End_Date,Status,Remark\n\
             A,2024-01-01,2024-01-02,To Do,\n\
             B,soon,2024-01-02,To Do,\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::ImportFailure(ref m) if m.contains("row 3")));
    }

    #[test]
    fn unknown_status_is_carried_through() {
        let outcome = import(
            "Task,Start_Date,End_Date,Status,Remark\n\
             A,2024-01-01,2024-01-02,Blocked,\n",
        )
        .unwrap();
        assert_eq!(outcome.tasks[0].status, TaskStatus::Other("Blocked".to_string()));
    }

    #[test]
    fn accepts_common_date_formats() {
        assert_eq!(parse_date("2024-03-05"), Some(date(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05 00:00:00"), Some(date(2024, 3, 5)));
        assert_eq!(parse_date("2024/03/05"), Some(date(2024, 3, 5)));
        assert_eq!(parse_date("25/03/2024"), Some(date(2024, 3, 25)));
        assert_eq!(parse_date("05.03.2024"), Some(date(2024, 3, 5)));
        assert_eq!(parse_date("March"), None);
    }

    #[test]
    fn semicolon_files_are_detected() {
        let outcome = import(
            "Task;Start_Date;End_Date;Status;Remark\n\
             A;2024-01-01;2024-01-02;To Do;ok\n",
        )
        .unwrap();
        assert_eq!(outcome.tasks[0].remark, "ok");
    }

    #[test]
    fn name_and_remark_whitespace_is_kept() {
        let outcome = import(
            "Task , Start_Date,End_Date,Status,Remark\n\
             \"  Design \", 2024-01-01 ,2024-01-02, To Do ,\"  indented note \"\n\
             \"   \",2024-01-01,2024-01-02,To Do,\n",
        )
        .unwrap();
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.tasks[0].name, "  Design ");
        assert_eq!(outcome.tasks[0].remark, "  indented note ");
        assert_eq!(outcome.tasks[0].start, date(2024, 1, 1));
        assert_eq!(outcome.tasks[0].status, TaskStatus::ToDo);
    }
}
