use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::TaskRecord;

use super::COLUMNS;

/// Export tasks to a comma-delimited CSV file in list order.
///
/// Columns: Task, Start_Date, End_Date, Status, Remark. Dates are written
/// as YYYY-MM-DD. Returns the number of tasks written.
pub fn export_csv(tasks: &[TaskRecord], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    let count = export_to_writer(tasks, file)?;
    info!(path = %path.display(), tasks = count, "exported tasks to CSV");
    Ok(count)
}

pub fn export_to_writer<W: Write>(tasks: &[TaskRecord], writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;

    for task in tasks {
        let start = task.start.format("%Y-%m-%d").to_string();
        let end = task.end.format("%Y-%m-%d").to_string();
        wtr.write_record([
            task.name.as_str(),
            start.as_str(),
            end.as_str(),
            task.status.label(),
            task.remark.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(tasks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use chrono::NaiveDate;

    #[test]
    fn writes_header_and_rows_in_order() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        let tasks = vec![
            TaskRecord::new("Plan", day(1), day(3)).with_status(TaskStatus::Completed),
            TaskRecord::new("Build, test", day(4), day(20))
                .with_status(TaskStatus::InProgress)
                .with_remark("two teams"),
        ];
        let mut out = Vec::new();
        assert_eq!(export_to_writer(&tasks, &mut out).unwrap(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Task,Start_Date,End_Date,Status,Remark\n\
             Plan,2024-05-01,2024-05-03,Completed,\n\
             \"Build, test\",2024-05-04,2024-05-20,In Progress,two teams\n"
        );
    }
}
