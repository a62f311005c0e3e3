use std::io::Write;

use chrono::NaiveDate;
use gantt_chart_maker::io::{export_csv, import_csv};
use gantt_chart_maker::layout::{build_chart, LayoutOptions};
use gantt_chart_maker::{Error, TaskRecord, TaskStatus, TaskStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn export_then_import_keeps_every_field() {
    let tasks = vec![
        TaskRecord::new("Kickoff, all hands", date(2024, 1, 2), date(2024, 1, 2))
            .with_status(TaskStatus::Completed)
            .with_remark("room \"B\""),
        TaskRecord::new("Build", date(2024, 1, 3), date(2024, 2, 28))
            .with_status(TaskStatus::InProgress),
        TaskRecord::new("Vendor sign-off", date(2024, 3, 1), date(2024, 3, 4))
            .with_status(TaskStatus::Other("Blocked".to_string()))
            .with_remark("waiting on legal"),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.csv");
    assert_eq!(export_csv(&tasks, &path).unwrap(), 3);

    let header = std::fs::read_to_string(&path).unwrap();
    assert!(header.starts_with("Task,Start_Date,End_Date,Status,Remark"));

    let outcome = import_csv(&path).unwrap();
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.tasks, tasks);
}

#[test]
fn padded_name_and_remark_survive_a_round_trip() {
    let tasks = vec![
        TaskRecord::new("  Design ", date(2024, 1, 2), date(2024, 1, 9))
            .with_status(TaskStatus::InProgress)
            .with_remark("  indented note "),
        TaskRecord::new("Build", date(2024, 1, 10), date(2024, 1, 31)).with_remark(" "),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("padded.csv");
    export_csv(&tasks, &path).unwrap();

    let outcome = import_csv(&path).unwrap();
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.tasks, tasks);
}

#[test]
fn last_calendar_day_imports_but_does_not_crash_the_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "far_future.csv",
        "Task,Start_Date,End_Date,Status,Remark\n\
         Heat death,+262142-12-31,+262142-12-31,To Do,\n",
    );

    let outcome = import_csv(&path).unwrap();
    assert_eq!(outcome.tasks[0].start, NaiveDate::MAX);

    let result = build_chart(&outcome.tasks, &LayoutOptions::default());
    assert!(matches!(result, Err(Error::DateOutOfRange(ref name)) if name == "Heat death"));
}

#[test]
fn failed_import_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "bad.csv",
        "Task,Start_Date,End_Date,Status,Remark\n\
         Design,2024-01-01,2024-01-05,To Do,\n\
         Build,someday,2024-02-01,To Do,\n",
    );

    let original = vec![TaskRecord::new("Existing", date(2024, 5, 1), date(2024, 5, 2))];
    let mut store = TaskStore::from_tasks(original.clone());

    match import_csv(&path) {
        Ok(outcome) => store.replace_all(outcome.tasks),
        Err(e) => assert!(matches!(e, Error::ImportFailure(_))),
    }
    assert_eq!(store.tasks(), original.as_slice());
}

#[test]
fn missing_column_is_named() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "no_remark.csv",
        "Task,Start_Date,End_Date,Status\nDesign,2024-01-01,2024-01-05,To Do\n",
    );
    match import_csv(&path) {
        Err(Error::MissingColumn(column)) => assert_eq!(column, "Remark"),
        other => panic!("expected missing column, got {:?}", other.map(|o| o.tasks)),
    }
}

#[test]
fn missing_file_is_an_import_failure() {
    let dir = tempfile::tempdir().unwrap();
    let result = import_csv(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(Error::ImportFailure(_))));
}
