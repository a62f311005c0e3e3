use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Workflow state of a task. The four named states form the status
/// vocabulary; anything else read from a CSV file is carried through as
/// `Other` and left for the renderer to color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Completed,
    TargetGoLive,
    Other(String),
}

impl TaskStatus {
    /// The four vocabulary states, in legend order.
    pub fn all() -> &'static [TaskStatus] {
        &[
            TaskStatus::ToDo,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::TargetGoLive,
        ]
    }

    /// Exact vocabulary string, as written to CSV and shown in the legend.
    pub fn label(&self) -> &str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::TargetGoLive => "Target Go Live",
            TaskStatus::Other(s) => s,
        }
    }

    /// Parse a status string. Returns `None` for empty input.
    pub fn parse(s: &str) -> Option<TaskStatus> {
        let s = s.trim();
        let status = match s {
            "" => return None,
            "To Do" => TaskStatus::ToDo,
            "In Progress" => TaskStatus::InProgress,
            "Completed" => TaskStatus::Completed,
            "Target Go Live" => TaskStatus::TargetGoLive,
            other => TaskStatus::Other(other.to_string()),
        };
        Some(status)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single task in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub start: NaiveDate,
    /// May equal `start`; nothing requires it to be after `start`.
    pub end: NaiveDate,
    pub status: TaskStatus,
    /// Free text, empty when absent.
    pub remark: String,
}

impl TaskRecord {
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            status: TaskStatus::default(),
            remark: String::new(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }
}

/// Form contents for a task being added or edited. Fields stay optional
/// until `validate` turns the draft into a `TaskRecord`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub remark: String,
}

impl TaskDraft {
    /// Pre-fill a draft from an existing record (used by "Edit").
    pub fn from_record(record: &TaskRecord) -> Self {
        Self {
            name: record.name.clone(),
            start: Some(record.start),
            end: Some(record.end),
            status: Some(record.status.clone()),
            remark: record.remark.clone(),
        }
    }

    /// Check required fields and build the record. Name, start, end and
    /// status are required; remark is not.
    pub fn validate(&self) -> Result<TaskRecord> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Task Name".to_string()));
        }
        let start = self
            .start
            .ok_or_else(|| Error::Validation("Start Date".to_string()))?;
        let end = self
            .end
            .ok_or_else(|| Error::Validation("End Date".to_string()))?;
        let status = self
            .status
            .clone()
            .ok_or_else(|| Error::Validation("Status".to_string()))?;

        Ok(TaskRecord {
            name: name.to_string(),
            start,
            end,
            status,
            remark: self.remark.clone(),
        })
    }
}
