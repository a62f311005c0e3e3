//! Timeline layout: turns an ordered task list into a renderer-ready
//! [`ChartModel`].
//!
//! A model is rebuilt from scratch on every generation and never updated in
//! place.

pub mod axis;
pub mod label;
pub mod palette;

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{TaskRecord, TaskStatus};

pub use axis::AxisRange;
pub use label::{truncate_bar_label, LabelTier};

/// Zero-length bars are stretched by this much so they stay visible.
const MIN_VISIBLE_DAYS: i64 = 2;

/// Left gutter width, in pixels, for each row label variant.
pub const LEFT_MARGIN_FULL: u32 = 350;
pub const LEFT_MARGIN_COMPACT: u32 = 200;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-request layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Show each task's date range next to its name in the row labels.
    pub show_date_range: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            show_date_range: true,
        }
    }
}

/// One task's derived rendering data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub name: String,
    pub start: NaiveDate,
    /// The task's own end date, as entered.
    pub end: NaiveDate,
    /// End date used for the bar; see [`display_end`].
    pub display_end: NaiveDate,
    pub duration_days: i64,
    pub bar_label: String,
    /// `<b>name</b> | start - end`, using the entered end date.
    pub row_label_full: String,
    /// `<b>name</b>`
    pub row_label_compact: String,
    pub remark: String,
    /// Remark as emphasized red markup, or empty when there is no remark.
    pub tooltip: String,
    pub color_key: TaskStatus,
}

impl RenderRow {
    /// The ` | start - end` part of the full row label.
    pub fn date_range(&self) -> String {
        date_range_suffix(self.start, self.end)
    }

    /// Name, drawn span and status, one per line.
    pub fn hover_summary(&self) -> String {
        format!(
            "{}\n{} to {}\nStatus: {}",
            self.name,
            self.start.format(DATE_FORMAT),
            self.display_end.format(DATE_FORMAT),
            self.color_key
        )
    }

    /// Plain-text hover text: the summary plus the remark, if any.
    pub fn hover_text(&self) -> String {
        if self.remark.is_empty() {
            self.hover_summary()
        } else {
            format!("{}\nRemark: {}", self.hover_summary(), self.remark)
        }
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartModel {
    /// Top-to-bottom order: the first task in the list is the last row.
    pub rows: Vec<RenderRow>,
    pub axis_start: NaiveDate,
    pub axis_end: NaiveDate,
    /// Month starts in `[axis_start, axis_end)`.
    pub month_gridlines: Vec<NaiveDate>,
    pub use_compact_labels: bool,
    pub left_margin_hint: u32,
}

impl ChartModel {
    /// The row label variant chosen for the whole chart.
    pub fn row_label<'a>(&self, row: &'a RenderRow) -> &'a str {
        if self.use_compact_labels {
            &row.row_label_compact
        } else {
            &row.row_label_full
        }
    }

    pub fn axis(&self) -> AxisRange {
        AxisRange {
            start: self.axis_start,
            end: self.axis_end,
        }
    }
}

/// End date used to draw a task's bar.
///
/// A task that ends on (or before) its start day would be a zero-width bar,
/// so it is drawn as lasting two days from its start. Returns `None` when
/// that stretch runs past the last representable date.
pub fn display_end(start: NaiveDate, end: NaiveDate) -> Option<NaiveDate> {
    if end > start {
        Some(end)
    } else {
        if end < start {
            debug!(%start, %end, "inverted date range drawn as a short bar");
        }
        start.checked_add_signed(Duration::days(MIN_VISIBLE_DAYS))
    }
}

/// ` | start - end` suffix of a full row label, using the entered dates.
fn date_range_suffix(start: NaiveDate, end: NaiveDate) -> String {
    format!(" | {} - {}", start.format(DATE_FORMAT), end.format(DATE_FORMAT))
}

/// Escape text for inclusion in HTML/SVG markup.
pub fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn tooltip_markup(remark: &str) -> String {
    if remark.is_empty() {
        String::new()
    } else {
        format!(
            "<span style='color:#d32f2f;font-weight:bold'>{}</span>",
            escape_markup(remark)
        )
    }
}

/// Derive one row from one task.
///
/// Fails with [`Error::DateOutOfRange`] when the bar would end past the
/// calendar's last date.
pub fn layout_row(task: &TaskRecord) -> Result<RenderRow> {
    let display_end = display_end(task.start, task.end)
        .ok_or_else(|| Error::DateOutOfRange(task.name.clone()))?;
    let duration_days = (display_end - task.start).num_days();
    let name = escape_markup(&task.name);

    Ok(RenderRow {
        name: task.name.clone(),
        start: task.start,
        end: task.end,
        display_end,
        duration_days,
        bar_label: truncate_bar_label(&task.name, duration_days),
        row_label_full: format!("<b>{}</b>{}", name, date_range_suffix(task.start, task.end)),
        row_label_compact: format!("<b>{}</b>", name),
        remark: task.remark.clone(),
        tooltip: tooltip_markup(&task.remark),
        color_key: task.status.clone(),
    })
}

/// Build the chart for a snapshot of the task list.
///
/// Returns [`Error::EmptyInput`] when there are no tasks.
pub fn build_chart(tasks: &[TaskRecord], options: &LayoutOptions) -> Result<ChartModel> {
    if tasks.is_empty() {
        return Err(Error::EmptyInput);
    }

    let rows = tasks
        .iter()
        .rev()
        .map(layout_row)
        .collect::<Result<Vec<RenderRow>>>()?;

    let (min_start, max_end) = rows
        .iter()
        .map(|r| (r.start, r.display_end))
        .fold((NaiveDate::MAX, NaiveDate::MIN), |(lo, hi), (s, e)| {
            (lo.min(s), hi.max(e))
        });
    let axis = AxisRange::covering(min_start, max_end);
    let month_gridlines = axis.month_gridlines();

    let use_compact_labels = !options.show_date_range;
    let left_margin_hint = if use_compact_labels {
        LEFT_MARGIN_COMPACT
    } else {
        LEFT_MARGIN_FULL
    };

    debug!(
        rows = rows.len(),
        axis_start = %axis.start,
        axis_end = %axis.end,
        gridlines = month_gridlines.len(),
        compact = use_compact_labels,
        "chart layout computed"
    );

    Ok(ChartModel {
        rows,
        axis_start: axis.start,
        axis_end: axis.end,
        month_gridlines,
        use_compact_labels,
        left_margin_hint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_duration_task_is_stretched_two_days() {
        let task = TaskRecord::new("Design Review", date(2024, 1, 1), date(2024, 1, 1));
        let row = layout_row(&task).unwrap();
        assert_eq!(row.display_end, date(2024, 1, 3));
        assert_eq!(row.duration_days, 2);
        assert_eq!(row.bar_label, "DR");
        assert_eq!(row.row_label_full, "<b>Design Review</b> | 2024-01-01 - 2024-01-01");
    }

    #[test]
    fn inverted_range_is_drawn_like_zero_duration() {
        let task = TaskRecord::new("Oops", date(2024, 1, 10), date(2024, 1, 5));
        let row = layout_row(&task).unwrap();
        assert_eq!(row.display_end, date(2024, 1, 12));
        assert_eq!(row.duration_days, 2);
        assert_eq!(row.end, date(2024, 1, 5));
        assert_eq!(row.row_label_full, "<b>Oops</b> | 2024-01-10 - 2024-01-05");
    }

    #[test]
    fn tooltip_wraps_remark() {
        let task = TaskRecord::new("Go live", date(2024, 1, 1), date(2024, 1, 9))
            .with_remark("needs <CAB> approval");
        assert_eq!(
            layout_row(&task).unwrap().tooltip,
            "<span style='color:#d32f2f;font-weight:bold'>needs &lt;CAB&gt; approval</span>"
        );
        let plain = TaskRecord::new("Go live", date(2024, 1, 1), date(2024, 1, 9));
        assert_eq!(layout_row(&plain).unwrap().tooltip, "");
    }

    #[test]
    fn label_variant_follows_options() {
        let tasks = vec![TaskRecord::new("Backend", date(2024, 1, 1), date(2024, 1, 20))];
        let full = build_chart(&tasks, &LayoutOptions::default()).unwrap();
        assert!(!full.use_compact_labels);
        assert_eq!(full.left_margin_hint, LEFT_MARGIN_FULL);
        assert_eq!(full.row_label(&full.rows[0]), "<b>Backend</b> | 2024-01-01 - 2024-01-20");

        let compact = build_chart(&tasks, &LayoutOptions { show_date_range: false }).unwrap();
        assert!(compact.use_compact_labels);
        assert_eq!(compact.left_margin_hint, LEFT_MARGIN_COMPACT);
        assert_eq!(compact.row_label(&compact.rows[0]), "<b>Backend</b>");
    }

    #[test]
    fn full_label_ends_with_date_range() {
        let task = TaskRecord::new("R&D", date(2024, 1, 1), date(2024, 1, 20));
        let row = layout_row(&task).unwrap();
        assert_eq!(row.date_range(), " | 2024-01-01 - 2024-01-20");
        assert_eq!(row.row_label_full, format!("<b>R&amp;D</b>{}", row.date_range()));
    }

    #[test]
    fn hover_text_lists_span_status_and_remark() {
        let task = TaskRecord::new("Launch", date(2024, 3, 4), date(2024, 3, 4))
            .with_status(TaskStatus::TargetGoLive)
            .with_remark("freeze week");
        let row = layout_row(&task).unwrap();
        assert_eq!(
            row.hover_text(),
            "Launch\n2024-03-04 to 2024-03-06\nStatus: Target Go Live\nRemark: freeze week"
        );
        assert!(!row.hover_summary().contains("Remark"));
    }

    #[test]
    fn zero_duration_task_at_calendar_end_is_an_error() {
        let last = NaiveDate::MAX;
        assert_eq!(display_end(last, last), None);

        let tasks = vec![
            TaskRecord::new("Normal", date(2024, 1, 1), date(2024, 1, 5)),
            TaskRecord::new("Edge", last, last),
        ];
        match build_chart(&tasks, &LayoutOptions::default()) {
            Err(Error::DateOutOfRange(name)) => assert_eq!(name, "Edge"),
            other => panic!("expected out-of-range date, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_is_reported() {
        assert!(matches!(
            build_chart(&[], &LayoutOptions::default()),
            Err(Error::EmptyInput)
        ));
    }
}
