//! Standalone HTML chart: one document with an inline SVG timeline.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::layout::palette::{self, hex};
use crate::layout::{escape_markup, ChartModel, RenderRow};
use crate::model::TaskStatus;

const PLOT_WIDTH: f64 = 1100.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;
const AXIS_HEIGHT: f64 = 28.0;
const LEGEND_HEIGHT: f64 = 40.0;
/// Fraction of a row left empty between bars.
const BAR_GAP: f64 = 0.1;
const GRIDLINE_COLOR: &str = "#888";
/// Bars whose status has no palette entry.
const FALLBACK_COLOR: &str = "#90A4AE";
const REMARK_CARD_WIDTH: f64 = 260.0;
const REMARK_CARD_HEIGHT: f64 = 48.0;

/// Writes a [`ChartModel`] as an HTML page.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    pub title: String,
    /// Total SVG height in pixels.
    pub height: u32,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>, height: u32) -> Self {
        Self {
            title: title.into(),
            height,
        }
    }

    /// Render and write the chart to `path`.
    pub fn write(&self, model: &ChartModel, path: &Path) -> Result<()> {
        std::fs::write(path, self.render(model))?;
        info!(path = %path.display(), rows = model.rows.len(), "chart written");
        Ok(())
    }

    /// Generate the complete HTML document.
    pub fn render(&self, model: &ChartModel) -> String {
        let geometry = Geometry::new(model, self.height);
        let svg = self.render_svg(model, &geometry);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{ font-family: "Segoe UI", Helvetica, Arial, sans-serif; background: #fff; margin: 0; padding: 16px; }}
        h1 {{ font-size: 20px; font-weight: 600; margin: 0 0 8px 0; }}
        .bar:hover {{ opacity: 0.85; }}
        .remark-card {{ background: #fff; border: 1px solid #ccc; border-radius: 4px; padding: 4px 6px; font-size: 12px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-size="12">
{svg}    </svg>
</body>
</html>
"#,
            title = escape_markup(&self.title),
            width = geometry.width,
            height = geometry.height,
            svg = svg,
        )
    }

    fn render_svg(&self, model: &ChartModel, g: &Geometry) -> String {
        let mut lines = render_axis(model, g);
        for (i, row) in model.rows.iter().enumerate() {
            lines.extend(render_row(model, row, i, g));
        }
        lines.extend(render_gridlines(model, g));
        lines.extend(render_legend(model, g));
        // Remark cards last so they sit above every bar
        for (i, row) in model.rows.iter().enumerate() {
            lines.extend(render_remark_card(model, row, i, g));
        }
        lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

/// Pixel layout shared by all parts of the SVG.
struct Geometry {
    width: f64,
    height: f64,
    plot_left: f64,
    plot_top: f64,
    plot_bottom: f64,
    row_height: f64,
    px_per_day: f64,
}

impl Geometry {
    fn new(model: &ChartModel, height: u32) -> Self {
        let plot_left = model.left_margin_hint as f64;
        let plot_top = MARGIN_TOP + AXIS_HEIGHT;
        let min_plot = model.rows.len() as f64 * 12.0;
        let plot_height = (height as f64 - plot_top - MARGIN_BOTTOM - LEGEND_HEIGHT).max(min_plot);
        let row_height = plot_height / model.rows.len().max(1) as f64;
        let px_per_day = PLOT_WIDTH / model.axis().total_days().max(1) as f64;

        Self {
            width: plot_left + PLOT_WIDTH + MARGIN_RIGHT,
            height: plot_top + plot_height + MARGIN_BOTTOM + LEGEND_HEIGHT,
            plot_left,
            plot_top,
            plot_bottom: plot_top + plot_height,
            row_height,
            px_per_day,
        }
    }

    fn row_center(&self, index: usize) -> f64 {
        self.plot_top + (index as f64 + 0.5) * self.row_height
    }

    fn date_x(&self, model: &ChartModel, date: chrono::NaiveDate) -> f64 {
        self.plot_left + (date - model.axis_start).num_days() as f64 * self.px_per_day
    }
}

fn bar_color(status: &TaskStatus) -> String {
    palette::status_color(status)
        .map(hex)
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}

/// Month labels, centred on each month's span.
fn render_axis(model: &ChartModel, g: &Geometry) -> Vec<String> {
    let mut lines = Vec::new();
    let axis_y = g.plot_top - 8.0;
    for (i, month) in model.month_gridlines.iter().enumerate() {
        let next = model
            .month_gridlines
            .get(i + 1)
            .copied()
            .unwrap_or_else(|| model.axis_end.succ_opt().unwrap_or(model.axis_end));
        let x = (g.date_x(model, *month) + g.date_x(model, next)) / 2.0;
        lines.push(format!(
            r##"        <text x="{x:.1}" y="{axis_y:.1}" text-anchor="middle" fill="#444">{label}</text>"##,
            label = month.format("%b-%Y"),
        ));
    }
    lines.push(format!(
        r##"        <text x="{x:.1}" y="{y:.1}" text-anchor="middle" fill="#444" font-weight="bold">Date</text>"##,
        x = g.plot_left + PLOT_WIDTH / 2.0,
        y = g.plot_bottom + 24.0,
    ));
    lines
}

fn render_gridlines(model: &ChartModel, g: &Geometry) -> Vec<String> {
    model
        .month_gridlines
        .iter()
        .map(|month| {
            let x = g.date_x(model, *month);
            format!(
                r#"        <line x1="{x:.1}" y1="{y1:.1}" x2="{x:.1}" y2="{y2:.1}" stroke="{GRIDLINE_COLOR}" stroke-width="1" stroke-dasharray="5,4"/>"#,
                y1 = g.plot_top,
                y2 = g.plot_bottom,
            )
        })
        .collect()
}

/// Turn the model's `<b>` row label markup into SVG text spans.
fn svg_label(markup: &str) -> String {
    markup
        .replace("<b>", r#"<tspan font-weight="bold">"#)
        .replace("</b>", "</tspan>")
}

fn bar_thickness(row: &RenderRow, g: &Geometry) -> f64 {
    // Go-live bars fill the whole row
    if row.color_key == TaskStatus::TargetGoLive {
        g.row_height
    } else {
        g.row_height * (1.0 - BAR_GAP)
    }
}

fn render_row(model: &ChartModel, row: &RenderRow, index: usize, g: &Geometry) -> Vec<String> {
    let mut lines = Vec::new();
    let center_y = g.row_center(index);

    // Horizontal row gridline
    lines.push(format!(
        r##"        <line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#eee" stroke-width="1"/>"##,
        x1 = g.plot_left,
        x2 = g.plot_left + PLOT_WIDTH,
        y = center_y,
    ));

    // Row label in the left gutter
    lines.push(format!(
        r##"        <text x="{x:.1}" y="{y:.1}" text-anchor="end" dominant-baseline="middle" fill="#222">{label}</text>"##,
        x = g.plot_left - 10.0,
        y = center_y,
        label = svg_label(model.row_label(row)),
    ));

    let thickness = bar_thickness(row, g);
    let x = g.date_x(model, row.start);
    let width = (row.duration_days.max(0) as f64 * g.px_per_day).max(2.0);
    lines.push(format!(
        r#"        <rect class="bar" id="bar-{index}" x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{thickness:.1}" fill="{fill}"><title>{tip}</title></rect>"#,
        y = center_y - thickness / 2.0,
        fill = bar_color(&row.color_key),
        tip = escape_markup(&row.hover_text()),
    ));
    lines.push(format!(
        r##"        <text x="{x:.1}" y="{y:.1}" dominant-baseline="middle" fill="#1a1a1a" font-size="11" pointer-events="none">{label}</text>"##,
        x = x + 4.0,
        y = center_y,
        label = escape_markup(&row.bar_label),
    ));
    lines
}

/// Hidden card with the row's remark markup, shown while its bar is hovered.
fn render_remark_card(model: &ChartModel, row: &RenderRow, index: usize, g: &Geometry) -> Vec<String> {
    if row.tooltip.is_empty() {
        return Vec::new();
    }
    let x = g.date_x(model, row.start);
    let y = g.row_center(index) + bar_thickness(row, g) / 2.0 + 2.0;
    vec![
        format!(
            r#"        <foreignObject class="remark" x="{x:.1}" y="{y:.1}" width="{REMARK_CARD_WIDTH}" height="{REMARK_CARD_HEIGHT}" visibility="hidden" pointer-events="none">"#
        ),
        format!(
            r#"            <div xmlns="http://www.w3.org/1999/xhtml" class="remark-card">{tooltip}</div>"#,
            tooltip = row.tooltip,
        ),
        format!(r#"            <set attributeName="visibility" to="visible" begin="bar-{index}.mouseover" end="bar-{index}.mouseout"/>"#),
        "        </foreignObject>".to_string(),
    ]
}

/// Horizontal legend centred under the plot, one entry per status used.
fn render_legend(model: &ChartModel, g: &Geometry) -> Vec<String> {
    let mut statuses: Vec<&TaskStatus> = TaskStatus::all()
        .iter()
        .filter(|s| model.rows.iter().any(|r| &r.color_key == *s))
        .collect();
    for row in &model.rows {
        if matches!(row.color_key, TaskStatus::Other(_)) && !statuses.contains(&&row.color_key) {
            statuses.push(&row.color_key);
        }
    }

    let entry_width = |s: &TaskStatus| 28.0 + s.label().chars().count() as f64 * 7.0;
    let title_width = 90.0;
    let total: f64 = title_width + statuses.iter().map(|s| entry_width(*s)).sum::<f64>();
    let mut x = g.plot_left + (PLOT_WIDTH - total) / 2.0;
    let y = g.plot_bottom + MARGIN_BOTTOM;

    let mut lines = vec![format!(
        r##"        <text x="{x:.1}" y="{y:.1}" dominant-baseline="middle" fill="#222" font-size="14">Task Status</text>"##,
    )];
    x += title_width;
    for status in statuses {
        lines.push(format!(
            r#"        <rect x="{x:.1}" y="{ry:.1}" width="14" height="14" fill="{fill}"/>"#,
            ry = y - 7.0,
            fill = bar_color(status),
        ));
        lines.push(format!(
            r##"        <text x="{tx:.1}" y="{y:.1}" dominant-baseline="middle" fill="#222" font-size="14">{label}</text>"##,
            tx = x + 20.0,
            label = escape_markup(status.label()),
        ));
        x += entry_width(status);
    }
    lines
}
