use chrono::NaiveDate;
use egui::{Align2, Color32, Pos2, Rect, RichText, Rounding, Sense, Shape, Stroke, Ui, Vec2};
use gantt_chart_maker::layout::{palette, ChartModel, RenderRow};
use gantt_chart_maker::model::{TaskStatus, TimelineViewport};

use crate::ui::theme;

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const LEGEND_HEIGHT: f32 = theme::LEGEND_HEIGHT;

/// Render the chart preview (central panel).
///
/// `fit_pending` is set when a new chart arrives; the viewport is then
/// zoomed so the whole axis fits the panel.
pub fn show_gantt_chart(
    chart: Option<&ChartModel>,
    title: &str,
    viewport: &mut TimelineViewport,
    fit_pending: &mut bool,
    ui: &mut Ui,
) {
    let Some(model) = chart else {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new("Add tasks, then Generate Gantt Chart (Ctrl+G)")
                    .size(14.0)
                    .color(theme::TEXT_DIM),
            );
        });
        return;
    };

    let available = ui.available_size();
    let label_width = model.left_margin_hint as f32 * theme::MARGIN_SCALE;
    if *fit_pending {
        viewport.fit_width(available.x - label_width - 24.0);
        *fit_pending = false;
    }

    // Handle zoom with scroll wheel
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
    if ui.rect_contains_pointer(ui.max_rect()) && ui.input(|i| i.modifiers.ctrl) {
        if scroll_delta.y > 0.0 {
            viewport.zoom_in();
        } else if scroll_delta.y < 0.0 {
            viewport.zoom_out();
        }
    }

    let chart_width = label_width + viewport.total_width() + 24.0;
    let rows_height = model.rows.len() as f32 * ROW_HEIGHT;
    let chart_height = HEADER_HEIGHT + rows_height + LEGEND_HEIGHT + 16.0;

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width.max(available.x), chart_height.max(available.y)),
                Sense::hover(),
            );
            let origin = response.rect.min;
            let plot_left = origin.x + label_width;
            let plot_top = origin.y + HEADER_HEIGHT;
            let plot_bottom = plot_top + rows_height;

            painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

            draw_header(&painter, model, viewport, title, origin, plot_left, chart_width);

            for (i, row) in model.rows.iter().enumerate() {
                let y = plot_top + i as f32 * ROW_HEIGHT;
                let row_rect = Rect::from_min_size(
                    Pos2::new(origin.x, y),
                    Vec2::new(chart_width, ROW_HEIGHT),
                );
                painter.line_segment(
                    [row_rect.left_bottom(), row_rect.right_bottom()],
                    Stroke::new(0.5, theme::ROW_LINE),
                );
                draw_row_label(&painter, model, row, origin.x, label_width, y);

                let bar_rect = draw_bar(&painter, row, viewport, plot_left, y);
                let bar_response = ui.interact(
                    bar_rect,
                    ui.make_persistent_id(("chart-bar", i)),
                    Sense::hover(),
                );
                bar_response.on_hover_ui(|ui| bar_tooltip(ui, row));
            }

            // Month gridlines on top of the bars
            for month in &model.month_gridlines {
                let x = plot_left + viewport.date_to_x(*month);
                painter.extend(Shape::dashed_line(
                    &[Pos2::new(x, plot_top), Pos2::new(x, plot_bottom)],
                    Stroke::new(1.0, theme::GRID_LINE),
                    5.0,
                    4.0,
                ));
            }

            draw_legend(&painter, model, plot_left, plot_bottom + 12.0);
        });
}

fn bar_color(status: &TaskStatus) -> Color32 {
    palette::status_color(status).unwrap_or(theme::BAR_FALLBACK)
}

fn draw_header(
    painter: &egui::Painter,
    model: &ChartModel,
    viewport: &TimelineViewport,
    title: &str,
    origin: Pos2,
    plot_left: f32,
    width: f32,
) {
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let title_painter = painter.with_clip_rect(Rect::from_min_max(
        origin,
        Pos2::new(plot_left - 4.0, origin.y + HEADER_HEIGHT),
    ));
    title_painter.text(
        Pos2::new(origin.x + 8.0, origin.y + HEADER_HEIGHT / 2.0),
        Align2::LEFT_CENTER,
        title,
        theme::font_header(),
        theme::TEXT_PRIMARY,
    );

    // Month labels centred on each month's span
    for (i, month) in model.month_gridlines.iter().enumerate() {
        let next: NaiveDate = model
            .month_gridlines
            .get(i + 1)
            .copied()
            .unwrap_or_else(|| model.axis_end.succ_opt().unwrap_or(model.axis_end));
        let x0 = plot_left + viewport.date_to_x(*month);
        let x1 = plot_left + viewport.date_to_x(next);
        painter.text(
            Pos2::new((x0 + x1) / 2.0, origin.y + HEADER_HEIGHT / 2.0),
            Align2::CENTER_CENTER,
            month.format("%b-%Y").to_string(),
            theme::font_header(),
            theme::TEXT_SECONDARY,
        );
    }
}

fn draw_row_label(
    painter: &egui::Painter,
    model: &ChartModel,
    row: &RenderRow,
    left: f32,
    label_width: f32,
    y: f32,
) {
    let clip = Rect::from_min_size(Pos2::new(left, y), Vec2::new(label_width - 8.0, ROW_HEIGHT));
    let clipped = painter.with_clip_rect(clip);
    let center_y = y + ROW_HEIGHT / 2.0;

    let name = clipped.layout_no_wrap(row.name.clone(), theme::font_label(), theme::TEXT_PRIMARY);
    let name_width = name.size().x;
    let name_pos = Pos2::new(left + 8.0, center_y - name.size().y / 2.0);
    clipped.galley(name_pos, name, theme::TEXT_PRIMARY);

    if !model.use_compact_labels {
        clipped.text(
            Pos2::new(name_pos.x + name_width, center_y),
            Align2::LEFT_CENTER,
            row.date_range(),
            theme::font_label(),
            theme::TEXT_SECONDARY,
        );
    }
}

fn draw_bar(
    painter: &egui::Painter,
    row: &RenderRow,
    viewport: &TimelineViewport,
    plot_left: f32,
    y: f32,
) -> Rect {
    // Go-live bars fill the whole row
    let thickness = if row.color_key == TaskStatus::TargetGoLive {
        ROW_HEIGHT
    } else {
        ROW_HEIGHT * (1.0 - theme::BAR_GAP)
    };
    let x = plot_left + viewport.date_to_x(row.start);
    let width = (row.duration_days.max(0) as f32 * viewport.pixels_per_day).max(2.0);
    let bar_rect = Rect::from_min_size(
        Pos2::new(x, y + (ROW_HEIGHT - thickness) / 2.0),
        Vec2::new(width, thickness),
    );

    painter.rect_filled(bar_rect, Rounding::same(theme::BAR_ROUNDING), bar_color(&row.color_key));

    // Truncated label, clipped to the bar
    let galley = painter.layout_no_wrap(row.bar_label.clone(), theme::font_bar(), theme::TEXT_ON_BAR);
    let text_y = bar_rect.center().y - galley.size().y / 2.0;
    painter
        .with_clip_rect(bar_rect)
        .galley(Pos2::new(bar_rect.left() + 4.0, text_y), galley, theme::TEXT_ON_BAR);

    bar_rect
}

fn bar_tooltip(ui: &mut Ui, row: &RenderRow) {
    ui.label(row.hover_summary());
    if !row.remark.is_empty() {
        ui.label(RichText::new(&row.remark).strong().color(theme::TEXT_REMARK));
    }
}

/// Horizontal "Task Status" legend listing the statuses in the chart.
fn draw_legend(painter: &egui::Painter, model: &ChartModel, left: f32, y: f32) {
    let mut x = left;
    let center_y = y + LEGEND_HEIGHT / 2.0;
    let title = painter.layout_no_wrap(
        "Task Status".to_string(),
        theme::font_label(),
        theme::TEXT_PRIMARY,
    );
    let title_width = title.size().x;
    painter.galley(Pos2::new(x, center_y - title.size().y / 2.0), title, theme::TEXT_PRIMARY);
    x += title_width + 16.0;

    let mut statuses: Vec<&TaskStatus> = TaskStatus::all()
        .iter()
        .filter(|s| model.rows.iter().any(|r| &r.color_key == *s))
        .collect();
    for row in &model.rows {
        if matches!(row.color_key, TaskStatus::Other(_)) && !statuses.contains(&&row.color_key) {
            statuses.push(&row.color_key);
        }
    }

    for status in statuses {
        let swatch = Rect::from_center_size(Pos2::new(x + 6.0, center_y), Vec2::splat(12.0));
        painter.rect_filled(swatch, Rounding::same(2.0), bar_color(status));
        let label = painter.layout_no_wrap(
            status.label().to_string(),
            theme::font_label(),
            theme::TEXT_SECONDARY,
        );
        let label_width = label.size().x;
        painter.galley(
            Pos2::new(x + 18.0, center_y - label.size().y / 2.0),
            label,
            theme::TEXT_SECONDARY,
        );
        x += 18.0 + label_width + 20.0;
    }
}
