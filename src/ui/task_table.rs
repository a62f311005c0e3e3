use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;
use gantt_chart_maker::layout::palette;
use gantt_chart_maker::model::TaskRecord;

use crate::ui::theme;

/// Actions that the task table can request.
pub enum TaskTableAction {
    None,
    Select(usize),
    Edit(usize),
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
    MoveTo { from: usize, to: usize },
}

/// Drag-and-drop payload: the index of the row being dragged.
struct DraggedRow(usize);

fn icon_button(ui: &mut Ui, icon: &str, hover: &str) -> bool {
    ui.add(
        egui::Button::new(RichText::new(icon).size(12.0).color(theme::TEXT_SECONDARY))
            .frame(false),
    )
    .on_hover_text(hover)
    .clicked()
}

/// Render the task list. Rows are shown in list order (the chart draws
/// them bottom-up).
pub fn show_task_table(tasks: &[TaskRecord], selected: Option<usize>, ui: &mut Ui) -> TaskTableAction {
    let mut action = TaskTableAction::None;

    // Header area
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Tasks")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", tasks.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.label(
        RichText::new("Drag the handle to reorder · double-click to edit")
            .size(9.5)
            .color(theme::TEXT_DIM),
    );
    ui.add_space(4.0);

    // Task rows
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, task) in tasks.iter().enumerate() {
                let is_selected = selected == Some(i);
                let row_bg = if is_selected {
                    theme::BG_SELECTED
                } else if i % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };

                let frame = egui::Frame {
                    fill: row_bg,
                    rounding: egui::Rounding::same(4.0),
                    inner_margin: egui::Margin::symmetric(6.0, 4.0),
                    outer_margin: egui::Margin::ZERO,
                    stroke: egui::Stroke::NONE,
                    shadow: egui::epaint::Shadow::NONE,
                };

                let frame_resp = frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;

                        // Drag handle
                        ui.dnd_drag_source(egui::Id::new(("task-drag", i)), DraggedRow(i), |ui| {
                            ui.label(RichText::new(icons::DOTS_SIX_VERTICAL).color(theme::TEXT_DIM));
                        });

                        // Status dot
                        let color = palette::status_color(&task.status).unwrap_or(theme::BAR_FALLBACK);
                        let (dot_rect, _) =
                            ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                        ui.painter().circle_filled(dot_rect.center(), 4.0, color);

                        ui.vertical(|ui| {
                            ui.spacing_mut().item_spacing.y = 1.0;
                            ui.add(
                                egui::Label::new(
                                    RichText::new(&task.name).size(12.0).color(if is_selected {
                                        Color32::WHITE
                                    } else {
                                        theme::TEXT_PRIMARY
                                    }),
                                )
                                .truncate(),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "{} → {}  ·  {}",
                                    task.start.format("%Y-%m-%d"),
                                    task.end.format("%Y-%m-%d"),
                                    task.status
                                ))
                                .size(10.0)
                                .color(theme::TEXT_SECONDARY),
                            );
                            if !task.remark.is_empty() {
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(&task.remark)
                                            .size(10.0)
                                            .italics()
                                            .color(theme::TEXT_REMARK),
                                    )
                                    .truncate(),
                                );
                            }
                        });

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.spacing_mut().item_spacing.x = 2.0;
                            if icon_button(ui, icons::X, "Remove task") {
                                action = TaskTableAction::Remove(i);
                            }
                            if icon_button(ui, icons::PENCIL_SIMPLE, "Edit task") {
                                action = TaskTableAction::Edit(i);
                            }
                            if icon_button(ui, icons::ARROW_DOWN, "Move down") {
                                action = TaskTableAction::MoveDown(i);
                            }
                            if icon_button(ui, icons::ARROW_UP, "Move up") {
                                action = TaskTableAction::MoveUp(i);
                            }
                        });
                    });
                });

                let row_rect = frame_resp.response.rect;

                // Highlight the row under a dragged task and handle the drop
                if let Some(dragged) = frame_resp.response.dnd_hover_payload::<DraggedRow>() {
                    if dragged.0 != i {
                        ui.painter().rect_stroke(
                            row_rect,
                            egui::Rounding::same(4.0),
                            egui::Stroke::new(1.5, theme::BG_DROP_TARGET),
                        );
                    }
                }
                if let Some(dragged) = frame_resp.response.dnd_release_payload::<DraggedRow>() {
                    if dragged.0 != i {
                        action = TaskTableAction::MoveTo { from: dragged.0, to: i };
                    }
                }

                // Make the rest of the row clickable
                let row_click = ui.interact(
                    row_rect,
                    egui::Id::new(("task-row", i)),
                    egui::Sense::click(),
                );
                if row_click.double_clicked() {
                    action = TaskTableAction::Edit(i);
                } else if row_click.clicked() && matches!(action, TaskTableAction::None) {
                    action = TaskTableAction::Select(i);
                }

                ui.add_space(1.0);
            }
        });

    action
}
