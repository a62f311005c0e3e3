use crate::app::GanttApp;
use crate::ui::theme;
use egui::{Context, RichText, Window};
use gantt_chart_maker::io::COLUMNS;
use gantt_chart_maker::layout::palette;
use gantt_chart_maker::model::TaskStatus;

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut GanttApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 180.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Gantt Chart Maker").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Build a task list, then export it");
                ui.label("as an interactive HTML Gantt chart.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}

/// Render the "CSV Format" help dialog.
pub fn show_csv_help_dialog(app: &mut GanttApp, ctx: &Context) {
    let mut should_close = false;

    Window::new(RichText::new("CSV Format").strong().size(14.0))
        .resizable(true)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_size([520.0, 460.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(4.0);

                // ── Columns ──────────────────────────────────────────────
                ui.label(RichText::new("Columns").strong());
                ui.label("All five columns are required; their order does not matter.");
                ui.add_space(2.0);
                egui::Grid::new("csv_columns")
                    .num_columns(2)
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        let notes = [
                            "Task name (rows with an empty name are skipped)",
                            "First day of the task",
                            "Last day of the task",
                            "One of the statuses below, or any other text",
                            "Free text shown on hover; may be empty",
                        ];
                        for (column, note) in COLUMNS.iter().zip(notes) {
                            ui.label(RichText::new(*column).monospace().strong());
                            ui.label(note);
                            ui.end_row();
                        }
                    });
                ui.add_space(8.0);

                // ── Statuses ─────────────────────────────────────────────
                ui.label(RichText::new("Statuses").strong());
                ui.add_space(2.0);
                for status in TaskStatus::all() {
                    ui.horizontal(|ui| {
                        let color = palette::status_color(status).unwrap_or(theme::BAR_FALLBACK);
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, color);
                        ui.label(status.label());
                    });
                }
                ui.label(
                    RichText::new("Other values are kept and drawn in grey.")
                        .small()
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(8.0);

                // ── Date formats ─────────────────────────────────────────
                ui.label(RichText::new("Supported Date Formats").strong());
                ui.add_space(2.0);
                for fmt in &[
                    "YYYY-MM-DD   (e.g. 2025-06-15)",
                    "YYYY/MM/DD   (e.g. 2025/06/15)",
                    "DD/MM/YYYY   (e.g. 15/06/2025)",
                    "MM/DD/YYYY   (e.g. 06/15/2025)",
                    "DD-MM-YYYY   (e.g. 15-06-2025)",
                    "DD.MM.YYYY   (e.g. 15.06.2025)",
                ] {
                    ui.label(RichText::new(*fmt).monospace().size(11.0));
                }
                ui.add_space(8.0);

                // ── Notes ────────────────────────────────────────────────
                ui.label(RichText::new("Notes").strong());
                ui.add_space(2.0);
                let notes = [
                    "• The delimiter is auto-detected: comma, semicolon or tab.",
                    "• A date that cannot be read stops the import; the task list is left unchanged.",
                    "• Rows with a missing date or status are skipped and counted.",
                    "• Export always writes comma-separated YYYY-MM-DD dates.",
                ];
                for note in &notes {
                    ui.label(RichText::new(*note).small());
                }
                ui.add_space(10.0);

                // ── Example ──────────────────────────────────────────────
                ui.label(RichText::new("Example").strong());
                ui.add_space(2.0);
                let example = "Task,Start_Date,End_Date,Status,Remark\n\
                               Design Review,2024-01-01,2024-01-05,Completed,\n\
                               Backend,2024-01-08,2024-03-15,In Progress,API freeze in Feb\n\
                               Launch,2024-03-18,2024-03-18,Target Go Live,";
                egui::Frame::dark_canvas(ui.style()).show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut example.to_string())
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .interactive(false),
                    );
                });
                ui.add_space(8.0);
            });

            ui.separator();
            ui.add_space(4.0);
            if ui.add_sized([80.0, 28.0], egui::Button::new("Close")).clicked() {
                should_close = true;
            }
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_csv_help = false;
    }
}
