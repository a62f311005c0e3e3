use crate::app::GanttApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use gantt_chart_maker::model::timeline::DEFAULT_PIXELS_PER_DAY;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut GanttApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button("  Import CSV...").clicked() {
                ui.close_menu();
                app.import_csv();
            }
            if ui.button("  Export CSV...").clicked() {
                ui.close_menu();
                app.export_csv();
            }
            ui.separator();
            if ui.button("  Generate Gantt Chart   Ctrl+G").clicked() {
                ui.close_menu();
                app.generate_chart();
            }
            if ui.button("  Preview Only").clicked() {
                ui.close_menu();
                app.preview_chart();
            }
        });

        ui.menu_button(RichText::new("  Edit  ").font(theme::font_menu()), |ui| {
            let has_selection = app.selected_task.is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("  Move Up         Alt+↑"))
                .clicked()
            {
                app.move_selected_up();
                ui.close_menu();
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("  Move Down    Alt+↓"))
                .clicked()
            {
                app.move_selected_down();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(has_selection, egui::Button::new("  Remove Task   Del"))
                .clicked()
            {
                app.remove_selected();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            let dates_label = if app.settings.show_date_range {
                "  Hide Dates in Labels"
            } else {
                "  Show Dates in Labels"
            };
            if ui.button(dates_label).clicked() {
                app.toggle_date_range();
                ui.close_menu();
            }
            let list_label = if app.show_task_list { "  Hide Task List" } else { "  Show Task List" };
            if ui.button(list_label).clicked() {
                app.show_task_list = !app.show_task_list;
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Zoom In        Ctrl+Scroll ↑").clicked() {
                app.viewport.zoom_in();
                ui.close_menu();
            }
            if ui.button("  Zoom Out      Ctrl+Scroll ↓").clicked() {
                app.viewport.zoom_out();
                ui.close_menu();
            }
            if ui.button("  Fit to Window").clicked() {
                app.fit_chart = true;
                ui.close_menu();
            }
            if ui.button("  Reset Zoom").clicked() {
                app.viewport.pixels_per_day = DEFAULT_PIXELS_PER_DAY;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("CSV Format").clicked() {
                app.show_csv_help = true;
                ui.close_menu();
            }
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.separator();

        // Chart title, persisted when editing ends
        ui.label(RichText::new("Title").size(11.0).color(theme::TEXT_SECONDARY));
        let title_edit = ui.add(
            egui::TextEdit::singleline(&mut app.settings.chart_title)
                .desired_width(220.0)
                .hint_text("Chart title"),
        );
        if title_edit.lost_focus() {
            app.title_changed();
        }

        // Right-aligned output target
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("→ {}", app.settings.output_file.display()))
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
