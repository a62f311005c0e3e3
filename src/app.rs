use std::path::PathBuf;

use gantt_chart_maker::config::Settings;
use gantt_chart_maker::layout::{build_chart, ChartModel};
use gantt_chart_maker::model::{TaskStore, TimelineViewport};
use gantt_chart_maker::{io, render, Error};
use tracing::{info, warn};

use crate::ui;
use crate::ui::task_form::{FormAction, TaskForm};
use crate::ui::task_table::TaskTableAction;

/// Main application state.
pub struct GanttApp {
    pub store: TaskStore,
    pub selected_task: Option<usize>,
    pub form: TaskForm,

    pub settings: Settings,
    settings_path: PathBuf,

    /// Last generated chart, shown in the preview panel.
    pub chart: Option<ChartModel>,
    pub viewport: TimelineViewport,
    /// Fit the next preview frame to the panel width.
    pub fit_chart: bool,

    // Panel and dialog state
    pub show_task_list: bool,
    pub show_about: bool,
    pub show_csv_help: bool,

    pub status_message: String,
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, settings_path: PathBuf) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let today = chrono::Local::now().date_naive();
        Self {
            store: TaskStore::new(),
            selected_task: None,
            form: TaskForm::new(today),
            settings,
            settings_path,
            chart: None,
            viewport: TimelineViewport::new(today, today),
            fit_chart: false,
            show_task_list: true,
            show_about: false,
            show_csv_help: false,
            status_message: "Ready".to_string(),
        }
    }

    /// Show an error in the status bar and in a native message box.
    fn report(&mut self, err: &Error) {
        warn!(error = %err, "action failed");
        self.status_message = err.to_string();
        let level = if err.is_warning() {
            rfd::MessageLevel::Warning
        } else {
            rfd::MessageLevel::Error
        };
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(err.title())
            .set_description(err.to_string())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!(path = %self.settings_path.display(), error = %e, "failed to save settings");
        }
    }

    // --- File operations ---

    pub fn import_csv(&mut self) {
        // Guard: if the list has tasks, confirm before replacing
        if !self.store.is_empty() {
            let confirm = rfd::MessageDialog::new()
                .set_title("Import CSV")
                .set_description("This will replace the current task list. Continue?")
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();
            if confirm != rfd::MessageDialogResult::Yes {
                return;
            }
        }

        let Some(path) = rfd::FileDialog::new()
            .set_title("Select CSV File")
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        match io::import_csv(&path) {
            Ok(outcome) => {
                let count = outcome.tasks.len();
                self.store.replace_all(outcome.tasks);
                self.selected_task = None;
                self.form.reset();
                self.status_message = if outcome.skipped > 0 {
                    format!("Imported {} tasks ({} rows skipped)", count, outcome.skipped)
                } else {
                    format!("Imported {} tasks", count)
                };
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save CSV File")
            .add_filter("CSV Files", &["csv"])
            .set_file_name("tasks.csv")
            .save_file()
        else {
            return;
        };

        match io::export_csv(self.store.tasks(), &path) {
            Ok(count) => self.status_message = format!("Exported {} tasks to CSV", count),
            Err(e) => self.report(&e),
        }
    }

    // --- Chart operations ---

    /// Lay out the current task list for the preview panel only.
    pub fn preview_chart(&mut self) {
        match build_chart(self.store.tasks(), &self.settings.layout_options()) {
            Ok(model) => self.show_chart(model),
            Err(e) => self.report(&e),
        }
    }

    /// Write the HTML chart and refresh the preview.
    pub fn generate_chart(&mut self) {
        match render::generate_chart(self.store.tasks(), &self.settings) {
            Ok(model) => {
                self.show_chart(model);
                self.status_message = format!(
                    "Chart written to {}",
                    self.settings.output_file.display()
                );
            }
            Err(e) => self.report(&e),
        }
    }

    fn show_chart(&mut self, model: ChartModel) {
        self.viewport.set_range(model.axis_start, model.axis_end);
        self.fit_chart = true;
        self.status_message = format!("Chart built from {} tasks", model.rows.len());
        self.chart = Some(model);
    }

    pub fn toggle_date_range(&mut self) {
        self.settings.show_date_range = !self.settings.show_date_range;
        self.save_settings();
        if self.chart.is_some() && !self.store.is_empty() {
            self.preview_chart();
        }
    }

    pub fn title_changed(&mut self) {
        self.save_settings();
    }

    // --- Task operations ---

    pub fn submit_form(&mut self) {
        let record = match self.form.draft().validate() {
            Ok(record) => record,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        match self.form.editing {
            Some(index) => match self.store.update(index, record) {
                Ok(()) => {
                    self.status_message = "Task updated".to_string();
                    self.form.reset();
                }
                Err(e) => self.report(&e),
            },
            None => {
                let index = self.store.push(record);
                self.selected_task = Some(index);
                self.status_message = "Task added".to_string();
                self.form.reset();
            }
        }
    }

    pub fn edit_task(&mut self, index: usize) {
        if let Some(record) = self.store.get(index) {
            self.form.load(index, record);
            self.selected_task = Some(index);
            self.status_message = format!("Editing '{}'", record.name);
        }
    }

    pub fn remove_task(&mut self, index: usize) {
        match self.store.remove(index) {
            Ok(removed) => {
                info!(name = %removed.name, "task removed");
                self.selected_task = None;
                // Indices after the removed one have shifted.
                match self.form.editing {
                    Some(i) if i == index => self.form.reset(),
                    Some(i) if i > index => self.form.editing = Some(i - 1),
                    _ => {}
                }
                self.status_message = format!("Removed '{}'", removed.name);
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn remove_selected(&mut self) {
        match self.selected_task {
            Some(index) => self.remove_task(index),
            None => self.status_message = "Please select a task to remove.".to_string(),
        }
    }

    /// Move a task and keep selection and the form pointing at it.
    pub fn move_task(&mut self, from: usize, to: usize) {
        let moved = if to + 1 == from {
            self.store.move_up(from)
        } else if to == from + 1 {
            self.store.move_down(from)
        } else {
            self.store.move_to(from, to)
        };
        match moved {
            Ok(new_index) => {
                self.selected_task = Some(new_index);
                if let Some(editing) = self.form.editing {
                    self.form.editing = Some(shifted_index(editing, from, new_index));
                }
            }
            Err(e) => self.report(&e),
        }
    }

    pub fn move_selected_up(&mut self) {
        if let Some(index) = self.selected_task {
            self.move_task(index, index.saturating_sub(1));
        }
    }

    pub fn move_selected_down(&mut self) {
        if let Some(index) = self.selected_task {
            if index + 1 < self.store.len() {
                self.move_task(index, index + 1);
            }
        }
    }
}

/// Where the task at `index` ends up after the task at `from` moved to `to`.
fn shifted_index(index: usize, from: usize, to: usize) -> usize {
    if index == from {
        to
    } else if from < index && index <= to {
        index - 1
    } else if to <= index && index < from {
        index + 1
    } else {
        index
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        let typing = ctx.wants_keyboard_input();
        let should_generate = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G));
        let should_move_up = !typing && ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowUp));
        let should_move_down = !typing && ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowDown));
        let should_remove = !typing && ctx.input(|i| i.key_pressed(egui::Key::Delete));
        if should_generate {
            self.generate_chart();
        }
        if should_move_up {
            self.move_selected_up();
        }
        if should_move_down {
            self.move_selected_down();
        }
        if should_remove {
            self.remove_selected();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.store.len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        ui.label(
                            egui::RichText::new(" · ")
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                        let dates = if self.settings.show_date_range { "Dates shown" } else { "Dates hidden" };
                        ui.label(
                            egui::RichText::new(dates)
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: task form + task list
        let mut form_action = FormAction::None;
        let mut table_action = TaskTableAction::None;
        egui::SidePanel::left("task_panel")
            .default_width(ui::theme::SIDE_PANEL_WIDTH)
            .min_width(ui::theme::SIDE_PANEL_WIDTH * 0.8)
            .max_width(ui::theme::SIDE_PANEL_WIDTH * 2.0)
            .resizable(true)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                form_action = ui::task_form::show_task_form(&mut self.form, ui);
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(2.0);

                if self.show_task_list {
                    table_action =
                        ui::task_table::show_task_table(self.store.tasks(), self.selected_task, ui);
                } else {
                    ui.label(
                        egui::RichText::new(format!("{} tasks (list hidden)", self.store.len()))
                            .size(11.0)
                            .color(ui::theme::TEXT_DIM),
                    );
                }
            });

        match form_action {
            FormAction::Submit => self.submit_form(),
            FormAction::Cancel => {
                self.form.reset();
                self.status_message = "Form cleared".to_string();
            }
            FormAction::None => {}
        }

        match table_action {
            TaskTableAction::Select(index) => self.selected_task = Some(index),
            TaskTableAction::Edit(index) => self.edit_task(index),
            TaskTableAction::Remove(index) => self.remove_task(index),
            TaskTableAction::MoveUp(index) => {
                if index > 0 {
                    self.move_task(index, index - 1);
                }
            }
            TaskTableAction::MoveDown(index) => {
                if index + 1 < self.store.len() {
                    self.move_task(index, index + 1);
                }
            }
            TaskTableAction::MoveTo { from, to } => self.move_task(from, to),
            TaskTableAction::None => {}
        }

        // Central panel: chart preview
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            ui::gantt_chart::show_gantt_chart(
                self.chart.as_ref(),
                &self.settings.chart_title,
                &mut self.viewport,
                &mut self.fit_chart,
                ui,
            );
        });

        // Dialogs
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
        if self.show_csv_help {
            ui::dialogs::show_csv_help_dialog(self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::shifted_index;

    #[test]
    fn shifted_index_follows_move_to() {
        // [a b c d], move a (0) to 2 -> [b c a d]
        assert_eq!(shifted_index(0, 0, 2), 2);
        assert_eq!(shifted_index(1, 0, 2), 0);
        assert_eq!(shifted_index(2, 0, 2), 1);
        assert_eq!(shifted_index(3, 0, 2), 3);
        // [a b c d], move d (3) to 1 -> [a d b c]
        assert_eq!(shifted_index(1, 3, 1), 2);
        assert_eq!(shifted_index(2, 3, 1), 3);
        assert_eq!(shifted_index(0, 3, 1), 0);
    }
}
