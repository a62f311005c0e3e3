use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};
use gantt_chart_maker::model::{TaskDraft, TaskRecord, TaskStatus};

use crate::ui::theme;

/// Actions the form can request.
pub enum FormAction {
    None,
    Submit,
    Cancel,
}

/// Contents of the add/edit form.
pub struct TaskForm {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: TaskStatus,
    pub remark: String,
    /// Index of the task being edited; `None` when adding.
    pub editing: Option<usize>,
    today: NaiveDate,
}

impl TaskForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            start: today,
            end: today,
            status: TaskStatus::ToDo,
            remark: String::new(),
            editing: None,
            today,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.today);
    }

    pub fn load(&mut self, index: usize, record: &TaskRecord) {
        self.name = record.name.clone();
        self.start = record.start;
        self.end = record.end;
        self.status = record.status.clone();
        self.remark = record.remark.clone();
        self.editing = Some(index);
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            start: Some(self.start),
            end: Some(self.end),
            status: Some(self.status.clone()),
            remark: self.remark.clone(),
        }
    }
}

fn field_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(10.0)
            .color(theme::TEXT_DIM)
            .strong(),
    );
}

/// Render the task entry form.
pub fn show_task_form(form: &mut TaskForm, ui: &mut Ui) -> FormAction {
    let mut action = FormAction::None;
    let heading = if form.editing.is_some() { "Edit Task" } else { "New Task" };

    ui.add_space(6.0);
    ui.label(
        RichText::new(heading)
            .strong()
            .size(13.0)
            .color(theme::TEXT_PRIMARY),
    );
    ui.add_space(4.0);

    let frame = egui::Frame {
        fill: theme::BG_DARK,
        rounding: egui::Rounding::same(4.0),
        inner_margin: egui::Margin::same(8.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
        shadow: egui::epaint::Shadow::NONE,
    };

    frame.show(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 6.0;

        // ── Task Name ──────────────────────────────────────────────────
        field_label(ui, "Task Name");
        let name_edit = ui.add_sized(
            [ui.available_width(), 24.0],
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("Task name...")
                .font(egui::FontId::proportional(12.0))
                .text_color(theme::TEXT_PRIMARY),
        );
        if name_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = FormAction::Submit;
        }

        // ── Dates ──────────────────────────────────────────────────────
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                field_label(ui, "Start Date");
                ui.add(egui_extras::DatePickerButton::new(&mut form.start).id_salt("form_dp_start"));
            });
            ui.add_space(8.0);
            ui.vertical(|ui| {
                field_label(ui, "End Date");
                ui.add(egui_extras::DatePickerButton::new(&mut form.end).id_salt("form_dp_end"));
            });
        });

        // ── Status ─────────────────────────────────────────────────────
        field_label(ui, "Status");
        egui::ComboBox::from_id_salt("status_combo")
            .selected_text(RichText::new(form.status.label()).size(11.0))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for status in TaskStatus::all() {
                    ui.selectable_value(&mut form.status, status.clone(), status.label());
                }
            });

        // ── Remark ─────────────────────────────────────────────────────
        field_label(ui, "Remark");
        ui.add_sized(
            [ui.available_width(), 24.0],
            egui::TextEdit::singleline(&mut form.remark)
                .hint_text("Optional note shown on hover")
                .font(egui::FontId::proportional(12.0))
                .text_color(theme::TEXT_PRIMARY),
        );

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let (icon, text) = if form.editing.is_some() {
                (egui_phosphor::regular::FLOPPY_DISK, "Update Task")
            } else {
                (egui_phosphor::regular::PLUS, "Add Task")
            };
            let submit = egui::Button::new(
                RichText::new(format!("{}  {}", icon, text)).color(Color32::WHITE).size(12.0),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
            if ui.add_sized([130.0, 28.0], submit).clicked() {
                action = FormAction::Submit;
            }
            let cancel_text = if form.editing.is_some() { "Cancel" } else { "Clear" };
            if ui.add_sized([80.0, 28.0], egui::Button::new(cancel_text)).clicked() {
                action = FormAction::Cancel;
            }
        });
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn load_then_draft_reproduces_record() {
        let mut form = TaskForm::new(date(2024, 1, 1));
        let record = TaskRecord::new("QA", date(2024, 2, 1), date(2024, 2, 9))
            .with_status(TaskStatus::InProgress)
            .with_remark("two testers");
        form.load(3, &record);
        assert_eq!(form.editing, Some(3));
        assert_eq!(form.draft().validate().unwrap(), record);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let today = date(2024, 1, 1);
        let mut form = TaskForm::new(today);
        form.name = "QA".to_string();
        form.editing = Some(1);
        form.reset();
        assert!(form.name.is_empty());
        assert_eq!(form.editing, None);
        assert_eq!(form.start, today);
        assert_eq!(form.status, TaskStatus::ToDo);
    }

    #[test]
    fn empty_name_is_rejected() {
        let form = TaskForm::new(date(2024, 1, 1));
        assert!(form.draft().validate().is_err());
    }
}
