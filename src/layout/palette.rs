use egui::Color32;

use crate::model::TaskStatus;

pub const TO_DO: Color32 = Color32::from_rgb(0xBD, 0xBD, 0xBD); // soft gray
pub const IN_PROGRESS: Color32 = Color32::from_rgb(0x42, 0xA5, 0xF5); // blue
pub const COMPLETED: Color32 = Color32::from_rgb(0x66, 0xBB, 0x6A); // green
pub const TARGET_GO_LIVE: Color32 = Color32::from_rgb(0xFF, 0x70, 0x43); // orange

/// Bar color for a status. Statuses outside the vocabulary get `None` and
/// the renderer picks its own fallback.
pub fn status_color(status: &TaskStatus) -> Option<Color32> {
    match status {
        TaskStatus::ToDo => Some(TO_DO),
        TaskStatus::InProgress => Some(IN_PROGRESS),
        TaskStatus::Completed => Some(COMPLETED),
        TaskStatus::TargetGoLive => Some(TARGET_GO_LIVE),
        TaskStatus::Other(_) => None,
    }
}

/// `#RRGGBB` form for markup output.
pub fn hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_statuses_have_fixed_colors() {
        assert_eq!(status_color(&TaskStatus::ToDo).map(hex).as_deref(), Some("#BDBDBD"));
        assert_eq!(status_color(&TaskStatus::InProgress).map(hex).as_deref(), Some("#42A5F5"));
        assert_eq!(status_color(&TaskStatus::Completed).map(hex).as_deref(), Some("#66BB6A"));
        assert_eq!(status_color(&TaskStatus::TargetGoLive).map(hex).as_deref(), Some("#FF7043"));
    }

    #[test]
    fn unknown_status_has_no_color() {
        assert_eq!(status_color(&TaskStatus::Other("Blocked".into())), None);
    }
}
