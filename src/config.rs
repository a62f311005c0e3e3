//! Persisted user settings (lives in the OS config directory).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::layout::LayoutOptions;

pub const DEFAULT_TITLE: &str = "Project Gantt Chart";
pub const DEFAULT_OUTPUT_FILE: &str = "gantt_chart.html";
pub const DEFAULT_CHART_HEIGHT: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chart_title: String,
    /// Show each task's date range in the row labels.
    pub show_date_range: bool,
    /// Where the rendered chart is written.
    pub output_file: PathBuf,
    pub chart_height: u32,
    /// Open the rendered chart in the system browser.
    pub open_in_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chart_title: DEFAULT_TITLE.to_string(),
            show_date_range: true,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            chart_height: DEFAULT_CHART_HEIGHT,
            open_in_browser: true,
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/settings.json`, or the working
    /// directory when no config dir can be determined.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "GanttChartMaker")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no settings file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            show_date_range: self.show_date_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(&temp.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.chart_title, "Project Gantt Chart");
        assert!(settings.layout_options().show_date_range);
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.json");
        let settings = Settings {
            chart_title: "Q3 Rollout".to_string(),
            show_date_range: false,
            chart_height: 600,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn partial_and_corrupt_files_fall_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");

        std::fs::write(&path, r#"{"chart_title":"Only title"}"#).unwrap();
        let partial = Settings::load(&path);
        assert_eq!(partial.chart_title, "Only title");
        assert_eq!(partial.chart_height, DEFAULT_CHART_HEIGHT);

        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
