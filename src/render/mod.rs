pub mod html;

pub use html::HtmlRenderer;

use tracing::warn;

use crate::config::Settings;
use crate::error::Result;
use crate::layout::{build_chart, ChartModel};
use crate::model::TaskRecord;

/// Lay out `tasks`, write the HTML chart to `settings.output_file` and, if
/// enabled, open it in the browser. Nothing is written when the layout
/// fails.
pub fn generate_chart(tasks: &[TaskRecord], settings: &Settings) -> Result<ChartModel> {
    let model = build_chart(tasks, &settings.layout_options())?;
    HtmlRenderer::new(&settings.chart_title, settings.chart_height)
        .write(&model, &settings.output_file)?;

    if settings.open_in_browser {
        // The chart is on disk either way; a missing browser is not fatal.
        if let Err(e) = open::that(&settings.output_file) {
            warn!(path = %settings.output_file.display(), error = %e, "failed to open chart");
        }
    }
    Ok(model)
}
