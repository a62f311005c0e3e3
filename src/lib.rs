//! gantt-chart-maker: keep an ordered list of project tasks and render it
//! as a Gantt timeline.
//!
//! The library holds everything except the desktop UI: the task model and
//! store, the timeline layout engine, CSV exchange, settings and the HTML
//! chart renderer.

pub mod config;
pub mod error;
pub mod io;
pub mod layout;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use layout::{build_chart, ChartModel, LayoutOptions, RenderRow};
pub use model::{TaskDraft, TaskRecord, TaskStatus, TaskStore};
