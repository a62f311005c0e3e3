pub mod store;
pub mod task;
pub mod timeline;

pub use store::TaskStore;
pub use task::{TaskDraft, TaskRecord, TaskStatus};
pub use timeline::TimelineViewport;
