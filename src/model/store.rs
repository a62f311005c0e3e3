use crate::error::{Error, Result};

use super::task::TaskRecord;

/// Ordered list of tasks being edited.
///
/// All mutation goes through index-based operations; an out-of-range index
/// is reported as an error and leaves the list unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<TaskRecord>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }

    /// Current contents, in list order. Chart generation reads this.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.tasks.get(index)
    }

    /// Append a task and return its index.
    pub fn push(&mut self, task: TaskRecord) -> usize {
        self.tasks.push(task);
        self.tasks.len() - 1
    }

    /// Replace the task at `index` in place.
    pub fn update(&mut self, index: usize, task: TaskRecord) -> Result<()> {
        let len = self.tasks.len();
        let slot = self
            .tasks
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = task;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<TaskRecord> {
        self.check(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Swap the task with the one above it. Returns the task's new index;
    /// the first task stays where it is.
    pub fn move_up(&mut self, index: usize) -> Result<usize> {
        self.check(index)?;
        if index == 0 {
            return Ok(0);
        }
        self.tasks.swap(index, index - 1);
        Ok(index - 1)
    }

    /// Swap the task with the one below it. Returns the task's new index;
    /// the last task stays where it is.
    pub fn move_down(&mut self, index: usize) -> Result<usize> {
        self.check(index)?;
        if index + 1 == self.tasks.len() {
            return Ok(index);
        }
        self.tasks.swap(index, index + 1);
        Ok(index + 1)
    }

    /// Move the task at `from` so that it ends up at position `to`, shifting
    /// the tasks in between. Used by drag-and-drop reordering.
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<usize> {
        self.check(from)?;
        self.check(to)?;
        if from != to {
            let task = self.tasks.remove(from);
            self.tasks.insert(to, task);
        }
        Ok(to)
    }

    /// Replace the whole list (CSV import). Callers only reach this after
    /// the new contents have been fully parsed.
    pub fn replace_all(&mut self, tasks: Vec<TaskRecord>) {
        self.tasks = tasks;
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }
}
