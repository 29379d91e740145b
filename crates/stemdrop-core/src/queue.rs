//! The visible upload queue.
//!
//! One [`UploadTask`] per dropped file. Transfer progress belongs to the
//! browser; this models only what the queue renders -- name and outcome.
//! An outcome is settled exactly once: success and failure are mutually
//! exclusive and a settled task never changes again.

use std::fmt;

/// Identifier for one upload task, unique within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal or in-flight state of one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOutcome {
    /// The transfer has been issued and no outcome has landed yet.
    InFlight,
    /// The server answered 2xx.
    Succeeded,
    /// Validation, transport, or server failure. Failed tasks stay in
    /// the queue; the user re-drops the file.
    Failed,
}

/// One file moving through (or rejected by) the upload path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTask {
    id: TaskId,
    filename: String,
    outcome: TaskOutcome,
}

impl UploadTask {
    /// Queue-unique identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Name of the dropped file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Current outcome.
    #[must_use]
    pub const fn outcome(&self) -> TaskOutcome {
        self.outcome
    }
}

/// Ordered collection of upload tasks with monotonically increasing ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadQueue {
    next_id: u64,
    tasks: Vec<UploadTask>,
}

impl UploadQueue {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Add an in-flight task for an accepted file.
    pub fn push(&mut self, filename: impl Into<String>) -> TaskId {
        self.insert(filename.into(), TaskOutcome::InFlight)
    }

    /// Add an already-failed task for a file rejected client-side.
    pub fn push_failed(&mut self, filename: impl Into<String>) -> TaskId {
        self.insert(filename.into(), TaskOutcome::Failed)
    }

    fn insert(&mut self, filename: String, outcome: TaskOutcome) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(UploadTask {
            id,
            filename,
            outcome,
        });
        id
    }

    /// Settle an in-flight task.
    ///
    /// Returns `false` (and changes nothing) for unknown ids and for
    /// tasks that already have a terminal outcome.
    pub fn settle(&mut self, id: TaskId, outcome: TaskOutcome) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if task.outcome != TaskOutcome::InFlight {
            return false;
        }
        task.outcome = outcome;
        true
    }

    /// Drop a task from the visible queue.
    ///
    /// Returns `false` when the id is unknown (e.g. already removed).
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[UploadTask] {
        &self.tasks
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
