use super::{Task, WORKER_NAME};
use crate::context::SpawnContext;
use crate::error::{BoxError, Failure};
use crate::outcome::Outcome;

/// Builder for configuring a task's worker thread before spawning it.
///
/// Currently the only knob is the worker thread's name, which shows up in
/// panic messages and debugger thread lists.
///
/// # Examples
///
/// ```rust
/// use promissum::TaskBuilder;
///
/// let task = TaskBuilder::new()
///     .name("checksum")
///     .spawn(|| Ok(0xdeadu32));
/// assert_eq!(task.wait().unwrap(), 0xdead);
/// ```
pub struct TaskBuilder {
    /// Name given to the worker thread.
    name: String,
}

impl TaskBuilder {
    /// Creates a builder with the default worker name.
    pub fn new() -> Self {
        Self {
            name: WORKER_NAME.to_string(),
        }
    }

    /// Sets the name of the worker thread.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Spawns the computation on its dedicated worker thread.
    ///
    /// Semantics are identical to [`Task::spawn`]; the builder only changes
    /// how the worker is labelled.
    #[track_caller]
    pub fn spawn<T, F>(self, compute: F) -> Task<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, BoxError> + Send + 'static,
    {
        let context = SpawnContext::capture();
        let failure_context = context.clone();

        Task::spawn_outcome(self.name, context, move || match compute() {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(Failure::new(error, failure_context)),
        })
    }
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
