mod aggregate;
mod builder;
mod combinators;
mod worker;

pub use builder::TaskBuilder;

use crate::cell::ResultCell;
use crate::context::SpawnContext;
use crate::error::{BoxError, Failure, WaitError};
use crate::outcome::Outcome;

use std::sync::Arc;

/// The default name of a worker thread backing a task.
pub(crate) const WORKER_NAME: &str = "task-worker";

/// A handle to the eventual outcome of a computation.
///
/// A `Task` owns exactly one result cell. For pre-resolved tasks the cell is
/// filled synchronously at construction; for computation-backed tasks a
/// dedicated worker thread fills it when the computation finishes. Cloning a
/// `Task` clones the handle, not the computation: every clone observes the
/// same single outcome, and any number of them may block in [`Task::wait`]
/// concurrently.
///
/// There is no cancellation and no pooling. Each computation-backed task costs
/// one thread, workers are detached, and dropping every handle does not stop
/// the computation; it runs to completion on its own.
///
/// # Examples
///
/// ```rust
/// use promissum::Task;
///
/// let doubled = Task::spawn(|| Ok(21)).map(|n| n * 2);
/// assert_eq!(doubled.wait().unwrap(), 42);
/// ```
pub struct Task<T> {
    /// The single join point between the producing worker and all observers.
    cell: Arc<ResultCell<Outcome<T>>>,
}

impl<T> Clone for Task<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T> Task<T> {
    /// Creates a task that is already resolved with `value`.
    ///
    /// No worker thread is created; the outcome is set synchronously.
    pub fn resolved(value: T) -> Self {
        Self {
            cell: Arc::new(ResultCell::with(Outcome::Success(value))),
        }
    }

    /// Creates a task that has already failed with `error`.
    ///
    /// No worker thread is created. The failure carries the context of this
    /// call site, like any failure produced by a computation would.
    #[track_caller]
    pub fn failed(error: impl Into<BoxError>) -> Self {
        let context = SpawnContext::capture();
        Self {
            cell: Arc::new(ResultCell::with(Outcome::Failure(Failure::new(
                error.into(),
                context,
            )))),
        }
    }

    /// Returns `true` once the task's outcome has been written.
    pub fn is_complete(&self) -> bool {
        self.cell.is_set()
    }

    pub(crate) fn from_cell(cell: Arc<ResultCell<Outcome<T>>>) -> Self {
        Self { cell }
    }
}

impl<T: Send + 'static> Task<T> {
    /// Runs `compute` on a dedicated worker thread and returns the task
    /// observing it.
    ///
    /// The worker starts immediately. An `Err` return or a panic inside
    /// `compute` becomes the task's `Failure`; a returned value becomes its
    /// `Success`. Nothing raised by the computation can escape the task:
    /// the only way to observe it is to read the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissum::Task;
    ///
    /// let task = Task::spawn(|| Ok("done"));
    /// assert_eq!(task.wait().unwrap(), "done");
    /// ```
    #[track_caller]
    pub fn spawn<F>(compute: F) -> Self
    where
        F: FnOnce() -> Result<T, BoxError> + Send + 'static,
    {
        TaskBuilder::new().spawn(compute)
    }

    /// Spawns a worker that produces an `Outcome` directly.
    ///
    /// Combinators use this to forward an upstream `Failure` untouched
    /// instead of re-wrapping it.
    pub(crate) fn spawn_outcome<F>(name: String, context: Arc<SpawnContext>, compute: F) -> Self
    where
        F: FnOnce() -> Outcome<T> + Send + 'static,
    {
        Self::from_cell(worker::spawn_worker(name, context, compute))
    }
}

impl<T: Clone> Task<T> {
    /// Blocks the calling thread until the outcome is available, then
    /// returns the success value.
    ///
    /// Every failure surfaces as a [`WaitError`] wrapping the stored
    /// [`Failure`], so all failed tasks report through one error channel
    /// regardless of what the computation originally raised. Blocking follows
    /// the result cell's rules: any number of threads may wait at once, and a
    /// spurious wakeup never causes an early return.
    pub fn wait(&self) -> Result<T, WaitError> {
        match self.cell.wait() {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(WaitError::from(failure)),
        }
    }

    /// Non-blocking read of the outcome, if it has been written yet.
    pub fn peek(&self) -> Option<Outcome<T>> {
        self.cell.peek()
    }

    pub(crate) fn wait_outcome(&self) -> Outcome<T> {
        self.cell.wait()
    }
}
