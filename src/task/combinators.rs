use super::Task;
use crate::context::SpawnContext;
use crate::error::{BoxError, Failure};
use crate::outcome::Outcome;

/// Result-transforming combinators.
///
/// Every combinator spawns its own computation-backed task, whose worker
/// first blocks on the source task. A chain of N combinators therefore costs
/// N workers, each waiting on its predecessor. That linear cost is part of
/// the contract, not an accident.
impl<T: Clone + Send + 'static> Task<T> {
    /// Chains a task-producing continuation onto this task.
    ///
    /// If this task failed, the new task short-circuits to the same failure
    /// and `continuation` is never invoked. If it succeeded, `continuation`
    /// receives the value and must produce an inner task; the new task adopts
    /// that inner task's eventual outcome, so failures are not double-wrapped.
    /// A panic inside `continuation` becomes the new task's failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissum::Task;
    ///
    /// let task = Task::resolved(2).and(|n| Task::spawn(move || Ok(n * 10)));
    /// assert_eq!(task.wait().unwrap(), 20);
    /// ```
    #[track_caller]
    pub fn and<V, F>(&self, continuation: F) -> Task<V>
    where
        V: Clone + Send + 'static,
        F: FnOnce(T) -> Task<V> + Send + 'static,
    {
        let context = SpawnContext::capture();
        let source = self.clone();

        Task::spawn_outcome("task-and".to_string(), context, move || {
            match source.wait_outcome() {
                Outcome::Success(value) => continuation(value).wait_outcome(),
                Outcome::Failure(failure) => Outcome::Failure(failure),
            }
        })
    }

    /// Transforms this task's success value with a plain function.
    ///
    /// Short-circuits on failure like [`Task::and`], but `transform` returns
    /// a value rather than a task, so there is nothing to flatten. A panic
    /// inside `transform` becomes the new task's failure.
    #[track_caller]
    pub fn map<V, F>(&self, transform: F) -> Task<V>
    where
        V: Send + 'static,
        F: FnOnce(T) -> V + Send + 'static,
    {
        let context = SpawnContext::capture();
        let source = self.clone();

        Task::spawn_outcome("task-map".to_string(), context, move || {
            match source.wait_outcome() {
                Outcome::Success(value) => Outcome::Success(transform(value)),
                Outcome::Failure(failure) => Outcome::Failure(failure),
            }
        })
    }

    /// Recovers from a failure, leaving a success untouched.
    ///
    /// If this task succeeded, the new task resolves to the same value and
    /// `recover` is never invoked. If it failed, `recover` receives the
    /// stored failure; an `Ok` return becomes the new success, while an `Err`
    /// (or a panic) fails the new task, which makes both re-raising and
    /// error translation expressible.
    ///
    /// Because the success path forwards the original value, `or` cannot
    /// change the task's value type; use [`Task::and`] or [`Task::map`]
    /// for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissum::Task;
    ///
    /// let task: Task<i32> = Task::failed("broken").or(|_| Ok(-1));
    /// assert_eq!(task.wait().unwrap(), -1);
    /// ```
    #[track_caller]
    pub fn or<F>(&self, recover: F) -> Task<T>
    where
        F: FnOnce(Failure) -> Result<T, BoxError> + Send + 'static,
    {
        let context = SpawnContext::capture();
        let failure_context = context.clone();
        let source = self.clone();

        Task::spawn_outcome("task-or".to_string(), context, move || {
            match source.wait_outcome() {
                Outcome::Success(value) => Outcome::Success(value),
                Outcome::Failure(failure) => match recover(failure) {
                    Ok(value) => Outcome::Success(value),
                    Err(error) => Outcome::Failure(Failure::new(error, failure_context)),
                },
            }
        })
    }
}
