use super::Task;
use crate::context::SpawnContext;
use crate::outcome::Outcome;

impl<T: Clone + Send + 'static> Task<T> {
    /// Joins an ordered collection of tasks into one task over their values.
    ///
    /// The aggregate's worker blocks on each input task in input order and
    /// collects the values into a `Vec` preserving that order. If an input
    /// failed, the aggregate fails with that same failure; specifically the
    /// first failure encountered while iterating in order, which need not be
    /// the first failure chronologically. The remaining inputs are not
    /// cancelled and run to completion on their own workers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use promissum::Task;
    ///
    /// let all = Task::all([Task::resolved(1), Task::resolved(2), Task::resolved(3)]);
    /// assert_eq!(all.wait().unwrap(), vec![1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn all<I>(tasks: I) -> Task<Vec<T>>
    where
        I: IntoIterator<Item = Task<T>>,
    {
        let context = SpawnContext::capture();
        let tasks: Vec<Task<T>> = tasks.into_iter().collect();

        Task::spawn_outcome("task-all".to_string(), context, move || {
            let mut values = Vec::with_capacity(tasks.len());
            for task in &tasks {
                match task.wait_outcome() {
                    Outcome::Success(value) => values.push(value),
                    Outcome::Failure(failure) => return Outcome::Failure(failure),
                }
            }
            Outcome::Success(values)
        })
    }
}
