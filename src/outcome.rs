use crate::error::Failure;

/// The completed result of a task.
///
/// An `Outcome` is written into a task's result cell exactly once and never
/// changes afterwards. The two arms are total: a `Success` always carries a
/// value and a `Failure` always carries the error that produced it, so an
/// observer holding an `Outcome` never has to deal with a half-built result.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The computation returned a value.
    Success(T),
    /// The computation raised an error (or panicked).
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Returns `true` if this outcome is a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this outcome is a `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the success value, discarding a failure.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the stored failure, discarding a success value.
    pub fn failure(self) -> Option<Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Converts the outcome into a standard `Result`.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Result<T, Failure>> for Outcome<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(failure) => Outcome::Failure(failure),
        }
    }
}
