use crate::context::SpawnContext;

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use thiserror::Error as ThisError;

/// The boxed error type accepted at every fallible boundary of the crate.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The stored error of a failed task.
///
/// A `Failure` pairs the original cause with the [`SpawnContext`] of the task
/// whose computation produced it. It is cheap to clone and is forwarded
/// untouched by short-circuiting combinators, so a failure observed at the end
/// of a chain is the same value that was stored by the task that failed.
#[derive(Debug, Clone)]
pub struct Failure {
    cause: Arc<dyn Error + Send + Sync + 'static>,
    context: Arc<SpawnContext>,
}

impl Failure {
    pub(crate) fn new(cause: BoxError, context: Arc<SpawnContext>) -> Self {
        Self {
            cause: Arc::from(cause),
            context,
        }
    }

    /// Builds a failure from a caught panic payload.
    ///
    /// Panic payloads are almost always a `&str` or a `String`; anything else
    /// is reported with a generic message.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>, context: Arc<SpawnContext>) -> Self {
        let message = match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(payload) => match payload.downcast::<String>() {
                Ok(message) => *message,
                Err(_) => "task computation panicked".to_string(),
            },
        };
        Self::new(Box::new(PanicError { message }), context)
    }

    /// The original error raised by the computation.
    pub fn cause(&self) -> &(dyn Error + 'static) {
        &*self.cause
    }

    /// The context of the task whose computation produced this failure.
    pub fn context(&self) -> &SpawnContext {
        &self.context
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.cause, self.context)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

/// A panic caught at the worker's catch-all boundary, preserved as an error.
#[derive(Debug, ThisError)]
#[error("computation panicked: {message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// The panic message, as far as it could be recovered from the payload.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The uniform error returned by [`Task::wait`](crate::Task::wait).
///
/// Every failed task surfaces through this one type regardless of what the
/// computation originally raised; the stored [`Failure`] is available as the
/// error's source and through [`WaitError::failure`].
#[derive(Debug, Clone, ThisError)]
#[error("task failed: {failure}")]
pub struct WaitError {
    #[from]
    failure: Failure,
}

impl WaitError {
    /// The failure this error wraps.
    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    /// Unwraps the error into the stored failure.
    pub fn into_failure(self) -> Failure {
        self.failure
    }
}
