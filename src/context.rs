use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// The call site a task was created from.
///
/// Captured once, on the creating thread, before the worker starts. When the
/// task's computation fails on the worker thread, the failure carries this
/// context in addition to the error's own origin, so diagnostics show both
/// where the error happened and where the task was spawned. The capture is
/// purely diagnostic and never affects control flow.
///
/// The source location comes from `#[track_caller]`, which means frames
/// internal to task construction are excluded by construction. The backtrace
/// follows the usual `RUST_BACKTRACE` rules and is disabled unless requested.
#[derive(Debug)]
pub struct SpawnContext {
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl SpawnContext {
    /// Captures the caller's location and a backtrace of the current thread.
    #[track_caller]
    pub(crate) fn capture() -> Arc<Self> {
        Arc::new(Self {
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        })
    }

    /// The source location the task was created from.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// The backtrace of the creating thread at construction time.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for SpawnContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task spawned at {}", self.location)
    }
}
