use crate::cell::ResultCell;
use crate::context::SpawnContext;
use crate::error::Failure;
use crate::outcome::Outcome;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread;
use tracing::trace;

/// Starts the dedicated worker thread for one computation-backed task.
///
/// The worker runs `compute` inside a catch-all boundary: a panic is caught
/// and converted into a `Failure`, so no error raised by a computation can
/// reach a process-wide unhandled path. Whatever the boundary produces is
/// written into the returned cell exactly once, waking all blocked observers.
///
/// If the OS refuses to spawn the thread, the cell is filled synchronously
/// with a `Failure` carrying the spawn error.
pub(crate) fn spawn_worker<T, F>(
    name: String,
    context: Arc<SpawnContext>,
    compute: F,
) -> Arc<ResultCell<Outcome<T>>>
where
    T: Send + 'static,
    F: FnOnce() -> Outcome<T> + Send + 'static,
{
    let cell = Arc::new(ResultCell::new());

    let worker_cell = cell.clone();
    let worker_context = context.clone();
    let body = move || {
        trace!(spawned_at = %worker_context.location(), "task worker started");

        let outcome = match catch_unwind(AssertUnwindSafe(compute)) {
            Ok(outcome) => outcome,
            Err(payload) => Outcome::Failure(Failure::from_panic(payload, worker_context.clone())),
        };

        let failed = outcome.is_failure();
        worker_cell.set(outcome);

        trace!(failed, "task worker finished");
    };

    if let Err(error) = thread::Builder::new().name(name).spawn(body) {
        cell.set(Outcome::Failure(Failure::new(Box::new(error), context)));
    }

    cell
}
