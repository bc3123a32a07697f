//! # Promissum
//!
//! **Promissum** is a minimal future/promise primitive built on dedicated OS
//! threads. Each computation-backed [`Task`] runs on its own worker, writes
//! its [`Outcome`] into a single-assignment cell exactly once, and lets any
//! number of observers block until that outcome exists.
//!
//! There is no runtime, no pooling, no cancellation, and no timeouts; cost is
//! one thread per task, by design. What the crate does provide:
//!
//! - **Blocking wait** — [`Task::wait`] parks the calling thread until the
//!   outcome is available, absorbing spurious wakeups
//! - **Combinators** — [`Task::and`], [`Task::map`], and [`Task::or`] derive
//!   new tasks that short-circuit upstream failures
//! - **Aggregation** — [`Task::all`] joins an ordered collection of tasks
//!   into one order-preserving task
//! - **Spawn-site diagnostics** — every failure carries the context of the
//!   call site that created the task, restoring locality across the thread
//!   boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use promissum::Task;
//!
//! let task = Task::spawn(|| Ok(21))
//!     .map(|n| n * 2)
//!     .and(|n| Task::resolved(n == 42));
//!
//! assert_eq!(task.wait().unwrap(), true);
//! ```
//!
//! Failures are values until a consumer waits:
//!
//! ```rust
//! use promissum::Task;
//!
//! let task: Task<i32> = Task::failed("backend unavailable").or(|_| Ok(-1));
//! assert_eq!(task.wait().unwrap(), -1);
//! ```

mod cell;
mod context;
mod error;
mod outcome;
mod task;

pub use context::SpawnContext;
pub use error::{BoxError, Failure, PanicError, WaitError};
pub use outcome::Outcome;
pub use task::{Task, TaskBuilder};
