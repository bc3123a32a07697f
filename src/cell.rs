use std::sync::{Condvar, Mutex};
use tracing::warn;

/// A single-assignment, multi-reader slot.
///
/// The cell is the one join point between the worker that produces a task's
/// outcome and every observer waiting for it. It starts empty, is written at
/// most once, and after that write it is effectively read-only; the mutex
/// hand-off guarantees that any reader observing a non-empty slot sees the
/// fully formed value.
pub(crate) struct ResultCell<T> {
    /// The slot itself. `None` until the single write happens.
    slot: Mutex<Option<T>>,

    /// Wakes every thread blocked in [`ResultCell::wait`] once the slot
    /// is filled.
    filled: Condvar,
}

impl<T> ResultCell<T> {
    /// Creates an empty cell.
    pub(crate) fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            filled: Condvar::new(),
        }
    }

    /// Creates a cell that is already set, for pre-resolved tasks.
    pub(crate) fn with(value: T) -> Self {
        Self {
            slot: Mutex::new(Some(value)),
            filled: Condvar::new(),
        }
    }

    /// Fills the slot and wakes all blocked waiters.
    ///
    /// Writable at most once. A second call is a programming error; the
    /// first value is kept and the late one is dropped.
    pub(crate) fn set(&self, value: T) {
        let mut slot = self.slot.lock().unwrap();
        if slot.is_some() {
            warn!("result cell set twice; keeping the first value");
            return;
        }
        *slot = Some(value);
        self.filled.notify_all();
    }

    /// Non-blocking read of the slot.
    pub(crate) fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.slot.lock().unwrap().clone()
    }

    /// Returns `true` once the slot has been filled.
    pub(crate) fn is_set(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }

    /// Blocks the calling thread until the slot is filled, then returns
    /// the value.
    ///
    /// Any number of threads may wait concurrently. A spurious condvar
    /// wakeup re-checks the slot and goes back to waiting; there is no path
    /// by which this returns before the value exists.
    pub(crate) fn wait(&self) -> T
    where
        T: Clone,
    {
        let mut slot = self.slot.lock().unwrap();
        loop {
            match &*slot {
                Some(value) => return value.clone(),
                None => slot = self.filled.wait(slot).unwrap(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResultCell;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_peek_empty_then_set() {
        let cell = ResultCell::new();
        assert_eq!(cell.peek(), None);
        assert!(!cell.is_set());

        cell.set(7);
        assert_eq!(cell.peek(), Some(7));
        assert!(cell.is_set());
    }

    #[test]
    fn test_second_set_keeps_first_value() {
        let cell = ResultCell::new();
        cell.set(1);
        cell.set(2);
        assert_eq!(cell.peek(), Some(1));
    }

    #[test]
    fn test_wait_returns_pre_set_value() {
        let cell = ResultCell::with("ready");
        assert_eq!(cell.wait(), "ready");
    }

    #[test]
    fn test_many_waiters_observe_single_write() {
        let cell = Arc::new(ResultCell::new());

        let waiters: Vec<_> = (0..8)
            .map(|_| {
                let cell = cell.clone();
                thread::spawn(move || cell.wait())
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        cell.set(42);

        for waiter in waiters {
            assert_eq!(waiter.join().unwrap(), 42, "every waiter sees the value");
        }
    }
}
