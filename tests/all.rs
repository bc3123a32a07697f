use promissum::Task;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[test]
fn test_all_preserves_input_order() {
    let all = Task::all([Task::resolved(1), Task::resolved(2), Task::resolved(3)]);
    assert_eq!(all.wait().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_all_orders_by_input_not_by_completion() {
    let slow_first = Task::spawn(|| {
        thread::sleep(Duration::from_millis(100));
        Ok(1)
    });
    let instant_second = Task::resolved(2);
    let quick_third = Task::spawn(|| {
        thread::sleep(Duration::from_millis(20));
        Ok(3)
    });

    let all = Task::all([slow_first, instant_second, quick_third]);
    assert_eq!(
        all.wait().unwrap(),
        vec![1, 2, 3],
        "values follow input order, not completion order"
    );
}

#[test]
fn test_all_of_nothing_resolves_to_empty() {
    let all = Task::all(Vec::<Task<i32>>::new());
    assert_eq!(all.wait().unwrap(), Vec::<i32>::new());
}

#[test]
fn test_all_fails_with_first_failure_in_input_order() {
    // The first input fails last chronologically, but it is the one the
    // aggregate reports because it comes first in iteration order.
    let late_first = Task::<i32>::spawn(|| {
        thread::sleep(Duration::from_millis(80));
        Err("late-first".into())
    });
    let fast_second: Task<i32> = Task::failed("fast-second");

    let all = Task::all([late_first, fast_second]);
    let error = all.wait().unwrap_err();
    assert_eq!(error.failure().cause().to_string(), "late-first");
}

#[test]
fn test_all_does_not_cancel_the_losers() {
    let finished = Arc::new(AtomicUsize::new(0));
    let witness = finished.clone();

    let doomed: Task<i32> = Task::failed("doomed");
    let survivor = Task::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        witness.fetch_add(1, Ordering::SeqCst);
        Ok(1)
    });

    let all = Task::all([doomed, survivor.clone()]);
    assert!(all.wait().is_err());

    // The aggregate failed on the first input, but the second keeps running.
    assert_eq!(survivor.wait().unwrap(), 1);
    assert_eq!(
        finished.load(Ordering::SeqCst),
        1,
        "in-flight inputs run to completion"
    );
}

#[test]
fn test_all_composes_with_combinators() {
    let sum = Task::all([Task::resolved(1), Task::resolved(2), Task::resolved(3)])
        .map(|values| values.into_iter().sum::<i32>());
    assert_eq!(sum.wait().unwrap(), 6);
}
