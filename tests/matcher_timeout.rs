// tests/matcher_timeout.rs

use std::time::Duration;

use jobwatch::errors::JobwatchError;
use jobwatch::matcher::wait_for_events;
use jobwatch_test_utils::builders::{down_event, expectation, scripted_stream, up_event};
use jobwatch_test_utils::init_tracing;

#[tokio::test]
async fn timeout_reports_outstanding_counts() {
    init_tracing();

    // only two of the three requested downs ever arrive
    let events = vec![
        down_event("job-1", "worker", "app-1"),
        down_event("job-2", "worker", "app-1"),
    ];
    let (_tx, mut stream) = scripted_stream("app-1", events);

    let table = expectation(&[("worker", 0, 3)]);
    let err = wait_for_events(&mut stream, &table, Duration::from_millis(200))
        .await
        .unwrap_err();

    match err {
        JobwatchError::ExpectationTimeout { outstanding, .. } => {
            let left = outstanding.get("worker").expect("worker still outstanding");
            assert_eq!(left.up, 0);
            assert_eq!(left.down, 1);
        }
        other => panic!("expected timeout, got {other}"),
    }
}

#[tokio::test]
async fn timeout_message_names_the_unmet_type() {
    init_tracing();

    let (_tx, mut stream) = scripted_stream("app-1", vec![]);
    let err = wait_for_events(
        &mut stream,
        &expectation(&[("worker", 2, 0)]),
        Duration::from_millis(100),
    )
    .await
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("worker"), "message: {message}");
    assert!(message.contains("up=2"), "message: {message}");
}

#[tokio::test]
async fn timeout_is_bounded() {
    init_tracing();

    let (_tx, mut stream) = scripted_stream("app-1", vec![]);
    let start = tokio::time::Instant::now();
    let result = wait_for_events(
        &mut stream,
        &expectation(&[("worker", 1, 0)]),
        Duration::from_millis(100),
    )
    .await;

    assert!(result.is_err());
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(100), "elapsed: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(2), "elapsed: {elapsed:?}");
}

#[tokio::test]
async fn closed_stream_is_not_a_timeout() {
    init_tracing();

    let (tx, mut stream) = scripted_stream("app-1", vec![up_event("job-1", "worker", "app-1")]);
    drop(tx);

    let err = wait_for_events(
        &mut stream,
        &expectation(&[("worker", 2, 0)]),
        Duration::from_secs(3),
    )
    .await
    .unwrap_err();

    match err {
        JobwatchError::StreamClosed { outstanding } => {
            // the buffered event was still consumed before closure surfaced
            assert_eq!(outstanding.get("worker").unwrap().up, 1);
        }
        other => panic!("expected stream closure, got {other}"),
    }
}

#[tokio::test]
async fn events_after_a_timeout_serve_the_next_wait() {
    init_tracing();

    let (tx, mut stream) = scripted_stream("app-1", vec![]);

    let result = wait_for_events(
        &mut stream,
        &expectation(&[("worker", 1, 0)]),
        Duration::from_millis(100),
    )
    .await;
    assert!(result.is_err());

    // the stream stays connected; a late event belongs to the next wait
    tx.send(up_event("job-1", "worker", "app-1")).unwrap();

    let matched = wait_for_events(
        &mut stream,
        &expectation(&[("worker", 1, 0)]),
        Duration::from_secs(3),
    )
    .await
    .expect("second wait should complete")
    .expect("match");
    assert_eq!(matched.job_id, "job-1");
}
