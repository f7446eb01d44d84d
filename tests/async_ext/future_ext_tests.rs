//! Tests for the FutureRailExt adapters.

use outcome_rail::async_ext::{MapFuture, WithErrorFuture};
use outcome_rail::prelude_async::*;
use std::sync::atomic::{AtomicU32, Ordering};

#[test]
fn adapters_are_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<MapFuture<std::future::Ready<Fallible<i32>>, fn(i32) -> i32>>();
    assert_sync::<MapFuture<std::future::Ready<Fallible<i32>>, fn(i32) -> i32>>();
    assert_send::<WithErrorFuture<std::future::Ready<Maybe<i32>>, fn(Error) -> Error>>();
    assert_sync::<WithErrorFuture<std::future::Ready<Maybe<i32>>, fn(Error) -> Error>>();
}

#[tokio::test]
async fn map_value_transforms_resolved_success() {
    let result = async { Fallible::success(20) }.map_value(|v| v + 1).await;
    assert_eq!(result, Fallible::success(21));

    let maybe = async { Maybe::some("abc") }.map_value(str::len).await;
    assert_eq!(maybe, Maybe::some(3));
}

#[tokio::test]
async fn map_value_is_not_evaluated_on_failure() {
    let call_count = AtomicU32::new(0);

    let result = async { Fallible::<i32>::fail(Error::new("boom")) }
        .map_value(|v| {
            call_count.fetch_add(1, Ordering::SeqCst);
            v
        })
        .await;

    assert!(result.is_fail());
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn with_error_evaluates_only_on_failure() {
    let call_count = AtomicU32::new(0);

    let ok = async { Outcome::success() }
        .with_error(|error| {
            call_count.fetch_add(1, Ordering::SeqCst);
            error
        })
        .await;
    assert!(ok.is_success());
    assert_eq!(call_count.load(Ordering::SeqCst), 0);

    let failed = async { Outcome::fail(Error::new("disk")) }
        .with_error(|error| {
            call_count.fetch_add(1, Ordering::SeqCst);
            error.with_identifier("storage")
        })
        .await;
    assert_eq!(failed.err().unwrap().identifier(), Some("storage"));
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn adapters_compose_before_awaiting() {
    async fn lookup(id: u32) -> Maybe<u32> {
        tokio::task::yield_now().await;
        if id == 0 {
            Maybe::fail(Error::new("invalid id"))
        } else {
            Maybe::none()
        }
    }

    let none = lookup(1).with_error(|e| e.with_code(400)).map_value(|v| v * 2).await;
    assert!(none.is_none());

    let failed = lookup(0).with_error(|e| e.with_code(400)).map_value(|v| v * 2).await;
    assert_eq!(failed.err().unwrap().error_code(), Some(400));
}

#[tokio::test]
async fn canceled_error_reports_cancellation() {
    let handle = tokio::spawn(async {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Fallible::success(1)
    });
    handle.abort();

    let result = match handle.await {
        Ok(value) => value,
        Err(join_error) if join_error.is_cancelled() => Fallible::fail(Error::canceled()),
        Err(join_error) => Fallible::fail(Error::new(join_error.to_string())),
    };

    assert!(result.err().unwrap().is_canceled());
}
