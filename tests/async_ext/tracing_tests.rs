//! Tests for span integration.

use outcome_rail::tracing_ext::{instrument_error, FutureSpanExt, SpanExt};
use outcome_rail::{Error, Fallible, Maybe, Outcome};

#[test]
fn in_span_wraps_failures_only() {
    let span = tracing::info_span!("load_config");

    let failed: Fallible<()> = Fallible::fail(Error::new("missing file")).in_span(&span);
    let error = failed.err().unwrap();
    assert!(error.message().starts_with("in span '"));
    assert_eq!(error.inner().unwrap().message(), "missing file");

    assert_eq!(Fallible::success(1).in_span(&span), Fallible::success(1));
    assert!(Maybe::<i32>::none().in_current_span().is_none());
}

#[test]
fn instrument_error_keeps_root_cause() {
    let wrapped = instrument_error(Error::new("timeout").with_code(504));
    assert_eq!(wrapped.root_cause().error_code(), Some(504));
    assert_eq!(wrapped.chain().count(), 2);
}

#[tokio::test]
async fn span_context_future_wraps_failure() {
    let span = tracing::info_span!("fetch_user");

    let failed = async { Outcome::fail(Error::new("not found")) }.with_span(span).await;
    let error = failed.err().unwrap();
    assert_eq!(error.root_cause().message(), "not found");

    let ok = async { Outcome::success() }.with_span_context().await;
    assert!(ok.is_success());
}
