use std::time::Duration;

use error_trace::async_ext::{timeout_traced, TIMEOUT_DETAIL};
use error_trace::{CallSite, Code, TracedError};

#[tokio::test]
async fn completes_within_deadline() {
    let value = timeout_traced(Duration::from_secs(1), async { Ok::<_, TracedError>(3) })
        .await
        .expect("ok");
    assert_eq!(value, 3);
}

#[tokio::test]
async fn inner_error_is_traced_at_caller() {
    let inner = async { Err::<(), _>(TracedError::new(Code::CONFLICT)) };
    let (future, line) = (timeout_traced(Duration::from_secs(1), inner), line!());
    let err = future.await.unwrap_err();

    assert_eq!(err.code(), &Code::CONFLICT);
    assert_eq!(err.call_site().map(CallSite::line), Some(i64::from(line)));
}

#[tokio::test(start_paused = true)]
async fn elapsed_deadline_becomes_timeout_error() {
    let slow = async {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok::<_, TracedError>(())
    };

    let err = timeout_traced(Duration::from_millis(250), slow).await.unwrap_err();
    assert_eq!(err.code(), &Code::TIMEOUT);
    assert_eq!(err.reason(), "timeout");
    assert_eq!(err.detail(TIMEOUT_DETAIL), Some("250ms"));
    assert_eq!(err.message(), "deadline has elapsed");
}
