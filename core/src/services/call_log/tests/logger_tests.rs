//! Unit tests for the call log and `log_call`

use tracing::Level;

use super::capture::capture;
use crate::services::call_log::{log_call, CallLog};

#[tokio::test]
async fn test_success_logs_entry_and_exit() {
    let (captured, _guard) = capture();

    let name = "jdupont".to_string();
    let result: Result<i64, String> = log_call("Demo::lookup", &[&name], async { Ok(7) }).await;

    assert_eq!(result, Ok(7));

    let events = captured.events();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].message(), "Entering method");
    assert_eq!(events[0].field("method"), Some("Demo::lookup"));
    assert_eq!(events[0].field("args"), Some("[jd****]"));

    assert_eq!(events[1].level, Level::DEBUG);
    assert_eq!(events[1].message(), "Exiting method");
    assert_eq!(events[1].field("result"), Some("7"));
    assert!(events[1].field("elapsed_ms").is_some());
}

#[tokio::test]
async fn test_failure_logged_and_propagated_unchanged() {
    let (captured, _guard) = capture();

    let result: Result<i64, String> =
        log_call("Demo::explode", &[], async { Err("boom".to_string()) }).await;

    assert_eq!(result, Err("boom".to_string()));

    let errors = captured.with_message("Exception in method");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].level, Level::ERROR);
    assert_eq!(errors[0].field("method"), Some("Demo::explode"));
    assert_eq!(errors[0].field("error"), Some("boom"));
    assert!(captured.with_message("Exiting method").is_empty());
}

#[tokio::test]
async fn test_no_arguments_and_unit_result() {
    let (captured, _guard) = capture();

    let result: Result<(), String> = log_call("Demo::ping", &[], async { Ok(()) }).await;
    assert!(result.is_ok());

    assert_eq!(captured.events()[0].field("args"), Some("[]"));
    assert_eq!(captured.events()[1].field("result"), Some("null"));
}

#[tokio::test]
async fn test_entry_logged_before_polling() {
    let (captured, _guard) = capture();

    let call = log_call("Demo::deferred", &[], async { Ok::<_, String>(1i64) });
    assert_eq!(captured.with_message("Entering method").len(), 1);
    assert!(captured.with_message("Exiting method").is_empty());

    call.await.unwrap();
    assert_eq!(captured.with_message("Exiting method").len(), 1);
}

#[test]
fn test_call_log_guard_without_runtime() {
    let (captured, _guard) = capture();

    let log = CallLog::enter("Demo::sync", &[&"0612345678".to_string()]);
    assert_eq!(log.method(), "Demo::sync");
    let outcome: Result<String, String> = log.finish(Ok("Female".to_string()));

    assert_eq!(outcome.unwrap(), "Female");
    assert_eq!(captured.events()[0].field("args"), Some("[***5678]"));
    assert_eq!(captured.events()[1].field("result"), Some("***"));
}
