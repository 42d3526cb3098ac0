use std::fmt::Display;
use std::future::Future;
use std::time::Instant;
use ur_shared::sanitize::{sanitize_args, Sanitize};

/// One in-flight call being logged.
///
/// Created by [`CallLog::enter`], consumed by [`CallLog::finish`].
#[derive(Debug)]
#[must_use = "a call log records nothing until finished"]
pub struct CallLog {
    method: &'static str,
    started: Instant,
}

impl CallLog {
    /// Record the start of `method` and log its sanitized arguments
    pub fn enter(method: &'static str, args: &[&dyn Sanitize]) -> Self {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(
                method = method,
                args = %sanitize_args(args),
                "Entering method"
            );
        }

        Self {
            method,
            started: Instant::now(),
        }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Log the outcome of the call and return it as is
    pub fn finish<T, E>(self, outcome: Result<T, E>) -> Result<T, E>
    where
        T: Sanitize,
        E: Display,
    {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(value) => {
                if tracing::enabled!(tracing::Level::DEBUG) {
                    tracing::debug!(
                        method = self.method,
                        result = %value.sanitize(),
                        elapsed_ms = elapsed_ms,
                        "Exiting method"
                    );
                }
            }
            Err(error) => {
                tracing::error!(
                    method = self.method,
                    error = %error,
                    elapsed_ms = elapsed_ms,
                    "Exception in method"
                );
            }
        }

        outcome
    }
}

/// Wrap `call` so its entry and outcome are logged under `method`.
///
/// The entry event is emitted immediately, before the returned future is
/// polled; the outcome is logged once `call` resolves.
///
/// ```no_run
/// use ur_core::services::call_log::log_call;
///
/// async fn double(n: i64) -> Result<i64, String> {
///     log_call("Math::double", &[&n], async move { Ok(n * 2) }).await
/// }
/// ```
pub fn log_call<T, E, F>(
    method: &'static str,
    args: &[&dyn Sanitize],
    call: F,
) -> impl Future<Output = Result<T, E>>
where
    F: Future<Output = Result<T, E>>,
    T: Sanitize,
    E: Display,
{
    let log = CallLog::enter(method, args);
    async move { log.finish(call.await) }
}
