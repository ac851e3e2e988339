//! Pluggable sinks for error and exception notifications.
//!
//! Every [`ApiClient`](crate::clients::ApiClient) owns an
//! `Arc<dyn ErrorHandler>`. Unsuccessful status codes and missing bodies are
//! reported through [`ErrorHandler::notify_error`]; failed exchanges caught
//! at the domain client boundary go through [`ErrorHandler::notify_exception`].
//!
//! # Implementations
//!
//! - [`ConsoleErrorHandler`]: The default, writes tagged lines to stderr/stdout
//! - [`TracingErrorHandler`]: Emits `tracing` events instead of printing
//! - [`RecordingErrorHandler`]: Captures notifications in memory for tests
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use daraja_api::clients::{ApiClient, RecordingErrorHandler};
//!
//! let recorder = Arc::new(RecordingErrorHandler::new());
//! let mut client = ApiClient::new("https://sandbox.safaricom.co.ke/mpesa/c2b/v1/simulate");
//! client.set_error_handler(recorder.clone());
//!
//! client.error_handler().notify_error("something went wrong");
//! assert_eq!(recorder.errors(), vec!["something went wrong".to_string()]);
//! ```

use std::error::Error as StdError;
use std::fmt::{self, Write as _};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Receives human-readable error and exception notifications.
pub trait ErrorHandler: fmt::Debug + Send + Sync {
    /// Reports a recoverable condition, such as a bad status code.
    fn notify_error(&self, message: &str);

    /// Reports an exceptional condition with its underlying cause.
    fn notify_exception(&self, message: &str, cause: &(dyn StdError + 'static));
}

/// Writes notifications to the standard streams.
///
/// Errors go to stderr as `[ERROR] : Message: <message>`. Exceptions go to
/// stdout as `[EXCEP] : Message: <message> - Exception: <cause> - Cause: <source>`,
/// followed by a diagnostic trace of the cause.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleErrorHandler;

impl ConsoleErrorHandler {
    /// Formats the single-line error notification.
    #[must_use]
    pub fn format_error(message: &str) -> String {
        format!("[{:>5}] : Message: {message}", "ERROR")
    }

    /// Formats the single-line exception notification.
    #[must_use]
    pub fn format_exception(message: &str, cause: &(dyn StdError + 'static)) -> String {
        let source = cause.source().map(ToString::to_string).unwrap_or_default();
        format!("[{:>5}] : Message: {message} - Exception: {cause} - Cause: {source}", "EXCEP")
    }

    /// Renders the cause and its whole source chain.
    #[must_use]
    pub fn format_trace(cause: &(dyn StdError + 'static)) -> String {
        let mut trace = format!("{cause:?}");
        let mut current = cause.source();
        while let Some(source) = current {
            let _ = write!(trace, "\ncaused by: {source}");
            current = source.source();
        }
        trace
    }
}

impl ErrorHandler for ConsoleErrorHandler {
    fn notify_error(&self, message: &str) {
        eprintln!("{}", Self::format_error(message));
    }

    fn notify_exception(&self, message: &str, cause: &(dyn StdError + 'static)) {
        println!("{}", Self::format_exception(message, cause));
        println!("{}", Self::format_trace(cause));
    }
}

/// Emits notifications as `tracing` error events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingErrorHandler;

impl ErrorHandler for TracingErrorHandler {
    fn notify_error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn notify_exception(&self, message: &str, cause: &(dyn StdError + 'static)) {
        tracing::error!(
            cause = %cause,
            trace = %ConsoleErrorHandler::format_trace(cause),
            "{message}"
        );
    }
}

/// An exception notification captured by [`RecordingErrorHandler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedException {
    /// The notification message.
    pub message: String,
    /// The `Display` rendering of the cause.
    pub cause: String,
}

#[derive(Debug, Default)]
struct Recorded {
    errors: Vec<String>,
    exceptions: Vec<RecordedException>,
}

/// Captures notifications in memory.
///
/// Share it through an `Arc` so the test keeps a handle after installing it
/// on a client.
#[derive(Debug, Default)]
pub struct RecordingErrorHandler {
    recorded: Mutex<Recorded>,
}

impl RecordingErrorHandler {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the vectors half-written.
    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the captured error messages in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.lock().errors.clone()
    }

    /// Returns the captured exceptions in order.
    #[must_use]
    pub fn exceptions(&self) -> Vec<RecordedException> {
        self.lock().exceptions.clone()
    }

    /// Returns `true` if nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let recorded = self.lock();
        recorded.errors.is_empty() && recorded.exceptions.is_empty()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        let mut recorded = self.lock();
        recorded.errors.clear();
        recorded.exceptions.clear();
    }
}

impl ErrorHandler for RecordingErrorHandler {
    fn notify_error(&self, message: &str) {
        self.lock().errors.push(message.to_string());
    }

    fn notify_exception(&self, message: &str, cause: &(dyn StdError + 'static)) {
        self.lock().exceptions.push(RecordedException {
            message: message.to_string(),
            cause: cause.to_string(),
        });
    }
}

// Verify handlers are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConsoleErrorHandler>();
    assert_send_sync::<TracingErrorHandler>();
    assert_send_sync::<RecordingErrorHandler>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Root;

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct Outer(#[source] Root);

    #[test]
    fn test_console_error_format_has_tag() {
        assert_eq!(
            ConsoleErrorHandler::format_error("bad status"),
            "[ERROR] : Message: bad status"
        );
    }

    #[test]
    fn test_console_exception_format_includes_cause_and_source() {
        let line = ConsoleErrorHandler::format_exception("Error executing C2B Request", &Outer(Root));
        assert_eq!(
            line,
            "[EXCEP] : Message: Error executing C2B Request - Exception: request failed - Cause: connection refused"
        );
    }

    #[test]
    fn test_console_exception_format_without_source() {
        let line = ConsoleErrorHandler::format_exception("oops", &Root);
        assert!(line.ends_with("- Cause: "));
    }

    #[test]
    fn test_trace_walks_source_chain() {
        let trace = ConsoleErrorHandler::format_trace(&Outer(Root));
        assert!(trace.starts_with("Outer(Root)"));
        assert!(trace.contains("caused by: connection refused"));
    }

    #[test]
    fn test_recorder_captures_in_order() {
        let recorder = RecordingErrorHandler::new();
        assert!(recorder.is_empty());

        recorder.notify_error("first");
        recorder.notify_error("second");
        recorder.notify_exception("boom", &Root);

        assert_eq!(recorder.errors(), vec!["first", "second"]);
        assert_eq!(
            recorder.exceptions(),
            vec![RecordedException {
                message: "boom".to_string(),
                cause: "connection refused".to_string(),
            }]
        );

        recorder.clear();
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_handlers_usable_as_trait_objects() {
        let handlers: Vec<Arc<dyn ErrorHandler>> = vec![
            Arc::new(ConsoleErrorHandler),
            Arc::new(TracingErrorHandler),
            Arc::new(RecordingErrorHandler::new()),
        ];
        for handler in handlers {
            handler.notify_error("ignored");
        }
    }
}
