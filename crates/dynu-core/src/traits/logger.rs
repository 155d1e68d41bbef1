//! Optional logging capability
//!
//! The client always emits `tracing` events. A [`Logger`] additionally
//! receives the same messages, for embedders that route diagnostics
//! somewhere else. Messages never contain the raw password.

use std::fmt;

/// Sink for formatted diagnostic messages
pub trait Logger: Send + Sync {
    /// Accept one formatted message
    fn log(&self, message: fmt::Arguments<'_>);
}

impl<F> Logger for F
where
    F: Fn(fmt::Arguments<'_>) + Send + Sync,
{
    fn log(&self, message: fmt::Arguments<'_>) {
        self(message)
    }
}

/// Logger that forwards every message to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "dynu", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_closure_logger() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let logger = move |message: fmt::Arguments<'_>| {
            sink.lock().unwrap().push(message.to_string());
        };

        logger.log(format_args!("updating {} host(s)", 2));
        assert_eq!(*lines.lock().unwrap(), vec!["updating 2 host(s)".to_string()]);
    }

    #[test]
    fn test_tracing_logger_as_trait_object() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        logger.log(format_args!("no subscriber installed"));
    }
}
