//! Logging setup and the logger handle passed to the component.

use std::fmt;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Handle to a `tracing` dispatcher.
///
/// Events emitted through [`Logger::in_scope`] go to this dispatcher
/// regardless of the thread's current default, so a component can log to a
/// subscriber other than the global one.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Captures the dispatcher that is current for the calling thread
    /// (the global subscriber after [`init`]).
    pub fn current() -> Self {
        Self {
            dispatch: tracing::dispatcher::get_default(|d| d.clone()),
        }
    }

    /// Runs `f` with this logger's dispatcher as the default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Installs the global subscriber.
///
/// `log_level` is an `EnvFilter` directive string (`RUST_LOG` syntax);
/// `log_format` is `text` or `json`.
pub fn init(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
