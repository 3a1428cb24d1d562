//! Error logging for endpoints.

use crate::endpoint::{Endpoint, Middleware};
use crate::error::AppError;
use crate::logging::Logger;

/// Logs every error returned by the wrapped endpoint, once, tagged with the
/// component and endpoint names.
///
/// Placed innermost in a chain, next to the application service, so it sees
/// service errors only: rejections produced by outer middlewares never reach it.
#[derive(Debug, Clone)]
pub struct ErrorLogging {
    logger: Logger,
    component: &'static str,
    endpoint: String,
}

impl ErrorLogging {
    pub fn new(logger: Logger, component: &'static str, endpoint: impl Into<String>) -> Self {
        Self {
            logger,
            component,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Middleware for ErrorLogging {
    fn name(&self) -> &str {
        "error_logging"
    }

    fn wrap(&self, next: Endpoint) -> Endpoint {
        let logger = self.logger.clone();
        let component = self.component;
        let endpoint = self.endpoint.clone();

        Endpoint::new(move |ctx, req| {
            let next = next.clone();
            let logger = logger.clone();
            let endpoint = endpoint.clone();
            async move {
                let result = next.call(ctx, req).await;
                if let Err(err) = &result {
                    log_error(&logger, component, &endpoint, err);
                }
                result
            }
        })
    }
}

fn log_error(logger: &Logger, component: &str, endpoint: &str, err: &AppError) {
    logger.in_scope(|| match err {
        AppError::Internal { details, .. } => {
            tracing::error!(component, endpoint, code = err.code(), error = %err, %details, "endpoint failed");
        }
        _ => {
            tracing::info!(component, endpoint, code = err.code(), error = %err, "endpoint returned error");
        }
    });
}
