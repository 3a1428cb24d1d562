//! Per-operation middleware chains.
//!
//! A chain is an explicit, ordered list. Position 0 is the outermost
//! middleware: it sees the request first and the result last.
//!
//! For every operation the order is fixed:
//!
//! 1. generic middlewares, in configured order
//! 2. the auth middleware, if configured
//! 3. error logging, if enabled *and* a logger is configured
//!
//! Generic middlewares therefore run before the auth decision and see its
//! rejections on the way out, while error logging sits next to the
//! application service and only observes errors the service produced.

use std::sync::Arc;

use crate::endpoint::middleware::ErrorLogging;
use crate::endpoint::{Endpoint, Middleware};
use crate::logging::Logger;

/// Ordered middlewares for one endpoint, outermost first.
pub type MiddlewareChain = Vec<Arc<dyn Middleware>>;

/// Builds [`MiddlewareChain`]s from component configuration.
///
/// Building is pure: the same builder and endpoint name always give a chain
/// with the same middlewares in the same order. Generic and auth middleware
/// instances are shared by reference between chains; the logging middleware
/// is created per chain because it is tagged with the endpoint name.
#[derive(Clone)]
pub struct MiddlewareChainBuilder<'a> {
    component: &'static str,
    middlewares: &'a [Arc<dyn Middleware>],
    auth_middleware: Option<&'a Arc<dyn Middleware>>,
    logger: Option<&'a Logger>,
}

impl<'a> MiddlewareChainBuilder<'a> {
    pub fn new(
        component: &'static str,
        middlewares: &'a [Arc<dyn Middleware>],
        auth_middleware: Option<&'a Arc<dyn Middleware>>,
        use_logging_middleware: bool,
        logger: Option<&'a Logger>,
    ) -> Self {
        Self {
            component,
            middlewares,
            auth_middleware,
            logger: logger.filter(|_| use_logging_middleware),
        }
    }

    pub fn build(&self, endpoint_name: &str) -> MiddlewareChain {
        let mut chain: MiddlewareChain = self.middlewares.to_vec();

        if let Some(auth) = self.auth_middleware {
            chain.push(auth.clone());
        }

        if let Some(logger) = self.logger {
            chain.push(Arc::new(ErrorLogging::new(
                logger.clone(),
                self.component,
                endpoint_name,
            )));
        }

        chain
    }
}

/// Wraps `endpoint` in `chain`, first element outermost.
pub fn apply(chain: &[Arc<dyn Middleware>], endpoint: Endpoint) -> Endpoint {
    chain
        .iter()
        .rev()
        .fold(endpoint, |inner, middleware| middleware.wrap(inner))
}
