//! Endpoint layer: board operations as uniform, decorated callables.
//!
//! An [`Endpoint`] is an async function from ([`RequestContext`],
//! [`EndpointRequest`]) to [`EndpointResponse`]. A [`Middleware`] wraps one
//! endpoint and returns another, so cross-cutting concerns (rate limiting,
//! authentication, metrics, error logging) compose without the application
//! service knowing about them.
//!
//! - [`chain`] - per-operation middleware ordering
//! - [`set`] - binding the application service to all eleven operations
//! - [`middleware`] - ready-made middlewares

pub mod chain;
pub mod message;
pub mod middleware;
pub mod operation;
pub mod set;

pub use chain::{MiddlewareChain, MiddlewareChainBuilder};
pub use message::{EndpointRequest, EndpointResponse};
pub use operation::Operation;
pub use set::{EndpointSet, Middlewares};

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub use crate::application::requests::RequestContext;
use crate::error::AppError;

/// Boxed, sendable future returned by endpoints.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Result of invoking an endpoint.
pub type EndpointResult = Result<EndpointResponse, AppError>;

type EndpointFn = dyn Fn(RequestContext, EndpointRequest) -> BoxFuture<EndpointResult> + Send + Sync;

/// An invocable operation. Cheap to clone.
#[derive(Clone)]
pub struct Endpoint {
    inner: Arc<EndpointFn>,
}

impl Endpoint {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(RequestContext, EndpointRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = EndpointResult> + Send + 'static,
    {
        Self {
            inner: Arc::new(
                move |ctx: RequestContext, req: EndpointRequest| -> BoxFuture<EndpointResult> {
                    Box::pin(f(ctx, req))
                },
            ),
        }
    }

    pub async fn call(&self, ctx: RequestContext, req: EndpointRequest) -> EndpointResult {
        (self.inner)(ctx, req).await
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint").finish_non_exhaustive()
    }
}

/// Decorator around an [`Endpoint`].
///
/// Implementations observe or transform the request on the way in and the
/// result or error on the way out. They must be shareable across chains:
/// the same instance may wrap several endpoints.
pub trait Middleware: Send + Sync {
    /// Short identifier, used when inspecting chains.
    fn name(&self) -> &str;

    fn wrap(&self, next: Endpoint) -> Endpoint;
}
