//! Request metrics for endpoints.

use std::time::Instant;

use crate::endpoint::{Endpoint, Middleware};

/// Records request, error and latency metrics per operation through the
/// `metrics` facade. Without an installed recorder this is a no-op.
///
/// - `boards_endpoint_requests_total{operation}`
/// - `boards_endpoint_errors_total{operation, code}`
/// - `boards_endpoint_duration_seconds{operation}`
#[derive(Debug, Default, Clone, Copy)]
pub struct Metrics;

impl Middleware for Metrics {
    fn name(&self) -> &str {
        "metrics"
    }

    fn wrap(&self, next: Endpoint) -> Endpoint {
        Endpoint::new(move |ctx, req| {
            let next = next.clone();
            async move {
                let operation = req.operation().name();
                let started = Instant::now();

                let result = next.call(ctx, req).await;

                ::metrics::counter!("boards_endpoint_requests_total", "operation" => operation)
                    .increment(1);
                if let Err(err) = &result {
                    ::metrics::counter!(
                        "boards_endpoint_errors_total",
                        "operation" => operation,
                        "code" => err.code()
                    )
                    .increment(1);
                }
                ::metrics::histogram!("boards_endpoint_duration_seconds", "operation" => operation)
                    .record(started.elapsed().as_secs_f64());

                result
            }
        })
    }
}
