pub mod metrics;
pub mod tracing;

pub use self::metrics::metrics_middleware;
pub use self::tracing::{
    REQUEST_ID_HEADER, request_id_middleware, request_span, with_request_tracing,
};
