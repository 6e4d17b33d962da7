mod request_id;
mod sanitizer;
mod tracing_setup;

pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use sanitizer::sanitize_text;
pub use tracing_setup::{init_tracing, TracingConfig};
