//! HTTP transport layer

mod transport;

pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport, TransportError};
