//! Benchmark engine
//!
//! Sequential suite execution, latency aggregation, and the REST vs GraphQL
//! comparison. Calls within a suite run strictly one after another so each
//! measured latency reflects an uncontended request.

mod compare;
mod graphql;
mod rest;
mod runner;
mod stats;

pub use compare::compare;
pub use graphql::GraphqlBenchmarker;
pub use rest::RestBenchmarker;
pub use runner::ComparisonRunner;

use thiserror::Error;

use crate::http::TransportError;

/// Benchmark execution errors
#[derive(Error, Debug)]
pub enum BenchmarkError {
    /// A test case failed validation before any request was attempted
    #[error("Invalid test case: {0}")]
    InvalidTestCase(String),

    /// A call failed at the transport level; the whole suite is aborted
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Aggregation over zero test cases has no defined statistics
    #[error("Suite contains no test cases")]
    EmptySuite,
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared scripted transport for deterministic benchmarker tests

    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use crate::http::{ApiRequest, ApiResponse, Transport, TransportError};

    /// Transport double that replays scripted responses and records every
    /// request it was asked to send.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        responses: Arc<Mutex<VecDeque<Result<ApiResponse, TransportError>>>>,
        requests: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status_code: u16, latency_ms: f64) -> Self {
            self.responses.lock().unwrap().push_back(Ok(ApiResponse {
                status_code,
                latency_ms,
            }));
            self
        }

        pub fn fail(self, error: TransportError) -> Self {
            self.responses.lock().unwrap().push_back(Err(error));
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(ApiResponse {
                    status_code: 200,
                    latency_ms: 1.0,
                }))
        }
    }
}
