//! GraphQL suite benchmarker
//!
//! Same shape as the REST benchmarker, specialized to POSTed GraphQL
//! queries. The wire body is always `{"query": <query>}`; variables and
//! operation names are not supported.

use serde_json::json;
use tracing::debug;

use crate::http::{ApiRequest, Transport};
use crate::models::{GraphqlCallResult, GraphqlTestCase, SuiteResult};

use super::{stats, BenchmarkError};

/// Runs a GraphQL test suite against a transport
pub struct GraphqlBenchmarker<T> {
    transport: T,
}

impl<T: Transport> GraphqlBenchmarker<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute every test case in input order and aggregate the latencies.
    ///
    /// An empty query string is valid input: it is posted downstream as-is
    /// (a malformed-query probe), not rejected locally.
    pub async fn run(
        &self,
        tests: &[GraphqlTestCase],
    ) -> Result<SuiteResult<GraphqlCallResult>, BenchmarkError> {
        for case in tests {
            validate(case)?;
        }

        let mut results = Vec::with_capacity(tests.len());
        let mut latencies = Vec::with_capacity(tests.len());

        for case in tests {
            let request = ApiRequest::new("POST", case.url.clone())
                .headers(case.effective_headers())
                .json_body(json!({ "query": case.query }));

            let response = self.transport.send(&request).await?;

            debug!(
                "GraphQL POST {} -> {} ({:.2}ms)",
                case.url, response.status_code, response.latency_ms
            );

            latencies.push(response.latency_ms);
            results.push(GraphqlCallResult {
                url: case.url.clone(),
                query: case.query.clone(),
                status_code: response.status_code,
                latency_ms: response.latency_ms,
            });
        }

        let stats = stats::summarize(&latencies)?;

        Ok(SuiteResult {
            tests: results,
            stats,
        })
    }
}

fn validate(case: &GraphqlTestCase) -> Result<(), BenchmarkError> {
    if case.url.trim().is_empty() {
        return Err(BenchmarkError::InvalidTestCase(
            "GraphQL case is missing a url".to_string(),
        ));
    }
    Ok(())
}
