//! REST suite benchmarker
//!
//! Executes an ordered sequence of REST test cases one at a time, timing
//! each call, then aggregates the collected latencies.

use tracing::debug;

use crate::http::{ApiRequest, Transport};
use crate::models::{RestCallResult, RestTestCase, SuiteResult};

use super::{stats, BenchmarkError};

/// Runs a REST test suite against a transport
pub struct RestBenchmarker<T> {
    transport: T,
}

impl<T: Transport> RestBenchmarker<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Execute every test case in input order and aggregate the latencies.
    ///
    /// Any transport failure aborts the whole suite; no partial result is
    /// produced. An empty input sequence fails with
    /// [`BenchmarkError::EmptySuite`].
    pub async fn run(
        &self,
        tests: &[RestTestCase],
    ) -> Result<SuiteResult<RestCallResult>, BenchmarkError> {
        for case in tests {
            validate(case)?;
        }

        let mut results = Vec::with_capacity(tests.len());
        let mut latencies = Vec::with_capacity(tests.len());

        for case in tests {
            let mut request =
                ApiRequest::new(case.method.clone(), case.url.clone()).headers(case.headers.clone());
            if let Some(body) = &case.body {
                request = request.json_body(body.clone());
            }

            let response = self.transport.send(&request).await?;

            debug!(
                "REST {} {} -> {} ({:.2}ms)",
                case.method, case.url, response.status_code, response.latency_ms
            );

            latencies.push(response.latency_ms);
            results.push(RestCallResult {
                url: case.url.clone(),
                method: case.method.clone(),
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

fn validate(case: &RestTestCase) -> Result<(), BenchmarkError> {
    if case.method.trim().is_empty() {
        return Err(BenchmarkError::InvalidTestCase(format!(
            "REST case for '{}' is missing a method",
            case.url
        )));
    }
    if case.url.trim().is_empty() {
        return Err(BenchmarkError::InvalidTestCase(
            "REST case is missing a url".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::testing::FakeTransport;
    use crate::http::TransportError;
    use serde_json::json;

    #[tokio::test]
    async fn preserves_input_order_and_count() {
        let transport = FakeTransport::new()
            .respond(200, 5.0)
            .respond(404, 10.0)
            .respond(201, 15.0);
        let benchmarker = RestBenchmarker::new(transport);

        let tests = vec![
            RestTestCase::new("GET", "https://example.test/a"),
            RestTestCase::new("get", "https://example.test/b"),
            RestTestCase::new("POST", "https://example.test/c"),
        ];

        let suite = benchmarker.run(&tests).await.unwrap();

        assert_eq!(suite.tests.len(), 3);
        assert_eq!(suite.tests[0].url, "https://example.test/a");
        assert_eq!(suite.tests[1].status_code, 404);
        assert_eq!(suite.tests[2].method, "POST");
        assert_eq!(suite.stats.average_latency_ms, 10.0);
        assert_eq!(suite.stats.min_latency_ms, 5.0);
        assert_eq!(suite.stats.max_latency_ms, 15.0);
    }

    #[tokio::test]
    async fn body_and_headers_reach_the_transport() {
        let transport = FakeTransport::new();
        let benchmarker = RestBenchmarker::new(transport.clone());

        let tests = vec![RestTestCase::new("PUT", "https://example.test/items/1")
            .header("X-Trace", "abc")
            .with_body(json!({"name": "widget"}))];

        benchmarker.run(&tests).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, "PUT");
        assert_eq!(sent[0].headers.get("X-Trace").map(String::as_str), Some("abc"));
        assert_eq!(sent[0].body, Some(json!({"name": "widget"})));
    }

    #[tokio::test]
    async fn case_without_body_sends_none() {
        let transport = FakeTransport::new();
        let benchmarker = RestBenchmarker::new(transport.clone());

        benchmarker
            .run(&[RestTestCase::new("GET", "https://example.test/ping")])
            .await
            .unwrap();

        assert_eq!(transport.requests()[0].body, None);
    }

    #[tokio::test]
    async fn transport_failure_aborts_the_suite() {
        let transport = FakeTransport::new()
            .respond(200, 5.0)
            .fail(TransportError::ConnectionRefused(
                "https://example.test/b".to_string(),
            ));
        let benchmarker = RestBenchmarker::new(transport);

        let tests = vec![
            RestTestCase::new("GET", "https://example.test/a"),
            RestTestCase::new("GET", "https://example.test/b"),
            RestTestCase::new("GET", "https://example.test/c"),
        ];

        let err = benchmarker.run(&tests).await.unwrap_err();
        assert!(matches!(err, BenchmarkError::Transport(_)));
    }

    #[tokio::test]
    async fn invalid_case_fails_before_any_request() {
        let transport = FakeTransport::new();
        let benchmarker = RestBenchmarker::new(transport.clone());

        let tests = vec![
            RestTestCase::new("GET", "https://example.test/a"),
            RestTestCase::new("", "https://example.test/b"),
        ];

        let err = benchmarker.run(&tests).await.unwrap_err();
        assert!(matches!(err, BenchmarkError::InvalidTestCase(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_suite_is_an_error() {
        let benchmarker = RestBenchmarker::new(FakeTransport::new());
        let err = benchmarker.run(&[]).await.unwrap_err();
        assert!(matches!(err, BenchmarkError::EmptySuite));
    }
}
