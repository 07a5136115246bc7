//! Benchmark orchestration
//!
//! Runs the REST suite, then the GraphQL suite, then compares the two
//! aggregates. One linear pipeline per run, no retries, no shared state.

use tracing::info;

use crate::http::Transport;
use crate::models::{ComparisonResult, GraphqlTestCase, RestTestCase};

use super::{compare, BenchmarkError, GraphqlBenchmarker, RestBenchmarker};

/// Executes both suites against one transport and compares the results
pub struct ComparisonRunner<T> {
    rest: RestBenchmarker<T>,
    graphql: GraphqlBenchmarker<T>,
}

impl<T: Transport + Clone> ComparisonRunner<T> {
    pub fn new(transport: T) -> Self {
        Self {
            rest: RestBenchmarker::new(transport.clone()),
            graphql: GraphqlBenchmarker::new(transport),
        }
    }

    /// Run both suites sequentially and produce the comparison.
    ///
    /// A failure in either suite aborts the run; no comparison is produced
    /// from partial data.
    pub async fn run(
        &self,
        rest_tests: &[RestTestCase],
        graphql_tests: &[GraphqlTestCase],
    ) -> Result<ComparisonResult, BenchmarkError> {
        info!("Running REST suite ({} tests)", rest_tests.len());
        let rest = self.rest.run(rest_tests).await?;
        info!(
            "REST suite complete: avg {:.2}ms (min {:.2}ms, max {:.2}ms)",
            rest.stats.average_latency_ms, rest.stats.min_latency_ms, rest.stats.max_latency_ms
        );

        info!("Running GraphQL suite ({} tests)", graphql_tests.len());
        let graphql = self.graphql.run(graphql_tests).await?;
        info!(
            "GraphQL suite complete: avg {:.2}ms (min {:.2}ms, max {:.2}ms)",
            graphql.stats.average_latency_ms,
            graphql.stats.min_latency_ms,
            graphql.stats.max_latency_ms
        );

        let comparison = compare(rest, graphql);
        info!("Winner: {}", comparison.winner);

        Ok(comparison)
    }
}
