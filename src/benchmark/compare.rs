//! Suite comparison
//!
//! Picks the paradigm with the lower average latency as the winner.

use crate::models::{ComparisonResult, GraphqlCallResult, Paradigm, RestCallResult, SuiteResult};

/// Compare two completed suites and produce the final artifact.
///
/// The comparison is a strict less-than on average latency, so equal
/// averages resolve to GraphQL. That tie-break is intentional and must
/// survive refactors.
pub fn compare(
    rest: SuiteResult<RestCallResult>,
    graphql: SuiteResult<GraphqlCallResult>,
) -> ComparisonResult {
    let winner = if rest.stats.average_latency_ms < graphql.stats.average_latency_ms {
        Paradigm::Rest
    } else {
        Paradigm::Graphql
    };

    ComparisonResult {
        rest,
        graphql,
        winner,
    }
}
