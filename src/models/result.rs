//! Benchmark result models
//!
//! Call results, per-suite aggregates, and the final comparison artifact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two API paradigms under comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paradigm {
    #[serde(rename = "REST")]
    Rest,
    #[serde(rename = "GraphQL")]
    Graphql,
}

impl Paradigm {
    pub fn label(&self) -> &'static str {
        match self {
            Paradigm::Rest => "REST",
            Paradigm::Graphql => "GraphQL",
        }
    }
}

impl fmt::Display for Paradigm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one timed REST call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestCallResult {
    pub url: String,
    pub method: String,
    pub status_code: u16,
    pub latency_ms: f64,
}

/// Result of one timed GraphQL call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphqlCallResult {
    pub url: String,
    pub query: String,
    pub status_code: u16,
    pub latency_ms: f64,
}

/// Aggregate latency statistics over one suite, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    pub average_latency_ms: f64,
    pub min_latency_ms: f64,
    pub max_latency_ms: f64,
}

/// One paradigm's suite: per-call results in input order plus derived stats
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteResult<T> {
    pub tests: Vec<T>,
    #[serde(flatten)]
    pub stats: LatencySummary,
}

/// Final output artifact for one benchmark run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub rest: SuiteResult<RestCallResult>,
    pub graphql: SuiteResult<GraphqlCallResult>,
    pub winner: Paradigm,
}
