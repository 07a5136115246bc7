//! Configuration management

mod file;

pub use file::{load_graphql_tests, load_rest_tests, ConfigFile};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Benchmark run settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchSettings {
    /// Path to the REST test definitions
    #[serde(default = "default_rest_tests")]
    pub rest_tests: PathBuf,

    /// Path to the GraphQL test definitions
    #[serde(default = "default_graphql_tests")]
    pub graphql_tests: PathBuf,

    /// Where the comparison JSON document is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_rest_tests() -> PathBuf {
    PathBuf::from("benchmarks/rest_tests.json")
}

fn default_graphql_tests() -> PathBuf {
    PathBuf::from("benchmarks/graphql_tests.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("results/output.json")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            rest_tests: default_rest_tests(),
            graphql_tests: default_graphql_tests(),
            output: default_output(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
