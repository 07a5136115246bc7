//! Data models for benchmark inputs and outputs

mod result;
mod test_case;

pub use result::{
    ComparisonResult, GraphqlCallResult, LatencySummary, Paradigm, RestCallResult, SuiteResult,
};
pub use test_case::{GraphqlTestCase, RestTestCase};
