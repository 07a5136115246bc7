//! Latency aggregation
//!
//! Pure reduction of a latency sequence to mean, min, and max. Defined only
//! for non-empty input; an empty suite must fail loudly rather than report
//! zero-valued statistics.

use crate::models::LatencySummary;

use super::BenchmarkError;

/// Reduce latency samples (milliseconds) to summary statistics
pub fn summarize(latencies: &[f64]) -> Result<LatencySummary, BenchmarkError> {
    if latencies.is_empty() {
        return Err(BenchmarkError::EmptySuite);
    }

    let sum: f64 = latencies.iter().sum();
    let average = sum / latencies.len() as f64;
    let min = latencies.iter().copied().fold(f64::INFINITY, f64::min);
    let max = latencies.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(LatencySummary {
        average_latency_ms: average,
        min_latency_ms: min,
        max_latency_ms: max,
    })
}
