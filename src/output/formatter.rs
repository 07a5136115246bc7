//! Output formatters for comparison results
//!
//! Provides table, JSON, and brief summary output. Formatting is cosmetic;
//! the JSON document written by the storage layer is the canonical output.

use anyhow::{anyhow, Result};

use crate::models::{ComparisonResult, LatencySummary, Paradigm};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Comparison result formatter
#[derive(Debug)]
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Resolve a formatter from CLI arguments. An unknown format name fails
    /// here so callers can reject it before any benchmark work starts.
    pub fn from_args(format: &str, no_color: bool) -> Result<Self> {
        let format = OutputFormat::from_str(format)
            .ok_or_else(|| anyhow!("Unknown output format: {format}"))?;

        let formatter = Self::new(format);
        Ok(if no_color {
            formatter.no_color()
        } else {
            formatter
        })
    }

    /// Format a comparison result
    pub fn format_comparison(&self, comparison: &ComparisonResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_table(comparison),
            OutputFormat::Json => serde_json::to_string(comparison).unwrap_or_default(),
            OutputFormat::JsonPretty => {
                serde_json::to_string_pretty(comparison).unwrap_or_default()
            }
            OutputFormat::Summary => self.format_summary(comparison),
        }
    }

    fn format_table(&self, comparison: &ComparisonResult) -> String {
        let mut output = String::new();

        output.push_str("\n┌──────────┬───────┬──────────┬──────────┬──────────┐\n");
        output.push_str("│ Suite    │ Calls │  avg(ms) │  min(ms) │  max(ms) │\n");
        output.push_str("├──────────┼───────┼──────────┼──────────┼──────────┤\n");

        output.push_str(&Self::table_row(
            Paradigm::Rest,
            comparison.rest.tests.len(),
            &comparison.rest.stats,
        ));
        output.push_str(&Self::table_row(
            Paradigm::Graphql,
            comparison.graphql.tests.len(),
            &comparison.graphql.stats,
        ));

        output.push_str("└──────────┴───────┴──────────┴──────────┴──────────┘\n");

        let winner = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", comparison.winner)
        } else {
            comparison.winner.to_string()
        };
        output.push_str(&format!("\nWinner: {winner}\n"));

        output
    }

    fn table_row(paradigm: Paradigm, calls: usize, stats: &LatencySummary) -> String {
        format!(
            "│ {:8} │ {:>5} │ {:>8.2} │ {:>8.2} │ {:>8.2} │\n",
            paradigm.label(),
            calls,
            stats.average_latency_ms,
            stats.min_latency_ms,
            stats.max_latency_ms
        )
    }

    fn format_summary(&self, comparison: &ComparisonResult) -> String {
        format!(
            "REST Average Latency: {:.2}ms\n\
             GraphQL Average Latency: {:.2}ms\n\
             Winner: {} is faster!",
            comparison.rest.stats.average_latency_ms,
            comparison.graphql.stats.average_latency_ms,
            comparison.winner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphqlCallResult, RestCallResult, SuiteResult};

    fn sample() -> ComparisonResult {
        ComparisonResult {
            rest: SuiteResult {
                tests: vec![RestCallResult {
                    url: "https://example.test/ping".to_string(),
                    method: "GET".to_string(),
                    status_code: 200,
                    latency_ms: 5.0,
                }],
                stats: LatencySummary {
                    average_latency_ms: 5.0,
                    min_latency_ms: 5.0,
                    max_latency_ms: 5.0,
                },
            },
            graphql: SuiteResult {
                tests: vec![GraphqlCallResult {
                    url: "https://example.test/graphql".to_string(),
                    query: "{ping}".to_string(),
                    status_code: 200,
                    latency_ms: 15.0,
                }],
                stats: LatencySummary {
                    average_latency_ms: 15.0,
                    min_latency_ms: 15.0,
                    max_latency_ms: 15.0,
                },
            },
            winner: Paradigm::Rest,
        }
    }

    #[test]
    fn format_from_str() {
        assert_eq!(OutputFormat::from_str("table"), Some(OutputFormat::Table));
        assert_eq!(
            OutputFormat::from_str("JSON-Pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("xml"), None);
    }

    #[test]
    fn unknown_format_argument_is_rejected() {
        let err = ResultFormatter::from_args("tabel", false).unwrap_err();
        assert!(err.to_string().contains("tabel"));
    }

    #[test]
    fn format_arguments_resolve_with_color_toggle() {
        let formatter = ResultFormatter::from_args("table", true).unwrap();
        let text = formatter.format_comparison(&sample());
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn summary_reports_averages_and_winner() {
        let formatter = ResultFormatter::new(OutputFormat::Summary);
        let text = formatter.format_comparison(&sample());

        assert!(text.contains("REST Average Latency: 5.00ms"));
        assert!(text.contains("GraphQL Average Latency: 15.00ms"));
        assert!(text.contains("Winner: REST is faster!"));
    }

    #[test]
    fn table_includes_both_suites() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let text = formatter.format_comparison(&sample());

        assert!(text.contains("REST"));
        assert!(text.contains("GraphQL"));
        assert!(text.contains("Winner: REST"));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn json_output_is_parseable() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let text = formatter.format_comparison(&sample());

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["winner"], "REST");
    }
}
