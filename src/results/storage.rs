//! Results storage and retrieval
//!
//! Writes the comparison JSON document for each run and archives runs with
//! timestamps for later viewing and CSV export.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::ComparisonResult;

/// One archived benchmark run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredRun {
    /// Unique run ID
    pub id: String,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run completed
    pub completed_at: DateTime<Utc>,

    /// Environment info
    pub environment: EnvironmentInfo,

    /// The comparison produced by the run
    pub comparison: ComparisonResult,
}

impl StoredRun {
    pub fn new(started_at: DateTime<Utc>, comparison: ComparisonResult) -> Self {
        Self {
            id: generate_run_id(),
            started_at,
            completed_at: Utc::now(),
            environment: EnvironmentInfo::default(),
            comparison,
        }
    }
}

/// Environment information recorded with each run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub os: String,
    pub arch: String,
    pub tool_version: String,
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Generate unique run ID
fn generate_run_id() -> String {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let random: u32 = rand::random::<u32>() % 10000;
    format!("{timestamp}_{random:04}")
}

/// Write the comparison document to a path.
///
/// This is the `results/output.json` artifact: the two suites plus the
/// winner label, pretty-printed.
pub fn save_output(path: impl AsRef<Path>, comparison: &ComparisonResult) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, comparison).context("Failed to write comparison")?;

    info!("Saved comparison to {}", path.display());
    Ok(())
}

/// Archive of benchmark runs
pub struct ResultsStorage {
    base_dir: PathBuf,
}

impl ResultsStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create with the platform data directory
    pub fn default_dir() -> Self {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("api-bench")
            .join("results");
        Self::new(base_dir)
    }

    fn run_path(&self, run_id: &str) -> PathBuf {
        self.base_dir.join(format!("{run_id}.json"))
    }

    /// Save a run to the archive
    pub fn save(&self, run: &StoredRun) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("Failed to create directory: {}", self.base_dir.display()))?;

        let path = self.run_path(&run.id);
        let file = File::create(&path).context("Failed to create results file")?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, run).context("Failed to write results")?;

        info!("Archived run {} to {}", run.id, path.display());
        Ok(path)
    }

    /// Load a run by ID
    pub fn load(&self, run_id: &str) -> Result<StoredRun> {
        let path = self.run_path(run_id);
        let file = File::open(&path)
            .with_context(|| format!("Failed to open results file: {}", path.display()))?;
        let reader = BufReader::new(file);

        let run: StoredRun = serde_json::from_reader(reader).context("Failed to parse results")?;
        debug!("Loaded run from {}", path.display());
        Ok(run)
    }

    /// Load all archived runs, newest first
    pub fn load_all(&self) -> Result<Vec<StoredRun>> {
        if !self.base_dir.exists() {
            return Ok(Vec::new());
        }

        let mut runs = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map(|e| e == "json").unwrap_or(false) {
                match File::open(&path)
                    .map_err(anyhow::Error::from)
                    .and_then(|f| {
                        serde_json::from_reader(BufReader::new(f)).map_err(anyhow::Error::from)
                    }) {
                    Ok(run) => runs.push(run),
                    Err(e) => debug!("Skipping {}: {}", path.display(), e),
                }
            }
        }

        runs.sort_by(|a: &StoredRun, b: &StoredRun| b.started_at.cmp(&a.started_at));
        Ok(runs)
    }

    /// Most recent archived run, if any
    pub fn latest(&self) -> Result<Option<StoredRun>> {
        Ok(self.load_all()?.into_iter().next())
    }

    /// Export a run's per-call results
    pub fn export(&self, run: &StoredRun, path: &Path, format: ExportFormat) -> Result<()> {
        match format {
            ExportFormat::Json => {
                let file = File::create(path).context("Failed to create export file")?;
                serde_json::to_writer_pretty(BufWriter::new(file), &run.comparison)
                    .context("Failed to write export")?;
            }
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(path)?;
                writer.write_record(["paradigm", "url", "request", "status_code", "latency_ms"])?;

                for call in &run.comparison.rest.tests {
                    let status = call.status_code.to_string();
                    let latency = format!("{:.3}", call.latency_ms);
                    writer.write_record([
                        "REST",
                        call.url.as_str(),
                        call.method.as_str(),
                        status.as_str(),
                        latency.as_str(),
                    ])?;
                }
                for call in &run.comparison.graphql.tests {
                    let status = call.status_code.to_string();
                    let latency = format!("{:.3}", call.latency_ms);
                    writer.write_record([
                        "GraphQL",
                        call.url.as_str(),
                        call.query.as_str(),
                        status.as_str(),
                        latency.as_str(),
                    ])?;
                }
                writer.flush()?;
            }
        }

        info!("Exported run {} to {}", run.id, path.display());
        Ok(())
    }
}

/// Export format
#[derive(Clone, Copy, Debug)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_str)
    }
}
