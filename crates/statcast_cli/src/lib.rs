//! Statcast CLI Library
//!
//! Local event source for `pitch_core`: Statcast CSV → filtered pitches →
//! metric family → JSON.

pub mod statcast;

use anyhow::{Context, Result};
use pitch_core::analysis::{arsenal_metrics, hit_outcomes, progression, DistributionKey};
use pitch_core::{build_report, EngineConfig, PitchEvent};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

pub use statcast::{load_pitches, load_pitches_from_reader, ParseStats, PitchFilter};

/// Where a report's pitches came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub path: String,
    /// SHA256 of the CSV bytes (hex)
    pub checksum: String,
    pub rows: u32,
    pub parsed: u32,
    pub failed: u32,
    pub filtered_out: u32,
    /// RFC3339
    pub loaded_at: String,
}

pub fn source_metadata(csv_path: &Path, stats: &ParseStats) -> Result<SourceMetadata> {
    let bytes = fs::read(csv_path)
        .with_context(|| format!("Failed to read CSV file: {}", csv_path.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);

    Ok(SourceMetadata {
        path: csv_path.display().to_string(),
        checksum: format!("{:x}", hasher.finalize()),
        rows: stats.total_rows,
        parsed: stats.parsed,
        failed: stats.failed,
        filtered_out: stats.filtered_out,
        loaded_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Metric family to compute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CountDistribution(DistributionKey),
    Arsenal,
    HitOutcome,
    Progression,
    Report(DistributionKey),
}

#[derive(Serialize)]
struct ReportWithSource<T: Serialize> {
    source: SourceMetadata,
    #[serde(flatten)]
    report: T,
}

/// Run `operation` and render the result as pretty JSON.
///
/// `source` is only attached to full reports.
pub fn run_operation(
    operation: &Operation,
    pitches: &[PitchEvent],
    config: &EngineConfig,
    source: Option<SourceMetadata>,
) -> Result<String> {
    let json = match operation {
        Operation::CountDistribution(key) => {
            serde_json::to_string_pretty(&key.distribution(pitches, config)?)?
        }
        Operation::Arsenal => serde_json::to_string_pretty(&arsenal_metrics(pitches, config)?)?,
        Operation::HitOutcome => serde_json::to_string_pretty(&hit_outcomes(pitches)?)?,
        Operation::Progression => serde_json::to_string_pretty(&progression(pitches)?)?,
        Operation::Report(key) => {
            let report = build_report(pitches, key, config)?;
            match source {
                Some(source) => serde_json::to_string_pretty(&ReportWithSource { source, report })?,
                None => serde_json::to_string_pretty(&report)?,
            }
        }
    };
    Ok(json)
}

/// Write `json` to `path`, creating parent directories.
pub fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write output file: {}", path.display()))
}
