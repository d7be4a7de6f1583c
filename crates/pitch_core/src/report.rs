//! Combined report: every metric family over one request's pitches.

use crate::analysis::{
    arsenal_metrics, hit_outcomes, progression, ArsenalMetrics, CountDistribution,
    DistributionKey, HitOutcome, Progression,
};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::PitchEvent;
use crate::schema::{require_columns, COUNT_DISTRIBUTION_COLUMNS};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchReport {
    pub pitch_count: usize,
    pub count_distribution: CountDistribution,
    pub arsenal: Vec<ArsenalMetrics>,
    pub hit_outcome: HitOutcome,
    pub progression: Progression,
}

/// Run all four families.
///
/// Schema problems abort before any aggregation. Empty filtered subsets
/// (no balls in play, no descriptions) only empty their own family.
pub fn build_report(
    pitches: &[PitchEvent],
    key: &DistributionKey,
    config: &EngineConfig,
) -> Result<PitchReport> {
    // Count distribution needs the widest column set of the four.
    require_columns(pitches, &COUNT_DISTRIBUTION_COLUMNS)?;

    let report = PitchReport {
        pitch_count: pitches.len(),
        count_distribution: key.distribution(pitches, config)?,
        arsenal: arsenal_metrics(pitches, config)?,
        hit_outcome: hit_outcomes(pitches)?,
        progression: progression(pitches)?,
    };

    info!(
        pitches = report.pitch_count,
        pitch_types = report.arsenal.len(),
        balls_in_play = !report.hit_outcome.is_empty(),
        progression_rows = report.progression.rows.len(),
        "pitch report built"
    );
    Ok(report)
}
