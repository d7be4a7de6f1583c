//! # Arsenal Metrics
//!
//! Per-pitch-type effectiveness profile for one pitcher.
//!
//! All rate metrics divide by a group count that can be zero. Those cases
//! resolve to 0.0 and never abort the other groups.

use crate::analysis::stats::{mean, ratio};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{base_value, is_hit, PitchEvent};
use crate::schema::{require_columns, ARSENAL_COLUMNS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArsenalMetrics {
    pub pitch_type: String,
    pub total_pitches: usize,
    pub avg_velocity: Option<f64>,
    pub avg_spin_rate: Option<f64>,
    pub avg_spin_axis: Option<f64>,
    pub avg_pfx_hypotenuse: Option<f64>,
    pub balls_in_play: usize,
    /// Plate appearances that ended on this pitch type (any `events` value)
    pub total_at_bats: usize,
    /// Hits / balls in play
    #[serde(rename = "BA")]
    pub batting_average: f64,
    /// Swinging strikes / total pitches
    pub whiff_pct: f64,
    /// Total bases / at-bats
    #[serde(rename = "SLG")]
    pub slugging: f64,
    /// Hard-hit balls in play / balls in play
    pub hardhit_pct: f64,
}

/// Arsenal metrics for every pitch type, ordered by pitch type.
pub fn arsenal_metrics(pitches: &[PitchEvent], config: &EngineConfig) -> Result<Vec<ArsenalMetrics>> {
    require_columns(pitches, &ARSENAL_COLUMNS)?;

    let mut groups: BTreeMap<&str, Vec<&PitchEvent>> = BTreeMap::new();
    for pitch in pitches {
        if let Some(pitch_type) = pitch.pitch_type.as_deref() {
            groups.entry(pitch_type).or_default().push(pitch);
        }
    }

    let metrics: Vec<ArsenalMetrics> = groups
        .into_iter()
        .map(|(pitch_type, group)| group_metrics(pitch_type, &group, config))
        .collect();

    debug!(pitch_types = metrics.len(), "arsenal metrics built");
    Ok(metrics)
}

fn group_metrics(pitch_type: &str, group: &[&PitchEvent], config: &EngineConfig) -> ArsenalMetrics {
    let total_pitches = group.len();

    let mut balls_in_play = 0usize;
    let mut total_at_bats = 0usize;
    let mut hits = 0usize;
    let mut whiffs = 0usize;
    let mut total_bases = 0u32;
    let mut hard_hit = 0usize;

    for pitch in group {
        let in_play = pitch.is_in_play();
        if in_play {
            balls_in_play += 1;
            if pitch
                .launch_speed
                .is_some_and(|speed| speed > config.hard_hit_speed_mph)
            {
                hard_hit += 1;
            }
        }
        if pitch.is_swinging_strike() {
            whiffs += 1;
        }
        if pitch.ends_plate_appearance() {
            let event = pitch.events.as_deref().unwrap_or_default();
            total_at_bats += 1;
            total_bases += base_value(event);
            if is_hit(event) {
                hits += 1;
            }
        }
    }

    ArsenalMetrics {
        pitch_type: pitch_type.to_string(),
        total_pitches,
        avg_velocity: mean(group.iter().map(|p| p.release_speed)),
        avg_spin_rate: mean(group.iter().map(|p| p.release_spin_rate)),
        avg_spin_axis: mean(group.iter().map(|p| p.spin_axis)),
        avg_pfx_hypotenuse: mean(group.iter().map(|p| p.pfx_hypotenuse())),
        balls_in_play,
        total_at_bats,
        batting_average: ratio(hits, balls_in_play),
        whiff_pct: ratio(whiffs, total_pitches),
        slugging: ratio(total_bases as usize, total_at_bats),
        hardhit_pct: ratio(hard_hit, balls_in_play),
    }
}
