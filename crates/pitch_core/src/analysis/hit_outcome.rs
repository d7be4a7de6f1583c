//! # Hit Outcome Summary
//!
//! Descriptive statistics over balls put into play.

use crate::analysis::stats::FieldSummary;
use crate::error::{EngineError, Result};
use crate::models::PitchEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Batted-ball fields carried through for plotting spray charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattedBall {
    pub launch_angle: Option<f64>,
    pub bb_type: Option<String>,
    pub launch_speed: Option<f64>,
    pub launch_speed_angle: Option<f64>,
    pub hc_x: Option<f64>,
    pub hc_y: Option<f64>,
    pub hit_distance_sc: Option<f64>,
    pub events: Option<String>,
}

impl From<&PitchEvent> for BattedBall {
    fn from(pitch: &PitchEvent) -> Self {
        Self {
            launch_angle: pitch.launch_angle,
            bb_type: pitch.bb_type.clone(),
            launch_speed: pitch.launch_speed,
            launch_speed_angle: pitch.launch_speed_angle,
            hc_x: pitch.hc_x,
            hc_y: pitch.hc_y,
            hit_distance_sc: pitch.hit_distance_sc,
            events: pitch.events.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitSummary {
    pub total_hits: usize,
    /// Frequency of each non-null `events` value
    pub event_counts: BTreeMap<String, usize>,
    pub launch_speed: FieldSummary,
    pub launch_angle: FieldSummary,
    pub hit_distance: FieldSummary,
}

/// Result of the hit-outcome family.
///
/// `NoHitData` is a defined empty state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HitOutcome {
    NoHitData,
    Summary {
        summary: HitSummary,
        hits: Vec<BattedBall>,
    },
}

impl HitOutcome {
    pub fn summary(&self) -> Option<&HitSummary> {
        match self {
            HitOutcome::Summary { summary, .. } => Some(summary),
            HitOutcome::NoHitData => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HitOutcome::NoHitData)
    }
}

pub fn hit_outcomes(pitches: &[PitchEvent]) -> Result<HitOutcome> {
    if pitches.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let in_play: Vec<&PitchEvent> = pitches.iter().filter(|p| p.is_in_play()).collect();
    if in_play.is_empty() {
        warn!(pitches = pitches.len(), "no balls in play, hit outcome summary is empty");
        return Ok(HitOutcome::NoHitData);
    }

    let mut event_counts: BTreeMap<String, usize> = BTreeMap::new();
    for event in in_play.iter().filter_map(|p| p.events.as_ref()) {
        *event_counts.entry(event.clone()).or_insert(0) += 1;
    }

    let summary = HitSummary {
        total_hits: in_play.len(),
        event_counts,
        launch_speed: FieldSummary::from_values(in_play.iter().map(|p| p.launch_speed)),
        launch_angle: FieldSummary::from_values(in_play.iter().map(|p| p.launch_angle)),
        hit_distance: FieldSummary::from_values(in_play.iter().map(|p| p.hit_distance_sc)),
    };
    debug!(balls_in_play = summary.total_hits, "hit outcome summary built");

    Ok(HitOutcome::Summary {
        summary,
        hits: in_play.into_iter().map(BattedBall::from).collect(),
    })
}
