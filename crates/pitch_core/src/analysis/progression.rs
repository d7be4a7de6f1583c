//! # Progression Tracker
//!
//! Game-by-game pitch characteristics, one row per (game date, pitch type),
//! each row carrying its game's strike percentage.

use crate::analysis::stats::{mean, ratio};
use crate::error::Result;
use crate::models::PitchEvent;
use crate::schema::{require_columns, PROGRESSION_COLUMNS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionRow {
    pub game_date: NaiveDate,
    pub pitch_type: String,
    pub pitch_count: usize,
    pub release_speed: Option<f64>,
    pub release_spin_rate: Option<f64>,
    pub spin_axis: Option<f64>,
    pub release_extension: Option<f64>,
    pub pfx_x: Option<f64>,
    pub pfx_z: Option<f64>,
    pub pfx_hypotenuse: Option<f64>,
    /// `None` when the game has no pitch with a description
    pub strike_percentage: Option<f64>,
}

/// How much of the strike-percentage join found data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeDataStatus {
    Complete,
    Partial,
    NoStrikeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub strike_data: StrikeDataStatus,
    pub rows: Vec<ProgressionRow>,
}

/// Percentage of strike-qualifying pitches per game date.
///
/// Every pitch of the game is in the denominator; one without a description
/// is not a strike. A date whose pitches all lack a description is absent
/// from the map.
pub fn strike_percentage_by_game(pitches: &[PitchEvent]) -> BTreeMap<NaiveDate, f64> {
    // (strikes, pitches, described)
    let mut tallies: BTreeMap<NaiveDate, (usize, usize, usize)> = BTreeMap::new();
    for pitch in pitches {
        let (strikes, total, described) = tallies.entry(pitch.game_date).or_insert((0, 0, 0));
        *total += 1;
        match pitch.is_strike() {
            Some(true) => {
                *strikes += 1;
                *described += 1;
            }
            Some(false) => *described += 1,
            None => {}
        }
    }

    tallies
        .into_iter()
        .filter(|(_, (_, _, described))| *described > 0)
        .map(|(date, (strikes, total, _))| (date, ratio(strikes, total) * 100.0))
        .collect()
}

pub fn progression(pitches: &[PitchEvent]) -> Result<Progression> {
    require_columns(pitches, &PROGRESSION_COLUMNS)?;

    let strike_pct = strike_percentage_by_game(pitches);

    let mut groups: BTreeMap<(NaiveDate, &str), Vec<&PitchEvent>> = BTreeMap::new();
    for pitch in pitches {
        if let Some(pitch_type) = pitch.pitch_type.as_deref() {
            groups.entry((pitch.game_date, pitch_type)).or_default().push(pitch);
        }
    }

    let rows: Vec<ProgressionRow> = groups
        .into_iter()
        .map(|((game_date, pitch_type), group)| ProgressionRow {
            game_date,
            pitch_type: pitch_type.to_string(),
            pitch_count: group.len(),
            release_speed: mean(group.iter().map(|p| p.release_speed)),
            release_spin_rate: mean(group.iter().map(|p| p.release_spin_rate)),
            spin_axis: mean(group.iter().map(|p| p.spin_axis)),
            release_extension: mean(group.iter().map(|p| p.release_extension)),
            pfx_x: mean(group.iter().map(|p| p.pfx_x)),
            pfx_z: mean(group.iter().map(|p| p.pfx_z)),
            pfx_hypotenuse: mean(group.iter().map(|p| p.pfx_hypotenuse())),
            strike_percentage: strike_pct.get(&game_date).copied(),
        })
        .collect();

    let games = rows
        .iter()
        .map(|r| r.game_date)
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    let strike_data = match strike_pct.len() {
        0 => {
            warn!(games, "no pitch descriptions, strike percentage unavailable");
            StrikeDataStatus::NoStrikeData
        }
        n if n < games => StrikeDataStatus::Partial,
        _ => StrikeDataStatus::Complete,
    };

    debug!(rows = rows.len(), games, "progression built");
    Ok(Progression { strike_data, rows })
}
