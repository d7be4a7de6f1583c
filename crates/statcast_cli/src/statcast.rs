//! Statcast CSV → PitchEvent loader
//!
//! Reads the per-pitch CSV export (Baseball Savant search / pybaseball
//! `statcast_pitcher`) by header name, so column order and extra columns do
//! not matter. Blank cells and the literal `null`/`NA` markers become missing
//! values; unparsable numbers are treated as missing rather than failing the row.
//!
//! Rows without a `game_pk` or `game_date` cannot be placed in a game and are
//! counted as failed.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pitch_core::{PitchEvent, PitchResult};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct StatcastRow {
    #[serde(default, deserialize_with = "csv::invalid_option")]
    game_pk: Option<i64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    game_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pitcher: Option<i64>,
    #[serde(default)]
    home_team: Option<String>,
    #[serde(default)]
    away_team: Option<String>,
    #[serde(default)]
    pitch_type: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    balls: Option<u8>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    strikes: Option<u8>,
    #[serde(default, rename = "type")]
    pitch_result: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    events: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    release_speed: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    release_spin_rate: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    spin_axis: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    release_extension: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pfx_x: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pfx_z: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    launch_speed: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    launch_angle: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    launch_speed_angle: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    hc_x: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    hc_y: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    hit_distance_sc: Option<f64>,
    #[serde(default)]
    bb_type: Option<String>,
}

/// Blank, `null`, `NA` and `NaN` all mean "no value".
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !matches!(v.as_str(), "null" | "NULL" | "NA" | "NaN" | "nan"))
}

impl StatcastRow {
    fn into_pitch(self, game_pk: i64, game_date: NaiveDate) -> PitchEvent {
        let mut pitch = PitchEvent::new(game_pk, game_date);
        pitch.home_team = clean(self.home_team);
        pitch.away_team = clean(self.away_team);
        pitch.pitch_type = clean(self.pitch_type);
        pitch.balls = self.balls;
        pitch.strikes = self.strikes;
        pitch.result = clean(self.pitch_result)
            .as_deref()
            .and_then(PitchResult::from_code);
        pitch.description = clean(self.description);
        pitch.events = clean(self.events);
        pitch.release_speed = self.release_speed;
        pitch.release_spin_rate = self.release_spin_rate;
        pitch.spin_axis = self.spin_axis;
        pitch.release_extension = self.release_extension;
        pitch.pfx_x = self.pfx_x;
        pitch.pfx_z = self.pfx_z;
        pitch.launch_speed = self.launch_speed;
        pitch.launch_angle = self.launch_angle;
        pitch.launch_speed_angle = self.launch_speed_angle;
        pitch.hc_x = self.hc_x;
        pitch.hc_y = self.hc_y;
        pitch.hit_distance_sc = self.hit_distance_sc;
        pitch.bb_type = clean(self.bb_type);
        pitch
    }
}

/// Which rows of the export belong to the request.
#[derive(Debug, Clone, Default)]
pub struct PitchFilter {
    /// MLBAM id of the pitcher (`pitcher` column)
    pub pitcher: Option<i64>,
    /// First game date, inclusive
    pub start: Option<NaiveDate>,
    /// Last game date, inclusive
    pub end: Option<NaiveDate>,
}

impl PitchFilter {
    fn accepts(&self, pitcher: Option<i64>, game_date: NaiveDate) -> bool {
        if let Some(wanted) = self.pitcher {
            if pitcher != Some(wanted) {
                return false;
            }
        }
        if self.start.is_some_and(|start| game_date < start) {
            return false;
        }
        if self.end.is_some_and(|end| game_date > end) {
            return false;
        }
        true
    }
}

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
    /// Parsed but outside the pitcher/date filter
    pub filtered_out: u32,
}

/// Load and filter a Statcast CSV file.
pub fn load_pitches(csv_path: &Path, filter: &PitchFilter) -> Result<(Vec<PitchEvent>, ParseStats)> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    load_pitches_from_reader(file, filter)
        .with_context(|| format!("Failed to read Statcast CSV: {}", csv_path.display()))
}

pub fn load_pitches_from_reader<R: Read>(
    reader: R,
    filter: &PitchFilter,
) -> Result<(Vec<PitchEvent>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut pitches = Vec::new();
    let mut stats = ParseStats::default();

    for result in reader.deserialize::<StatcastRow>() {
        stats.total_rows += 1;

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                stats.failed += 1;
                log::warn!("Line {} - unreadable row: {}", stats.total_rows, e);
                continue;
            }
        };

        let (Some(game_pk), Some(game_date)) = (row.game_pk, row.game_date) else {
            stats.failed += 1;
            log::warn!("Line {} - missing game_pk or game_date, skipping", stats.total_rows);
            continue;
        };

        stats.parsed += 1;
        if !filter.accepts(row.pitcher, game_date) {
            stats.filtered_out += 1;
            continue;
        }
        pitches.push(row.into_pitch(game_pk, game_date));
    }

    log::debug!(
        "parsed {} of {} rows ({} failed, {} filtered out)",
        stats.parsed,
        stats.total_rows,
        stats.failed,
        stats.filtered_out
    );
    Ok((pitches, stats))
}
