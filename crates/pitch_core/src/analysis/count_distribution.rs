//! # Count Distribution
//!
//! Pitch mix and pitch outcome rates for every (outer key, pitch type) cell.
//! The outer key is the ball-strike count by default; any other keying goes
//! through [`count_distribution_by`] with a selector closure.
//!
//! The result is a full grid: every pitch type seen anywhere in the input gets
//! a cell under every observed outer key. Cells with no pitches report a count
//! of 0 and 0% everywhere.

use crate::analysis::stats::{ratio, round_to};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{PitchEvent, PitchResult};
use crate::schema::{require_columns, COUNT_DISTRIBUTION_COLUMNS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Outcome mix of one (outer key, pitch type) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountCell {
    /// Distinct non-null `events` seen in this cell, sorted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_events: Option<Vec<String>>,
    pub total_pitch_count: usize,
    /// Share of this pitch type among all pitches under the same outer key
    pub total_pitch_percentage: f64,
    pub ball_percentage: f64,
    pub strike_percentage: f64,
    pub in_play_percentage: f64,
}

/// outer key → pitch type → cell
pub type CountDistribution = BTreeMap<String, BTreeMap<String, CountCell>>;

type CellKey = (String, String);

#[derive(Default)]
struct CellTally {
    total: usize,
    ball: usize,
    strike: usize,
    in_play: usize,
    events: BTreeSet<String>,
}

impl CellTally {
    fn add(&mut self, pitch: &PitchEvent) {
        self.total += 1;
        match pitch.result {
            Some(PitchResult::Ball) => self.ball += 1,
            Some(PitchResult::Strike) => self.strike += 1,
            Some(PitchResult::InPlay) => self.in_play += 1,
            None => {}
        }
        if let Some(event) = &pitch.events {
            self.events.insert(event.clone());
        }
    }
}

/// Outer key choice for callers that pick the keying at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum DistributionKey {
    #[default]
    CountScenario,
    /// Opponent of `team`, derived from the home/away codes
    Opponent { team: String },
}

impl DistributionKey {
    pub fn distribution(&self, pitches: &[PitchEvent], config: &EngineConfig) -> Result<CountDistribution> {
        match self {
            DistributionKey::CountScenario => count_distribution(pitches, config),
            DistributionKey::Opponent { team } => opponent_count_distribution(pitches, team, config),
        }
    }
}

/// Count distribution keyed by `"<balls>-<strikes>"`.
pub fn count_distribution(pitches: &[PitchEvent], config: &EngineConfig) -> Result<CountDistribution> {
    count_distribution_by(pitches, config, PitchEvent::count_scenario)
}

/// Count distribution keyed by the opponent of `team`.
///
/// Pitches from games `team` did not play in are ignored.
pub fn opponent_count_distribution(
    pitches: &[PitchEvent],
    team: &str,
    config: &EngineConfig,
) -> Result<CountDistribution> {
    count_distribution_by(pitches, config, |p| p.opponent(team).map(str::to_string))
}

/// Count distribution under an arbitrary outer key.
///
/// Records for which `outer_key` returns `None` are left out. If that leaves
/// nothing, the request has no data.
pub fn count_distribution_by<F>(
    pitches: &[PitchEvent],
    config: &EngineConfig,
    outer_key: F,
) -> Result<CountDistribution>
where
    F: Fn(&PitchEvent) -> Option<String>,
{
    require_columns(pitches, &COUNT_DISTRIBUTION_COLUMNS)?;

    let mut outer_keys: BTreeSet<String> = BTreeSet::new();
    let mut pitch_types: BTreeSet<String> = BTreeSet::new();
    let mut cells: BTreeMap<CellKey, CellTally> = BTreeMap::new();
    let mut skipped = 0usize;

    for pitch in pitches {
        let (Some(key), Some(pitch_type)) = (outer_key(pitch), pitch.pitch_type.as_ref()) else {
            skipped += 1;
            continue;
        };
        outer_keys.insert(key.clone());
        pitch_types.insert(pitch_type.clone());
        cells.entry((key, pitch_type.clone())).or_default().add(pitch);
    }

    if skipped > 0 {
        debug!(skipped, "pitches without an outer key left out of count distribution");
    }
    if outer_keys.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let decimals = config.percentage_decimals;
    let percent = |part: usize, whole: usize| round_to(ratio(part, whole) * 100.0, decimals);
    let empty = CellTally::default();

    let mut distribution = CountDistribution::new();
    for key in &outer_keys {
        let key_total: usize = pitch_types
            .iter()
            .filter_map(|pt| cells.get(&(key.clone(), pt.clone())))
            .map(|tally| tally.total)
            .sum();

        let row = distribution.entry(key.clone()).or_default();
        for pitch_type in &pitch_types {
            let tally = cells.get(&(key.clone(), pitch_type.clone())).unwrap_or(&empty);

            let outcome_total = tally.ball + tally.strike + tally.in_play;
            let divisor = if outcome_total == 0 { 1 } else { outcome_total };

            row.insert(
                pitch_type.clone(),
                CountCell {
                    unique_events: config
                        .include_unique_events
                        .then(|| tally.events.iter().cloned().collect()),
                    total_pitch_count: tally.total,
                    total_pitch_percentage: percent(tally.total, key_total),
                    ball_percentage: percent(tally.ball, divisor),
                    strike_percentage: percent(tally.strike, divisor),
                    in_play_percentage: percent(tally.in_play, divisor),
                },
            );
        }
    }

    debug!(
        keys = outer_keys.len(),
        pitch_types = pitch_types.len(),
        "count distribution built"
    );
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pitch(balls: u8, strikes: u8, pitch_type: &str, result: PitchResult) -> PitchEvent {
        let mut p = PitchEvent::new(745_001, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        p.balls = Some(balls);
        p.strikes = Some(strikes);
        p.pitch_type = Some(pitch_type.to_string());
        p.result = Some(result);
        p
    }

    fn first_pitch_sample() -> Vec<PitchEvent> {
        vec![
            pitch(0, 0, "FF", PitchResult::Ball),
            pitch(0, 0, "FF", PitchResult::Strike),
            pitch(0, 0, "SL", PitchResult::InPlay),
            pitch(0, 0, "FF", PitchResult::Strike),
        ]
    }

    #[test]
    fn test_first_pitch_example() {
        let dist = count_distribution(&first_pitch_sample(), &EngineConfig::default()).unwrap();

        let ff = &dist["0-0"]["FF"];
        assert_eq!(ff.total_pitch_count, 3);
        assert_eq!(ff.ball_percentage, 33.33);
        assert_eq!(ff.strike_percentage, 66.67);
        assert_eq!(ff.in_play_percentage, 0.0);
        assert_eq!(ff.total_pitch_percentage, 75.0);

        let sl = &dist["0-0"]["SL"];
        assert_eq!(sl.total_pitch_count, 1);
        assert_eq!(sl.in_play_percentage, 100.0);
        assert_eq!(sl.total_pitch_percentage, 25.0);
    }

    #[test]
    fn test_unobserved_cells_are_zero() {
        let mut pitches = first_pitch_sample();
        pitches.push(pitch(3, 2, "CH", PitchResult::Ball));

        let dist = count_distribution(&pitches, &EngineConfig::default()).unwrap();

        // CH never thrown at 0-0, FF/SL never thrown at 3-2
        let ch = &dist["0-0"]["CH"];
        assert_eq!(ch.total_pitch_count, 0);
        assert_eq!(ch.total_pitch_percentage, 0.0);
        assert_eq!(
            (ch.ball_percentage, ch.strike_percentage, ch.in_play_percentage),
            (0.0, 0.0, 0.0)
        );
        assert_eq!(ch.unique_events, Some(vec![]));

        assert_eq!(dist["3-2"].len(), 3);
        assert_eq!(dist["3-2"]["CH"].total_pitch_percentage, 100.0);
        assert_eq!(dist["3-2"]["FF"].total_pitch_count, 0);
    }

    #[test]
    fn test_outcome_percentages_sum_to_hundred() {
        let pitches = vec![
            pitch(1, 1, "SI", PitchResult::Ball),
            pitch(1, 1, "SI", PitchResult::Strike),
            pitch(1, 1, "SI", PitchResult::InPlay),
        ];
        let dist = count_distribution(&pitches, &EngineConfig::default()).unwrap();
        let si = &dist["1-1"]["SI"];
        let sum = si.ball_percentage + si.strike_percentage + si.in_play_percentage;
        assert!((sum - 100.0).abs() <= 0.02, "sum was {}", sum);
    }

    #[test]
    fn test_unique_events_sorted_and_optional() {
        let mut pitches = first_pitch_sample();
        pitches[2].events = Some("single".to_string());
        pitches[1].events = Some("strikeout".to_string());
        pitches[3].events = Some("field_out".to_string());

        let dist = count_distribution(&pitches, &EngineConfig::default()).unwrap();
        assert_eq!(
            dist["0-0"]["FF"].unique_events,
            Some(vec!["field_out".to_string(), "strikeout".to_string()])
        );

        let config = EngineConfig {
            include_unique_events: false,
            ..EngineConfig::default()
        };
        let dist = count_distribution(&pitches, &config).unwrap();
        assert_eq!(dist["0-0"]["SL"].unique_events, None);
    }

    #[test]
    fn test_missing_type_column() {
        let mut pitches = first_pitch_sample();
        for p in &mut pitches {
            p.result = None;
        }
        let err = count_distribution(&pitches, &EngineConfig::default()).unwrap_err();
        match err {
            EngineError::MissingColumn { columns } => assert_eq!(columns, vec!["type".to_string()]),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_null_pitch_type_record_is_dropped() {
        let mut pitches = first_pitch_sample();
        let mut automatic_ball = pitch(0, 0, "FF", PitchResult::Ball);
        automatic_ball.pitch_type = None;
        pitches.insert(1, automatic_ball);

        let dist = count_distribution(&pitches, &EngineConfig::default()).unwrap();
        let ff = &dist["0-0"]["FF"];
        assert_eq!(ff.total_pitch_count, 3);
        assert_eq!(ff.total_pitch_percentage, 75.0);
        assert_eq!(dist["0-0"].len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let err = count_distribution(&[], &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyInput));
    }

    #[test]
    fn test_opponent_keying() {
        let mut pitches = first_pitch_sample();
        for (i, p) in pitches.iter_mut().enumerate() {
            p.home_team = Some("NYY".to_string());
            p.away_team = Some(if i < 2 { "BOS" } else { "TOR" }.to_string());
        }

        let dist = opponent_count_distribution(&pitches, "NYY", &EngineConfig::default()).unwrap();
        assert_eq!(dist.keys().cloned().collect::<Vec<_>>(), vec!["BOS", "TOR"]);
        assert_eq!(dist["BOS"]["FF"].total_pitch_count, 2);
        assert_eq!(dist["BOS"]["FF"].ball_percentage, 50.0);
        assert_eq!(dist["TOR"]["SL"].total_pitch_count, 1);

        let err = opponent_count_distribution(&pitches, "LAD", &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyInput));
    }

    #[test]
    fn test_distribution_key_dispatch() {
        let mut pitches = first_pitch_sample();
        for p in pitches.iter_mut() {
            p.home_team = Some("SEA".to_string());
            p.away_team = Some("HOU".to_string());
        }
        let config = EngineConfig::default();

        let by_count = DistributionKey::default().distribution(&pitches, &config).unwrap();
        assert!(by_count.contains_key("0-0"));

        let key: DistributionKey = serde_json::from_str(r#"{"by": "opponent", "team": "HOU"}"#).unwrap();
        let by_opponent = key.distribution(&pitches, &config).unwrap();
        assert_eq!(by_opponent["SEA"]["FF"].total_pitch_count, 3);
    }

    #[test]
    fn test_decimals_follow_config() {
        let config = EngineConfig {
            percentage_decimals: 0,
            ..EngineConfig::default()
        };
        let dist = count_distribution(&first_pitch_sample(), &config).unwrap();
        assert_eq!(dist["0-0"]["FF"].ball_percentage, 33.0);
        assert_eq!(dist["0-0"]["FF"].strike_percentage, 67.0);
    }

    #[test]
    fn test_idempotent() {
        let pitches = first_pitch_sample();
        let config = EngineConfig::default();
        assert_eq!(
            count_distribution(&pitches, &config).unwrap(),
            count_distribution(&pitches, &config).unwrap()
        );
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_pitch() -> impl Strategy<Value = PitchEvent> {
            (
                0u8..4,
                0u8..3,
                prop::sample::select(vec!["FF", "SL", "CH", "CU"]),
                prop::sample::select(vec![PitchResult::Ball, PitchResult::Strike, PitchResult::InPlay]),
            )
                .prop_map(|(b, s, pt, r)| pitch(b, s, pt, r))
        }

        proptest! {
            /// Property: every observed cell's outcome rates add to 100
            #[test]
            fn prop_outcome_rates_sum(pitches in prop::collection::vec(arb_pitch(), 1..200)) {
                let dist = count_distribution(&pitches, &EngineConfig::default()).unwrap();
                for row in dist.values() {
                    for cell in row.values() {
                        let sum = cell.ball_percentage + cell.strike_percentage + cell.in_play_percentage;
                        if cell.total_pitch_count > 0 {
                            prop_assert!((sum - 100.0).abs() <= 0.02);
                        } else {
                            prop_assert_eq!(sum, 0.0);
                        }
                    }
                }
            }

            /// Property: pitch mix within one count adds to 100
            #[test]
            fn prop_pitch_mix_sums(pitches in prop::collection::vec(arb_pitch(), 1..200)) {
                let dist = count_distribution(&pitches, &EngineConfig::default()).unwrap();
                for row in dist.values() {
                    let sum: f64 = row.values().map(|c| c.total_pitch_percentage).sum();
                    prop_assert!((sum - 100.0).abs() <= 0.03);
                }
            }

            /// Property: same input, same output
            #[test]
            fn prop_idempotent(pitches in prop::collection::vec(arb_pitch(), 1..100)) {
                let config = EngineConfig::default();
                prop_assert_eq!(
                    count_distribution(&pitches, &config).unwrap(),
                    count_distribution(&pitches, &config).unwrap()
                );
            }
        }
    }
}
