//! Snapshot tests for the JSON API using insta
//!
//! Pins the serialized shape of the count distribution so field renames or
//! rounding changes show up as a diff.

use super::json_api::AnalysisResponse;
use crate::analysis::count_distribution;
use crate::config::EngineConfig;
use crate::models::{PitchEvent, PitchResult};
use chrono::NaiveDate;
use insta::assert_json_snapshot;

fn pitch(pitch_type: &str, result: PitchResult) -> PitchEvent {
    let mut p = PitchEvent::new(745_500, NaiveDate::from_ymd_opt(2024, 3, 28).unwrap());
    p.balls = Some(0);
    p.strikes = Some(0);
    p.pitch_type = Some(pitch_type.to_string());
    p.result = Some(result);
    p
}

#[test]
fn count_distribution_first_pitch() {
    let mut pitches = vec![
        pitch("FF", PitchResult::Ball),
        pitch("FF", PitchResult::Strike),
        pitch("SL", PitchResult::InPlay),
        pitch("FF", PitchResult::Strike),
    ];
    pitches[2].events = Some("single".to_string());

    let distribution = count_distribution(&pitches, &EngineConfig::default()).unwrap();
    let response = AnalysisResponse::new(distribution);

    assert_json_snapshot!(response);
}
