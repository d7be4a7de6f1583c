use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pitch_core::{
    arsenal_metrics, count_distribution, hit_outcomes, progression, EngineConfig, PitchEvent,
    PitchResult,
};

const PITCH_TYPES: [&str; 5] = ["FF", "SI", "SL", "CH", "CU"];
const DESCRIPTIONS: [&str; 5] = ["ball", "called_strike", "foul", "swinging_strike", "hit_into_play"];

/// A season's worth of pitches (~3000) for one starter.
fn season() -> Vec<PitchEvent> {
    let opening_day = NaiveDate::from_ymd_opt(2024, 3, 28).unwrap();
    (0..3000usize)
        .map(|i| {
            let game = i / 100;
            let mut p = PitchEvent::new(745_000 + game as i64, opening_day + chrono::Days::new(game as u64 * 5));
            p.pitch_type = Some(PITCH_TYPES[i % 5].to_string());
            p.balls = Some((i % 4) as u8);
            p.strikes = Some((i % 3) as u8);
            let description = DESCRIPTIONS[(i / 3) % 5];
            p.description = Some(description.to_string());
            p.result = Some(match description {
                "ball" => PitchResult::Ball,
                "hit_into_play" => PitchResult::InPlay,
                _ => PitchResult::Strike,
            });
            if description == "hit_into_play" {
                p.events = Some(if i % 2 == 0 { "single" } else { "field_out" }.to_string());
                p.launch_speed = Some(80.0 + (i % 30) as f64);
                p.launch_angle = Some((i % 40) as f64 - 10.0);
            }
            p.release_speed = Some(85.0 + (i % 12) as f64);
            p.pfx_x = Some(-1.0 + (i % 7) as f64 * 0.3);
            p.pfx_z = Some(0.2 + (i % 5) as f64 * 0.25);
            p
        })
        .collect()
}

fn bench_aggregators(c: &mut Criterion) {
    let pitches = season();
    let config = EngineConfig::default();

    c.bench_function("count_distribution_season", |b| {
        b.iter(|| count_distribution(black_box(&pitches), &config))
    });
    c.bench_function("arsenal_season", |b| {
        b.iter(|| arsenal_metrics(black_box(&pitches), &config))
    });
    c.bench_function("hit_outcomes_season", |b| b.iter(|| hit_outcomes(black_box(&pitches))));
    c.bench_function("progression_season", |b| b.iter(|| progression(black_box(&pitches))));
}

criterion_group!(benches, bench_aggregators);
criterion_main!(benches);
