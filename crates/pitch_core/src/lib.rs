//! # pitch_core - Pitch Event Statistics Engine
//!
//! Derives summary metrics from per-pitch Statcast-style records for one
//! pitcher over a date range.
//!
//! ## Metric Families
//! - Count distribution: pitch mix and ball/strike/in-play rates per count
//! - Arsenal: per-pitch-type BA, SLG, whiff%, hard-hit%, velocity and movement
//! - Hit outcome: batted-ball descriptive statistics
//! - Progression: per-game pitch trends with strike percentage
//!
//! Every operation borrows an immutable slice of [`PitchEvent`]s and returns a
//! freshly built result. Nothing is cached between calls.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod schema;

pub use analysis::{
    arsenal_metrics, count_distribution, count_distribution_by, hit_outcomes,
    opponent_count_distribution, progression, ArsenalMetrics, CountCell, CountDistribution,
    DistributionKey, HitOutcome, Progression, ProgressionRow, StrikeDataStatus,
};
pub use api::{
    arsenal_json, count_distribution_json, hit_outcome_json, progression_json, report_json,
};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use models::{PitchEvent, PitchResult};
pub use report::{build_report, PitchReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
