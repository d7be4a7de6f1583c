//! # Analysis Module
//!
//! Aggregations over a borrowed slice of pitch events. Each family is
//! independent of the others and allocates its own working maps per call.
//!
//! ## Submodules
//!
//! - `count_distribution` - Pitch mix and outcome rates per ball-strike count
//! - `arsenal` - Per-pitch-type effectiveness (BA, SLG, whiff, hard hit)
//! - `hit_outcome` - Batted-ball descriptive statistics
//! - `progression` - Per-game pitch trends with strike percentage
//! - `stats` - Shared numeric helpers

pub mod arsenal;
pub mod count_distribution;
pub mod hit_outcome;
pub mod progression;
pub mod stats;

pub use arsenal::{arsenal_metrics, ArsenalMetrics};
pub use count_distribution::{
    count_distribution, count_distribution_by, opponent_count_distribution, CountCell,
    CountDistribution, DistributionKey,
};
pub use hit_outcome::{hit_outcomes, BattedBall, HitOutcome, HitSummary};
pub use progression::{
    progression, strike_percentage_by_game, Progression, ProgressionRow, StrikeDataStatus,
};
pub use stats::FieldSummary;
