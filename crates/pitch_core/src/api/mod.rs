pub mod json_api;

#[cfg(test)]
mod snapshot_tests;

pub use json_api::{
    arsenal_json, count_distribution_json, hit_outcome_json, progression_json, report_json,
    AnalysisRequest, AnalysisResponse,
};
