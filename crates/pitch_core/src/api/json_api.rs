//! JSON API for the metric families
//!
//! String-in, string-out entry points for hosts that speak JSON. Errors come
//! back as `"<CODE>: <message>"` so callers can branch on the code prefix.

use crate::analysis::{arsenal_metrics, hit_outcomes, progression, DistributionKey};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::PitchEvent;
use crate::report::build_report;
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use tracing::warn;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn engine_err(err: EngineError) -> String {
    warn!(code = err.code(), "request failed: {}", err);
    err_code(err.code(), err)
}

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub schema_version: u8,
    pub pitches: Vec<PitchEvent>,
    /// Outer key for the count distribution (default: ball-strike count)
    #[serde(default)]
    pub key: DistributionKey,
    /// Overrides for the engine thresholds
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse<T> {
    pub schema_version: u8,
    pub data: T,
}

impl<T> AnalysisResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            data,
        }
    }
}

fn parse_request(request_json: &str) -> Result<(AnalysisRequest, EngineConfig), String> {
    let request: AnalysisRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code("INVALID_REQUEST", format!("Invalid JSON request: {}", e)))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            "UNSUPPORTED_SCHEMA",
            format!("Unsupported schema version: {}", request.schema_version),
        ));
    }

    let config = match &request.config {
        Some(config) => {
            config.validate().map_err(engine_err)?;
            config.clone()
        }
        None => EngineConfig::default(),
    };

    Ok((request, config))
}

fn respond<T: Serialize>(data: T) -> Result<String, String> {
    serde_json::to_string(&AnalysisResponse::new(data)).map_err(|e| engine_err(e.into()))
}

/// Count distribution for the request's pitches.
pub fn count_distribution_json(request_json: &str) -> Result<String, String> {
    let (request, config) = parse_request(request_json)?;
    let distribution = request
        .key
        .distribution(&request.pitches, &config)
        .map_err(engine_err)?;
    respond(distribution)
}

pub fn arsenal_json(request_json: &str) -> Result<String, String> {
    let (request, config) = parse_request(request_json)?;
    respond(arsenal_metrics(&request.pitches, &config).map_err(engine_err)?)
}

pub fn hit_outcome_json(request_json: &str) -> Result<String, String> {
    let (request, _) = parse_request(request_json)?;
    respond(hit_outcomes(&request.pitches).map_err(engine_err)?)
}

pub fn progression_json(request_json: &str) -> Result<String, String> {
    let (request, _) = parse_request(request_json)?;
    respond(progression(&request.pitches).map_err(engine_err)?)
}

/// All four families in one response.
pub fn report_json(request_json: &str) -> Result<String, String> {
    let (request, config) = parse_request(request_json)?;
    respond(build_report(&request.pitches, &request.key, &config).map_err(engine_err)?)
}
