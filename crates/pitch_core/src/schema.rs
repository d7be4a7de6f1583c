//! # Schema checks
//!
//! Every aggregation validates its required columns before touching the data.
//! A column counts as present when at least one record carries it; records
//! with a null value are dropped later by the aggregation that groups on it.

use crate::error::{EngineError, Result};
use crate::models::PitchEvent;
use std::fmt;

/// Optional record fields an operation may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    PitchType,
    Balls,
    Strikes,
    Type,
    Description,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::PitchType => "pitch_type",
            Column::Balls => "balls",
            Column::Strikes => "strikes",
            Column::Type => "type",
            Column::Description => "description",
        }
    }

    pub fn is_present(self, pitch: &PitchEvent) -> bool {
        match self {
            Column::PitchType => pitch.pitch_type.is_some(),
            Column::Balls => pitch.balls.is_some(),
            Column::Strikes => pitch.strikes.is_some(),
            Column::Type => pitch.result.is_some(),
            Column::Description => pitch.description.is_some(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns needed by the count distribution.
pub const COUNT_DISTRIBUTION_COLUMNS: [Column; 4] =
    [Column::Balls, Column::Strikes, Column::PitchType, Column::Type];
/// Columns needed by the arsenal calculator.
pub const ARSENAL_COLUMNS: [Column; 1] = [Column::PitchType];
/// Columns needed by the progression tracker.
pub const PROGRESSION_COLUMNS: [Column; 1] = [Column::PitchType];

/// Reject empty input and any of `columns` that no record carries.
///
/// Missing columns are reported in the order they were requested, each once.
pub fn require_columns(pitches: &[PitchEvent], columns: &[Column]) -> Result<()> {
    if pitches.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let missing: Vec<String> = columns
        .iter()
        .filter(|column| !pitches.iter().any(|p| column.is_present(p)))
        .map(|column| column.name().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(?missing, "schema check failed");
        Err(EngineError::MissingColumn { columns: missing })
    }
}
