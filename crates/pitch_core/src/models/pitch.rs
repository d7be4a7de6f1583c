use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `description` value for a pitch put into play.
pub const HIT_INTO_PLAY: &str = "hit_into_play";
/// `description` value for a swinging miss.
pub const SWINGING_STRIKE: &str = "swinging_strike";

/// Descriptions counted as a strike for per-game strike percentage.
pub const STRIKE_DESCRIPTIONS: [&str; 5] = [
    "called_strike",
    "swinging_strike",
    "foul",
    "foul_tip",
    "swinging_strike_blocked",
];

/// Pitch result category (`type` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchResult {
    #[serde(rename = "B")]
    Ball,
    #[serde(rename = "S")]
    Strike,
    #[serde(rename = "X")]
    InPlay,
}

impl PitchResult {
    pub fn code(self) -> char {
        match self {
            PitchResult::Ball => 'B',
            PitchResult::Strike => 'S',
            PitchResult::InPlay => 'X',
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "B" => Some(PitchResult::Ball),
            "S" => Some(PitchResult::Strike),
            "X" => Some(PitchResult::InPlay),
            _ => None,
        }
    }
}

impl fmt::Display for PitchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Total bases credited for a plate-appearance outcome.
///
/// Anything other than a hit (outs, walks, strikeouts, errors) is worth 0.
pub fn base_value(event: &str) -> u32 {
    match event {
        "single" => 1,
        "double" => 2,
        "triple" => 3,
        "home_run" => 4,
        _ => 0,
    }
}

/// True for the four hit outcomes.
pub fn is_hit(event: &str) -> bool {
    base_value(event) > 0
}

/// One observed pitch.
///
/// Only `game_pk` and `game_date` are guaranteed. Everything else can be
/// missing in upstream exports and is checked per operation by
/// [`crate::schema::require_columns`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchEvent {
    pub game_pk: i64,
    pub game_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(default)]
    pub pitch_type: Option<String>,
    #[serde(default)]
    pub balls: Option<u8>,
    #[serde(default)]
    pub strikes: Option<u8>,
    #[serde(default, rename = "type")]
    pub result: Option<PitchResult>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub events: Option<String>,

    // Release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_spin_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spin_axis: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_extension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfx_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfx_z: Option<f64>,

    // Batted ball, only on balls in play
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_speed_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hc_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hc_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_distance_sc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb_type: Option<String>,
}

impl PitchEvent {
    /// Minimal record for a game; every optional field starts empty.
    pub fn new(game_pk: i64, game_date: NaiveDate) -> Self {
        Self {
            game_pk,
            game_date,
            home_team: None,
            away_team: None,
            pitch_type: None,
            balls: None,
            strikes: None,
            result: None,
            description: None,
            events: None,
            release_speed: None,
            release_spin_rate: None,
            spin_axis: None,
            release_extension: None,
            pfx_x: None,
            pfx_z: None,
            launch_speed: None,
            launch_angle: None,
            launch_speed_angle: None,
            hc_x: None,
            hc_y: None,
            hit_distance_sc: None,
            bb_type: None,
        }
    }

    /// `"<balls>-<strikes>"`, or `None` when either half of the count is missing.
    pub fn count_scenario(&self) -> Option<String> {
        match (self.balls, self.strikes) {
            (Some(balls), Some(strikes)) => Some(format!("{}-{}", balls, strikes)),
            _ => None,
        }
    }

    /// Magnitude of the (pfx_x, pfx_z) movement vector.
    pub fn pfx_hypotenuse(&self) -> Option<f64> {
        match (self.pfx_x, self.pfx_z) {
            (Some(x), Some(z)) => Some(x.hypot(z)),
            _ => None,
        }
    }

    /// The other team in this game, seen from `team`.
    pub fn opponent(&self, team: &str) -> Option<&str> {
        match (self.home_team.as_deref(), self.away_team.as_deref()) {
            (Some(home), Some(away)) if home == team => Some(away),
            (Some(home), Some(away)) if away == team => Some(home),
            _ => None,
        }
    }

    pub fn description_is(&self, description: &str) -> bool {
        self.description.as_deref() == Some(description)
    }

    pub fn is_in_play(&self) -> bool {
        self.description_is(HIT_INTO_PLAY)
    }

    pub fn is_swinging_strike(&self) -> bool {
        self.description_is(SWINGING_STRIKE)
    }

    /// `None` when the record has no description to judge.
    pub fn is_strike(&self) -> Option<bool> {
        self.description
            .as_deref()
            .map(|d| STRIKE_DESCRIPTIONS.contains(&d))
    }

    /// Marks the last pitch of a plate appearance.
    pub fn ends_plate_appearance(&self) -> bool {
        self.events.is_some()
    }
}
