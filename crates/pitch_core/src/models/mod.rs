pub mod pitch;

pub use pitch::{
    base_value, is_hit, PitchEvent, PitchResult, HIT_INTO_PLAY, STRIKE_DESCRIPTIONS,
    SWINGING_STRIKE,
};
