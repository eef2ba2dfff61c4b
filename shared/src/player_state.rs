use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;

/// Live per-seat stats for the match currently on screen.
///
/// The store keeps these as raw records; every consumer goes through
/// [`PlayerState::from_record`] at access time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub shots: i32,
    #[serde(default)]
    pub sweeps: i32,
    #[serde(default)]
    pub kills: i32,
    #[serde(rename = "self", default)]
    pub self_kills: i32,
    #[serde(default)]
    pub explosions: i32,
    #[serde(default)]
    pub matches: i32,
}

impl PlayerState {
    /// Normalize a raw store record. Unknown fields are ignored and absent
    /// counters default to zero.
    pub fn from_record(record: &Value) -> Result<Self, ModelError> {
        serde_json::from_value(record.clone()).map_err(ModelError::from)
    }

    /// Score used to rank runnerups.
    ///
    /// A sweep is effectively 11 points since scoring one also comes with
    /// a shot and three kills.
    pub fn score(&self) -> i32 {
        self.sweeps * 5 + self.shots * 3 + self.kills * 2 + self.self_kills + self.explosions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_raw_record() {
        let raw = json!({
            "index": 2,
            "shots": 1,
            "sweeps": 1,
            "kills": 4,
            "self": 1,
            "explosions": 0,
            "matches": 3,
            "color": "green"
        });
        let state = PlayerState::from_record(&raw).unwrap();
        assert_eq!(state.index, 2);
        assert_eq!(state.self_kills, 1);
        assert_eq!(state.matches, 3);
    }

    #[test]
    fn absent_counters_default_to_zero() {
        let state = PlayerState::from_record(&json!({"index": 0})).unwrap();
        assert_eq!(state, PlayerState::default());
    }

    #[test]
    fn non_object_record_is_malformed() {
        let err = PlayerState::from_record(&json!("nope")).unwrap_err();
        assert!(matches!(err, ModelError::Malformed(_)));
    }

    #[test]
    fn score_weights_match_the_game() {
        let state = PlayerState {
            sweeps: 1,
            shots: 2,
            kills: 5,
            self_kills: 1,
            explosions: 3,
            ..Default::default()
        };
        assert_eq!(state.score(), 5 + 6 + 10 + 1 + 3);
    }
}
