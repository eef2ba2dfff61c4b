use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tournament is the main container of data for this app.
///
/// Player entries stay raw; the viewer projects them through its `Player`
/// view-model instead of deserializing them here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub players: Vec<Value>,
    #[serde(default)]
    pub opened: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended: Option<DateTime<Utc>>,
}

// The backend marshals unset times as the Go zero value rather than null.
fn is_set(t: &Option<DateTime<Utc>>) -> bool {
    t.map(|t| t.year() > 1).unwrap_or(false)
}

impl Tournament {
    pub fn is_started(&self) -> bool {
        is_set(&self.started)
    }

    pub fn is_ended(&self) -> bool {
        is_set(&self.ended)
    }

    /// Status line for list views.
    pub fn status(&self) -> &'static str {
        if !self.is_started() {
            "not started"
        } else if self.is_ended() {
            "ended"
        } else {
            "playing"
        }
    }
}

/// Envelope of the tournament list endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TournamentListResponse {
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
}
