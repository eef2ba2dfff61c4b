use std::fmt;

use serde::{Deserialize, Serialize};

/// A Person is someone having a role in the tournament.
///
/// The backend serves the full record; the viewer only derives display
/// fields from it and never writes one back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub color_preference: Vec<String>,
    #[serde(default)]
    pub facebook_id: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub userlevel: i32,
}

impl Person {
    /// The color this person wants to play as, if they stated one.
    pub fn preferred_color(&self) -> Option<&str> {
        self.color_preference.first().map(String::as_str)
    }

    /// Fill an empty nick with the first name so an unfinished
    /// registration still has something to display. Returns whether a
    /// correction was applied.
    pub fn correct(&mut self) -> bool {
        if self.nick.is_empty() {
            self.nick = self.name.split(' ').next().unwrap_or_default().to_owned();
            return true;
        }
        false
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Player {} ({})>", self.name, self.nick)
    }
}
