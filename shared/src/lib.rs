//! Record shapes shared with the Drunken TowerFall backend wire format.

pub mod error;
pub mod person;
pub mod player_state;
pub mod tournament;

pub use error::ModelError;
pub use person::Person;
pub use player_state::PlayerState;
pub use tournament::{Tournament, TournamentListResponse};
