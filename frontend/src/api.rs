//! HTTP access to the tournament API.

use drunkenfall_shared::{Tournament, TournamentListResponse};

/// Same-origin API path; the site serves the client and the API together,
/// so no base url is configurable here.
pub const TOURNAMENTS_PATH: &str = "/api/towerfall/tournament/";

pub async fn fetch_tournaments(base: &str) -> Result<Vec<Tournament>, String> {
    let url = format!("{}{}", base, TOURNAMENTS_PATH);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| format!("Failed to fetch tournaments: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let list: TournamentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    Ok(list.tournaments)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_tournaments_blocking(base: &str) -> Result<Vec<Tournament>, String> {
    let url = format!("{}{}", base, TOURNAMENTS_PATH);
    let response = reqwest::blocking::get(&url)
        .map_err(|e| format!("Failed to fetch tournaments (blocking): {}", e))?;
    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    let list: TournamentListResponse = response
        .json()
        .map_err(|e| format!("Failed to parse JSON (blocking): {}", e))?;
    Ok(list.tournaments)
}
