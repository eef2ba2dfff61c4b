//! Async side effects that feed the store.

use crate::store::{Store, TournamentsLoading};

/// How often the tournament list is re-fetched. The backend pushes live
/// updates over a socket to the game itself; the viewer polls.
#[cfg(target_arch = "wasm32")]
const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Owns the fetch lifecycle of the tournament list.
pub struct TournamentsEffect {
    store: Store,
}

impl TournamentsEffect {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Kick off a fetch. The store goes through `Loading` and ends in
    /// `Loaded` or `Error`; subscribers repaint on each step.
    pub fn fetch(&self) {
        self.store
            .update(|state| state.tournaments = TournamentsLoading::Loading);

        #[cfg(target_arch = "wasm32")]
        {
            let store = self.store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_tournaments("").await {
                    Ok(tournaments) => store.ingest_tournaments(tournaments),
                    Err(err) => {
                        tracing::warn!(%err, "tournament fetch failed");
                        store.update(|state| {
                            state.tournaments = TournamentsLoading::Error(err)
                        });
                    }
                }
            });
        }
    }

    /// Re-fetch on a timer so the list tracks the backend without user
    /// interaction.
    #[cfg(target_arch = "wasm32")]
    pub fn spawn_auto_refresh(&self) {
        let store = self.store.clone();
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
                match crate::api::fetch_tournaments("").await {
                    Ok(tournaments) => store.ingest_tournaments(tournaments),
                    // A failed refresh keeps the last good list on screen.
                    Err(err) => tracing::warn!(%err, "tournament auto-refresh failed"),
                }
            }
        });
    }
}
