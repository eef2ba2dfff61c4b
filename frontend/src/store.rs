//! Central client-side state for the tournament viewer.
//!
//! The store is the single read model screens and view-models render from.
//! [`crate::app::App`] owns the one instance and hands out cheap clones;
//! there is no global. From this crate's perspective the store is
//! read-only: ingestion is the only write path, and nothing a view-model
//! does can mutate a record.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use serde_json::Value;
use tracing::{debug, info};

use drunkenfall_shared::{Person, Tournament};

/// Loading lifecycle of the tournament list fetch.
#[derive(Clone, Debug, Default)]
pub enum TournamentsLoading {
    #[default]
    NotStarted,
    Loading,
    Loaded(Vec<Tournament>),
    Error(String),
}

/// Snapshot of everything the screens render from.
#[derive(Clone, Debug, Default)]
pub struct StoreState {
    pub tournaments: TournamentsLoading,
    /// Person records keyed by id, typed once at ingest.
    pub people: HashMap<String, Person>,
    /// Raw per-seat state records keyed by player index. Kept raw so the
    /// `Player` view-model normalizes them on every access.
    pub player_states: HashMap<usize, Value>,
}

/// Read-only person lookup handed to view-models.
pub trait PersonRepository {
    fn person(&self, person_id: &str) -> Option<Person>;
}

/// Read-only raw player-state lookup handed to view-models.
pub trait PlayerStateRepository {
    fn player_state(&self, index: usize) -> Option<Value>;
}

struct StoreInner {
    state: StoreState,
    subscribers: Vec<Weak<dyn Fn()>>,
}

/// Shared handle to the client state. Clones refer to the same state.
#[derive(Clone)]
pub struct Store {
    inner: Rc<RefCell<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            inner: Rc::new(RefCell::new(StoreInner {
                state: StoreState::default(),
                subscribers: Vec::new(),
            })),
        }
    }

    /// Cloned snapshot for rendering. Screens never hold references into
    /// the store.
    pub fn snapshot(&self) -> StoreState {
        self.inner.borrow().state.clone()
    }

    /// Single mutation entry point; subscribers are notified afterwards.
    pub fn update(&self, mutate: impl FnOnce(&mut StoreState)) {
        mutate(&mut self.inner.borrow_mut().state);
        self.notify();
    }

    /// Register a callback invoked after every update. The returned Rc
    /// keeps the subscription alive; drop it to unsubscribe.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Rc<dyn Fn()> {
        let rc: Rc<dyn Fn()> = Rc::new(callback);
        self.inner.borrow_mut().subscribers.push(Rc::downgrade(&rc));
        rc
    }

    fn notify(&self) {
        // Upgrade outside the borrow so a callback may read the store.
        let live: Vec<Rc<dyn Fn()>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in live {
            callback();
        }
    }

    /// Store a fetched tournament list and index every embedded person and
    /// raw player-state record for the getter lookups.
    pub fn ingest_tournaments(&self, tournaments: Vec<Tournament>) {
        let count = tournaments.len();
        self.update(|state| {
            for tournament in &tournaments {
                for record in &tournament.players {
                    let Some(obj) = record.as_object() else {
                        continue;
                    };
                    if let Some(raw_person) = obj.get("person") {
                        match serde_json::from_value::<Person>(raw_person.clone()) {
                            Ok(mut person) => {
                                if person.correct() {
                                    debug!(%person, "corrected nick");
                                }
                                state.people.insert(person.id.clone(), person);
                            }
                            Err(err) => debug!(%err, "skipping unparsable person record"),
                        }
                    }
                    if let Some(raw_state) = obj.get("state") {
                        let index = raw_state
                            .get("index")
                            .and_then(Value::as_u64)
                            .or_else(|| obj.get("index").and_then(Value::as_u64));
                        if let Some(index) = index {
                            state.player_states.insert(index as usize, raw_state.clone());
                        }
                    }
                }
            }
            state.tournaments = TournamentsLoading::Loaded(tournaments);
        });
        info!(count, "ingested tournament list");
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonRepository for Store {
    fn person(&self, person_id: &str) -> Option<Person> {
        self.inner.borrow().state.people.get(person_id).cloned()
    }
}

impl PlayerStateRepository for Store {
    fn player_state(&self, index: usize) -> Option<Value> {
        self.inner.borrow().state.player_states.get(&index).cloned()
    }
}
