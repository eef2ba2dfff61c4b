//! Read-through projection of a tournament participant.

use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use drunkenfall_shared::{ModelError, Person, PlayerState};

use crate::store::{PersonRepository, PlayerStateRepository};

/// Avatar fallback for people who never uploaded one.
const FACEBOOK_GRAPH: &str = "https://graph.facebook.com";

/// A tournament participant, projected for display.
///
/// A `Player` owns no authoritative state. The person and live match
/// state behind it are re-read from the injected repositories on every
/// access, so store updates are visible immediately, and there is no
/// write path at all: the derived fields have no mutators.
#[derive(Clone)]
pub struct Player {
    index: usize,
    person_id: String,
    record: Map<String, Value>,
    people: Rc<dyn PersonRepository>,
    states: Rc<dyn PlayerStateRepository>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("index", &self.index)
            .field("person_id", &self.person_id)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Build a player from a raw record, keeping every source field.
    ///
    /// `index` and `person_id` are required; a missing or mistyped one is
    /// reported by name. Everything else is carried verbatim and stays
    /// reachable through [`Player::field`].
    pub fn from_record(
        record: &Value,
        people: Rc<dyn PersonRepository>,
        states: Rc<dyn PlayerStateRepository>,
    ) -> Result<Self, ModelError> {
        let obj = record.as_object().ok_or(ModelError::NotAnObject)?;
        let index = obj
            .get("index")
            .and_then(Value::as_u64)
            .ok_or(ModelError::MissingField("index"))? as usize;
        let person_id = obj
            .get("person_id")
            .and_then(Value::as_str)
            .ok_or(ModelError::MissingField("person_id"))?
            .to_owned();
        Ok(Player {
            index,
            person_id,
            record: obj.clone(),
            people,
            states,
        })
    }

    /// Seat index, used to look up live match state.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Reference key into the person store.
    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    /// A field of the source record, verbatim.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.record.get(name)
    }

    /// The person behind this seat, straight from the repository.
    pub fn person(&self) -> Result<Person, ModelError> {
        self.people
            .person(&self.person_id)
            .ok_or_else(|| ModelError::UnknownPerson(self.person_id.clone()))
    }

    /// The person's own avatar url, or the Facebook graph fallback.
    pub fn avatar(&self) -> Result<String, ModelError> {
        let person = self.person()?;
        match person.avatar_url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Ok(format!(
                "{}/{}/picture?width=9999",
                FACEBOOK_GRAPH, person.facebook_id
            )),
        }
    }

    pub fn display_name(&self) -> Result<String, ModelError> {
        Ok(self.person()?.nick)
    }

    /// First space-separated token of the full name. A name with no space
    /// comes back whole.
    pub fn first_name(&self) -> Result<String, ModelError> {
        let person = self.person()?;
        Ok(person.name.split(' ').next().unwrap_or_default().to_owned())
    }

    /// Live state for this seat, normalized from the raw store record on
    /// every call.
    pub fn state(&self) -> Result<PlayerState, ModelError> {
        let raw = self
            .states
            .player_state(self.index)
            .ok_or(ModelError::UnknownPlayerState(self.index))?;
        PlayerState::from_record(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use serde_json::json;

    fn store_with(person: Value, state: Option<Value>) -> Store {
        let store = Store::new();
        store.update(|s| {
            let parsed: Person = serde_json::from_value(person).unwrap();
            s.people.insert(parsed.id.clone(), parsed);
            if let Some(state) = state {
                let index = state["index"].as_u64().unwrap() as usize;
                s.player_states.insert(index, state);
            }
        });
        store
    }

    fn player(record: Value, store: &Store) -> Player {
        Player::from_record(
            &record,
            Rc::new(store.clone()),
            Rc::new(store.clone()),
        )
        .unwrap()
    }

    #[test]
    fn construction_keeps_every_source_field() {
        let store = Store::new();
        let p = player(
            json!({"index": 3, "person_id": "lowe", "original_seed": 7, "color": "green"}),
            &store,
        );
        assert_eq!(p.index(), 3);
        assert_eq!(p.person_id(), "lowe");
        assert_eq!(p.field("original_seed"), Some(&json!(7)));
        assert_eq!(p.field("color"), Some(&json!("green")));
        assert_eq!(p.field("index"), Some(&json!(3)));
    }

    #[test]
    fn missing_required_fields_are_named() {
        let store = Store::new();
        let people: Rc<dyn PersonRepository> = Rc::new(store.clone());
        let states: Rc<dyn PlayerStateRepository> = Rc::new(store.clone());

        let err = Player::from_record(&json!({"person_id": "x"}), people.clone(), states.clone())
            .unwrap_err();
        assert!(matches!(err, ModelError::MissingField("index")));

        let err = Player::from_record(&json!({"index": 0}), people.clone(), states.clone())
            .unwrap_err();
        assert!(matches!(err, ModelError::MissingField("person_id")));

        let err = Player::from_record(&json!([1, 2]), people, states).unwrap_err();
        assert!(matches!(err, ModelError::NotAnObject));
    }

    #[test]
    fn avatar_prefers_the_uploaded_one() {
        let store = store_with(
            json!({"id": "lowe", "name": "Lowe Thiderman", "nick": "thiderman",
                   "facebook_id": "123", "avatar_url": "https://example.com/a.png"}),
            None,
        );
        let p = player(json!({"index": 0, "person_id": "lowe"}), &store);
        assert_eq!(p.avatar().unwrap(), "https://example.com/a.png");
    }

    #[test]
    fn avatar_falls_back_to_facebook() {
        // Absent url
        let store = store_with(
            json!({"id": "lowe", "name": "Lowe Thiderman", "nick": "thiderman",
                   "facebook_id": "123"}),
            None,
        );
        let p = player(json!({"index": 0, "person_id": "lowe"}), &store);
        assert_eq!(
            p.avatar().unwrap(),
            "https://graph.facebook.com/123/picture?width=9999"
        );

        // Empty url counts as absent too
        let store = store_with(
            json!({"id": "lowe", "name": "Lowe Thiderman", "nick": "thiderman",
                   "facebook_id": "123", "avatar_url": ""}),
            None,
        );
        let p = player(json!({"index": 0, "person_id": "lowe"}), &store);
        assert_eq!(
            p.avatar().unwrap(),
            "https://graph.facebook.com/123/picture?width=9999"
        );
    }

    #[test]
    fn names_derive_from_the_person() {
        let store = store_with(
            json!({"id": "jane", "name": "Jane Doe", "nick": "jd"}),
            None,
        );
        let p = player(json!({"index": 0, "person_id": "jane"}), &store);
        assert_eq!(p.display_name().unwrap(), "jd");
        assert_eq!(p.first_name().unwrap(), "Jane");

        let store = store_with(json!({"id": "cher", "name": "Cher", "nick": "Cher"}), None);
        let p = player(json!({"index": 0, "person_id": "cher"}), &store);
        assert_eq!(p.first_name().unwrap(), "Cher");
    }

    #[test]
    fn lookup_misses_propagate() {
        let store = Store::new();
        let p = player(json!({"index": 5, "person_id": "ghost"}), &store);
        assert!(matches!(
            p.person().unwrap_err(),
            ModelError::UnknownPerson(ref id) if id == "ghost"
        ));
        assert!(matches!(
            p.state().unwrap_err(),
            ModelError::UnknownPlayerState(5)
        ));
        // Derived fields fail the same way.
        assert!(p.avatar().is_err());
        assert!(p.display_name().is_err());
    }

    #[test]
    fn reads_always_reflect_the_store() {
        let store = store_with(
            json!({"id": "lowe", "name": "Lowe Thiderman", "nick": "thiderman"}),
            Some(json!({"index": 1, "kills": 2})),
        );
        let p = player(json!({"index": 1, "person_id": "lowe"}), &store);
        assert_eq!(p.state().unwrap().kills, 2);

        // The player holds no cached copy: a store update is visible on
        // the very next read.
        store.update(|s| {
            s.player_states.insert(1, json!({"index": 1, "kills": 9}));
            s.people.get_mut("lowe").unwrap().nick = "ldt".into();
        });
        assert_eq!(p.state().unwrap().kills, 9);
        assert_eq!(p.display_name().unwrap(), "ldt");
    }
}
