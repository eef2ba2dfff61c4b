//! Tests that the record types accept the backend's actual JSON shapes.

use drunkenfall_shared::{Person, PlayerState, Tournament, TournamentListResponse};

const LIST_PAYLOAD: &str = r#"{
  "tournaments": [
    {
      "name": "DrunkenFall 2016",
      "id": "drunkenfall-2016",
      "players": [
        {
          "index": 0,
          "person_id": "lowe",
          "person": {
            "id": "lowe",
            "name": "Lowe Thiderman",
            "nick": "thiderman",
            "color_preference": ["green"],
            "facebook_id": "10153852283811651",
            "avatar_url": "",
            "userlevel": 100
          },
          "state": {
            "index": 0,
            "shots": 2,
            "sweeps": 0,
            "kills": 7,
            "self": 1,
            "explosions": 1,
            "matches": 2
          }
        },
        {
          "index": 1,
          "person_id": "goose",
          "person": {
            "id": "goose",
            "name": "Magnus Ulenius",
            "nick": "Goose",
            "facebook_id": "900"
          }
        }
      ],
      "opened": "2016-04-01T12:00:00Z",
      "scheduled": "2016-04-30T18:00:00Z",
      "started": "2016-04-30T19:02:11Z",
      "ended": "0001-01-01T00:00:00Z"
    },
    {
      "name": "Test Tournament",
      "id": "test",
      "players": []
    }
  ]
}"#;

#[test]
fn tournament_list_payload_parses() {
    let list: TournamentListResponse = serde_json::from_str(LIST_PAYLOAD).unwrap();
    assert_eq!(list.tournaments.len(), 2);

    let df = &list.tournaments[0];
    assert_eq!(df.id, "drunkenfall-2016");
    assert_eq!(df.status(), "playing");
    assert_eq!(df.players.len(), 2);

    // Embedded person and state records round out of the raw player entry.
    let person: Person =
        serde_json::from_value(df.players[0]["person"].clone()).unwrap();
    assert_eq!(person.nick, "thiderman");
    assert_eq!(person.avatar_url.as_deref(), Some(""));

    let state = PlayerState::from_record(&df.players[0]["state"]).unwrap();
    assert_eq!(state.kills, 7);
    assert_eq!(state.score(), 2 * 3 + 7 * 2 + 1 + 1);
}

#[test]
fn empty_list_payload_parses() {
    let list: TournamentListResponse = serde_json::from_str(r#"{"tournaments": []}"#).unwrap();
    assert!(list.tournaments.is_empty());

    let list: TournamentListResponse = serde_json::from_str("{}").unwrap();
    assert!(list.tournaments.is_empty());
}

#[test]
fn tournament_without_timestamps_is_not_started() {
    let t: Tournament =
        serde_json::from_str(r#"{"name": "Test", "id": "test"}"#).unwrap();
    assert!(!t.is_started());
    assert!(!t.is_ended());
}
