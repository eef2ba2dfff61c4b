use thiserror::Error;

/// Failures surfaced by the client-side models.
///
/// There is no recovery policy behind these: a lookup that misses is
/// propagated to the renderer, which decides what to show.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("no person with id `{0}`")]
    UnknownPerson(String),
    #[error("no state for player index {0}")]
    UnknownPlayerState(usize),
}
