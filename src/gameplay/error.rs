/// A label that names none of rock, paper or scissors.
///
/// Carries the offending input so callers can echo it back. Producing this
/// error never touches session state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move: {0:?}")]
pub struct InvalidMove(pub String);

impl From<&str> for InvalidMove {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
