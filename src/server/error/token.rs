use thiserror::Error;

/// A request or stored value named an enum variant that does not exist.
///
/// Tokens are matched case-sensitively against the closed vocabularies for race,
/// profession and sort order. Results in a 400 Bad Request when raised while handling a
/// request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{token}'")]
pub struct UnknownToken {
    /// Vocabulary the token was looked up in, e.g. `"race"`
    pub kind: &'static str,
    /// The unrecognized token
    pub token: String,
}
