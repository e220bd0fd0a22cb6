use thiserror::Error as ThisError;

///
/// ParseError
///
/// Raised when a raw string or value cannot be shaped into one of the
/// argument types.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ParseError {
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid player name '{0}'")]
    InvalidPlayerName(String),

    #[error("invalid resource location '{0}': {1}")]
    InvalidResourceLocation(String, &'static str),

    #[error("invalid selector '{0}': {1}")]
    InvalidSelector(String, &'static str),

    #[error("invalid swizzle '{0}'")]
    InvalidSwizzle(String),

    #[error("invalid uuid '{0}'")]
    InvalidUuid(String),

    #[error("relative path '{0}' escapes the namespace root")]
    PathEscapesRoot(String),
}
