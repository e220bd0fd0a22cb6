use crate::{command::CommandError, config::ConfigError, script::ScriptError};
use derive_more::Display;
use dpc_types::ParseError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error. Each module owns a narrower error type; this enum
/// is what the public entry points return.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl Error {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Command(_) => ErrorClass::Command,
            Self::Config(_) => ErrorClass::Config,
            Self::Parse(_) => ErrorClass::Parse,
            Self::Script(_) => ErrorClass::Script,
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    Command,
    Config,
    Parse,
    Script,
}
