mod log;
mod pack;

pub use log::*;
pub use pack::*;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub pack: PackConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub script: ScriptConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.pack.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

///
/// ScriptConfig
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Prefix rendered scripts with a generated-by comment.
    #[serde(default = "defaults::header")]
    pub header: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            header: defaults::header(),
        }
    }
}

mod defaults {
    pub const fn header() -> bool {
        true
    }
}
